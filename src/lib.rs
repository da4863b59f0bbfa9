//! Aligns two collections by a comparator.
//!
//! Both inputs are sorted (stable, on private copies) and then walked side by side,
//! producing [`Aligned`] pairs: items that compare equal are yielded together as
//! [`Aligned::Both`], items with no counterpart are yielded alone as [`Aligned::Left`]
//! or [`Aligned::Right`]. The walk is lazy: [`PairedZip`] is an iterator that performs one
//! step per pair. It's `no_std`, with `Vec`-requiring functions behind the `vec_storage`
//! feature.
//!
//! # Quick start
//!
//! ```
//! # #[cfg(feature = "vec_storage")]
//! # {
//! use sorted_paired_zip::{Aligned, align};
//!
//! let pairs = align(["a", "b", "c", "e"], ["b", "c", "d", "e", "f"], |l, r| l.cmp(r));
//! assert_eq!(
//!     pairs,
//!     [
//!         Aligned::Left("a"),
//!         Aligned::Both("b", "b"),
//!         Aligned::Both("c", "c"),
//!         Aligned::Right("d"),
//!         Aligned::Both("e", "e"),
//!         Aligned::Right("f"),
//!     ]
//! );
//! # }
//! ```
//!
//! Duplicates are allowed on both sides. Runs of equal items are paired one by one, in
//! sorted order; whatever is left of the longer run is yielded one-sided:
//!
//! ```
//! # #[cfg(feature = "vec_storage")]
//! # {
//! use sorted_paired_zip::{Aligned, align_ord};
//!
//! let pairs = align_ord(["a", "a", "b"], ["a", "c", "d"]).into_vec();
//! assert_eq!(
//!     pairs,
//!     [
//!         Aligned::Both("a", "a"),
//!         Aligned::Left("a"),
//!         Aligned::Left("b"),
//!         Aligned::Right("c"),
//!         Aligned::Right("d"),
//!     ]
//! );
//! # }
//! ```
//!
//! # Custom comparator
//!
//! Only the comparator decides what is "the same item". Use the builder to compare by
//! a key, by a function, or by any [`Comparator`](crate::comparators::Comparator):
//! ```
//! # #[cfg(feature = "vec_storage")]
//! # {
//! use sorted_paired_zip::{Aligned, PairedZip};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: &'static str,
//! }
//!
//! let old = [User { id: 2, name: "bob" }, User { id: 1, name: "alice" }];
//! let new = [User { id: 1, name: "alicia" }, User { id: 3, name: "carol" }];
//!
//! let diff = PairedZip::builder(&old, &new)
//!     .by_key(|user| user.id)
//!     .build()
//!     .into_vec();
//! assert_eq!(
//!     diff,
//!     [
//!         Aligned::Both(&old[1], &new[0]),
//!         Aligned::Left(&old[0]),
//!         Aligned::Right(&new[1]),
//!     ]
//! );
//! # }
//! ```
//!
//! # Comparator requirements
//!
//! The comparator is used both for sorting and for matching. It has to be a consistent
//! total preorder over the items of both inputs. This is not checked (doing so would cost
//! `O(n²)` comparisons); an inconsistent comparator produces an unspecified, but
//! deterministic, alignment.
//!
//! # Crate Features
//! - `vec_storage` (default): Enables heap-allocated sort buffers, [`align`],
//!   [`align_lazy`] and friends, and methods like [`PairedZip::into_vec`]
//! - `stackvec_storage`: Enables fixed-capacity sort buffers via
//!   [`Builder::new_stackvec`](paired_zip::Builder::new_stackvec); no allocations at all
//! - `tracing`: Emits [`tracing`](https://docs.rs/tracing) events when inputs are sorted
//!   and when a walk is exhausted
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(not(feature = "vec_storage"), allow(unused))]

#[cfg(feature = "vec_storage")]
extern crate alloc;

mod aligned;
pub mod comparators;
pub mod error;
pub mod paired_zip;
pub mod storage;

pub use aligned::Aligned;
pub use error::{CapacityError, Side};
pub use paired_zip::{AlignStats, PairedZip, WalkState};

#[cfg(feature = "vec_storage")]
mod convenience;
#[cfg(feature = "vec_storage")]
pub use convenience::*;

pub(crate) mod internal;


#[doc(hidden)]
#[cfg_attr(feature = "vec_storage", doc = include_str!("../README.md"))]
struct _ReadmeTest;
