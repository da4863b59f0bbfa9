#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate sorted_paired_zip;
use sorted_paired_zip::{align_ord, paired_zip::Builder};
use std::hint::black_box;

fn consume<T>(item: T){
    drop(black_box(item))
}

fuzz_target!(|data: (Vec<i8>, Vec<i8>)| {
    let (left, right) = data;
    align_ord(&left, &right).for_each(consume);
    const CAP: usize = 10;
    if let Ok(zip) = Builder::new_stackvec::<CAP>(&left, &right).try_build() {
        zip.for_each(consume);
    }
});
