#![cfg(feature = "vec_storage")]

use proptest::prelude::*;
use sorted_paired_zip::{Aligned, PairedZip, WalkState, align, align_by_key, align_ord};

mod helpers;
use helpers::reference_alignment;

fn items() -> impl Strategy<Value = Vec<i16>> {
    prop::collection::vec(-20_i16..20, 0..40)
}

proptest! {
    #[test]
    fn every_item_appears_once(left in items(), right in items()) {
        let pairs = align_ord(left.clone(), right.clone()).into_vec();
        let mut lefts = pairs.iter().filter_map(Aligned::left).copied().collect::<Vec<_>>();
        let mut rights = pairs.iter().filter_map(Aligned::right).copied().collect::<Vec<_>>();
        let (mut left, mut right) = (left, right);
        lefts.sort_unstable();
        rights.sort_unstable();
        left.sort_unstable();
        right.sort_unstable();
        prop_assert_eq!(lefts, left);
        prop_assert_eq!(rights, right);
    }

    #[test]
    fn output_is_sorted(left in items(), right in items()) {
        let pairs = align_ord(left, right).into_vec();
        prop_assert!(pairs.windows(2).all(|w| w[0].key() <= w[1].key()));
    }

    #[test]
    fn matched_items_compare_equal(left in items(), right in items()) {
        for pair in align(left, right, |l, r| (l / 3).cmp(&(r / 3))) {
            if let Aligned::Both(l, r) = pair {
                prop_assert_eq!(l / 3, r / 3);
            }
        }
    }

    #[test]
    fn matches_reference(left in items(), right in items()) {
        let by_ord = align_ord(left.clone(), right.clone()).into_vec();
        prop_assert_eq!(by_ord, reference_alignment(&left, &right, Ord::cmp));

        let by_abs = align_by_key(left.clone(), right.clone(), |v| v.abs()).into_vec();
        prop_assert_eq!(
            by_abs,
            reference_alignment(&left, &right, |l: &i16, r: &i16| l.abs().cmp(&r.abs()))
        );
    }

    #[test]
    fn shuffled_inputs_align_the_same(
        (left, shuffled_left) in items().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
        (right, shuffled_right) in items().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        prop_assert_eq!(
            align_ord(left, right).into_vec(),
            align_ord(shuffled_left, shuffled_right).into_vec()
        );
    }

    #[test]
    fn stats_add_up(left in items(), right in items()) {
        let (left_len, right_len) = (left.len(), right.len());
        let mut zip = PairedZip::builder(left, right).build();
        let (lower, upper) = zip.size_hint();
        let mut count = 0;
        while zip.next().is_some() {
            count += 1;
            let peeked = (zip.peek_left().is_some(), zip.peek_right().is_some());
            let expected = match peeked {
                (true, true) => WalkState::BothRemaining,
                (true, false) => WalkState::OnlyLeftRemaining,
                (false, true) => WalkState::OnlyRightRemaining,
                (false, false) => WalkState::Done,
            };
            prop_assert_eq!(zip.state(), expected);
        }
        prop_assert!(lower <= count && Some(count) <= upper);
        let stats = zip.stats();
        prop_assert_eq!(stats.total(), count);
        prop_assert_eq!(stats.matched + stats.left_only, left_len);
        prop_assert_eq!(stats.matched + stats.right_only, right_len);
    }
}
