#![no_main]

use libfuzzer_sys::fuzz_target;
extern crate sorted_paired_zip;
use sorted_paired_zip::comparators::{ByKey, ByOrd, Reversed};
fuzz_target!(|data: (Vec<i8>, Vec<i8>)| {
    let (left, right) = data;
    sorted_paired_zip::tests::alignment::assert_correct_alignment(&left, &right, ByOrd);
    sorted_paired_zip::tests::alignment::assert_correct_alignment(
        &left,
        &right,
        Reversed::new::<i8>(ByOrd),
    );
    sorted_paired_zip::tests::alignment::assert_correct_alignment(
        &left,
        &right,
        ByKey::new(|item: &i8| item.rem_euclid(5)),
    );
});
