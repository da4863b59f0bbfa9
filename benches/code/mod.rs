use criterion::{BenchmarkId, Criterion, criterion_group};
use itertools::{EitherOrBoth, Itertools};
use rand::prelude::*;
use sorted_paired_zip::{Aligned, PairedZip, align_ord};

/// `n_els` random items per side, drawn from `0..domain`
fn random_sides(rng: &mut StdRng, n_els: usize, domain: u64) -> (Vec<u64>, Vec<u64>) {
    let mut side = || {
        (0..n_els)
            .map(|_| rng.random_range(0..domain))
            .collect::<Vec<u64>>()
    };
    (side(), side())
}

fn itertools_align(left: &[u64], right: &[u64]) -> Vec<Aligned<u64>> {
    let mut left = left.to_vec();
    let mut right = right.to_vec();
    left.sort();
    right.sort();
    left.into_iter()
        .merge_join_by(right, Ord::cmp)
        .map(|pair| match pair {
            EitherOrBoth::Both(l, r) => Aligned::Both(l, r),
            EitherOrBoth::Left(l) => Aligned::Left(l),
            EitherOrBoth::Right(r) => Aligned::Right(r),
        })
        .collect()
}

fn bench_itertools(c: &mut Criterion) {
    let sizes = [64, 1024, 16384, 262_144, 1_048_576];
    let mut rng = StdRng::seed_from_u64(0);

    let mut group = c.benchmark_group("Random items VS Itertools");
    for n_els in sizes {
        let (left, right) = random_sides(&mut rng, n_els, n_els as u64);
        group.bench_function(BenchmarkId::new("PairedZip", n_els), |b| {
            b.iter(|| align_ord(left.iter().copied(), right.iter().copied()).into_vec());
        });
        group.bench_function(BenchmarkId::new("Itertools merge_join_by", n_els), |b| {
            b.iter(|| itertools_align(&left, &right));
        });
    }
    group.finish();

    let mut group = c.benchmark_group("Identical sides VS Itertools");
    for n_els in sizes {
        let (left, _) = random_sides(&mut rng, n_els, u64::MAX);
        let mut right = left.clone();
        right.reverse();
        group.bench_function(BenchmarkId::new("PairedZip", n_els), |b| {
            b.iter(|| align_ord(left.iter().copied(), right.iter().copied()).into_vec());
        });
        group.bench_function(BenchmarkId::new("Itertools merge_join_by", n_els), |b| {
            b.iter(|| itertools_align(&left, &right));
        });
    }
    group.finish();
}

fn bench_configs(c: &mut Criterion) {
    const N_ELS: usize = 256;
    let (left, right) = random_sides(&mut StdRng::seed_from_u64(0), N_ELS, N_ELS as u64);

    let mut group = c.benchmark_group(format!("Configs ({N_ELS} items per side)"));
    group.bench_function("Ord", |b| {
        b.iter(|| {
            PairedZip::builder(left.iter().copied(), right.iter().copied())
                .build()
                .into_vec()
        });
    });
    group.bench_function("By key", |b| {
        b.iter(|| {
            PairedZip::builder(left.iter().copied(), right.iter().copied())
                .by_key(|&item| item / 2)
                .build()
                .into_vec()
        });
    });
    group.bench_function("Lazy, borrowed", |b| {
        b.iter(|| PairedZip::builder(&left, &right).build().count());
    });
    #[cfg(feature = "stackvec_storage")]
    group.bench_function("Ord, stackvec", |b| {
        use sorted_paired_zip::paired_zip::Builder;
        b.iter(|| {
            Builder::new_stackvec::<N_ELS>(left.iter().copied(), right.iter().copied())
                .build()
                .into_vec()
        });
    });
    group.finish();
}

criterion_group!(benches, bench_itertools, bench_configs);
