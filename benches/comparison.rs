use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dpalign::parallel::{ParallelAffineAligner, ParallelLocalAligner};
use dpalign::sequential::{AffineAligner, LocalAligner};
use dpalign::{Aligner, ScoringPolicy};

fn bench_group(c: &mut Criterion) {
    let mut group = c.benchmark_group("Alignment");
    for (name, len) in &[("short", 100), ("medium", 1_000), ("long", 4_000)] {
        let (seq_1, seq_2) = make_sequences(*len);
        group.bench_with_input(
            format!("local/sequential/{name}"),
            &(seq_1.clone(), seq_2.clone()),
            |b, (seq_1, seq_2)| {
                b.iter(|| {
                    LocalAligner::with(
                        black_box(seq_1),
                        black_box(seq_2),
                        black_box(ScoringPolicy::local_default()),
                    )
                    .align()
                })
            },
        );
        group.bench_with_input(
            format!("local/parallel/{name}"),
            &(seq_1.clone(), seq_2.clone()),
            |b, (seq_1, seq_2)| {
                b.iter(|| {
                    ParallelLocalAligner::with(
                        black_box(seq_1),
                        black_box(seq_2),
                        black_box(ScoringPolicy::local_default()),
                    )
                    .align()
                })
            },
        );
        group.bench_with_input(
            format!("affine/sequential/{name}"),
            &(seq_1.clone(), seq_2.clone()),
            |b, (seq_1, seq_2)| {
                b.iter(|| {
                    AffineAligner::with(
                        black_box(seq_1),
                        black_box(seq_2),
                        black_box(ScoringPolicy::affine_default()),
                    )
                    .align()
                })
            },
        );
        group.bench_with_input(
            format!("affine/parallel/{name}"),
            &(seq_1.clone(), seq_2.clone()),
            |b, (seq_1, seq_2)| {
                b.iter(|| {
                    ParallelAffineAligner::with(
                        black_box(seq_1),
                        black_box(seq_2),
                        black_box(ScoringPolicy::affine_default()),
                    )
                    .align()
                })
            },
        );
    }
}

// Two related DNA strings: the second is the first with every seventh base
// substituted and every thirteenth dropped.
fn make_sequences(len: usize) -> (Vec<u8>, Vec<u8>) {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    let seq1: Vec<u8> = (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            b"ACGT"[(state & 3) as usize]
        })
        .collect();
    let seq2 = seq1
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 13 != 12)
        .map(|(i, &c)| if i % 7 == 6 { b'T' } else { c })
        .collect();
    (seq1, seq2)
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_group
}

criterion_main!(benches);
