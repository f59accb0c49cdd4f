use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nwalign_bio::alignment::{NeedlemanWunsch, ScoringScheme};

fn create_dna_sequence(length: usize) -> Vec<u8> {
    let bases = b"ATGC";
    (0..length).map(|i| bases[i % 4]).collect()
}

/// Deterministic substitutions roughly every `period` bases
fn create_sequence_with_mutations(base: &[u8], period: usize) -> Vec<u8> {
    base.iter()
        .enumerate()
        .map(|(i, &b)| {
            if i % period == period / 2 {
                match b {
                    b'A' => b'T',
                    b'T' => b'G',
                    b'G' => b'C',
                    b'C' => b'A',
                    _ => b,
                }
            } else {
                b
            }
        })
        .collect()
}

fn bench_dna_alignment(c: &mut Criterion) {
    let mut group = c.benchmark_group("dna_alignment");
    let aligner = NeedlemanWunsch::new(ScoringScheme::new(1, -1, -1));

    for length in &[50, 100, 500, 1000] {
        let ref_seq = create_dna_sequence(*length);
        let query_seq = create_sequence_with_mutations(&ref_seq, 20); // ~5% substitutions

        group.throughput(Throughput::Elements((*length * *length) as u64));

        group.bench_with_input(
            BenchmarkId::new("needleman_wunsch", length),
            &(ref_seq, query_seq),
            |b, (ref_seq, query_seq)| {
                b.iter(|| {
                    aligner.align(black_box(ref_seq.as_slice()), black_box(query_seq.as_slice()))
                });
            },
        );
    }

    group.finish();
}

fn bench_unequal_lengths(c: &mut Criterion) {
    let mut group = c.benchmark_group("unequal_lengths");
    let aligner = NeedlemanWunsch::default();

    for length in &[100, 500, 1000] {
        let long = create_dna_sequence(*length);
        let short = create_dna_sequence(*length / 10);

        group.bench_with_input(
            BenchmarkId::new("one_tenth", length),
            &(long, short),
            |b, (long, short)| {
                b.iter(|| aligner.align(black_box(long.as_slice()), black_box(short.as_slice())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_dna_alignment, bench_unequal_lengths);
criterion_main!(benches);
