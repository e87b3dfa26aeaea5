use lexitrie::trie::{Trie, TrieString};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{distributions::Alphanumeric, thread_rng, Rng};

static POPULATION_SIZE: usize = 10000;

fn random_words(count: usize, size: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            thread_rng()
                .sample_iter(&Alphanumeric)
                .take(thread_rng().gen_range(1..=size))
                .map(char::from)
                .collect()
        })
        .collect()
}

fn make_trie(words: &[String]) -> TrieString<usize> {
    let mut trie = Trie::new();
    for w in words {
        trie.insert_with_value(w.chars(), Some(w.len()));
    }
    trie
}

fn trie_insert(c: &mut Criterion) {
    let words = random_words(POPULATION_SIZE, 16);
    c.bench_function("trie insert", |b| b.iter(|| make_trie(&words)));
}

fn trie_lookup(c: &mut Criterion) {
    let words = random_words(POPULATION_SIZE, 16);
    let trie = make_trie(&words);
    c.bench_function("trie lookup", |b| {
        b.iter(|| words.iter().filter(|w| trie.lookup(w.chars())).count())
    });
    c.bench_function("trie starts_with", |b| {
        b.iter(|| {
            words
                .iter()
                .filter(|w| trie.starts_with(w.chars().take(3)))
                .count()
        })
    });
}

fn trie_delete(c: &mut Criterion) {
    let words = random_words(POPULATION_SIZE, 16);
    c.bench_function("trie delete with pruning", |b| {
        b.iter_batched(
            || make_trie(&words),
            |mut trie| {
                for w in &words {
                    trie.delete(w.chars());
                }
                trie
            },
            BatchSize::LargeInput,
        )
    });
}

fn iterate(c: &mut Criterion) {
    static BASE_SIZE: usize = 16;

    let mut group = c.benchmark_group("iterate");
    for size in [BASE_SIZE, 4 * BASE_SIZE, 16 * BASE_SIZE].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        let trie = make_trie(&random_words(1000, *size));
        group.bench_with_input(
            BenchmarkId::new("consuming iteration (char)", size),
            size,
            |b, _| b.iter_batched(|| trie.clone(), |t| t.into_iter().count(), BatchSize::SmallInput),
        );
        group.bench_with_input(
            BenchmarkId::new("reference iteration (char)", size),
            size,
            |b, _| b.iter(|| trie.iter().count()),
        );
    }
    group.finish();
}

criterion_group!(benches, trie_insert, trie_lookup, trie_delete, iterate);
criterion_main!(benches);
