//! Benchmarks for wordstorm extraction, counting and rendering.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench pipeline -- extraction`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use wordstorm::config::{CloudConfig, ExtractConfig};
use wordstorm::core::output::to_csv;
use wordstorm::core::{
    FilterConfig, WordCount, apply_filters, cloud_frequencies, extract_entries, extract_messages,
    word_frequencies,
};
use wordstorm::pipeline::{PipelineConfig, run_pipeline};
use wordstorm::render::{RenderParams, render_cloud};

const VOCABULARY: &[&str] = &[
    "pizza", "tonight", "movie", "morning", "coffee", "weekend", "really", "great", "sounds",
    "tomorrow", "dinner", "train", "meeting", "birthday", "photo",
];

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(count + 1);
    lines.push(
        "1/1/23, 8:00 AM - Messages and calls are end-to-end encrypted. No one outside of this chat can read them."
            .to_string(),
    );
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = i % 28 + 1;
        let hour = i % 12 + 1;
        let minute = i % 60;
        let a = VOCABULARY[i % VOCABULARY.len()];
        let b = VOCABULARY[(i * 7) % VOCABULARY.len()];
        lines.push(format!(
            "3/{}/23, {}:{:02} PM - {}: the {} and {} 😀 {}",
            day, hour, minute, sender, a, b, i
        ));
    }
    lines
}

fn generate_messages(count: usize) -> Vec<String> {
    extract_messages(generate_export(count), &ExtractConfig::new())
}

// =============================================================================
// Extraction Benchmarks
// =============================================================================

fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let config = ExtractConfig::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let lines = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                let messages = extract_messages(black_box(lines), &config);
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_joined_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("joined_extraction");
    let config = ExtractConfig::new().with_join_continuations(true);

    for size in [1_000_usize, 10_000] {
        let lines: Vec<String> = generate_export(size)
            .into_iter()
            .flat_map(|line| [line, "and one more line".to_string()])
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                let entries = extract_entries(black_box(lines), &config);
                black_box(entries)
            });
        });
    }
    group.finish();
}

fn bench_filter_by_sender(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_sender");
    let config = FilterConfig::new().with_sender("alice");

    for size in [1_000_usize, 10_000] {
        let entries = extract_entries(generate_export(size), &ExtractConfig::new());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| {
                let filtered = apply_filters(black_box(entries.clone()), &config);
                black_box(filtered)
            });
        });
    }
    group.finish();
}

// =============================================================================
// Counting Benchmarks
// =============================================================================

fn bench_word_frequencies(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_frequencies");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let messages = generate_messages(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| {
                    let table = word_frequencies(black_box(messages));
                    black_box(table)
                });
            },
        );
    }
    group.finish();
}

fn bench_cloud_frequencies(c: &mut Criterion) {
    let mut group = c.benchmark_group("cloud_frequencies");
    let messages = generate_messages(10_000);

    for use_freq in [true, false] {
        let label = if use_freq { "naive" } else { "processed" };
        group.bench_with_input(BenchmarkId::from_parameter(label), &use_freq, |b, &use_freq| {
            b.iter(|| {
                let counts = cloud_frequencies(black_box(&messages), use_freq);
                black_box(counts)
            });
        });
    }
    group.finish();
}

fn bench_output_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_csv");
    let table = word_frequencies(&generate_messages(1_000));

    group.bench_function("top_20", |b| {
        b.iter(|| {
            let csv = to_csv(black_box(&table)).unwrap();
            black_box(csv)
        });
    });
    group.finish();
}

// =============================================================================
// Rendering Benchmarks
// =============================================================================

fn bench_render_cloud(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_cloud");
    group.sample_size(10);

    for words in [10_usize, 50, 200] {
        let counts: Vec<WordCount> = (0..words)
            .map(|i| WordCount::new(format!("{}{}", VOCABULARY[i % VOCABULARY.len()], i), words - i))
            .collect();
        let params = RenderParams::default().with_size(500, 250);
        group.bench_with_input(BenchmarkId::from_parameter(words), &counts, |b, counts| {
            b.iter(|| {
                let cloud = render_cloud(black_box(counts), &params).unwrap();
                black_box(cloud)
            });
        });
    }
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    group.sample_size(10);
    let config = PipelineConfig::new().with_cloud(CloudConfig::new().with_seed(7));

    for size in [1_000_usize, 10_000] {
        let lines = generate_export(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                // Full pipeline: extract -> count -> layout -> paint
                let report = run_pipeline(black_box(lines), &config).unwrap();
                black_box(report.cloud.to_png().unwrap())
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_extraction,
    bench_joined_extraction,
    bench_filter_by_sender,
    bench_word_frequencies,
    bench_cloud_frequencies,
    bench_output_csv,
    bench_render_cloud,
    bench_full_pipeline,
);

criterion_main!(benches);
