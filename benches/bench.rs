//! Criterion benchmarks for kelime.
//!
//! Covers each rule operation on its own plus the full analysis pipeline:
//! - Vowel harmony and pluralization
//! - Tokenization with apostrophe merging
//! - Accent removal
//! - Stemming and diacritic restoration

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use kelime::TurkishTextRules;
use kelime::analysis::analyzer::{Analyzer, TurkishAnalyzer};
use std::hint::black_box;

/// Generate test sentences for benchmarking.
fn generate_test_sentences(count: usize) -> Vec<String> {
    let words = vec![
        "kitaplar",
        "evden",
        "Ali'nin",
        "güzellik",
        "öğretmen",
        "çiçek",
        "İstanbul'da",
        "arkadaşlarımla",
        "okulda",
        "bilgisayar",
        "ağaç",
        "köpek",
        "şeker",
        "çörek",
        "ılık",
        "su",
    ];

    let mut sentences = Vec::with_capacity(count);
    for i in 0..count {
        let length = 5 + (i % 20);
        let mut sentence_words = Vec::with_capacity(length);

        for j in 0..length {
            let word_idx = (i * 7 + j * 13) % words.len(); // Pseudo-random distribution
            sentence_words.push(words[word_idx]);
        }

        sentences.push(format!("{}.", sentence_words.join(" ")));
    }

    sentences
}

/// Benchmark the word-level rules.
fn bench_word_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_rules");
    let rules = TurkishTextRules::new();
    let words = ["kitap", "otobüs", "köpek", "arkadaşlarımla", "güzellik", "ogretmen"];

    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("vowel_harmony", |b| {
        b.iter(|| {
            for word in &words {
                black_box(rules.check_vowel_harmony(black_box(word)));
            }
        })
    });

    group.bench_function("pluralize", |b| {
        b.iter(|| {
            for word in &words {
                black_box(rules.pluralize(black_box(word)));
            }
        })
    });

    group.bench_function("stem", |b| {
        b.iter(|| {
            for word in &words {
                black_box(rules.stem(black_box(word)));
            }
        })
    });

    group.bench_function("spell_check", |b| {
        b.iter(|| {
            for word in &words {
                black_box(rules.spell_check(black_box(word)));
            }
        })
    });

    group.finish();
}

/// Benchmark text-level operations.
fn bench_text_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_rules");
    let rules = TurkishTextRules::new();
    let sentences = generate_test_sentences(100);

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("tokenize", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(rules.tokenize(black_box(sentence)));
            }
        })
    });

    group.bench_function("remove_accents", |b| {
        b.iter(|| {
            for sentence in &sentences {
                black_box(rules.remove_accents(black_box(sentence)));
            }
        })
    });

    group.finish();
}

/// Benchmark the full analysis pipeline.
fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let analyzer = TurkishAnalyzer::with_options(true, true).unwrap();
    let sentences = generate_test_sentences(100);

    group.bench_function("analyze_single_sentence", |b| {
        let text = &sentences[0];
        b.iter(|| {
            let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
            black_box(tokens)
        })
    });

    group.throughput(Throughput::Elements(sentences.len() as u64));
    group.bench_function("analyze_batch_sentences", |b| {
        b.iter(|| {
            for text in &sentences {
                let tokens: Vec<_> = analyzer.analyze(black_box(text)).unwrap().collect();
                black_box(tokens);
            }
        })
    });

    group.finish();
}

criterion_group!(benches, bench_word_rules, bench_text_rules, bench_analysis);
criterion_main!(benches);
