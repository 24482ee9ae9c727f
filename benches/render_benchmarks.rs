//! Benchmarks for markdown rendering and docset builds.
//!
//! Run with: cargo bench --bench render_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use notes::docset::{DocsetConfig, render_docset, toc_months};
use notes::markdown::markdown_to_html;
use std::fs;
use tempfile::TempDir;

// =============================================================================
// Test Data Generation
// =============================================================================

const WORDS: &[&str] = &[
    "standup",
    "planning",
    "review",
    "deploy",
    "incident",
    "refactor",
    "migration",
    "release",
];

/// Note body with headings, a table, a task list, an image and bare links.
fn generate_note_content(index: usize) -> String {
    let word = WORDS[index % WORDS.len()];
    format!(
        "# {word} {index}\n\n\
         Talked about the {word} with the team, see www.example.com/{index}.\n\n\
         ## Actions\n\n\
         - [x] write up ~~draft~~ notes\n\
         - [ ] follow up with ops@example.com\n\n\
         | step | owner |\n|------|-------|\n| {word} | me |\n\n\
         ![diagram](/img/diagram-{index}.png){{width=400}}\n\n\
         ```rust\nfn main() {{ println!(\"{word}\"); }}\n```\n"
    )
}

/// File name of the note for `index`, spread over consecutive days.
fn note_file_name(index: usize) -> String {
    let date = chrono::NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(index as u64);
    format!("{}.md", date.format("%Y-%m-%d"))
}

fn create_notes_dir(count: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for i in 0..count {
        fs::write(dir.path().join(note_file_name(i)), generate_note_content(i)).unwrap();
    }
    dir
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_markdown_to_html(c: &mut Criterion) {
    let content = generate_note_content(7);
    c.bench_function("markdown_to_html", |b| {
        b.iter(|| markdown_to_html(std::hint::black_box(&content)))
    });
}

fn bench_toc_months(c: &mut Criterion) {
    let mut group = c.benchmark_group("toc_months");
    for size in [100, 1000] {
        let pages: Vec<String> = (0..size).map(|i| format!("{}.html", note_file_name(i))).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("pages", size), &pages, |b, pages| {
            b.iter(|| toc_months(pages))
        });
    }
    group.finish();
}

fn bench_full_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_render");
    group.sample_size(10);
    for size in [10, 100] {
        let dir = create_notes_dir(size);
        let config = DocsetConfig::new(dir.path());
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &config, |b, config| {
            b.iter(|| render_docset(config).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_markdown_to_html,
    bench_toc_months,
    bench_full_render
);
criterion_main!(benches);
