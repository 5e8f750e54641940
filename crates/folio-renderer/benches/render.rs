//! Benchmarks for media-aware markdown rendering.

#![allow(clippy::format_push_string)] // Benchmark setup code, performance not critical

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use folio_renderer::{MediaRenderer, RenderOptions};

/// Generate a post with `sections` sections, each holding prose and media.
fn generate_post(sections: usize, paragraphs_per_section: usize) -> String {
    let mut md = String::with_capacity(sections * (200 + paragraphs_per_section * 120));
    md.push_str("# Post Title\n\n");

    for i in 0..sections {
        md.push_str(&format!("## Section {i}\n\n"));
        for j in 0..paragraphs_per_section {
            md.push_str(&format!(
                "Paragraph {j} of section {i} with **bold** text\nand a link to https://example.com/{i}.\n\n"
            ));
        }
        md.push_str(&format!(
            "<audio src=\"../audio/track-{i}.mp3\" data-title=\"Track {i}\"></audio>\n\n"
        ));
        md.push_str(&format!(
            "<carousel>a{i}.png|First|Caption; b{i}.png|Second</carousel>\n\n"
        ));
        md.push_str("```html\n<audio src=\"example.mp3\"></audio>\n```\n\n");
    }
    md
}

fn bench_render_plain(c: &mut Criterion) {
    let renderer = MediaRenderer::new();
    let markdown = "# Hello\n\nSimple content.";

    c.bench_function("render_plain_markdown", |b| {
        b.iter(|| renderer.render(markdown));
    });
}

fn bench_render_without_extensions(c: &mut Criterion) {
    let renderer =
        MediaRenderer::with_options(RenderOptions::default().with_breaks(false).with_gfm(false));
    let markdown = generate_post(10, 2);

    c.bench_function("render_commonmark_10_sections", |b| {
        b.iter(|| renderer.render(&markdown));
    });
}

fn bench_render_varying_sizes(c: &mut Criterion) {
    let renderer = MediaRenderer::new();
    let mut group = c.benchmark_group("render_by_size");

    for (sections, paragraphs) in [(5, 2), (20, 3), (50, 5)] {
        let markdown = generate_post(sections, paragraphs);

        group.throughput(Throughput::Bytes(markdown.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("post", format!("{sections}s_{paragraphs}p")),
            &markdown,
            |b, md| b.iter(|| renderer.render(md)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_render_plain,
    bench_render_without_extensions,
    bench_render_varying_sizes,
);
criterion_main!(benches);
