// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery pagination and page rendering.
//!
//! Measures the performance of:
//! - Paging through a large collection until everything is shown
//! - Switching filters (clear + first page)
//! - Serializing a rendered HTML page

use criterion::{criterion_group, criterion_main, Criterion};
use gallery_lens::application::port::RenderTarget;
use gallery_lens::domain::gallery::{
    Category, CategoryFilter, GalleryState, ImageRecord, PageSize,
};
use gallery_lens::infrastructure::HtmlDocument;
use std::hint::black_box;

const LABEL: &str = "Load more photos";

/// 3 folders of 400 images each.
fn collection() -> Vec<ImageRecord> {
    ["activites", "colonies", "theatre"]
        .iter()
        .flat_map(|category| {
            (1..=400).map(move |n| ImageRecord {
                path: format!("../../photos/{category}/{category} {n}.jpg"),
                title: format!("{category} {n}"),
                category: Category::new(*category),
                sequence_number: n,
            })
        })
        .collect()
}

/// Benchmark paging through every image with the default page size.
fn bench_load_all_pages(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pagination");
    let images = collection();

    group.bench_function("load_all_pages", |b| {
        b.iter(|| {
            let mut state = GalleryState::new(images.clone(), PageSize::default());
            let mut batch = state.initial_load(LABEL);
            while state.has_more() {
                batch = state.load_page(LABEL);
            }
            black_box(batch);
        });
    });

    group.finish();
}

/// Benchmark filter switches on a fully loaded gallery.
fn bench_set_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pagination");
    let mut state = GalleryState::new(collection(), PageSize::default());
    let theatre = CategoryFilter::Only(Category::new("theatre"));

    group.bench_function("set_filter", |b| {
        b.iter(|| {
            black_box(state.set_filter(theatre.clone(), LABEL));
            black_box(state.set_filter(CategoryFilter::All, LABEL));
        });
    });

    group.finish();
}

/// Benchmark serializing a page holding 60 cards.
fn bench_render_html(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_pagination");
    let template = r#"<html><body><div id="photoGallery"></div><button id="loadMoreBtn"></button></body></html>"#;

    let mut state = GalleryState::new(collection(), PageSize::new(60));
    let mut document = HtmlDocument::parse(template, "photoGallery", Some("loadMoreBtn")).unwrap();
    document.apply(&state.initial_load(LABEL));

    group.bench_function("to_html_60_cards", |b| {
        b.iter(|| {
            black_box(document.to_html());
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_load_all_pages,
    bench_set_filter,
    bench_render_html
);
criterion_main!(benches);
