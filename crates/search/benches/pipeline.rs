//! Benchmarks for the filter pipeline and ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dinefind_core::dataset::Dataset;
use dinefind_core::records::{Cuisine, Restaurant};
use dinefind_search::{filter, rank, CuisineIndex, DataContext, SearchRequest};

const NAMES: [&str; 6] = ["Delicious", "Grill", "Noodle", "Tasty", "Spice", "Bistro"];
const SUFFIXES: [&str; 5] = ["zilla", "genix", "hub", "ly", "house"];

fn create_dataset(count: usize) -> Dataset {
    let restaurants = (0..count)
        .map(|i| {
            Restaurant::new(
                i.to_string(),
                format!("{}{}", NAMES[i % NAMES.len()], SUFFIXES[i % SUFFIXES.len()]),
                (i % 19 + 1).to_string(),
                (i % 10 + 1).to_string(),
                (i % 5 + 1).to_string(),
                ((i % 5 + 1) * 10).to_string(),
            )
        })
        .collect();

    let cuisines = [
        "American", "Chinese", "Thai", "Italian", "French", "Japanese", "Turkish", "Korean",
        "Vietnamese", "Greek", "Spanish", "Mexican", "Malaysian", "African", "German", "Indian",
        "Russian", "Chilean", "Moroccan",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| Cuisine::new((i + 1).to_string(), *name))
    .collect();

    Dataset::from_records(restaurants, cuisines)
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let request = SearchRequest::new()
        .with_name("del")
        .with_rating("3")
        .with_price("40")
        .with_cuisine("chi");

    for size in [200, 2_000, 20_000].iter() {
        let dataset = create_dataset(*size);
        let index = CuisineIndex::build(&dataset.cuisines);

        group.bench_with_input(BenchmarkId::new("filter", size), size, |b, _| {
            b.iter(|| filter::apply(black_box(&dataset.restaurants), &index, black_box(&request)))
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [200, 2_000, 20_000].iter() {
        let context = DataContext::new(create_dataset(*size));
        let request = SearchRequest::new().with_name("i").with_distance("5");

        group.bench_with_input(BenchmarkId::new("filter_and_rank", size), size, |b, _| {
            b.iter(|| context.search(black_box(&request)))
        });
    }

    group.finish();
}

fn bench_rank(c: &mut Criterion) {
    let dataset = create_dataset(20_000);

    c.bench_function("rank_20000", |b| {
        b.iter(|| rank::top(black_box(dataset.restaurants.iter().collect()), rank::TOP_N))
    });
}

criterion_group!(benches, bench_pipeline, bench_search, bench_rank);
criterion_main!(benches);
