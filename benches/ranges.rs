//! Range construction benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use buffer_a11y::buffer::BufferGeometry;
use buffer_a11y::provider::{
    BufferState, CellSize, Collaborators, FontMetrics, ScreenBuffer, ScreenPoint, Selection,
    SelectionRect,
};
use buffer_a11y::{Provider, RangeSelector};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::sync::Arc;

struct Host {
    selection: Vec<SelectionRect>,
}

impl ScreenBuffer for Host {
    fn state(&self) -> BufferState {
        BufferState {
            geometry: BufferGeometry::new(9001, 120, 8_990, 50).unwrap(),
            rows_in_use: 9001,
        }
    }
}

impl Selection for Host {
    fn current(&self) -> Option<Vec<SelectionRect>> {
        Some(self.selection.clone())
    }
}

impl FontMetrics for Host {
    fn cell_size(&self) -> CellSize {
        CellSize::new(8, 16)
    }
}

fn provider() -> Provider {
    let host = Arc::new(Host {
        selection: (100..140).map(|top| SelectionRect::new(top, 0, 119)).collect(),
    });
    Provider::new(Collaborators::new(host.clone(), host.clone(), host))
}

fn queries(c: &mut Criterion) {
    let provider = provider();

    c.bench_function("visible_ranges_50_rows", |b| {
        b.iter(|| black_box(provider.visible_ranges().unwrap()))
    });

    c.bench_function("selection_ranges_40_rects", |b| {
        b.iter(|| black_box(provider.selection_ranges().unwrap()))
    });

    c.bench_function("document_range", |b| {
        b.iter(|| black_box(provider.document_range().unwrap()))
    });

    c.bench_function("range_from_point", |b| {
        b.iter(|| black_box(provider.range_from_point(black_box(ScreenPoint::new(333.0, 401.0)))))
    });

    c.bench_function("make_ranges_explicit_offsets", |b| {
        b.iter(|| {
            black_box(
                provider
                    .make_ranges((0..64).map(|i| RangeSelector::Offsets {
                        start: i * 120,
                        end: i * 120 + 60,
                    }))
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, queries);
criterion_main!(benches);
