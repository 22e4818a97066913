use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mouseless_grid::{GridEditor, GridLevels, LayoutSlot, compose, tile};

fn tile_subgrid(c: &mut Criterion) {
    let levels = GridLevels::default();
    c.bench_function("tile_default_subgrid", |b| {
        b.iter(|| tile(black_box(&levels.subgrid), "Subgrid").expect("tile"));
    });
}

fn compose_levels(c: &mut Criterion) {
    let levels = GridLevels::default();
    c.bench_function("compose_default_levels", |b| {
        b.iter(|| compose(black_box(&levels.level1), black_box(&levels.level2)).expect("compose"));
    });
}

fn editor_recompute(c: &mut Criterion) {
    c.bench_function("editor_toggle_level2_rows", |b| {
        let mut editor = GridEditor::new(GridLevels::default());
        let mut rows = 4;
        b.iter(|| {
            rows = if rows == 4 { 3 } else { 4 };
            editor.set_rows(LayoutSlot::Level2, black_box(rows))
        });
    });
}

criterion_group!(benches, tile_subgrid, compose_levels, editor_recompute);
criterion_main!(benches);
