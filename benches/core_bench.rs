use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use maze_path_editor::{
    classify, resolve_turn, GridCoordinate, GridLayout, OpenSides, PathSequence, TurnKind,
    TurnPolicy,
};
use std::hint::black_box;

/// Serpentine über ein `width`-breites Raster: jede Zeile abwechselnd nach Osten/Westen.
fn build_serpentine(cell_count: usize, width: i32) -> Vec<GridCoordinate> {
    (0..cell_count as i32)
        .map(|i| {
            let row = i / width;
            let column = i % width;
            let x = if row % 2 == 0 { column } else { width - 1 - column };
            GridCoordinate::new(x, row)
        })
        .collect()
}

fn build_layout(coordinates: &[GridCoordinate]) -> GridLayout {
    let mut layout = GridLayout::new();
    for &coordinate in coordinates {
        layout.insert(coordinate, OpenSides::ALL);
    }
    layout
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_append");

    for &cell_count in &[1_000usize, 10_000usize] {
        let walk = build_serpentine(cell_count, 64);

        group.bench_with_input(BenchmarkId::new("serpentine", cell_count), &walk, |b, walk| {
            b.iter(|| {
                let mut sequence = PathSequence::new();
                for &coordinate in walk {
                    let _ = sequence.append(black_box(coordinate), OpenSides::ALL);
                }
                black_box(sequence.len())
            })
        });
    }

    group.finish();
}

fn bench_remove_and_invert(c: &mut Criterion) {
    let walk = build_serpentine(2_000, 64);
    let layout = build_layout(&walk);

    c.bench_function("path_remove_middle_eager", |b| {
        b.iter(|| {
            let mut sequence =
                PathSequence::from_coordinates(walk.iter().copied(), &layout, TurnPolicy::eager())
                    .expect("Layout deckt den Pfad ab");
            for &coordinate in walk.iter().skip(1).step_by(7) {
                let _ = sequence.remove(black_box(coordinate));
            }
            sequence.invert();
            black_box(sequence.len())
        })
    });
}

fn bench_resolve_turn(c: &mut Criterion) {
    let walk = build_serpentine(4_096, 64);

    c.bench_function("resolve_turn_windows", |b| {
        b.iter(|| {
            let mut bends = 0usize;
            for window in walk.windows(3) {
                let turn = resolve_turn(
                    black_box(window[0]),
                    black_box(window[1]),
                    black_box(window[2]),
                );
                bends += usize::from(turn != TurnKind::Straight);
            }
            black_box(bends)
        })
    });

    c.bench_function("classify_all_masks", |b| {
        b.iter(|| {
            for bits in 0u8..16 {
                black_box(classify(OpenSides::from_bits_truncate(black_box(bits))));
            }
        })
    });
}

criterion_group!(benches, bench_append, bench_remove_and_invert, bench_resolve_turn);
criterion_main!(benches);
