use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use mnkgame::{Coord, Grid, Player, SearchOptions, choose_move, is_winning_placement};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    board: &'static str,
    win_length: usize,
    to_move: Player,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "tic_tac_toe_opening",
        board: "...\n...\n...",
        win_length: 3,
        to_move: Player::X,
    },
    BenchCase {
        name: "tic_tac_toe_midgame",
        board: "X..\n.O.\n..X",
        win_length: 3,
        to_move: Player::O,
    },
    BenchCase {
        name: "five_by_five_midgame",
        board: "X....\n.O...\n..X..\n.....\n....O",
        win_length: 4,
        to_move: Player::X,
    },
    BenchCase {
        name: "gomoku_open_four",
        board: GOMOKU_OPEN_FOUR,
        win_length: 5,
        to_move: Player::X,
    },
];

const GOMOKU_OPEN_FOUR: &str = concat!(
    "O..............\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "...............\n",
    ".....XXXX......\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "..........OOO..\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "...............",
);

const GOMOKU_DIAGONAL: &str = concat!(
    "OOOO...........\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "....X..........\n",
    ".....X.........\n",
    "......X........\n",
    ".......X.......\n",
    "........X......\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "...............\n",
    "...............",
);

fn bench_choose_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("choose_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let grid = Grid::from_rows(case.board).expect("benchmark board should parse");
        let options = SearchOptions::default();

        // Correctness guard before benchmarking.
        choose_move(&grid, case.to_move, case.win_length, &options)
            .expect("engine should find a move");

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &grid, |b, grid| {
            b.iter(|| {
                choose_move(
                    black_box(grid),
                    case.to_move,
                    case.win_length,
                    black_box(&options),
                )
                .expect("engine benchmark run should succeed")
            });
        });
    }

    group.finish();
}

fn bench_win_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("win_scan");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(2));

    let diagonal = Grid::from_rows(GOMOKU_DIAGONAL).expect("benchmark board should parse");
    let hit = Coord::new(6, 6);
    assert!(is_winning_placement(&diagonal, hit, 5));

    group.bench_function("diagonal_hit_15x15", |b| {
        b.iter(|| is_winning_placement(black_box(&diagonal), black_box(hit), 5))
    });

    let sparse = Grid::from_rows(GOMOKU_OPEN_FOUR).expect("benchmark board should parse");
    let miss = Coord::new(5, 5);
    assert!(!is_winning_placement(&sparse, miss, 5));

    group.bench_function("open_four_miss_15x15", |b| {
        b.iter(|| is_winning_placement(black_box(&sparse), black_box(miss), 5))
    });

    group.finish();
}

criterion_group!(engine_benches, bench_choose_move, bench_win_scan);
criterion_main!(engine_benches);
