use criterion::{criterion_group, criterion_main, Criterion};
use spanning_mazes::{
    frontier::PopPolicy,
    generators,
    grid::FourConnected,
    maze,
    units::{Height, Width},
};

fn bench_maze_32(c: &mut Criterion, policy: PopPolicy) {
    let mut rng = generators::seeded_rng(32);
    c.bench_function(&format!("{}_maze_32", policy), move |b| {
        b.iter(|| maze::random_maze(Width(32), Height(32), policy, &mut rng))
    });
}

fn bench_stack_maze_32(c: &mut Criterion) {
    bench_maze_32(c, PopPolicy::Stack);
}

fn bench_queue_maze_32(c: &mut Criterion) {
    bench_maze_32(c, PopPolicy::Queue);
}

fn bench_random_maze_32(c: &mut Criterion) {
    bench_maze_32(c, PopPolicy::Random);
}

fn bench_spanning_tree_128(c: &mut Criterion) {
    let cells = spanning_mazes::grid::squares(Width(128), Height(128))
        .unwrap()
        .collect::<Vec<_>>();
    let mut rng = generators::seeded_rng(128);
    c.bench_function("random_spanning_tree_128", move |b| {
        b.iter(|| generators::random_spanning_tree(cells.iter().cloned(),
                                                   &FourConnected,
                                                   PopPolicy::Random,
                                                   &mut rng))
    });
}

criterion_group!(
    benches,
    bench_stack_maze_32,
    bench_queue_maze_32,
    bench_random_maze_32,
    bench_spanning_tree_128
);
criterion_main!(benches);
