extern crate grid_astar;
use env_logger::Env;

use criterion::{criterion_group, criterion_main, Criterion};

use grid_astar::prelude::*;
use nanorand::{Rng, WyRand};

#[derive(Clone)]
struct Map {
    tiles: Vec<Vec<u8>>,
    width: usize,
    height: usize,
}

impl Map {
    pub fn new(width: usize, height: usize) -> Self {
        Map {
            tiles: vec![vec![0; width]; height],
            width,
            height,
        }
    }

    pub fn new_random(width: usize, height: usize) -> Self {
        let mut rng = WyRand::new_seed(4);
        let tiles = (0..height)
            .map(|_| {
                (0..width)
                    .map(|_| u8::from(rng.generate_range(0_u8..10) == 0))
                    .collect()
            })
            .collect();
        let mut map = Map {
            tiles,
            width,
            height,
        };
        // keep the corners open so the benchmarks have something to search for
        map.set_blocked(0, 0, false);
        map.set_blocked(width - 1, height - 1, false);
        map
    }

    pub fn set_blocked(&mut self, x: usize, y: usize, blocked: bool) {
        if x < self.width && y < self.height {
            self.tiles[y][x] = u8::from(blocked);
        }
    }
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to debug and enable the `log` feature to see every search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_get_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("Get Path");

    // Log to stdout
    init();

    for map_size in [32, 128, 512] {
        let map = Map::new(map_size, map_size);
        let goal = (map.width - 1, map.height - 1);

        let id = format!("Uniform map, Map Size: ({}, {})", map.width, map.height);
        group.bench_function(&id, |b| {
            b.iter(|| find_path(&map.tiles, (0, 0), goal).unwrap())
        });
    }

    group.sample_size(20);

    let map = Map::new_random(512, 512);
    let goal = (map.width - 1, map.height - 1);
    let id = format!("Random map, Map Size: ({}, {})", map.width, map.height);
    group.bench_function(&id, |b| {
        b.iter(|| find_path(&map.tiles, (0, 0), goal).unwrap())
    });
}

fn bench_replan(c: &mut Criterion) {
    let mut group = c.benchmark_group("Replan");
    group.sample_size(20);

    let (width, height) = (256, 256);
    let mut map = Map::new_random(width, height);
    let goal = (width - 1, height - 1);

    // Put a wall with a single gap across our map
    for x in 1..width {
        map.set_blocked(x, height / 2, true);
    }
    map.set_blocked(0, height / 2, false);

    let id = format!("Random map with wall, Map Size: ({}, {})", width, height);
    group.bench_function(&id, |b| {
        b.iter(|| find_path(&map.tiles, (0, 0), goal).unwrap())
    });
}

fn bench_find_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("Find Paths");
    group.sample_size(10);

    let map = Map::new_random(256, 256);
    let mut rng = WyRand::new_seed(7);
    let queries: Vec<(Point, Point)> = (0..256)
        .map(|_| {
            (
                (rng.generate_range(0..map.width), rng.generate_range(0..map.height)),
                (rng.generate_range(0..map.width), rng.generate_range(0..map.height)),
            )
        })
        .collect();

    #[cfg(feature = "parallel")]
    let id = format!("Random map, Parallel, {} queries", queries.len());
    #[cfg(not(feature = "parallel"))]
    let id = format!("Random map, Single Threaded, {} queries", queries.len());

    group.bench_function(&id, |b| {
        b.iter(|| find_paths(&map.tiles, &queries, &SearchConfig::default()).unwrap())
    });
}

criterion_group!(benches, bench_get_path, bench_replan, bench_find_paths);
criterion_main!(benches);
