use ahash::AHashSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use torus_snake::core::GameConfig;
use torus_snake::evaluator::evaluate_move;
use torus_snake::policy::PolicyKind;
use torus_snake::simulation::{apply_direction, create_initial_state, step};
use torus_snake::{Direction, GameState, Point, Status};

/// Mid-game fixture: a 20-cell snake coiled on a 20x20 board with a
/// scattering of obstacles, food on the far side.
fn mid_game_state() -> GameState {
    let mut snake = Vec::new();
    for x in (5..15).rev() {
        snake.push(Point::new(x, 10));
    }
    for x in 5..15 {
        snake.push(Point::new(x, 11));
    }
    snake.reverse();

    let obstacles: AHashSet<Point> = [(3, 3), (16, 4), (4, 16), (17, 17), (10, 2)]
        .iter()
        .map(|&(x, y)| Point::new(x, y))
        .collect();

    GameState {
        snake,
        direction: Direction::Right,
        food: Point::new(18, 18),
        obstacles,
        last_spawned_obstacle: None,
        score: 17,
        fruits_eaten: 17,
        status: Status::Running,
        time_since_last_fruit: None,
        timeout_ms: None,
    }
}

fn bench_evaluate_move(c: &mut Criterion) {
    let state = mid_game_state();
    let mut group = c.benchmark_group("evaluate_move");
    for dir in Direction::ALL {
        group.bench_function(format!("{dir:?}"), |b| {
            b.iter(|| evaluate_move(black_box(&state), 20, dir))
        });
    }
    group.finish();
}

fn bench_policy_game(c: &mut Criterion) {
    c.bench_function("greedy_200_ticks", |b| {
        let policy = PolicyKind::Greedy.build();
        let config = GameConfig::new(20, 6);
        b.iter(|| {
            let mut rng = ChaCha8Rng::seed_from_u64(7);
            let mut state = create_initial_state(&config, &mut rng).unwrap();
            for _ in 0..200 {
                if state.status == Status::GameOver {
                    break;
                }
                if let Some(dir) = policy.choose(&state, config.size) {
                    state = apply_direction(&state, dir);
                }
                state = step(&state, config.size, &mut rng);
            }
            black_box(state.score)
        })
    });
}

criterion_group!(benches, bench_evaluate_move, bench_policy_game);
criterion_main!(benches);
