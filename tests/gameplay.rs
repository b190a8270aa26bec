use rand::{SeedableRng, rngs::StdRng};
use snake_arcade::game::{
    Cell, CollisionType, Direction, EdgePolicy, GameConfig, Grid, Phase, Session, Snake,
};
use snake_arcade::settings::{self, Overrides};

fn session_with_snake(config: GameConfig, snake: Snake, fruit: Cell) -> Session {
    let mut session = Session::seeded(config, 2024).unwrap();
    let state = session.state_mut();
    state.snake = snake;
    state.fruit.position = fruit;
    session
}

#[test]
fn arcade_window_example() {
    let grid = Grid::from_pixels(600, 400, 20, EdgePolicy::Wrap).unwrap();
    assert_eq!(grid.center(), Cell::new(15, 10));

    let mut session = session_with_snake(
        GameConfig::classic(),
        Snake::new(grid.center(), Direction::Down),
        Cell::new(16, 10),
    );

    assert!(session.set_direction(Direction::Right));
    let info = session.tick().unwrap();

    let state = session.state();
    assert!(info.ate_fruit);
    assert_eq!(state.snake.head(), Cell::new(16, 10));
    assert_eq!(state.score, 10);
    assert_eq!(state.snake.length(), 2);
    assert!(!session.obstacles().occupies(state.fruit.position));

    // The extra segment shows up on the next move.
    session.state_mut().fruit.position = Cell::new(0, 0);
    session.tick().unwrap();
    assert_eq!(
        session.state().snake.body,
        vec![Cell::new(17, 10), Cell::new(16, 10)]
    );
}

#[test]
fn reversing_within_a_tick_is_ignored() {
    let mut session = session_with_snake(
        GameConfig::simple(),
        Snake::with_length(Cell::new(10, 10), Direction::Right, 3),
        Cell::new(0, 0),
    );

    assert!(!session.set_direction(Direction::Left));
    session.tick().unwrap();

    assert_eq!(session.state().snake.head(), Cell::new(11, 10));
    assert_eq!(session.phase(), Phase::Playing);
}

#[test]
fn last_turn_before_tick_wins() {
    let mut session = session_with_snake(
        GameConfig::simple(),
        Snake::with_length(Cell::new(10, 10), Direction::Right, 3),
        Cell::new(0, 0),
    );

    session.set_direction(Direction::Up);
    session.set_direction(Direction::Down);
    session.tick().unwrap();

    assert_eq!(session.state().snake.head(), Cell::new(10, 11));
}

#[test]
fn simple_variant_scores_two_per_level() {
    let mut session = session_with_snake(
        GameConfig::simple(),
        Snake::new(Cell::new(3, 3), Direction::Right),
        Cell::new(4, 3),
    );

    session.tick().unwrap();
    assert_eq!(session.state().score, 2);

    session.state_mut().fruit.position = Cell::new(5, 3);
    session.tick().unwrap();
    assert_eq!(session.state().score, 2 + 4);
    assert_eq!(session.state().level, 3);
}

#[test]
fn bounded_edge_ends_game_and_wrap_edge_does_not() {
    let mut bounded = session_with_snake(
        GameConfig::simple(),
        Snake::new(Cell::new(15, 0), Direction::Up),
        Cell::new(0, 0),
    );
    let info = bounded.tick().unwrap();
    assert_eq!(info.collision_type, Some(CollisionType::Wall));
    assert_eq!(bounded.phase(), Phase::GameOver);

    let open_wrap = GameConfig {
        obstacles: Vec::new(),
        ..GameConfig::classic()
    };
    let mut wrapped = session_with_snake(
        open_wrap,
        Snake::new(Cell::new(15, 0), Direction::Up),
        Cell::new(0, 0),
    );
    let info = wrapped.tick().unwrap();
    assert_eq!(info.collision_type, None);
    assert_eq!(wrapped.state().snake.head(), Cell::new(15, 19));
}

#[test]
fn classic_wall_sends_long_snake_home() {
    // Heading up into the horizontal wall at (10..16, 10).
    let mut session = session_with_snake(
        GameConfig::classic(),
        Snake::with_length(Cell::new(12, 11), Direction::Up, 3),
        Cell::new(0, 0),
    );
    session.state_mut().score = 30;

    let info = session.tick().unwrap();

    assert!(info.soft_reset);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.state().snake.body, vec![Cell::new(15, 10)]);
    assert_eq!(session.state().score, 30);
}

#[test]
fn unfed_snake_stays_single_cell() {
    let mut session = Session::seeded(GameConfig::simple().with_size(40, 40), 8).unwrap();
    session.restart().unwrap();
    session.state_mut().fruit.position = Cell::new(0, 0);

    for _ in 0..15 {
        session.tick().unwrap();
        assert_eq!(session.state().snake.length(), 1);
    }
}

#[test]
fn high_score_survives_restart() {
    let mut session = session_with_snake(
        GameConfig::classic(),
        Snake::new(Cell::new(1, 1), Direction::Right),
        Cell::new(2, 1),
    );
    session.tick().unwrap();
    assert_eq!(session.state().high_score, 10);

    session.restart().unwrap();
    assert_eq!(session.state().score, 0);
    assert_eq!(session.state().high_score, 10);
}

#[test]
fn injected_rng_drives_spawns() {
    let a = Session::new(GameConfig::classic(), StdRng::seed_from_u64(77)).unwrap();
    let b = Session::new(GameConfig::classic(), StdRng::seed_from_u64(77)).unwrap();
    assert_eq!(a.state(), b.state());
}

#[test]
fn shipped_config_file_is_valid() {
    let config = settings::merge_yaml(
        &GameConfig::classic(),
        include_str!("../configs/walled-box.yaml"),
    )
    .unwrap();
    assert_eq!(config.edge_policy, EdgePolicy::Bounded);
    assert_eq!(config.obstacles.len(), 4);

    let config = settings::resolve(config, None, &Overrides::default()).unwrap();
    let session = Session::seeded(config, 1).unwrap();
    assert_eq!(session.grid().width(), 24);
}

#[test]
fn config_file_with_runaway_wall_is_rejected() {
    let config = settings::merge_yaml(
        &GameConfig::classic(),
        "obstacles:\n  - anchor: { x: 29, y: 0 }\n    orientation: horizontal\n    length: 2147483640\n",
    )
    .unwrap();

    let err = settings::resolve(config, None, &Overrides::default()).unwrap_err();
    assert!(format!("{:#}", err).contains("longer than the grid"));
}

#[test]
fn oversized_fruit_reward_caps_the_score() {
    let config = settings::merge_yaml(&GameConfig::simple(), "points_per_fruit: 3000000000").unwrap();
    let config = settings::resolve(config, None, &Overrides::default()).unwrap();
    let mut session = session_with_snake(
        config,
        Snake::new(Cell::new(5, 5), Direction::Right),
        Cell::new(6, 5),
    );

    session.tick().unwrap();
    session.state_mut().fruit.position = Cell::new(7, 5);
    session.tick().unwrap();

    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.state().score, u32::MAX);
}
