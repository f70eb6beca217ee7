#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Asteroid Attack.
//!
//! The world owns every entity for the duration of a run. All mutation flows
//! through [`apply`], which executes a single [`Command`] and broadcasts the
//! resulting [`Event`] values; read access flows through the [`query`]
//! module. Randomness comes from one seeded generator so identical seeds
//! replay identical runs.

use std::time::Duration;

use asteroid_attack_core::{
    AsteroidId, Command, Event, GameState, LevelConfig, Position, Rect, Steering, ASTEROID_HEIGHT,
    ASTEROID_WIDTH, BREACH_LINE_Y, DRIFT_FLIP_CHANCE, DRIFT_SPEED_MAX, DRIFT_SPEED_MIN,
    HOMING_CHANCE, HOMING_PERIOD, PLAYER_HEIGHT, PLAYER_MAX_X, PLAYER_SPEED, PLAYER_WIDTH,
    POPULATION_CAP, PROJECTILE_HEIGHT, PROJECTILE_SPEED, PROJECTILE_WIDTH, SCREEN_WIDTH,
    SHAKE_TICKS, SPAWN_BAND_MAX_X, SPAWN_BAND_MAX_Y, SpriteId, STARTING_LIVES, WELCOME_BANNER,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const DEFAULT_WORLD_SEED: u64 = 0x9e37_79b9_7f4a_7c15;

const PLAYER_START: Position = Position::new(370.0, 480.0);

#[derive(Debug)]
struct Player {
    pos: Position,
    velocity: f32,
}

impl Player {
    fn new() -> Self {
        Self {
            pos: PLAYER_START,
            velocity: 0.0,
        }
    }

    fn advance(&mut self) {
        self.pos.x = (self.pos.x + self.velocity).clamp(0.0, PLAYER_MAX_X);
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }
}

#[derive(Debug)]
struct Projectile {
    pos: Position,
    active: bool,
}

impl Projectile {
    fn new() -> Self {
        Self {
            pos: PLAYER_START,
            active: false,
        }
    }

    /// Launches from the provided position. Returns false while a shot is
    /// already in flight; the weapon holds exactly one projectile.
    fn fire(&mut self, x: f32, y: f32) -> bool {
        if self.active {
            return false;
        }
        self.pos = Position::new(x, y);
        self.active = true;
        true
    }

    fn advance(&mut self) {
        if !self.active {
            return;
        }
        self.pos.y -= PROJECTILE_SPEED;
        if self.pos.y < 0.0 {
            self.active = false;
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT)
    }
}

#[derive(Debug)]
struct Asteroid {
    id: AsteroidId,
    pos: Position,
    fall_speed: f32,
    drift_speed: f32,
    drift_direction: f32,
    homing: bool,
    lifetime: u32,
    sprite: SpriteId,
}

impl Asteroid {
    /// Advances one tick of asteroid motion: fall, drift, the homing roll and
    /// pursuit, the horizontal wrap, and the drift-direction flip roll.
    fn step(&mut self, player_x: f32, rng: &mut ChaCha8Rng) {
        self.lifetime = self.lifetime.wrapping_add(1);

        self.pos.y += self.fall_speed;
        self.pos.x += self.drift_speed * self.drift_direction;

        if !self.homing && rng.gen_bool(HOMING_CHANCE) {
            self.homing = true;
        }

        if self.homing {
            if self.pos.x < player_x {
                self.pos.x += 1.0;
            } else if self.pos.x > player_x {
                self.pos.x -= 1.0;
            }

            // Forced lapse keeps any single asteroid from tracking forever;
            // the activation roll makes it eligible again next tick.
            if self.lifetime % HOMING_PERIOD == 0 {
                self.homing = false;
            }
        }

        self.pos.x = wrap_horizontal(self.pos.x);

        if rng.gen_bool(DRIFT_FLIP_CHANCE) {
            self.drift_direction = -self.drift_direction;
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, ASTEROID_WIDTH, ASTEROID_HEIGHT)
    }
}

/// Wraps an x coordinate into the toroidal horizontal space.
fn wrap_horizontal(x: f32) -> f32 {
    if x < 0.0 {
        SCREEN_WIDTH
    } else if x > SCREEN_WIDTH {
        0.0
    } else {
        x
    }
}

/// Represents the authoritative Asteroid Attack world state.
#[derive(Debug)]
pub struct World {
    banner: &'static str,
    state: GameState,
    previous_state: GameState,
    player: Player,
    projectile: Projectile,
    asteroids: Vec<Asteroid>,
    score: u32,
    lives: u32,
    shake_ticks: u32,
    fall_speed: f32,
    next_asteroid_id: u32,
    rng: ChaCha8Rng,
}

impl World {
    /// Creates a new world with the default seed.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_WORLD_SEED)
    }

    /// Creates a new world whose randomness replays from the provided seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            banner: WELCOME_BANNER,
            state: GameState::Menu,
            previous_state: GameState::Menu,
            player: Player::new(),
            projectile: Projectile::new(),
            asteroids: Vec::new(),
            score: 0,
            lives: STARTING_LIVES,
            shake_ticks: 0,
            fall_speed: 0.0,
            next_asteroid_id: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    fn transition(&mut self, to: GameState, out_events: &mut Vec<Event>) {
        let from = self.state;
        if from == to {
            return;
        }
        self.previous_state = from;
        self.state = to;
        out_events.push(Event::GameStateChanged { from, to });
    }

    fn start_level(&mut self, config: LevelConfig, out_events: &mut Vec<Event>) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.shake_ticks = 0;
        self.player = Player::new();
        self.projectile = Projectile::new();
        self.fall_speed = config.base_speed.max(0.0);
        self.asteroids.clear();

        for _ in 0..config.asteroid_count {
            let sprite = self.random_sprite();
            self.push_asteroid(sprite);
        }

        out_events.push(Event::LevelStarted { config });
        self.transition(GameState::Playing, out_events);
    }

    fn steer_player(&mut self, steering: Steering) {
        if self.state != GameState::Playing {
            return;
        }
        self.player.velocity = match steering {
            Steering::Left => -PLAYER_SPEED,
            Steering::Right => PLAYER_SPEED,
            Steering::Hold => 0.0,
        };
    }

    fn fire_projectile(&mut self, out_events: &mut Vec<Event>) {
        if self.state != GameState::Playing {
            return;
        }
        if self.projectile.fire(self.player.pos.x, self.player.pos.y) {
            out_events.push(Event::ProjectileFired {
                x: self.projectile.pos.x,
                y: self.projectile.pos.y,
            });
        }
    }

    fn set_fall_speed(&mut self, speed: f32) {
        // Fall speed is never negative, whatever the tuning produced.
        let speed = speed.max(0.0);
        self.fall_speed = speed;
        for asteroid in &mut self.asteroids {
            asteroid.fall_speed = speed;
        }
    }

    fn spawn_asteroid(&mut self, sprite: SpriteId) {
        if self.state != GameState::Playing || self.asteroids.len() >= POPULATION_CAP {
            return;
        }
        self.push_asteroid(sprite);
    }

    fn push_asteroid(&mut self, sprite: SpriteId) {
        let pos = self.random_band_position();
        let drift_speed = self.rng.gen_range(DRIFT_SPEED_MIN..DRIFT_SPEED_MAX);
        let drift_direction = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let id = AsteroidId::new(self.next_asteroid_id);
        self.next_asteroid_id = self.next_asteroid_id.wrapping_add(1);

        self.asteroids.push(Asteroid {
            id,
            pos,
            fall_speed: self.fall_speed,
            drift_speed,
            drift_direction,
            homing: false,
            lifetime: 0,
            sprite,
        });
    }

    fn random_band_position(&mut self) -> Position {
        Position::new(
            self.rng.gen_range(0.0..=SPAWN_BAND_MAX_X),
            self.rng.gen_range(0.0..=SPAWN_BAND_MAX_Y),
        )
    }

    fn random_sprite(&mut self) -> SpriteId {
        SpriteId::ALL[self.rng.gen_range(0..SpriteId::ALL.len())]
    }

    fn toggle_pause(&mut self, out_events: &mut Vec<Event>) {
        match self.state {
            GameState::Playing => self.transition(GameState::Paused, out_events),
            GameState::Paused => self.transition(GameState::Playing, out_events),
            GameState::Menu | GameState::GameOver => {}
        }
    }

    fn confirm_game_over(&mut self, out_events: &mut Vec<Event>) {
        if self.state == GameState::GameOver {
            self.transition(GameState::Menu, out_events);
        }
    }

    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        // Paused, menu, and game-over states are frozen, not simulated.
        if self.state != GameState::Playing {
            return;
        }

        self.player.advance();

        let player_x = self.player.pos.x;
        let Self {
            asteroids, rng, ..
        } = self;
        for asteroid in asteroids.iter_mut() {
            asteroid.step(player_x, rng);
        }

        self.projectile.advance();

        let breached = self.resolve_collisions(out_events);

        out_events.push(Event::TimeAdvanced { dt });

        // A breach arms the timer on this tick; decay starts on the next one,
        // so the full shake duration is observable.
        if !breached {
            self.shake_ticks = self.shake_ticks.saturating_sub(1);
        }
    }

    fn resolve_collisions(&mut self, out_events: &mut Vec<Event>) -> bool {
        if self.projectile.active {
            let bullet = self.projectile.bounds();
            // Earliest-spawned asteroid wins when the shot overlaps several.
            let hit = self
                .asteroids
                .iter()
                .position(|asteroid| bullet.overlaps(&asteroid.bounds()));
            if let Some(index) = hit {
                self.projectile.active = false;
                self.score = self.score.saturating_add(1);
                let respawn = self.random_band_position();
                let asteroid = &mut self.asteroids[index];
                asteroid.pos = respawn;
                out_events.push(Event::AsteroidHit {
                    asteroid: asteroid.id,
                    score: self.score,
                });
            }
        }

        let mut breached = false;
        for index in 0..self.asteroids.len() {
            if self.asteroids[index].pos.y <= BREACH_LINE_Y {
                continue;
            }
            breached = true;
            self.shake_ticks = SHAKE_TICKS;
            self.lives = self.lives.saturating_sub(1);
            let respawn = self.random_band_position();
            let asteroid = &mut self.asteroids[index];
            asteroid.pos = respawn;
            out_events.push(Event::AsteroidBreached {
                asteroid: asteroid.id,
                lives: self.lives,
            });
        }

        if breached && self.lives == 0 {
            out_events.push(Event::RunEnded { score: self.score });
            self.transition(GameState::GameOver, out_events);
        }

        breached
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

/// Applies the provided command to the world, mutating state deterministically.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::StartLevel { config } => world.start_level(config, out_events),
        Command::SteerPlayer { steering } => world.steer_player(steering),
        Command::FireProjectile => world.fire_projectile(out_events),
        Command::SetFallSpeed { speed } => world.set_fall_speed(speed),
        Command::SpawnAsteroid { sprite } => world.spawn_asteroid(sprite),
        Command::TogglePause => world.toggle_pause(out_events),
        Command::ConfirmGameOver => world.confirm_game_over(out_events),
        Command::Tick { dt } => world.tick(dt, out_events),
    }
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use asteroid_attack_core::{AsteroidId, GameState, Position, Rect, SpriteId};

    use super::World;

    /// Retrieves the welcome banner that adapters may display to players.
    #[must_use]
    pub fn welcome_banner(world: &World) -> &'static str {
        world.banner
    }

    /// Current state of the game state machine.
    #[must_use]
    pub fn game_state(world: &World) -> GameState {
        world.state
    }

    /// State that was active before the most recent transition.
    #[must_use]
    pub fn previous_game_state(world: &World) -> GameState {
        world.previous_state
    }

    /// Score accumulated during the current run.
    #[must_use]
    pub fn score(world: &World) -> u32 {
        world.score
    }

    /// Lives remaining in the current run.
    #[must_use]
    pub fn lives(world: &World) -> u32 {
        world.lives
    }

    /// Remaining ticks of the screen-shake effect.
    #[must_use]
    pub fn shake_ticks(world: &World) -> u32 {
        world.shake_ticks
    }

    /// Number of asteroids currently alive.
    #[must_use]
    pub fn population(world: &World) -> usize {
        world.asteroids.len()
    }

    /// Captures a read-only snapshot of the player ship.
    #[must_use]
    pub fn player(world: &World) -> PlayerSnapshot {
        PlayerSnapshot {
            pos: world.player.pos,
            velocity: world.player.velocity,
            bounds: world.player.bounds(),
        }
    }

    /// Captures a read-only snapshot of the projectile slot.
    #[must_use]
    pub fn projectile(world: &World) -> ProjectileSnapshot {
        ProjectileSnapshot {
            pos: world.projectile.pos,
            active: world.projectile.active,
            bounds: world.projectile.bounds(),
        }
    }

    /// Captures a read-only view of the asteroid population.
    #[must_use]
    pub fn asteroid_view(world: &World) -> AsteroidView {
        let mut snapshots: Vec<AsteroidSnapshot> = world
            .asteroids
            .iter()
            .map(|asteroid| AsteroidSnapshot {
                id: asteroid.id,
                pos: asteroid.pos,
                fall_speed: asteroid.fall_speed,
                drift_speed: asteroid.drift_speed,
                drift_direction: asteroid.drift_direction,
                homing: asteroid.homing,
                lifetime: asteroid.lifetime,
                sprite: asteroid.sprite,
                bounds: asteroid.bounds(),
            })
            .collect();
        snapshots.sort_by_key(|snapshot| snapshot.id);
        AsteroidView { snapshots }
    }

    /// Immutable representation of the player used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct PlayerSnapshot {
        /// Position of the ship's upper-left corner.
        pub pos: Position,
        /// Horizontal velocity applied on the next tick.
        pub velocity: f32,
        /// Bounding box derived from the ship sprite dimensions.
        pub bounds: Rect,
    }

    /// Immutable representation of the projectile used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct ProjectileSnapshot {
        /// Position of the projectile's upper-left corner.
        pub pos: Position,
        /// Whether the projectile is currently in flight.
        pub active: bool,
        /// Bounding box derived from the projectile sprite dimensions.
        pub bounds: Rect,
    }

    /// Immutable representation of a single asteroid's state used for queries.
    #[derive(Clone, Copy, Debug, PartialEq)]
    pub struct AsteroidSnapshot {
        /// Unique identifier assigned to the asteroid.
        pub id: AsteroidId,
        /// Position of the asteroid's upper-left corner.
        pub pos: Position,
        /// Fall speed currently applied by the difficulty scaler.
        pub fall_speed: f32,
        /// Horizontal drift speed drawn at creation.
        pub drift_speed: f32,
        /// Current drift direction, either 1.0 or -1.0.
        pub drift_direction: f32,
        /// Whether the asteroid is currently pursuing the player.
        pub homing: bool,
        /// Ticks lived since creation.
        pub lifetime: u32,
        /// Appearance assigned at creation.
        pub sprite: SpriteId,
        /// Bounding box derived from the asteroid sprite dimensions.
        pub bounds: Rect,
    }

    /// Read-only snapshot describing the asteroid population.
    #[derive(Clone, Debug, Default)]
    pub struct AsteroidView {
        snapshots: Vec<AsteroidSnapshot>,
    }

    impl AsteroidView {
        /// Iterator over the captured snapshots in deterministic id order.
        pub fn iter(&self) -> impl Iterator<Item = &AsteroidSnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<AsteroidSnapshot> {
            self.snapshots
        }
    }
}

/// Test-only world surgery for staging exact simulation scenarios.
#[cfg(any(test, feature = "scenario_scaffolding"))]
pub mod scaffolding {
    use asteroid_attack_core::{AsteroidId, Position};

    use super::World;

    /// Moves the identified asteroid to an exact position.
    pub fn place_asteroid(world: &mut World, asteroid: AsteroidId, x: f32, y: f32) {
        if let Some(entry) = world.asteroids.iter_mut().find(|a| a.id == asteroid) {
            entry.pos = Position::new(x, y);
        }
    }

    /// Overwrites the identified asteroid's drift parameters.
    pub fn set_drift(world: &mut World, asteroid: AsteroidId, speed: f32, direction: f32) {
        if let Some(entry) = world.asteroids.iter_mut().find(|a| a.id == asteroid) {
            entry.drift_speed = speed;
            entry.drift_direction = direction;
        }
    }

    /// Forces the identified asteroid into homing pursuit.
    pub fn force_homing(world: &mut World, asteroid: AsteroidId) {
        if let Some(entry) = world.asteroids.iter_mut().find(|a| a.id == asteroid) {
            entry.homing = true;
        }
    }

    /// Activates the projectile at an exact position.
    pub fn place_projectile(world: &mut World, x: f32, y: f32) {
        world.projectile.pos = Position::new(x, y);
        world.projectile.active = true;
    }

    /// Moves the player ship to an exact horizontal position.
    pub fn place_player(world: &mut World, x: f32) {
        world.player.pos.x = x;
    }

    /// Overwrites the remaining lives.
    pub fn set_lives(world: &mut World, lives: u32) {
        world.lives = lives;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use asteroid_attack_core::{
        AsteroidId, Command, Event, GameState, LevelConfig, Position, SpriteId, Steering,
        PLAYER_MAX_X, PLAYER_SPEED, POPULATION_CAP, SHAKE_TICKS,
    };
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::{apply, query, scaffolding, wrap_horizontal, Asteroid, World};

    const TICK: Command = Command::Tick {
        dt: Duration::from_millis(16),
    };

    fn level(asteroid_count: u32) -> LevelConfig {
        LevelConfig {
            asteroid_count,
            base_speed: 2.0,
            background: 0,
        }
    }

    fn playing_world(asteroid_count: u32) -> World {
        let mut world = World::with_seed(7);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::StartLevel {
                config: level(asteroid_count),
            },
            &mut events,
        );
        world
    }

    #[test]
    fn start_level_seeds_requested_population() {
        let mut world = World::with_seed(11);
        let mut events = Vec::new();
        apply(
            &mut world,
            Command::StartLevel { config: level(4) },
            &mut events,
        );

        assert_eq!(query::game_state(&world), GameState::Playing);
        assert_eq!(query::population(&world), 4);
        assert_eq!(query::score(&world), 0);
        assert_eq!(query::lives(&world), 3);
        assert!(events.contains(&Event::LevelStarted { config: level(4) }));
        assert!(events.contains(&Event::GameStateChanged {
            from: GameState::Menu,
            to: GameState::Playing,
        }));

        for asteroid in query::asteroid_view(&world).iter() {
            assert!(asteroid.pos.x >= 0.0 && asteroid.pos.x <= 765.0);
            assert!(asteroid.pos.y >= 0.0 && asteroid.pos.y <= 50.0);
            assert!((asteroid.fall_speed - 2.0).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn player_never_leaves_horizontal_bounds() {
        let mut world = playing_world(0);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::SteerPlayer {
                steering: Steering::Left,
            },
            &mut events,
        );
        for _ in 0..200 {
            apply(&mut world, TICK.clone(), &mut events);
            let x = query::player(&world).pos.x;
            assert!((0.0..=PLAYER_MAX_X).contains(&x));
        }
        assert_eq!(query::player(&world).pos.x, 0.0);

        apply(
            &mut world,
            Command::SteerPlayer {
                steering: Steering::Right,
            },
            &mut events,
        );
        for _ in 0..200 {
            apply(&mut world, TICK.clone(), &mut events);
            let x = query::player(&world).pos.x;
            assert!((0.0..=PLAYER_MAX_X).contains(&x));
        }
        assert_eq!(query::player(&world).pos.x, PLAYER_MAX_X);
    }

    #[test]
    fn steering_maps_to_signed_velocity() {
        let mut world = playing_world(0);
        let mut events = Vec::new();

        apply(
            &mut world,
            Command::SteerPlayer {
                steering: Steering::Left,
            },
            &mut events,
        );
        assert_eq!(query::player(&world).velocity, -PLAYER_SPEED);

        apply(
            &mut world,
            Command::SteerPlayer {
                steering: Steering::Hold,
            },
            &mut events,
        );
        assert_eq!(query::player(&world).velocity, 0.0);
    }

    #[test]
    fn firing_while_active_is_a_no_op() {
        let mut world = playing_world(0);
        let mut events = Vec::new();

        apply(&mut world, Command::FireProjectile, &mut events);
        assert!(query::projectile(&world).active);
        assert_eq!(
            events
                .iter()
                .filter(|event| matches!(event, Event::ProjectileFired { .. }))
                .count(),
            1
        );

        apply(&mut world, TICK.clone(), &mut events);
        let in_flight = query::projectile(&world).pos;

        events.clear();
        apply(&mut world, Command::FireProjectile, &mut events);
        assert!(events.is_empty());
        assert_eq!(query::projectile(&world).pos, in_flight);
    }

    #[test]
    fn projectile_expires_above_the_screen() {
        let mut world = playing_world(0);
        let mut events = Vec::new();

        apply(&mut world, Command::FireProjectile, &mut events);
        for _ in 0..80 {
            apply(&mut world, TICK.clone(), &mut events);
        }
        assert!(!query::projectile(&world).active);
    }

    #[test]
    fn fire_is_ignored_outside_playing() {
        let mut world = World::with_seed(3);
        let mut events = Vec::new();
        apply(&mut world, Command::FireProjectile, &mut events);
        assert!(!query::projectile(&world).active);
        assert!(events.is_empty());
    }

    #[test]
    fn wrap_sends_negative_x_to_the_right_edge() {
        assert_eq!(wrap_horizontal(-1.0), 800.0);
        assert_eq!(wrap_horizontal(801.0), 0.0);
        assert_eq!(wrap_horizontal(400.0), 400.0);
        assert_eq!(wrap_horizontal(0.0), 0.0);
        assert_eq!(wrap_horizontal(800.0), 800.0);
    }

    #[test]
    fn asteroid_x_stays_wrapped_over_long_runs() {
        let mut world = playing_world(6);
        let mut events = Vec::new();

        for _ in 0..300 {
            apply(&mut world, TICK.clone(), &mut events);
            if query::game_state(&world) != GameState::Playing {
                break;
            }
            for asteroid in query::asteroid_view(&world).iter() {
                assert!(
                    asteroid.pos.x >= 0.0 && asteroid.pos.x <= 800.0,
                    "asteroid left the wrapped range: {}",
                    asteroid.pos.x
                );
            }
        }
    }

    #[test]
    fn homing_lapses_on_the_lifetime_cadence() {
        let mut asteroid = Asteroid {
            id: AsteroidId::new(0),
            pos: Position::new(370.0, 100.0),
            fall_speed: 0.0,
            drift_speed: 0.0,
            drift_direction: 1.0,
            homing: true,
            lifetime: 59,
            sprite: SpriteId::Asteroid1,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        asteroid.step(370.0, &mut rng);

        assert_eq!(asteroid.lifetime, 60);
        assert!(!asteroid.homing);
    }

    #[test]
    fn homing_nudges_toward_the_player_column() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut asteroid = Asteroid {
            id: AsteroidId::new(0),
            pos: Position::new(100.0, 100.0),
            fall_speed: 0.0,
            drift_speed: 0.0,
            drift_direction: 1.0,
            homing: true,
            lifetime: 0,
            sprite: SpriteId::Asteroid2,
        };

        asteroid.step(500.0, &mut rng);
        assert_eq!(asteroid.pos.x, 101.0);

        asteroid.pos.x = 700.0;
        asteroid.lifetime = 1;
        asteroid.step(500.0, &mut rng);
        assert_eq!(asteroid.pos.x, 699.0);
    }

    #[test]
    fn homing_streaks_never_exceed_the_period() {
        let mut world = playing_world(8);
        let mut events = Vec::new();
        let mut streaks = vec![0_u32; query::population(&world)];

        for _ in 0..600 {
            apply(&mut world, TICK.clone(), &mut events);
            if query::game_state(&world) != GameState::Playing {
                break;
            }
            for (index, asteroid) in query::asteroid_view(&world).iter().enumerate() {
                if index >= streaks.len() {
                    streaks.push(0);
                }
                if asteroid.homing {
                    streaks[index] += 1;
                    assert!(streaks[index] <= 60, "homing streak exceeded the period");
                } else {
                    streaks[index] = 0;
                }
            }
        }
    }

    #[test]
    fn projectile_hit_scores_and_respawns_the_asteroid() {
        let mut world = playing_world(1);
        let mut events = Vec::new();
        let target = query::asteroid_view(&world).into_vec()[0].id;

        scaffolding::place_asteroid(&mut world, target, 370.0, 480.0);
        scaffolding::place_projectile(&mut world, 370.0, 480.0);

        apply(&mut world, TICK.clone(), &mut events);

        assert_eq!(query::score(&world), 1);
        assert!(!query::projectile(&world).active);
        assert!(events.contains(&Event::AsteroidHit {
            asteroid: target,
            score: 1,
        }));

        let respawned = query::asteroid_view(&world).into_vec()[0];
        assert!(respawned.pos.x >= 0.0 && respawned.pos.x <= 765.0);
        assert!(respawned.pos.y >= 0.0 && respawned.pos.y <= 50.0);
    }

    #[test]
    fn breach_charges_a_life_and_arms_the_shake_timer() {
        let mut world = playing_world(1);
        let mut events = Vec::new();
        let target = query::asteroid_view(&world).into_vec()[0].id;

        scaffolding::place_asteroid(&mut world, target, 100.0, 501.0);
        apply(&mut world, TICK.clone(), &mut events);

        assert_eq!(query::lives(&world), 2);
        assert_eq!(query::shake_ticks(&world), SHAKE_TICKS);
        assert_eq!(query::game_state(&world), GameState::Playing);
        assert!(events.contains(&Event::AsteroidBreached {
            asteroid: target,
            lives: 2,
        }));

        let respawned = query::asteroid_view(&world).into_vec()[0];
        assert!(respawned.pos.y <= 50.0);

        // Decay starts on the following tick.
        events.clear();
        apply(&mut world, TICK.clone(), &mut events);
        assert_eq!(query::shake_ticks(&world), SHAKE_TICKS - 1);
    }

    #[test]
    fn breach_on_the_last_life_ends_the_run() {
        let mut world = playing_world(1);
        let mut events = Vec::new();
        let target = query::asteroid_view(&world).into_vec()[0].id;

        scaffolding::set_lives(&mut world, 1);
        scaffolding::place_asteroid(&mut world, target, 100.0, 501.0);
        apply(&mut world, TICK.clone(), &mut events);

        assert_eq!(query::lives(&world), 0);
        assert_eq!(query::game_state(&world), GameState::GameOver);
        assert!(events.contains(&Event::RunEnded { score: 0 }));
    }

    #[test]
    fn pause_freezes_the_simulation() {
        let mut world = playing_world(3);
        let mut events = Vec::new();

        apply(&mut world, Command::TogglePause, &mut events);
        assert_eq!(query::game_state(&world), GameState::Paused);

        let player_before = query::player(&world);
        let asteroids_before = query::asteroid_view(&world).into_vec();

        events.clear();
        apply(&mut world, TICK.clone(), &mut events);
        assert!(events.is_empty());
        assert_eq!(query::player(&world), player_before);
        assert_eq!(query::asteroid_view(&world).into_vec(), asteroids_before);

        apply(&mut world, Command::TogglePause, &mut events);
        assert_eq!(query::game_state(&world), GameState::Playing);
    }

    #[test]
    fn confirm_returns_to_the_menu_after_game_over() {
        let mut world = playing_world(1);
        let mut events = Vec::new();
        let target = query::asteroid_view(&world).into_vec()[0].id;

        scaffolding::set_lives(&mut world, 1);
        scaffolding::place_asteroid(&mut world, target, 100.0, 501.0);
        apply(&mut world, TICK.clone(), &mut events);
        assert_eq!(query::game_state(&world), GameState::GameOver);

        apply(&mut world, Command::ConfirmGameOver, &mut events);
        assert_eq!(query::game_state(&world), GameState::Menu);
        assert_eq!(query::previous_game_state(&world), GameState::GameOver);
    }

    #[test]
    fn spawn_respects_the_population_cap() {
        let mut world = playing_world(0);
        let mut events = Vec::new();

        for _ in 0..POPULATION_CAP + 5 {
            apply(
                &mut world,
                Command::SpawnAsteroid {
                    sprite: SpriteId::Asteroid3,
                },
                &mut events,
            );
        }
        assert_eq!(query::population(&world), POPULATION_CAP);
    }

    #[test]
    fn fall_speed_refresh_reaches_every_asteroid_and_clamps() {
        let mut world = playing_world(3);
        let mut events = Vec::new();

        apply(&mut world, Command::SetFallSpeed { speed: 3.5 }, &mut events);
        for asteroid in query::asteroid_view(&world).iter() {
            assert_eq!(asteroid.fall_speed, 3.5);
        }

        apply(
            &mut world,
            Command::SetFallSpeed { speed: -1.0 },
            &mut events,
        );
        for asteroid in query::asteroid_view(&world).iter() {
            assert_eq!(asteroid.fall_speed, 0.0);
        }
    }

    #[test]
    fn runs_replay_identically_from_the_same_seed() {
        let mut first = World::with_seed(99);
        let mut second = World::with_seed(99);
        let mut first_events = Vec::new();
        let mut second_events = Vec::new();

        for world_events in [
            (&mut first, &mut first_events),
            (&mut second, &mut second_events),
        ] {
            let (world, events) = world_events;
            apply(
                world,
                Command::StartLevel { config: level(5) },
                &mut *events,
            );
            for _ in 0..120 {
                apply(world, TICK.clone(), &mut *events);
            }
        }

        assert_eq!(first_events, second_events);
        assert_eq!(
            query::asteroid_view(&first).into_vec(),
            query::asteroid_view(&second).into_vec()
        );
    }
}
