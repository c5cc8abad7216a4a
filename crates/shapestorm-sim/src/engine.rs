//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the entity store and every piece of simulation
//! state (frame clock, score, pause flag, RNG, spawn policy). It processes
//! player commands, runs the systems pipeline and produces `FrameSnapshot`s.
//! Completely headless, so a fixed seed gives a fixed simulation.

use std::collections::VecDeque;

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use shapestorm_core::commands::PlayerCommand;
use shapestorm_core::components::{InputIntent, Transform};
use shapestorm_core::config::GameConfig;
use shapestorm_core::constants::DEFAULT_SEED;
use shapestorm_core::enums::HitPolicy;
use shapestorm_core::error::ConfigError;
use shapestorm_core::state::FrameSnapshot;
use shapestorm_core::types::{FrameClock, Vec2};

use crate::spawn;
use crate::store::EntityStore;
use crate::systems;
use crate::systems::spawner::SpawnPolicy;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// How collisions involving an already-destroyed entity are treated.
    pub hit_policy: HitPolicy,
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            hit_policy: HitPolicy::default(),
            game: GameConfig::default(),
        }
    }
}

/// The simulation engine. Owns the entity store and all sim state.
pub struct SimulationEngine {
    store: EntityStore,
    clock: FrameClock,
    rng: ChaCha8Rng,
    spawn_policy: SpawnPolicy,
    hit_policy: HitPolicy,
    config: GameConfig,
    player: Entity,
    score: i64,
    paused: bool,
    running: bool,
    command_queue: VecDeque<PlayerCommand>,
}

impl SimulationEngine {
    /// Create a new engine and queue the player at the center of the play area.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.game.validate()?;

        let mut store = EntityStore::new();
        let player = spawn::spawn_player(&mut store, &config.game.player, config.game.center());

        Ok(Self {
            store,
            clock: FrameClock::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            spawn_policy: SpawnPolicy::new(config.game.enemy.spawn_interval),
            hit_policy: config.hit_policy,
            config: config.game,
            player,
            score: 0,
            paused: false,
            running: true,
            command_queue: VecDeque::new(),
        })
    }

    /// Queue a player command for the input phase of the next frame.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one frame and return the resulting snapshot.
    ///
    /// Order: commit, simulation passes (skipped while paused), input,
    /// cosmetic spin, snapshot.
    pub fn tick(&mut self) -> FrameSnapshot {
        let stats = self.store.commit();
        if stats.added > 0 || stats.removed > 0 {
            debug!(
                frame = self.clock.frame,
                added = stats.added,
                removed = stats.removed,
                live = self.store.len(),
                "commit"
            );
        }

        if !self.paused {
            self.run_systems();
            self.clock.advance();
        }

        self.process_commands();
        systems::rotation::run(&mut self.store);
        self.snapshot()
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> FrameSnapshot {
        systems::snapshot::build_snapshot(&self.store, &self.clock, self.score, self.paused)
    }

    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            info!(paused, frame = self.clock.frame, "pause toggled");
        }
        self.paused = paused;
    }

    pub fn toggle_pause(&mut self) {
        self.set_paused(!self.paused);
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// False once a `Quit` command has been processed.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Replace the player's directional intent.
    pub fn set_player_intent(&mut self, up: bool, down: bool, left: bool, right: bool) {
        self.store.insert(
            self.player,
            InputIntent {
                up,
                down,
                left,
                right,
            },
        );
    }

    /// Fire a bullet from the player's position toward `point`.
    pub fn fire_bullet_toward(&mut self, point: Vec2) -> Option<Entity> {
        let origin = self.store.get::<Transform>(self.player)?.position;
        Some(spawn::spawn_bullet(
            &mut self.store,
            &self.config.bullet,
            origin,
            point,
        ))
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    /// HUD line shown by the render side.
    pub fn hud_text(&self) -> String {
        format!("Score {}", self.score)
    }

    pub fn clock(&self) -> FrameClock {
        self.clock
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn spawn_policy(&self) -> SpawnPolicy {
        self.spawn_policy
    }

    /// Read-only access to the entity store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Mutable store access for tests that stage entities by hand.
    #[cfg(test)]
    pub fn store_mut(&mut self) -> &mut EntityStore {
        &mut self.store
    }

    #[cfg(test)]
    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetIntent {
                up,
                down,
                left,
                right,
            } => self.set_player_intent(up, down, left, right),
            PlayerCommand::Fire { x, y } => {
                self.fire_bullet_toward(Vec2::new(x, y));
            }
            PlayerCommand::SetPaused { paused } => self.set_paused(paused),
            PlayerCommand::TogglePause => self.toggle_pause(),
            PlayerCommand::Quit => {
                info!(frame = self.clock.frame, "quit requested");
                self.running = false;
            }
        }
    }

    /// Run all simulation passes in order.
    fn run_systems(&mut self) {
        let play_area = self.config.play_area();

        // 1. Enemy spawning
        systems::spawner::run(
            &mut self.store,
            &mut self.rng,
            &mut self.spawn_policy,
            &self.config.enemy,
            play_area,
            self.clock.frame,
        );
        // 2. Movement (player steering, wall reflection, integration)
        systems::movement::run(&mut self.store, play_area, self.config.player.speed);
        // 3. Lifespan countdown and fade
        systems::lifespan::run(&mut self.store);
        // 4. Collisions, fragmentation and scoring
        systems::collision::run(
            &mut self.store,
            &mut self.score,
            &self.config.enemy,
            self.config.center(),
            self.hit_policy,
        );
    }
}
