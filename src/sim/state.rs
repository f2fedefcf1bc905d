//! Game state and core simulation types
//!
//! All state needed to reproduce a run lives here. The session object owns
//! the player and the obstacle set; obstacles carry no back-references.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Run ended; waiting for a restart command
    GameOver,
}

/// The controlled sprite. Horizontal position and visual size are fixed,
/// so only the vertical axis simulates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top edge of the visual sprite (pixels from the playfield top)
    pub y: f32,
    /// Vertical velocity (pixels per tick, positive = downward)
    pub vel: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            y: PLAYER_START_Y,
            vel: 0.0,
        }
    }
}

impl Player {
    /// Full visual bounds
    pub fn rect(&self) -> Rect {
        Rect::new(PLAYER_X, self.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Collision bounds: the visual rect shrunk by the transparent margins
    pub fn hit_box(&self) -> Rect {
        self.rect().inset(HITBOX_INSET_X, HITBOX_INSET_Y)
    }
}

/// Which half of a pair an obstacle is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleRole {
    /// Hangs from the ceiling; the scoring half of the pair
    Top,
    /// Rises from the floor
    Bottom,
}

/// One half of an obstacle pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub role: ObstacleRole,
    /// Left edge (pixels, decreases as the obstacle scrolls)
    pub x: f32,
    /// Vertical extent, measured from the playfield edge this role grows from
    pub height: f32,
    /// Set once the pair has crossed the player; guards double scoring
    pub passed: bool,
}

impl Obstacle {
    /// Full visual bounds
    pub fn rect(&self) -> Rect {
        match self.role {
            ObstacleRole::Top => Rect::new(self.x, 0.0, OBSTACLE_WIDTH, self.height),
            ObstacleRole::Bottom => Rect::new(
                self.x,
                PLAYFIELD_HEIGHT - self.height,
                OBSTACLE_WIDTH,
                self.height,
            ),
        }
    }

    /// True once the trailing edge has fully left the playfield
    pub fn off_screen(&self) -> bool {
        self.x + OBSTACLE_WIDTH < 0.0
    }
}

/// Complete game session (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Simulation tick counter for the current run
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// The controlled sprite
    pub player: Player,
    /// Live obstacles, in spawn order
    pub obstacles: Vec<Obstacle>,
    /// Obstacle pairs cleared this run
    pub score: u32,
    /// Ticks until the next pair spawns
    pub spawn_countdown: u32,
    /// Pairs spawned since the session was created (indexes the RNG stream)
    pub pairs_spawned: u32,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed.
    ///
    /// Panics if the obstacle constants cannot produce a valid pair; that
    /// is a configuration defect, not a runtime condition.
    pub fn new(seed: u64) -> Self {
        assert!(
            MIN_OBSTACLE_HEIGHT * 2.0 + GAP_SIZE <= PLAYFIELD_HEIGHT,
            "obstacle constants leave no room for a gap"
        );
        Self {
            seed,
            time_ticks: 0,
            phase: GamePhase::Running,
            player: Player::default(),
            obstacles: Vec::new(),
            score: 0,
            spawn_countdown: SPAWN_INTERVAL_TICKS,
            pairs_spawned: 0,
            next_id: 1,
        }
    }

    /// Reset the session for a fresh run.
    ///
    /// Clears all obstacles, recenters the player, zeroes the score, and
    /// re-arms the spawn countdown. The pair counter is not rewound, so the
    /// next run draws fresh obstacle courses from the seed's stream.
    pub fn restart(&mut self) {
        log::info!(
            "restart: previous run lasted {} ticks, score {}",
            self.time_ticks,
            self.score
        );
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
        self.player = Player::default();
        self.obstacles.clear();
        self.score = 0;
        self.spawn_countdown = SPAWN_INTERVAL_TICKS;
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
