//! Gapwing - a flappy-style side-scrolling arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle spawning, collisions, session state)
//! - `highscores`: In-memory session leaderboard
//!
//! Rendering and input devices are external collaborators: the simulation
//! consumes a single primary-action signal (`sim::primary_action`) and
//! produces plain-data snapshots for drawing (`sim::view::Frame`). Nothing
//! in this crate touches a display.

pub mod highscores;
pub mod sim;

pub use highscores::HighScores;

/// Game configuration constants
///
/// All physics constants are per-tick: one tick is `TICK_MS` of game time,
/// and the simulation never scales by a variable delta.
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const PLAYFIELD_WIDTH: f32 = 800.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Player sprite visual size
    pub const PLAYER_WIDTH: f32 = 100.0;
    pub const PLAYER_HEIGHT: f32 = 75.0;

    /// Hit box insets: the sprite art has transparent margins, so collision
    /// uses the visual rect shrunk by these amounts on each side.
    pub const HITBOX_INSET_X: f32 = 12.0;
    pub const HITBOX_INSET_Y: f32 = 14.0;

    /// Gravity (velocity change per tick, positive = downward)
    pub const GRAVITY: f32 = 0.5;
    /// Jump impulse (sets velocity directly, negative = upward)
    pub const JUMP_POWER: f32 = -9.0;

    /// Obstacle width
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    /// Vertical gap between the two halves of a pair
    pub const GAP_SIZE: f32 = 200.0;
    /// Minimum height for either half of a pair
    pub const MIN_OBSTACLE_HEIGHT: f32 = 50.0;
    /// Horizontal scroll speed (pixels per tick)
    pub const OBSTACLE_SPEED: f32 = 3.0;

    /// Physics tick period (game-time milliseconds)
    pub const TICK_MS: u64 = 20;
    /// Obstacle spawn period (game-time milliseconds)
    pub const SPAWN_INTERVAL_MS: u64 = 2000;
    /// Spawn period expressed in physics ticks
    pub const SPAWN_INTERVAL_TICKS: u32 = (SPAWN_INTERVAL_MS / TICK_MS) as u32;

    /// Player's fixed horizontal position (left edge; sprite is centered)
    pub const PLAYER_X: f32 = (PLAYFIELD_WIDTH - PLAYER_WIDTH) / 2.0;
    /// Vertical start position (top edge; sprite is centered)
    pub const PLAYER_START_Y: f32 = (PLAYFIELD_HEIGHT - PLAYER_HEIGHT) / 2.0;
    /// Lowest allowed player position (top edge when resting on the floor)
    pub const FLOOR_Y: f32 = PLAYFIELD_HEIGHT - PLAYER_HEIGHT;
}
