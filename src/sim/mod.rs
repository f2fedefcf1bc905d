//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;
pub mod view;

pub use collision::{Rect, overlaps};
pub use state::{GamePhase, GameState, Obstacle, ObstacleRole, Player};
pub use tick::{primary_action, spawn_pair, tick};
pub use view::{Frame, ObstacleView, Tilt, frame};
