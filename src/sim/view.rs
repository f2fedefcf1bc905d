//! Presentation snapshots
//!
//! The simulation never touches a display. The embedding pulls a `Frame`
//! of plain data whenever it wants to draw and wires it to whatever
//! renderer it has.

use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::state::{GamePhase, GameState, ObstacleRole, Player};
use crate::consts::JUMP_POWER;

/// Sprite tilt hint, derived from the current velocity.
///
/// Presentation-only: recomputed on demand and never stored in the
/// simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tilt {
    /// Fresh off a jump (velocity still at the full impulse)
    Up,
    /// Falling
    Down,
    /// Coasting upward after a jump has started to decay
    Neutral,
}

/// One obstacle as the presentation sees it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub id: u32,
    pub role: ObstacleRole,
    pub rect: Rect,
}

/// A complete drawable snapshot of the session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Player's full visual bounds
    pub player: Rect,
    pub tilt: Tilt,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    /// Show the game-over banner
    pub game_over: bool,
}

/// Derive the tilt hint: falling tips the sprite down, a sprite still at
/// full jump velocity tips up, anything else is level.
pub fn tilt(player: &Player) -> Tilt {
    if player.vel > 0.0 {
        Tilt::Down
    } else if player.vel == JUMP_POWER {
        Tilt::Up
    } else {
        Tilt::Neutral
    }
}

/// Snapshot the session for the presentation collaborator
pub fn frame(state: &GameState) -> Frame {
    Frame {
        player: state.player.rect(),
        tilt: tilt(&state.player),
        obstacles: state
            .obstacles
            .iter()
            .map(|o| ObstacleView {
                id: o.id,
                role: o.role,
                rect: o.rect(),
            })
            .collect(),
        score: state.score,
        game_over: state.phase == GamePhase::GameOver,
    }
}
