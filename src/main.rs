//! Gapwing entry point
//!
//! Headless demo driver: a naive autopilot plays a handful of seeded runs,
//! finished runs land on a session leaderboard, and the last frame of the
//! final run is printed as the JSON a presentation collaborator would
//! consume. Real rendering and input wiring are external concerns.

use std::time::{SystemTime, UNIX_EPOCH};

use gapwing::HighScores;
use gapwing::consts::*;
use gapwing::sim::{self, GamePhase, GameState, ObstacleRole};

/// Demo runs per invocation
const DEMO_RUNS: u64 = 3;
/// Cap on a single demo run (one minute of game time)
const MAX_DEMO_TICKS: u64 = 60_000 / TICK_MS;

/// Naive pilot: flap whenever the sprite's center is below the center of
/// the nearest gap still ahead of the player.
fn wants_flap(state: &GameState) -> bool {
    let target = state
        .obstacles
        .iter()
        .filter(|o| o.role == ObstacleRole::Top && o.x + OBSTACLE_WIDTH >= PLAYER_X)
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal))
        .map(|top| top.height + GAP_SIZE / 2.0)
        .unwrap_or(PLAYFIELD_HEIGHT / 2.0);

    state.player.y + PLAYER_HEIGHT / 2.0 > target
}

fn main() {
    env_logger::init();
    log::info!("Gapwing headless demo starting...");

    let base_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let mut scores = HighScores::new();
    let mut last_frame = None;

    for run in 0..DEMO_RUNS {
        let mut state = GameState::new(base_seed + run);

        while state.phase == GamePhase::Running && state.time_ticks < MAX_DEMO_TICKS {
            if wants_flap(&state) {
                sim::primary_action(&mut state);
            }
            sim::tick(&mut state);
        }

        println!(
            "Run {}: score {}, survived {} ticks{}",
            run + 1,
            state.score,
            state.time_ticks,
            if state.phase == GamePhase::Running {
                " (time limit)"
            } else {
                ""
            }
        );
        if let Some(rank) = scores.add_score(state.score, state.time_ticks) {
            log::info!("run {} entered the leaderboard at rank {rank}", run + 1);
        }

        last_frame = Some(sim::frame(&state));
    }

    if let Some(top) = scores.top_score() {
        println!("Best score this session: {top}");
    }

    // What a renderer would receive each frame
    if let Some(frame) = last_frame {
        if let Ok(json) = serde_json::to_string_pretty(&frame) {
            println!("Final frame:\n{json}");
        }
    }
}
