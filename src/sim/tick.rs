//! Fixed timestep simulation tick
//!
//! Advances the session by one physics step and interprets the primary
//! input signal. Within a tick the player moves first, then obstacles
//! advance, then collisions are checked, so a single tick can both move
//! the player into an obstacle and detect the resulting overlap.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::overlaps;
use super::state::{GamePhase, GameState, Obstacle, ObstacleRole};
use crate::consts::*;

/// Advance the game state by one fixed timestep.
///
/// A no-op while the session is in `GameOver`: reaching the terminal phase
/// is what cancels both periodic cadences, and `restart` re-arms them.
pub fn tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    state.time_ticks += 1;

    // Gravity before movement: a jump earlier in this frame has already set
    // the velocity that gets integrated here.
    state.player.vel += GRAVITY;
    state.player.y += state.player.vel;

    // Floor contact ends the run. The rest of the tick is skipped so the
    // world freezes exactly where the player fell.
    if state.player.y > FLOOR_Y {
        state.player.y = FLOOR_Y;
        game_over(state);
        return;
    }

    // Ceiling contact just stops the ascent.
    if state.player.y < 0.0 {
        state.player.y = 0.0;
        state.player.vel = 0.0;
    }

    // Scroll obstacles toward the player.
    for obstacle in &mut state.obstacles {
        obstacle.x -= OBSTACLE_SPEED;
    }

    // Scoring: a pair counts once, at the tick its trailing edge clears the
    // player's left edge. Only the top half increments the score; the bottom
    // half is marked passed at the same crossing so the pair can never be
    // counted twice.
    for obstacle in &mut state.obstacles {
        if !obstacle.passed && obstacle.x + OBSTACLE_WIDTH < PLAYER_X {
            if obstacle.role == ObstacleRole::Top {
                state.score += 1;
                log::debug!("score {} at tick {}", state.score, state.time_ticks);
            }
            obstacle.passed = true;
        }
    }

    // Drop obstacles whose trailing edge left the playfield.
    state.obstacles.retain(|o| !o.off_screen());

    // Collision ends the run: the inset hit box against each obstacle's
    // full visual bounds.
    let hit_box = state.player.hit_box();
    if state
        .obstacles
        .iter()
        .any(|o| overlaps(&hit_box, &o.rect()))
    {
        game_over(state);
        return;
    }

    // Spawn cadence: one pair every SPAWN_INTERVAL_TICKS physics ticks,
    // starting a full interval into the run.
    state.spawn_countdown = state.spawn_countdown.saturating_sub(1);
    if state.spawn_countdown == 0 {
        spawn_pair(state);
        state.spawn_countdown = SPAWN_INTERVAL_TICKS;
    }
}

/// The single external input signal.
///
/// Interpreted by session phase: a jump while running, a restart after a
/// game over. Runs synchronously between ticks.
pub fn primary_action(state: &mut GameState) {
    match state.phase {
        GamePhase::Running => {
            // Instant impulse: overrides whatever the current velocity is.
            state.player.vel = JUMP_POWER;
        }
        GamePhase::GameOver => state.restart(),
    }
}

/// Spawn one top/bottom obstacle pair at the right playfield edge.
///
/// The split point (the top half's height) is drawn uniformly so both
/// halves are at least `MIN_OBSTACLE_HEIGHT` tall and the halves plus the
/// gap always partition the playfield height. The generator is seeded per
/// pair from the session seed, so a seed fully determines the course.
pub fn spawn_pair(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }

    let pair_seed = (state.pairs_spawned as u64)
        .wrapping_mul(0x9E37_79B9_7F4A_7C15)
        .wrapping_add(state.seed);
    let mut rng = Pcg32::seed_from_u64(pair_seed);

    let max_top = PLAYFIELD_HEIGHT - GAP_SIZE - MIN_OBSTACLE_HEIGHT;
    let top_height = rng.random_range(MIN_OBSTACLE_HEIGHT..=max_top);
    let bottom_height = PLAYFIELD_HEIGHT - top_height - GAP_SIZE;

    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        role: ObstacleRole::Top,
        x: PLAYFIELD_WIDTH,
        height: top_height,
        passed: false,
    });
    let id = state.next_entity_id();
    state.obstacles.push(Obstacle {
        id,
        role: ObstacleRole::Bottom,
        x: PLAYFIELD_WIDTH,
        height: bottom_height,
        passed: false,
    });

    state.pairs_spawned += 1;
    log::debug!(
        "spawned pair {} (top {:.0}, bottom {:.0})",
        state.pairs_spawned,
        top_height,
        bottom_height
    );
}

fn game_over(state: &mut GameState) {
    state.phase = GamePhase::GameOver;
    log::info!(
        "game over at tick {}, score {}",
        state.time_ticks,
        state.score
    );
}
