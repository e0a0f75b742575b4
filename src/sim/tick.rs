//! Fixed timestep simulation tick
//!
//! Advances a session by exactly one tick. Stage order is fixed: physics,
//! camera, item collection, enemy patrol, hit checks, clock. Later stages see
//! the results of earlier ones.

use super::collision::within_reach;
use super::levels::LevelSource;
use super::progress::LossReason;
use super::state::{GameEvent, RunEnd, Session};
use crate::tuning::Tuning;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal key presses since the last tick (negative = left)
    pub move_steps: i32,
    /// Jump key was pressed
    pub jump: bool,
}

/// What a tick produced
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: Vec<GameEvent>,
    /// Set when the run is over; the session must not be ticked again
    pub end: Option<RunEnd>,
}

impl TickReport {
    fn finish(mut self, end: RunEnd) -> Self {
        self.end = Some(end);
        self
    }
}

/// Advance the session by one fixed timestep
pub fn tick(
    session: &mut Session,
    input: &TickInput,
    tuning: &Tuning,
    levels: &dyn LevelSource,
) -> TickReport {
    let mut report = TickReport::default();

    // --- Physics ---
    if input.jump {
        session.ball.request_jump(tuning.jump_buffer_ticks);
    }
    session.ball.integrate_vertical(&session.map, tuning.gravity);

    let dx = tuning.move_step * input.move_steps.signum() as f32;
    for _ in 0..input.move_steps.unsigned_abs() {
        if !session.ball.try_move_horizontal(&session.map, dx) {
            break;
        }
    }

    if session.ball.try_jump(tuning.jump_impulse) {
        report.events.push(GameEvent::Jumped);
    }

    // --- Camera ---
    session
        .camera
        .follow(session.ball.pos.x, session.map.width_px());

    // --- Items ---
    let ball = &session.ball;
    if let Some(reward) = session.map.collect_at(ball.pos.x, ball.pos.y, ball.radius) {
        session.progress.add_reward(reward);
        session.progress.remaining_items = session.map.remaining_items();
        report.events.push(GameEvent::ItemCollected { reward });

        if session.progress.level_cleared() {
            if session.progress.is_final_level() {
                log::info!("Final level cleared, score {}", session.progress.score);
                return report.finish(RunEnd::Victory);
            }
            match session.advance_level(levels, tuning) {
                Ok(()) => report.events.push(GameEvent::LevelAdvanced {
                    level: session.progress.level,
                }),
                Err(e) => {
                    log::error!("Cannot continue to level {}: {e}", session.progress.level + 1);
                    return report.finish(RunEnd::Defeat(LossReason::LevelUnavailable));
                }
            }
        }
    }

    // --- Enemy ---
    session.enemy.update();

    // --- Hits ---
    let reach = session.ball.radius + session.enemy.half_size;
    let touched_enemy = within_reach(session.ball.pos, session.enemy.pos, reach);
    if touched_enemy || session.ball_fell_out(tuning.fall_margin) {
        let out_of_lives = session.progress.lose_life();
        report.events.push(GameEvent::PlayerHit {
            lives_left: session.progress.lives,
        });
        if out_of_lives {
            log::info!("Out of lives, score {}", session.progress.score);
            return report.finish(RunEnd::Defeat(LossReason::OutOfLives));
        }
        session.respawn_ball();
    }

    // --- Clock ---
    if session.progress.tick_clock() {
        log::info!("Time up, score {}", session.progress.score);
        return report.finish(RunEnd::Defeat(LossReason::OutOfTime));
    }

    report
}
