//! Patrolling enemy
//!
//! Walks back and forth between two x bounds at a fixed speed. No randomness:
//! the same start always yields the same trajectory.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::tuning::EnemyTuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// +1 moving right, -1 moving left
    pub dir: i8,
    pub speed: f32,
    pub left_bound: f32,
    pub right_bound: f32,
    pub half_size: f32,
}

impl Enemy {
    pub fn new(tuning: &EnemyTuning) -> Self {
        let (left_bound, right_bound) = if tuning.left_bound <= tuning.right_bound {
            (tuning.left_bound, tuning.right_bound)
        } else {
            (tuning.right_bound, tuning.left_bound)
        };
        Self {
            pos: Vec2::new(tuning.start_x.clamp(left_bound, right_bound), tuning.y),
            dir: 1,
            speed: tuning.speed.max(0.0),
            left_bound,
            right_bound,
            half_size: tuning.half_size,
        }
    }

    /// Advance one tick, turning around at either bound
    pub fn update(&mut self) {
        self.pos.x += self.speed * self.dir as f32;
        if self.pos.x < self.left_bound {
            self.pos.x = self.left_bound;
            self.dir = 1;
        } else if self.pos.x > self.right_bound {
            self.pos.x = self.right_bound;
            self.dir = -1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tuning(start_x: f32, speed: f32) -> EnemyTuning {
        EnemyTuning {
            start_x,
            speed,
            ..Default::default()
        }
    }

    #[test]
    fn test_turns_at_right_bound() {
        let mut enemy = Enemy::new(&tuning(599.0, 2.0));
        enemy.update();
        assert_eq!(enemy.pos.x, 600.0);
        assert_eq!(enemy.dir, -1);
        enemy.update();
        assert_eq!(enemy.pos.x, 598.0);
        assert_eq!(enemy.dir, -1);
    }

    #[test]
    fn test_turns_at_left_bound() {
        let mut enemy = Enemy::new(&tuning(201.0, 2.0));
        enemy.dir = -1;
        enemy.update();
        assert_eq!(enemy.pos.x, 200.0);
        assert_eq!(enemy.dir, 1);
    }

    #[test]
    fn test_landing_exactly_on_bound_keeps_direction() {
        let mut enemy = Enemy::new(&tuning(598.0, 2.0));
        enemy.update();
        assert_eq!(enemy.pos.x, 600.0);
        assert_eq!(enemy.dir, 1);
        enemy.update();
        assert_eq!(enemy.pos.x, 600.0);
        assert_eq!(enemy.dir, -1);
    }

    #[test]
    fn test_start_clamped_into_bounds() {
        let enemy = Enemy::new(&tuning(50.0, 2.0));
        assert_eq!(enemy.pos.x, 200.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn stays_within_bounds(
                start in 0.0f32..800.0,
                speed in 0.0f32..50.0,
                ticks in 0usize..500
            ) {
                let mut enemy = Enemy::new(&tuning(start, speed));
                for _ in 0..ticks {
                    let before = enemy.dir;
                    enemy.update();
                    prop_assert!(enemy.pos.x >= enemy.left_bound);
                    prop_assert!(enemy.pos.x <= enemy.right_bound);
                    // Direction only changes on a bound
                    if enemy.dir != before {
                        prop_assert!(
                            enemy.pos.x == enemy.left_bound || enemy.pos.x == enemy.right_bound
                        );
                    }
                }
            }

            #[test]
            fn patrol_is_reproducible(
                start in 200.0f32..600.0,
                speed in 0.0f32..20.0,
                ticks in 0usize..300
            ) {
                let mut a = Enemy::new(&tuning(start, speed));
                let mut b = Enemy::new(&tuning(start, speed));
                for _ in 0..ticks {
                    a.update();
                    b.update();
                }
                prop_assert_eq!(a, b);
            }
        }
    }
}
