//! The player-controlled bird.

use crate::engine::{Aabb, MotionBody};

use super::assets::Assets;
use super::session::Session;

/// Fixed horizontal start position, px from the left edge.
const START_X: f64 = 40.0;

/// Flap impulse: a velocity override (negative = upward), not additive.
pub const FLAP_VELOCITY: f64 = -420.0;

/// Terminal fall speed, px/s.
const MAX_FALL_SPEED: f64 = 640.0;

/// Gravity-affected bird body. Collision with obstacles is the pool's
/// business; the player only manages its own motion and viewport clamp.
pub struct Player {
    body: MotionBody,
}

impl Player {
    /// Spawn at the left edge, vertically centered, with the fall-speed cap
    /// the world step enforces.
    pub fn new(session: &Session, assets: &Assets) -> Self {
        let mut body = MotionBody::new(
            START_X,
            session.viewport.height / 2.0,
            assets.bird.width,
            assets.bird.height,
        );
        body.max_fall_speed = MAX_FALL_SPEED;
        Self { body }
    }

    /// Override vertical velocity with the upward impulse.
    pub fn flap(&mut self) {
        self.body.set_velocity_y(FLAP_VELOCITY);
    }

    /// Keep the body inside the viewport. Touching the edges is not lethal;
    /// only obstacle overlap ends a run.
    pub fn update(&mut self, session: &Session) {
        let floor = session.viewport.height - self.body.height;
        if self.body.position.y < 0.0 {
            self.body.position.y = 0.0;
            if self.body.velocity.y < 0.0 {
                self.body.velocity.y = 0.0;
            }
        } else if self.body.position.y > floor {
            self.body.position.y = floor;
            if self.body.velocity.y > 0.0 {
                self.body.velocity.y = 0.0;
            }
        }
    }

    pub fn body(&self) -> &MotionBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut MotionBody {
        &mut self.body
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(
            self.body.position.x,
            self.body.position.y,
            self.body.width,
            self.body.height,
        )
    }
}
