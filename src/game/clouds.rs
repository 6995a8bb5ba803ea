//! Parallax cloud layer. Cosmetic only: no collision, no score, and the
//! scroll keeps drifting after a player hit.

use rand::Rng;

use crate::engine::{between, Aabb, MotionBody};

use super::assets::Assets;
use super::session::Session;

const CLOUD_COUNT: usize = 4;

/// Clouds drift at `viewport.width / CLOUD_SPEED_DIVISOR`, slower than the
/// pipes for depth.
const CLOUD_SPEED_DIVISOR: f64 = 12.0;

/// Altitude band for spawns and recycles, px / fraction of viewport height.
const BAND_TOP: f64 = 20.0;
const BAND_BOTTOM_FACTOR: f64 = 0.35;

/// One drifting cloud.
pub struct Cloud {
    body: MotionBody,
}

impl Cloud {
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

/// Fixed set of clouds, recycled off the left edge like the pipes.
pub struct CloudLayer {
    clouds: Vec<Cloud>,
}

impl CloudLayer {
    pub fn new<R: Rng>(session: &Session, assets: &Assets, rng: &mut R) -> Self {
        let viewport = session.viewport;
        let section = viewport.width / CLOUD_COUNT as f64;
        let drift_vx = -(viewport.width / CLOUD_SPEED_DIVISOR);
        let band_bottom = viewport.height * BAND_BOTTOM_FACTOR;

        let clouds = (1..=CLOUD_COUNT)
            .map(|i| {
                let mut body = MotionBody::new(
                    section * i as f64,
                    between(rng, BAND_TOP, band_bottom),
                    assets.cloud.width,
                    assets.cloud.height,
                );
                body.disable_gravity();
                body.set_velocity_x(drift_vx);
                Cloud { body }
            })
            .collect();

        Self { clouds }
    }

    /// Recycle any cloud fully past the left edge to the right edge at a new
    /// band altitude.
    pub fn update<R: Rng>(&mut self, session: &Session, rng: &mut R) {
        let viewport = session.viewport;
        let band_bottom = viewport.height * BAND_BOTTOM_FACTOR;

        for cloud in &mut self.clouds {
            if cloud.body.position.x < -cloud.body.width {
                cloud.body.position.x = viewport.width;
                cloud.body.position.y = between(rng, BAND_TOP, band_bottom);
            }
        }
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut MotionBody> + '_ {
        self.clouds.iter_mut().map(Cloud::body_mut)
    }
}
