//! Arcade motion bodies and the world step that integrates them.

/// A 2D point or velocity in logical pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The logical game viewport, in pixels. Rendering scales this onto the
/// terminal; the simulation never sees terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A rectangular physics body: anchor position, velocity, size, and a gravity
/// toggle. What the anchor means (top-left vs bottom-left) is the owning
/// entity's business; the world step only integrates.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionBody {
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f64,
    pub height: f64,
    /// Whether the world step applies gravity to this body.
    pub allow_gravity: bool,
    /// Cap on downward velocity, enforced by the world step after gravity
    /// and before the position integration. Unlimited by default.
    pub max_fall_speed: f64,
}

impl MotionBody {
    /// New body at rest with gravity enabled (the arcade default).
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            position: Vec2::new(x, y),
            velocity: Vec2::default(),
            width,
            height,
            allow_gravity: true,
            max_fall_speed: f64::INFINITY,
        }
    }

    pub fn disable_gravity(&mut self) {
        self.allow_gravity = false;
    }

    pub fn set_velocity_x(&mut self, vx: f64) {
        self.velocity.x = vx;
    }

    pub fn set_velocity_y(&mut self, vy: f64) {
        self.velocity.y = vy;
    }
}

/// Gravity constant plus the per-body integration step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    /// Downward acceleration in px/s².
    pub gravity_y: f64,
}

impl World {
    pub const fn new(gravity_y: f64) -> Self {
        Self { gravity_y }
    }

    /// Advance one body by `dt` seconds: gravity (if enabled), then the
    /// fall-speed cap, then the velocity integration.
    pub fn step(&self, body: &mut MotionBody, dt: f64) {
        if body.allow_gravity {
            body.velocity.y += self.gravity_y * dt;
        }
        if body.velocity.y > body.max_fall_speed {
            body.velocity.y = body.max_fall_speed;
        }
        body.position.x += body.velocity.x * dt;
        body.position.y += body.velocity.y * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_body_defaults() {
        let body = MotionBody::new(10.0, 20.0, 52.0, 320.0);
        assert_eq!(body.position, Vec2::new(10.0, 20.0));
        assert_eq!(body.velocity, Vec2::default());
        assert!(body.allow_gravity);
    }

    #[test]
    fn test_step_integrates_velocity() {
        let world = World::new(0.0);
        let mut body = MotionBody::new(100.0, 50.0, 10.0, 10.0);
        body.set_velocity_x(-160.0);
        world.step(&mut body, 0.5);
        assert!((body.position.x - 20.0).abs() < f64::EPSILON);
        assert!((body.position.y - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_step_applies_gravity_when_enabled() {
        let world = World::new(1000.0);
        let mut body = MotionBody::new(0.0, 0.0, 10.0, 10.0);
        world.step(&mut body, 0.1);
        assert!((body.velocity.y - 100.0).abs() < 1e-9);
        assert!(body.position.y > 0.0);
    }

    #[test]
    fn test_step_caps_fall_speed_before_integrating() {
        let world = World::new(1000.0);
        let mut body = MotionBody::new(0.0, 0.0, 10.0, 10.0);
        body.max_fall_speed = 50.0;
        world.step(&mut body, 0.1);
        assert_eq!(body.velocity.y, 50.0);
        // Position must move by the capped velocity, not the raw one.
        assert!((body.position.y - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_skips_gravity_when_disabled() {
        let world = World::new(1000.0);
        let mut body = MotionBody::new(0.0, 0.0, 10.0, 10.0);
        body.disable_gravity();
        world.step(&mut body, 0.1);
        assert_eq!(body.velocity.y, 0.0);
        assert_eq!(body.position.y, 0.0);
    }
}
