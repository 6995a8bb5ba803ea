//! Per-run session context.

use crate::constants::GRAVITY_Y;
use crate::engine::{AudioOutput, Viewport, World};

use super::score::Score;

/// Everything a run shares across its components: the viewport, the physics
/// world, the score, and the audio sink. Constructed once by the scene
/// orchestrator, which owns it for the run's lifetime; components borrow it
/// per call. A new run means a new session.
pub struct Session {
    pub viewport: Viewport,
    pub world: World,
    pub score: Score,
    pub audio: Box<dyn AudioOutput>,
}

impl Session {
    pub fn new(viewport: Viewport, audio: Box<dyn AudioOutput>) -> Self {
        Self {
            viewport,
            world: World::new(GRAVITY_Y),
            score: Score::default(),
            audio,
        }
    }
}
