//! Scene orchestration: owns the session and every entity, and drives the
//! per-frame update in a fixed order.

use std::io;

use rand::Rng;

use crate::engine::{AudioOutput, Viewport};

use super::assets::Assets;
use super::clouds::CloudLayer;
use super::obstacles::ObstaclePool;
use super::player::Player;
use super::score::Score;
use super::session::Session;

/// The composition root for one run. Construction preloads the asset catalog
/// and then creates background, obstacle pool, and player in that order.
/// Restarting is not an operation here; the app builds a fresh `Scene`.
pub struct Scene {
    session: Session,
    clouds: CloudLayer,
    pipes: ObstaclePool,
    player: Player,
}

impl Scene {
    pub fn new<R: Rng>(
        viewport: Viewport,
        audio: Box<dyn AudioOutput>,
        rng: &mut R,
    ) -> io::Result<Self> {
        let assets = Assets::load()?;
        let session = Session::new(viewport, audio);

        // Creation order matters: later components may reference earlier
        // ones (the pool's collision pass reads the player each frame).
        let clouds = CloudLayer::new(&session, &assets, rng);
        let pipes = ObstaclePool::new(&session, &assets, rng);
        let player = Player::new(&session, &assets);

        Ok(Self {
            session,
            clouds,
            pipes,
            player,
        })
    }

    /// One frame: world step over every body, then clouds, obstacles, and
    /// player, in that order. `delta_ms` is wall time since the last frame;
    /// the component logic itself is frame-indexed.
    pub fn update<R: Rng>(&mut self, delta_ms: f64, rng: &mut R) {
        let dt = delta_ms / 1000.0;
        let world = self.session.world;

        for body in self.clouds.bodies_mut() {
            world.step(body, dt);
        }
        for body in self.pipes.bodies_mut() {
            world.step(body, dt);
        }
        world.step(self.player.body_mut(), dt);

        self.clouds.update(&self.session, rng);
        let player_bounds = self.player.bounds();
        self.pipes.update(&mut self.session, rng, &player_bounds);
        self.player.update(&self.session);
    }

    /// Forwarded to the player while the run is live; ignored afterwards.
    pub fn flap(&mut self) {
        if !self.is_over() {
            self.player.flap();
        }
    }

    /// True once the pool has frozen. This is the run's terminal state.
    pub fn is_over(&self) -> bool {
        self.pipes.is_frozen()
    }

    pub fn viewport(&self) -> Viewport {
        self.session.viewport
    }

    pub fn score(&self) -> Score {
        self.session.score
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clouds(&self) -> &CloudLayer {
        &self.clouds
    }

    pub fn pipes(&self) -> &ObstaclePool {
        &self.pipes
    }

    pub fn pipes_mut(&mut self) -> &mut ObstaclePool {
        &mut self.pipes
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::NullAudio;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_scene(seed: u64) -> Scene {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Scene::new(
            Viewport::new(800.0, 600.0),
            Box::new(NullAudio),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_fresh_scene_is_live() {
        let scene = make_scene(1);
        assert!(!scene.is_over());
        assert_eq!(scene.score().total(), 0.0);
        assert_eq!(scene.pipes().obstacles().len(), 6);
    }

    #[test]
    fn test_update_scrolls_obstacles() {
        let mut scene = make_scene(2);
        let mut rng = ChaCha8Rng::seed_from_u64(2);

        let before = scene.pipes().obstacles()[0].body().position.x;
        scene.update(100.0, &mut rng);
        let after = scene.pipes().obstacles()[0].body().position.x;

        // -160 px/s for 0.1 s.
        assert!((before - after - 16.0).abs() < 1e-9);
    }

    #[test]
    fn test_flap_ignored_after_run_ends() {
        let mut scene = make_scene(3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        // Drop the player into the nearest pipe to end the run.
        let target = scene.pipes().obstacles()[0].bounds();
        let body = scene.player_mut().body_mut();
        body.position.x = target.x;
        body.position.y = target.y + 1.0;
        scene.update(0.0, &mut rng);
        assert!(scene.is_over());

        let vy = scene.player().body().velocity.y;
        scene.flap();
        assert_eq!(scene.player().body().velocity.y, vy);
    }
}
