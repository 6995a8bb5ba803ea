//! Scrolling pipe obstacles: a fixed pool of three top/bottom pairs, recycled
//! from the left edge back to the right with fresh randomized offsets.

use rand::Rng;

use crate::engine::{between, overlap, Aabb, MotionBody};

use super::assets::{Assets, Sprite, POINT_CUE};
use super::session::Session;

/// Number of pipe pairs alive at any time.
pub const PAIR_COUNT: usize = 3;

/// Points awarded per single obstacle recycle (a pair is worth 1.0).
pub const SCORE_PER_RECYCLE: f64 = 0.5;

/// Scroll speed is `viewport.width / SCROLL_SPEED_DIVISOR`, leftward.
const SCROLL_SPEED_DIVISOR: f64 = 5.0;

/// Vertical jitter applied to the initial spawn rows, px.
const SPAWN_BAND: f64 = 100.0;

// Recycle bands as fractions of the viewport height, in the order the
// original tuning wrote them; `between` sorts the bounds.
const TOP_RECYCLE_BAND: (f64, f64) = (0.4, 0.3);
const BOTTOM_RECYCLE_BAND: (f64, f64) = (0.6, 0.7);

/// Which half of a pipe pair an obstacle is. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Hangs downward from above; its anchor is the bottom-left corner.
    Top,
    /// Rises from below; its anchor is the top-left corner.
    Bottom,
}

/// One pipe body. Never destroyed; repositioned by the pool when it leaves
/// the viewport.
#[derive(Debug, Clone)]
pub struct Obstacle {
    kind: ObstacleKind,
    body: MotionBody,
}

impl Obstacle {
    fn new(kind: ObstacleKind, x: f64, y: f64, sprite: Sprite, scroll_vx: f64) -> Self {
        let mut body = MotionBody::new(x, y, sprite.width, sprite.height);
        body.disable_gravity();
        body.set_velocity_x(scroll_vx);
        Self { kind, body }
    }

    pub fn kind(&self) -> ObstacleKind {
        self.kind
    }

    pub fn body(&self) -> &MotionBody {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut MotionBody {
        &mut self.body
    }

    /// The occupied rectangle, resolving the per-kind anchor: a `Top` pipe
    /// extends upward from its y, a `Bottom` pipe downward.
    pub fn bounds(&self) -> Aabb {
        let pos = self.body.position;
        match self.kind {
            ObstacleKind::Top => {
                Aabb::new(pos.x, pos.y - self.body.height, self.body.width, self.body.height)
            }
            ObstacleKind::Bottom => Aabb::new(pos.x, pos.y, self.body.width, self.body.height),
        }
    }

    /// Fully past the left edge. Strict: an obstacle exactly at `-width`
    /// still counts as on screen.
    fn off_screen_left(&self) -> bool {
        self.body.position.x < -self.body.width
    }
}

/// The obstacle pool: exactly `PAIR_COUNT` top/bottom pairs for the life of a
/// run, scrolling left at constant speed until a player hit freezes them.
pub struct ObstaclePool {
    obstacles: Vec<Obstacle>,
    frozen: bool,
}

impl ObstaclePool {
    /// Spawn the pairs at `width/3`, `2·width/3`, and `width`, tops jittered
    /// just above the ceiling and bottoms just below the floor.
    pub fn new<R: Rng>(session: &Session, assets: &Assets, rng: &mut R) -> Self {
        let viewport = session.viewport;
        let section = viewport.width / PAIR_COUNT as f64;
        let scroll_vx = -(viewport.width / SCROLL_SPEED_DIVISOR);

        let mut obstacles = Vec::with_capacity(PAIR_COUNT * 2);
        for i in 1..=PAIR_COUNT {
            let x = section * i as f64;
            let top_y = between(rng, 0.0, -SPAWN_BAND);
            let bottom_y = between(rng, viewport.height, viewport.height + SPAWN_BAND);
            obstacles.push(Obstacle::new(
                ObstacleKind::Top,
                x,
                top_y,
                assets.pipe,
                scroll_vx,
            ));
            obstacles.push(Obstacle::new(
                ObstacleKind::Bottom,
                x,
                bottom_y,
                assets.pipe,
                scroll_vx,
            ));
        }

        Self {
            obstacles,
            frozen: false,
        }
    }

    /// Per-frame pass: recycle every obstacle that has fully left the
    /// viewport, then freeze the scroll if any obstacle overlaps the player.
    pub fn update<R: Rng>(&mut self, session: &mut Session, rng: &mut R, player: &Aabb) {
        for i in 0..self.obstacles.len() {
            if self.obstacles[i].off_screen_left() {
                self.recycle(i, session, rng);
            }
        }

        if self.obstacles.iter().any(|o| overlap(&o.bounds(), player)) {
            self.on_player_hit();
        }
    }

    /// Re-enter from the right edge with a fresh per-kind vertical offset.
    /// Every recycle scores; only the top pipe of a pair carries the cue.
    fn recycle<R: Rng>(&mut self, index: usize, session: &mut Session, rng: &mut R) {
        let viewport = session.viewport;
        let obstacle = &mut self.obstacles[index];

        obstacle.body.position.x = viewport.width;
        session.score.add(SCORE_PER_RECYCLE);

        match obstacle.kind {
            ObstacleKind::Top => {
                obstacle.body.position.y = between(
                    rng,
                    viewport.height * TOP_RECYCLE_BAND.0,
                    viewport.height * TOP_RECYCLE_BAND.1,
                );
                session.audio.play(&POINT_CUE);
            }
            ObstacleKind::Bottom => {
                obstacle.body.position.y = between(
                    rng,
                    viewport.height * BOTTOM_RECYCLE_BAND.0,
                    viewport.height * BOTTOM_RECYCLE_BAND.1,
                );
            }
        }
    }

    /// One-way scroll freeze. Nothing resumes it; the app starts a new run
    /// instead.
    fn on_player_hit(&mut self) {
        for obstacle in &mut self.obstacles {
            obstacle.body.set_velocity_x(0.0);
        }
        self.frozen = true;
    }

    /// The end-of-run signal read by the orchestrator.
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn bodies_mut(&mut self) -> impl Iterator<Item = &mut MotionBody> + '_ {
        self.obstacles.iter_mut().map(Obstacle::body_mut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{NullAudio, Viewport};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn make_session() -> Session {
        Session::new(Viewport::new(800.0, 600.0), Box::new(NullAudio))
    }

    fn make_pool(session: &Session, seed: u64) -> ObstaclePool {
        let assets = Assets::load().unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        ObstaclePool::new(session, &assets, &mut rng)
    }

    #[test]
    fn test_pool_spawns_three_pairs() {
        let session = make_session();
        let pool = make_pool(&session, 1);

        assert_eq!(pool.obstacles().len(), 6);
        let tops = pool
            .obstacles()
            .iter()
            .filter(|o| o.kind() == ObstacleKind::Top)
            .count();
        assert_eq!(tops, 3);
    }

    #[test]
    fn test_spawn_positions_and_motion() {
        let session = make_session();
        let pool = make_pool(&session, 2);

        for (i, obstacle) in pool.obstacles().iter().enumerate() {
            let pair = i / 2;
            let expected_x = 800.0 / 3.0 * (pair + 1) as f64;
            assert!((obstacle.body().position.x - expected_x).abs() < 1e-9);
            assert!((obstacle.body().velocity.x - (-160.0)).abs() < 1e-9);
            assert!(!obstacle.body().allow_gravity);

            match obstacle.kind() {
                ObstacleKind::Top => {
                    assert!((-100.0..=0.0).contains(&obstacle.body().position.y));
                }
                ObstacleKind::Bottom => {
                    assert!((600.0..=700.0).contains(&obstacle.body().position.y));
                }
            }
        }
    }

    #[test]
    fn test_bounds_anchor_per_kind() {
        let assets = Assets::load().unwrap();
        let top = Obstacle::new(ObstacleKind::Top, 100.0, 200.0, assets.pipe, 0.0);
        let bottom = Obstacle::new(ObstacleKind::Bottom, 100.0, 360.0, assets.pipe, 0.0);

        // Top hangs upward from y, bottom extends downward.
        assert!((top.bounds().bottom() - 200.0).abs() < f64::EPSILON);
        assert!((top.bounds().top() - (200.0 - 320.0)).abs() < f64::EPSILON);
        assert!((bottom.bounds().top() - 360.0).abs() < f64::EPSILON);
        assert!((bottom.bounds().bottom() - 680.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_obstacle_at_exact_threshold_not_recycled() {
        let mut session = make_session();
        let mut pool = make_pool(&session, 3);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let width = pool.obstacles()[0].body().width;
        pool.obstacles_mut()[0].body_mut().position.x = -width;
        let far_away = Aabb::new(-1000.0, -1000.0, 1.0, 1.0);
        pool.update(&mut session, &mut rng, &far_away);

        assert!((pool.obstacles()[0].body().position.x - (-width)).abs() < f64::EPSILON);
        assert_eq!(session.score.total(), 0.0);
    }

    #[test]
    fn test_recycle_scores_and_repositions() {
        let mut session = make_session();
        let mut pool = make_pool(&session, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(4);

        let width = pool.obstacles()[0].body().width;
        pool.obstacles_mut()[0].body_mut().position.x = -(width + 1.0);
        let far_away = Aabb::new(-1000.0, -1000.0, 1.0, 1.0);
        pool.update(&mut session, &mut rng, &far_away);

        assert!((pool.obstacles()[0].body().position.x - 800.0).abs() < f64::EPSILON);
        assert!((session.score.total() - SCORE_PER_RECYCLE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_player_hit_freezes_every_obstacle() {
        let mut session = make_session();
        let mut pool = make_pool(&session, 5);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let hit_box = pool.obstacles()[2].bounds();
        pool.update(&mut session, &mut rng, &hit_box);

        assert!(pool.is_frozen());
        for obstacle in pool.obstacles() {
            assert_eq!(obstacle.body().velocity.x, 0.0);
        }
    }

    #[test]
    fn test_kind_is_fixed() {
        let session = make_session();
        let mut pool = make_pool(&session, 6);

        let before: Vec<ObstacleKind> = pool.obstacles().iter().map(Obstacle::kind).collect();
        for obstacle in pool.obstacles_mut() {
            obstacle.body_mut().position.x = -400.0;
        }
        let after: Vec<ObstacleKind> = pool.obstacles().iter().map(Obstacle::kind).collect();
        assert_eq!(before, after);
    }
}
