//! Game entities and the per-frame scene orchestration.

pub mod assets;
pub mod clouds;
pub mod obstacles;
pub mod player;
pub mod scene;
pub mod score;
pub mod session;

pub use assets::Assets;
pub use clouds::CloudLayer;
pub use obstacles::{Obstacle, ObstacleKind, ObstaclePool};
pub use player::Player;
pub use scene::Scene;
pub use score::Score;
pub use session::Session;
