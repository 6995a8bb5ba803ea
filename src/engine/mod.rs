//! Host-engine capabilities the game composes against: arcade motion bodies,
//! AABB overlap queries, a randomized-range helper, and audio cue dispatch.
//!
//! The game logic only reads and writes through these types; nothing in
//! `game/` assumes anything richer than what this layer provides.

pub mod audio;
pub mod body;
pub mod collision;
pub mod random;

pub use audio::{AudioOutput, BellAudio, NullAudio, RecordingAudio, SoundCue};
pub use body::{MotionBody, Vec2, Viewport, World};
pub use collision::{overlap, Aabb};
pub use random::between;
