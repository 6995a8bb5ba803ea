//! Terminal rendering. Reads scene state only; no game logic lives here.

pub mod play_scene;
