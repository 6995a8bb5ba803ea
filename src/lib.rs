//! Skyhopper - Terminal Flappy-Bird Arcade Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod constants;
pub mod engine;
pub mod game;
pub mod highscores;
pub mod ui;
