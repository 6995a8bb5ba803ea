//! Embedded asset catalog: sprite metrics and the point cue.
//!
//! Bodies take their size from these entries; glyph and color choices live in
//! the UI layer. `Assets::load` is the preload step and must succeed before
//! the scene is created.

use std::io;

use crate::engine::SoundCue;

/// Metrics of one visual asset, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub name: &'static str,
    pub width: f64,
    pub height: f64,
}

/// Playback marker for the scoring sound.
pub const POINT_CUE: SoundCue = SoundCue {
    name: "point",
    start: 0.0,
    duration: 0.6,
    volume: 0.2,
};

const PIPE: Sprite = Sprite {
    name: "pipe",
    width: 52.0,
    height: 320.0,
};

const BIRD: Sprite = Sprite {
    name: "bird",
    width: 34.0,
    height: 24.0,
};

const CLOUD: Sprite = Sprite {
    name: "cloud",
    width: 96.0,
    height: 32.0,
};

/// The validated catalog handed to entity constructors.
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    pub pipe: Sprite,
    pub bird: Sprite,
    pub cloud: Sprite,
}

impl Assets {
    /// Load and validate the embedded catalog.
    pub fn load() -> io::Result<Self> {
        let assets = Self {
            pipe: PIPE,
            bird: BIRD,
            cloud: CLOUD,
        };
        assets.validate()?;
        Ok(assets)
    }

    fn validate(&self) -> io::Result<()> {
        for sprite in [self.pipe, self.bird, self.cloud] {
            if sprite.name.is_empty() || sprite.width <= 0.0 || sprite.height <= 0.0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid sprite metrics for {:?}", sprite.name),
                ));
            }
        }
        if POINT_CUE.duration <= 0.0 || !(0.0..=1.0).contains(&POINT_CUE.volume) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "invalid point cue marker",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_succeeds() {
        let assets = Assets::load().expect("embedded catalog should validate");
        assert_eq!(assets.pipe.name, "pipe");
        assert!(assets.pipe.width > 0.0);
        assert!(assets.bird.height > 0.0);
    }

    #[test]
    fn test_point_cue_marker() {
        assert_eq!(POINT_CUE.name, "point");
        assert_eq!(POINT_CUE.start, 0.0);
        assert!((POINT_CUE.duration - 0.6).abs() < f64::EPSILON);
        assert!((POINT_CUE.volume - 0.2).abs() < f64::EPSILON);
    }
}
