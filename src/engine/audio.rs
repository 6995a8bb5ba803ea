//! Fire-and-forget audio cue dispatch.
//!
//! Playback is a side effect the game never waits on. Sinks must not block
//! and must swallow their own failures.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// A one-shot playback marker: clip name plus offset, duration, and volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoundCue {
    pub name: &'static str,
    /// Offset into the clip, seconds.
    pub start: f64,
    /// Marker length, seconds.
    pub duration: f64,
    /// 0.0..=1.0
    pub volume: f64,
}

/// Audio output collaborator. `play` returns immediately; completion has no
/// effect on game logic.
pub trait AudioOutput {
    fn play(&self, cue: &SoundCue);
}

/// Discards every cue.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioOutput for NullAudio {
    fn play(&self, _cue: &SoundCue) {}
}

/// Rings the terminal bell. The BEL byte survives raw mode, and write errors
/// are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct BellAudio;

impl AudioOutput for BellAudio {
    fn play(&self, _cue: &SoundCue) {
        let mut out = io::stdout();
        let _ = out.write_all(b"\x07");
        let _ = out.flush();
    }
}

/// Capture sink: records every cue for inspection. Clones share one buffer,
/// so a test can keep a handle while the session owns another.
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    cues: Rc<RefCell<Vec<SoundCue>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> Vec<SoundCue> {
        self.cues.borrow().clone()
    }

    /// How many recorded cues carry the given clip name.
    pub fn count(&self, name: &str) -> usize {
        self.cues.borrow().iter().filter(|c| c.name == name).count()
    }
}

impl AudioOutput for RecordingAudio {
    fn play(&self, cue: &SoundCue) {
        self.cues.borrow_mut().push(*cue);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUE: SoundCue = SoundCue {
        name: "ping",
        start: 0.0,
        duration: 0.6,
        volume: 0.2,
    };

    #[test]
    fn test_recording_audio_captures_cues() {
        let recorder = RecordingAudio::new();
        recorder.play(&CUE);
        recorder.play(&CUE);
        assert_eq!(recorder.cues().len(), 2);
        assert_eq!(recorder.count("ping"), 2);
        assert_eq!(recorder.count("other"), 0);
    }

    #[test]
    fn test_recording_audio_clones_share_buffer() {
        let recorder = RecordingAudio::new();
        let sink: Box<dyn AudioOutput> = Box::new(recorder.clone());
        sink.play(&CUE);
        assert_eq!(recorder.count("ping"), 1);
    }

    #[test]
    fn test_null_audio_is_silent() {
        NullAudio.play(&CUE);
    }
}
