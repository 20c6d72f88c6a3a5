//! Video Element
//!
//! The audibility-relevant slice of a media element: playback flags, volume,
//! and the events state changes fire. Mutators return the events they fire
//! in firing order; writes that change nothing fire nothing, as in the host
//! document model.

use thiserror::Error;

/// Media element state errors
#[derive(Debug, Error, PartialEq)]
pub enum MediaError {
    #[error("volume {0} outside 0.0..=1.0")]
    VolumeOutOfRange(f64),
}

/// Lifecycle and audibility events fired by a video element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaEvent {
    /// Playback started (fresh segment)
    Play,
    /// Playback paused
    Pause,
    /// End of stream reached
    Ended,
    /// Audibility changed (muted flag or volume)
    VolumeChange,
}

/// Video element playback state
#[derive(Debug, Clone)]
pub struct VideoElement {
    pub muted: bool,
    pub default_muted: bool,
    pub paused: bool,
    pub ended: bool,
    pub volume: f64,
    pub autoplay: bool,
}

impl VideoElement {
    pub fn new() -> Self {
        Self {
            muted: false,
            default_muted: false,
            paused: true,
            ended: false,
            volume: 1.0,
            autoplay: false,
        }
    }

    /// Create already muted, as hosts typically spawn inline players
    pub fn muted_by_default() -> Self {
        Self {
            muted: true,
            default_muted: true,
            ..Self::new()
        }
    }

    /// Start playback. Fires `Play` for a fresh segment; a no-op while
    /// already playing.
    pub fn play(&mut self) -> Vec<MediaEvent> {
        if !self.paused && !self.ended {
            return Vec::new();
        }
        self.paused = false;
        self.ended = false;
        vec![MediaEvent::Play]
    }

    /// Pause playback. Fires `Pause` unless already paused.
    pub fn pause(&mut self) -> Vec<MediaEvent> {
        if self.paused {
            return Vec::new();
        }
        self.paused = true;
        vec![MediaEvent::Pause]
    }

    /// Reach end of stream. Fires `Pause` then `Ended`, matching host
    /// delivery order at end of playback.
    pub fn finish(&mut self) -> Vec<MediaEvent> {
        if self.paused {
            return Vec::new();
        }
        self.paused = true;
        self.ended = true;
        vec![MediaEvent::Pause, MediaEvent::Ended]
    }

    /// Set the muted flag. Fires `VolumeChange` only when the flag flips.
    pub fn set_muted(&mut self, muted: bool) -> Vec<MediaEvent> {
        if self.muted == muted {
            return Vec::new();
        }
        self.muted = muted;
        vec![MediaEvent::VolumeChange]
    }

    /// Set the volume. Fires `VolumeChange` only when the value changes.
    pub fn set_volume(&mut self, volume: f64) -> Result<Vec<MediaEvent>, MediaError> {
        if !(0.0..=1.0).contains(&volume) {
            return Err(MediaError::VolumeOutOfRange(volume));
        }
        if self.volume == volume {
            return Ok(Vec::new());
        }
        self.volume = volume;
        Ok(vec![MediaEvent::VolumeChange])
    }
}

impl Default for VideoElement {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_fires_once() {
        let mut video = VideoElement::new();
        assert_eq!(video.play(), vec![MediaEvent::Play]);
        assert!(video.play().is_empty());
        assert!(!video.paused);
    }

    #[test]
    fn test_play_after_ended_is_fresh_segment() {
        let mut video = VideoElement::new();
        video.play();
        video.finish();
        assert_eq!(video.play(), vec![MediaEvent::Play]);
        assert!(!video.ended);
    }

    #[test]
    fn test_finish_fires_pause_then_ended() {
        let mut video = VideoElement::new();
        video.play();
        assert_eq!(video.finish(), vec![MediaEvent::Pause, MediaEvent::Ended]);
        assert!(video.paused);
        assert!(video.ended);
        assert!(video.finish().is_empty());
    }

    #[test]
    fn test_muted_write_fires_only_on_change() {
        let mut video = VideoElement::muted_by_default();
        assert!(video.set_muted(true).is_empty());
        assert_eq!(video.set_muted(false), vec![MediaEvent::VolumeChange]);
        assert_eq!(video.set_muted(true), vec![MediaEvent::VolumeChange]);
    }

    #[test]
    fn test_volume_bounds() {
        let mut video = VideoElement::new();
        assert_eq!(video.set_volume(1.5), Err(MediaError::VolumeOutOfRange(1.5)));
        assert_eq!(video.set_volume(0.5), Ok(vec![MediaEvent::VolumeChange]));
        assert_eq!(video.set_volume(0.5), Ok(vec![]));
    }
}
