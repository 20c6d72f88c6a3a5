//! Hush Media
//!
//! Playback and audibility state for embedded video players, with the
//! lifecycle events each state change fires.

mod element;

pub use element::{MediaError, MediaEvent, VideoElement};
