//! Model module - Data types and state
//!
//! - `types`: tracks, testimonials, carousel direction and UI state
//! - `playback`: player state, published snapshots and clock bookkeeping
//! - `content`: testimonial filtering helpers

mod types;
mod playback;
mod content;

pub use types::{Direction, Testimonial, Track, UiState};

pub use playback::{
    DEFAULT_VOLUME_PERCENT, PlaybackState, PlaybackTiming, PlayerSnapshot,
};

pub use content::{CATEGORIES, excerpt, filter_by_category, next_category};
