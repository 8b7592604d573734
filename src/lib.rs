//! Control core of an animated portfolio site.
//!
//! Two independent state machines drive the interactive widgets:
//!
//! - [`PlaylistPlayer`]: transport, volume and progress for a fixed playlist,
//!   backed by an owned [`AudioCapability`]
//! - [`RotationCarousel`]: a timed rotation over a fixed list of items with
//!   manual navigation that defers the next automatic tick
//!
//! The `controller` and `view` modules are the terminal front end that
//! renders their snapshots and forwards key presses as intents.

pub mod audio;
pub mod carousel;
pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod model;
pub mod player;
pub mod sequence;
pub mod task;
pub mod typewriter;
pub mod view;

pub use audio::{AudioCapability, ClockAudio, LoadId, MediaEvent, SilentAudio, acquire_audio};
pub use carousel::{CarouselState, RotationCarousel};
pub use error::{Error, Result};
pub use player::{PlayerSettings, PlaylistPlayer};
pub use sequence::KeySequence;
pub use task::RepeatingTask;
pub use typewriter::{Typewriter, TypewriterConfig};
