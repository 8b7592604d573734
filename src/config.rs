//! Configuration for the showreel front end
//!
//! Everything has a default matching the portfolio site's content, so the binary runs
//! without a config file. A JSON file passed as the first argument overrides
//! any subset of the fields.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::model::{DEFAULT_VOLUME_PERCENT, Testimonial, Track};
use crate::typewriter::{Typewriter, TypewriterConfig};

pub const DEFAULT_SAMPLE_INTERVAL_MS: u64 = 16;
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 5000;
/// Longest track the clock output accepts (24 hours)
pub const MAX_TRACK_DURATION_SECS: f64 = 86_400.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub initial_volume: u8,
    pub sample_interval_ms: u64,
    pub audio_enabled: bool,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            initial_volume: DEFAULT_VOLUME_PERCENT,
            sample_interval_ms: DEFAULT_SAMPLE_INTERVAL_MS,
            audio_enabled: true,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub headline: String,
    pub speed_ms: u64,
    pub delay_ms: u64,
    pub repeat: bool,
    pub repeat_delay_ms: u64,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            headline: "Full-stack developer crafting fluid, animated experiences".to_string(),
            speed_ms: 50,
            delay_ms: 500,
            repeat: true,
            repeat_delay_ms: 2000,
        }
    }
}

impl HeroConfig {
    pub fn typewriter(&self) -> Typewriter {
        Typewriter::new(
            self.headline.clone(),
            TypewriterConfig {
                speed: Duration::from_millis(self.speed_ms),
                delay: Duration::from_millis(self.delay_ms),
                repeat: self.repeat,
                repeat_delay: Duration::from_millis(self.repeat_delay_ms),
            },
        )
    }
}

/// A playlist entry. The duration stands in for the media metadata that the
/// clock output reports once the source is loaded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrackConfig {
    #[serde(flatten)]
    pub track: Track,
    pub duration_secs: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub player: PlayerConfig,
    pub carousel: CarouselConfig,
    pub hero: HeroConfig,
    pub playlist: Vec<TrackConfig>,
    pub testimonials: Vec<Testimonial>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            carousel: CarouselConfig::default(),
            hero: HeroConfig::default(),
            playlist: default_playlist(),
            testimonials: default_testimonials(),
        }
    }
}

impl Config {
    /// Load from `path`, or fall back to the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            None => Self::default(),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config file {}", path.display()))?;
                serde_json::from_str::<Config>(&raw)
                    .with_context(|| format!("parsing config file {}", path.display()))?
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.playlist.is_empty() {
            bail!("playlist must contain at least one track");
        }
        if self.player.initial_volume > 100 {
            bail!("initial_volume must be within 0..=100, got {}", self.player.initial_volume);
        }
        if self.player.sample_interval_ms == 0 {
            bail!("sample_interval_ms must be greater than zero");
        }
        if self.carousel.autoplay_interval_ms == 0 {
            bail!("autoplay_interval_ms must be greater than zero");
        }
        if let Some(bad) = self
            .playlist
            .iter()
            .find(|t| !(t.duration_secs > 0.0 && t.duration_secs <= MAX_TRACK_DURATION_SECS))
        {
            bail!(
                "track {} has duration {} outside (0, {}] seconds",
                bad.track.id,
                bad.duration_secs,
                MAX_TRACK_DURATION_SECS
            );
        }
        Ok(())
    }

    pub fn tracks(&self) -> Vec<Track> {
        self.playlist.iter().map(|t| t.track.clone()).collect()
    }

    /// Source durations known to the clock output
    pub fn durations(&self) -> HashMap<String, f64> {
        self.playlist
            .iter()
            .map(|t| (t.track.audio_ref.clone(), t.duration_secs))
            .collect()
    }

    pub fn sample_interval(&self) -> Duration {
        Duration::from_millis(self.player.sample_interval_ms)
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.carousel.autoplay_interval_ms)
    }
}

fn track(id: u32, title: &str, artist: &str, cover: &str, audio: &str, duration_secs: f64) -> TrackConfig {
    TrackConfig {
        track: Track {
            id,
            title: title.to_string(),
            artist: artist.to_string(),
            cover_ref: cover.to_string(),
            audio_ref: audio.to_string(),
        },
        duration_secs,
    }
}

fn default_playlist() -> Vec<TrackConfig> {
    vec![
        track(
            1,
            "Ambient Coding",
            "Lofi Beats",
            "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?q=80&w=400",
            "https://cdn.pixabay.com/download/audio/2022/05/27/audio_1808fbf07a.mp3",
            147.0,
        ),
        track(
            2,
            "Deep Focus",
            "Concentration Music",
            "https://images.unsplash.com/photo-1511379938547-c1f69419868d?q=80&w=400",
            "https://cdn.pixabay.com/download/audio/2022/03/15/audio_c8a7bf40db.mp3",
            171.0,
        ),
        track(
            3,
            "Coding Flow",
            "Dev Tunes",
            "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?q=80&w=400",
            "https://cdn.pixabay.com/download/audio/2022/10/25/audio_946bc8ffd8.mp3",
            132.0,
        ),
    ]
}

fn testimonial(id: u32, name: &str, role: &str, avatar: &str, content: &str, category: &str) -> Testimonial {
    Testimonial {
        id,
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        content: content.to_string(),
        category: Some(category.to_string()),
    }
}

fn default_testimonials() -> Vec<Testimonial> {
    vec![
        testimonial(
            1,
            "Sarah Johnson",
            "Product Manager at TechCorp",
            "https://randomuser.me/api/portraits/women/32.jpg",
            "Attention to detail and the ability to translate our vision into a beautiful, functional website exceeded our expectations.",
            "web",
        ),
        testimonial(
            2,
            "Michael Chen",
            "Founder of StartupX",
            "https://randomuser.me/api/portraits/men/22.jpg",
            "Rebuilt our entire web platform from scratch. User engagement increased by 40% since launch.",
            "web",
        ),
        testimonial(
            3,
            "Emily Rodriguez",
            "Creative Director",
            "https://randomuser.me/api/portraits/women/44.jpg",
            "Stands out for creativity and a collaborative approach, enhancing requirements with thoughtful suggestions.",
            "design",
        ),
        testimonial(
            4,
            "David Kim",
            "CTO at InnovateTech",
            "https://randomuser.me/api/portraits/men/46.jpg",
            "Delivered our complex project on time and was always transparent about progress and challenges.",
            "web",
        ),
        testimonial(
            5,
            "Sophia Martinez",
            "UI/UX Lead at DesignHub",
            "https://randomuser.me/api/portraits/women/65.jpg",
            "Transformed our outdated interface into a modern, intuitive system that our users love.",
            "design",
        ),
        testimonial(
            6,
            "James Wilson",
            "E-commerce Director",
            "https://randomuser.me/api/portraits/men/33.jpg",
            "Our conversion rate increased by 35% after the checkout redesign.",
            "web",
        ),
        testimonial(
            7,
            "Olivia Taylor",
            "Marketing Manager",
            "https://randomuser.me/api/portraits/women/17.jpg",
            "A stunning landing page for our launch that captured our brand voice and converted visitors into customers.",
            "marketing",
        ),
        testimonial(
            8,
            "Daniel Lee",
            "Mobile App Developer",
            "https://randomuser.me/api/portraits/men/59.jpg",
            "Clean code and thoughtful architecture. The frontend work complemented my backend perfectly.",
            "development",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_are_valid() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.tracks().len(), 3);
        assert_eq!(config.testimonials.len(), 8);
        assert_eq!(config.autoplay_interval(), Duration::from_secs(5));
        assert_eq!(config.player.initial_volume, 70);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(r#"{ "carousel": { "autoplay_interval_ms": 2500 } }"#);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.autoplay_interval(), Duration::from_millis(2500));
        assert_eq!(config.sample_interval(), Duration::from_millis(16));
        assert_eq!(config.playlist.len(), 3);
    }

    #[test]
    fn playlist_entries_flatten_track_fields() {
        let file = write_config(
            r#"{ "playlist": [ {
                "id": 9, "title": "Solo", "artist": "Me",
                "cover_ref": "c.png", "audio_ref": "solo.mp3", "duration_secs": 60.0
            } ] }"#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.tracks()[0].title, "Solo");
        assert_eq!(config.durations().get("solo.mp3"), Some(&60.0));
    }

    #[test]
    fn empty_playlist_is_rejected() {
        let file = write_config(r#"{ "playlist": [] }"#);
        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("at least one track"));
    }

    #[test]
    fn out_of_range_volume_is_rejected() {
        let file = write_config(r#"{ "player": { "initial_volume": 150 } }"#);
        assert!(Config::load(Some(file.path())).is_err());
    }

    #[test]
    fn track_durations_are_bounded() {
        for duration in ["0.0", "-3.0", "1e20", "86400.5"] {
            let file = write_config(&format!(
                r#"{{ "playlist": [ {{
                    "id": 1, "title": "Long", "artist": "Me",
                    "cover_ref": "", "audio_ref": "long.mp3", "duration_secs": {}
                }} ] }}"#,
                duration
            ));
            let err = Config::load(Some(file.path())).unwrap_err();
            assert!(err.to_string().contains("track 1 has duration"), "{} accepted", duration);
        }

        let mut config = Config::default();
        config.playlist[0].duration_secs = f64::NAN;
        assert!(config.validate().is_err());
        config.playlist[0].duration_secs = MAX_TRACK_DURATION_SECS;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Config::load(Some(Path::new("/nonexistent/showreel.json"))).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/showreel.json"));
    }
}
