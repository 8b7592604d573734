//! Typing effect for the hero headline
//!
//! The visible text is a pure function of the time elapsed since the effect
//! started, so the renderer can ask for a frame whenever it draws.

use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Time per character
    pub speed: Duration,
    /// Pause before the first character
    pub delay: Duration,
    pub repeat: bool,
    /// Pause after completion before typing again
    pub repeat_delay: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(50),
            delay: Duration::ZERO,
            repeat: false,
            repeat_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypewriterFrame<'a> {
    pub visible: &'a str,
    pub typing: bool,
    pub complete: bool,
    /// How many times the text has restarted
    pub cycle: u128,
}

impl TypewriterFrame<'_> {
    /// The cursor blinks until the text is fully shown.
    pub fn cursor_blinking(&self) -> bool {
        !self.complete
    }
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    text: String,
    char_count: usize,
    config: TypewriterConfig,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, config: TypewriterConfig) -> Self {
        let text = text.into();
        let char_count = text.chars().count();
        Self {
            text,
            char_count,
            config,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn frame(&self, elapsed: Duration) -> TypewriterFrame<'_> {
        let Some(since_start) = elapsed.checked_sub(self.config.delay) else {
            return TypewriterFrame {
                visible: "",
                typing: false,
                complete: false,
                cycle: 0,
            };
        };

        let speed = self.config.speed.as_nanos();
        let typing_span = speed * self.char_count as u128;
        let mut t = since_start.as_nanos();
        let mut cycle = 0;

        if self.config.repeat {
            let period = typing_span + self.config.repeat_delay.as_nanos();
            if period > 0 {
                cycle = t / period;
                t %= period;
            }
        }

        let shown = if speed == 0 {
            self.char_count
        } else {
            ((t / speed) as usize).min(self.char_count)
        };

        TypewriterFrame {
            visible: self.prefix(shown),
            typing: shown < self.char_count,
            complete: shown == self.char_count,
            cycle,
        }
    }

    fn prefix(&self, chars: usize) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(chars)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len());
        &self.text[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_shows_during_delay() {
        let tw = Typewriter::new(
            "hello",
            TypewriterConfig {
                delay: ms(500),
                ..Default::default()
            },
        );
        let frame = tw.frame(ms(499));
        assert_eq!(frame.visible, "");
        assert!(!frame.typing);
        assert!(!frame.complete);
    }

    #[test]
    fn one_character_per_tick() {
        let tw = Typewriter::new("hello", TypewriterConfig::default());
        assert_eq!(tw.frame(ms(0)).visible, "");
        assert_eq!(tw.frame(ms(50)).visible, "h");
        assert_eq!(tw.frame(ms(149)).visible, "he");
        assert!(tw.frame(ms(149)).typing);

        let done = tw.frame(ms(250));
        assert_eq!(done.visible, "hello");
        assert!(done.complete);
        assert!(!done.cursor_blinking());
        assert_eq!(tw.frame(ms(60_000)).visible, "hello");
    }

    #[test]
    fn repeat_restarts_after_pause() {
        let tw = Typewriter::new(
            "abc",
            TypewriterConfig {
                speed: ms(10),
                repeat: true,
                repeat_delay: ms(100),
                ..Default::default()
            },
        );
        // typing 0..30ms, holding 30..130ms, then again
        assert!(tw.frame(ms(120)).complete);
        let again = tw.frame(ms(135));
        assert_eq!(again.visible, "");
        assert_eq!(again.cycle, 1);
        assert_eq!(tw.frame(ms(150)).visible, "ab");
    }

    #[test]
    fn multibyte_text_is_cut_on_char_boundaries() {
        let tw = Typewriter::new("héllo ✨", TypewriterConfig::default());
        assert_eq!(tw.frame(ms(100)).visible, "hé");
        assert_eq!(tw.frame(ms(350)).visible, "héllo ✨");
    }

    #[test]
    fn empty_text_completes_immediately() {
        let tw = Typewriter::new("", TypewriterConfig::default());
        let frame = tw.frame(ms(0));
        assert!(frame.complete);
        assert_eq!(frame.visible, "");
    }
}
