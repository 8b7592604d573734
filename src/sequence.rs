//! Rolling key-sequence matcher (the Konami code easter egg)

use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct KeySequence<K> {
    pattern: Vec<K>,
    recent: VecDeque<K>,
}

impl<K: PartialEq + Clone> KeySequence<K> {
    pub fn new(pattern: Vec<K>) -> Self {
        let capacity = pattern.len();
        Self {
            pattern,
            recent: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a key press. Returns true when the last keys spell the pattern.
    pub fn push(&mut self, key: K) -> bool {
        if self.pattern.is_empty() {
            return false;
        }
        if self.recent.len() == self.pattern.len() {
            self.recent.pop_front();
        }
        self.recent.push_back(key);
        self.recent.len() == self.pattern.len() && self.recent.iter().eq(self.pattern.iter())
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KONAMI: [&str; 10] = [
        "Up", "Up", "Down", "Down", "Left", "Right", "Left", "Right", "b", "a",
    ];

    fn konami() -> KeySequence<&'static str> {
        KeySequence::new(KONAMI.to_vec())
    }

    #[test]
    fn matches_exact_sequence() {
        let mut seq = konami();
        let hits: Vec<bool> = KONAMI.iter().map(|k| seq.push(*k)).collect();
        assert_eq!(hits.iter().filter(|h| **h).count(), 1);
        assert!(hits[9]);
    }

    #[test]
    fn matches_after_leading_noise() {
        let mut seq = konami();
        for k in ["x", "Up", "Up", "Up"] {
            assert!(!seq.push(k));
        }
        let matched = KONAMI[1..].iter().map(|k| seq.push(*k)).last();
        assert_eq!(matched, Some(true));
    }

    #[test]
    fn interrupted_sequence_does_not_match() {
        let mut seq = konami();
        for k in &KONAMI[..5] {
            seq.push(*k);
        }
        seq.push("q");
        assert!(!KONAMI[5..].iter().any(|k| seq.push(*k)));
    }

    #[test]
    fn reset_forgets_progress() {
        let mut seq = konami();
        for k in &KONAMI[..9] {
            seq.push(*k);
        }
        seq.reset();
        assert!(!seq.push("a"));
    }
}
