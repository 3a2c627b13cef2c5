use std::collections::HashMap;

/// Counts how many times each string has been seen
#[derive(Debug, Default, Clone)]
pub struct StringCounter {
    counts: HashMap<String, u32>,
}

impl StringCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `s` and return its updated count
    pub fn add(&mut self, s: &str) -> u32 {
        let count = self.counts.entry(s.to_owned()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn count(&self, s: &str) -> u32 {
        self.counts.get(s).copied().unwrap_or(0)
    }

    pub fn reset(&mut self) {
        self.counts.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
