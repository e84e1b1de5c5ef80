use std::time::Instant;

/// One accepted keystroke: the key and milliseconds since the log epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyLogEntry {
    pub key: char,
    pub timestamp_ms: u64,
}

/// Append-only log of accepted keystrokes.
///
/// Timestamps are measured from the log epoch, which resets on `clear`
/// (game start); `Instant` keeps them monotonic non-decreasing.
#[derive(Debug, Clone)]
pub struct KeyLog {
    epoch: Instant,
    entries: Vec<KeyLogEntry>,
}

impl KeyLog {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
            entries: Vec::new(),
        }
    }

    /// Append a keystroke stamped with the current time.
    pub fn record(&mut self, key: char) {
        self.record_at(key, Instant::now());
    }

    /// Append a keystroke stamped with an explicit time, clamped to the
    /// epoch if the caller hands in an earlier instant.
    pub fn record_at(&mut self, key: char, now: Instant) {
        let timestamp_ms = now.saturating_duration_since(self.epoch).as_millis() as u64;
        self.entries.push(KeyLogEntry { key, timestamp_ms });
    }

    /// Drop all entries and reset the epoch; called on game start.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.epoch = Instant::now();
    }

    pub fn entries(&self) -> &[KeyLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for KeyLog {
    fn default() -> Self {
        Self::new()
    }
}
