//! Time-based menu item identifiers

use chrono::Utc;

/// Issues ids from the current time in milliseconds since the Unix epoch.
///
/// Ids are strictly increasing within a session: when the clock has not
/// moved past the last issued value, the next id is `last + 1`.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: Option<i64>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub fn next_at(&mut self, millis: i64) -> String {
        let value = match self.last {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last = Some(value);
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_millisecond_bumps() {
        let mut ids = IdGenerator::new();
        assert_eq!(ids.next_at(1_700_000_000_000), "1700000000000");
        assert_eq!(ids.next_at(1_700_000_000_000), "1700000000001");
        assert_eq!(ids.next_at(1_699_999_999_999), "1700000000002");
        assert_eq!(ids.next_at(1_700_000_000_500), "1700000000500");
    }

    #[test]
    fn test_clock_ids_distinct() {
        let mut ids = IdGenerator::new();
        let first = ids.next_id();
        let second = ids.next_id();
        assert_ne!(first, second);
    }
}
