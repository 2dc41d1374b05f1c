//! Collision-resistant artifact names.
//!
//! A generated name is `<timestamp>_<token>`: the creation time at second
//! resolution followed by the 32-hex-digit form of a v4 UUID (122 random
//! bits). Uniqueness is probabilistic, not proven: two names generated within
//! the same second differ only by the token.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Day, month, year, 24-hour clock, trailing AM/PM designator
const TIMESTAMP_FORMAT: &str = "%d%m%Y%H%M%S%p";

/// Generate a fresh artifact name.
///
/// Takes no arguments but reads the clock and the process randomness source.
/// Never fails, and is safe to call from any number of tasks concurrently:
/// the UUID source is thread-safe and no shared state is touched.
pub fn generate_name() -> String {
    format!(
        "{}_{}",
        timestamp_component(Utc::now()),
        Uuid::new_v4().simple()
    )
}

fn timestamp_component(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    #[test]
    fn timestamp_component_is_second_resolution() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 15, 4, 5).unwrap();
        assert_eq!(timestamp_component(at), "01032024150405PM");

        let morning = Utc.with_ymd_and_hms(2024, 12, 31, 9, 30, 59).unwrap();
        assert_eq!(timestamp_component(morning), "31122024093059AM");
    }

    #[test]
    fn generated_names_have_the_expected_shape() {
        let name = generate_name();

        let (timestamp, token) = name.split_once('_').expect("name should contain a separator");
        assert_eq!(timestamp.len(), 16);
        assert!(timestamp.ends_with("AM") || timestamp.ends_with("PM"));
        assert!(timestamp[..14].chars().all(|c| c.is_ascii_digit()));

        assert_eq!(token.len(), 32);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn generated_names_are_unique() {
        let mut names = HashSet::new();

        for _ in 0..10_000 {
            let name = generate_name();
            assert!(names.insert(name), "generated duplicate artifact name");
        }
    }
}
