//! Link entity representing a shortened URL with click and lifetime limits.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use super::UserId;

/// A shortened URL link with its usage limits.
///
/// `short_code`, `short_url`, `original_url`, `owner_id`, `created_at` and `ttl`
/// never change after creation. `click_limit`, `click_count` and `active` are
/// mutated only through the link store's per-key update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "serialize_ttl_hours", rename = "ttl_hours")]
    pub ttl: Duration,
    pub click_limit: u32,
    pub click_count: u32,
    pub active: bool,
}

impl Link {
    /// Creates a fresh, active link with no clicks consumed.
    pub fn new(
        short_code: String,
        short_url: String,
        original_url: String,
        owner_id: UserId,
        created_at: DateTime<Utc>,
        ttl: Duration,
        click_limit: u32,
    ) -> Self {
        Self {
            short_code,
            short_url,
            original_url,
            owner_id,
            created_at,
            ttl,
            click_limit,
            click_count: 0,
            active: true,
        }
    }

    /// Returns true until the link has been disabled.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Instant after which the link is expired.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.created_at + self.ttl
    }

    /// Returns true if `now` is strictly past `created_at + ttl`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at()
    }

    /// Returns true once every permitted click has been consumed.
    pub fn is_limit_reached(&self) -> bool {
        self.click_count >= self.click_limit
    }

    /// Clicks left before the limit is reached.
    pub fn remaining_clicks(&self) -> u32 {
        self.click_limit.saturating_sub(self.click_count)
    }

    /// Disables the link. A disabled link is never reactivated.
    pub fn disable(&mut self) {
        self.active = false;
    }

    /// Consumes one click.
    pub fn increment_clicks(&mut self) {
        self.click_count = self.click_count.saturating_add(1);
    }
}

fn serialize_ttl_hours<S: serde::Serializer>(ttl: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_i64(ttl.num_hours())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_link(ttl: Duration, click_limit: u32) -> Link {
        Link::new(
            "abc123".to_string(),
            "http://clck.ru/abc123".to_string(),
            "https://example.com".to_string(),
            UserId::new(),
            Utc::now(),
            ttl,
            click_limit,
        )
    }

    #[test]
    fn test_link_creation() {
        let link = create_test_link(Duration::hours(24), 6);

        assert_eq!(link.short_code, "abc123");
        assert_eq!(link.original_url, "https://example.com");
        assert_eq!(link.click_count, 0);
        assert_eq!(link.click_limit, 6);
        assert!(link.is_active());
        assert!(!link.is_expired_at(link.created_at));
        assert!(!link.is_limit_reached());
        assert_eq!(link.remaining_clicks(), 6);
    }

    #[test]
    fn test_link_is_expired() {
        let link = create_test_link(Duration::hours(1), 6);
        let later = link.created_at + Duration::hours(1) + Duration::milliseconds(1);

        assert!(!link.is_expired_at(link.expires_at()));
        assert!(link.is_expired_at(later));
    }

    #[test]
    fn test_link_limit_reached_after_increments() {
        let mut link = create_test_link(Duration::hours(1), 2);

        link.increment_clicks();
        assert!(!link.is_limit_reached());

        link.increment_clicks();
        assert!(link.is_limit_reached());
        assert_eq!(link.remaining_clicks(), 0);
    }

    #[test]
    fn test_link_disable() {
        let mut link = create_test_link(Duration::hours(1), 6);
        link.disable();

        assert!(!link.is_active());
    }

    #[test]
    fn test_link_serializes_ttl_in_hours() {
        let link = create_test_link(Duration::hours(12), 6);
        let json = serde_json::to_value(&link).unwrap();

        assert_eq!(json["ttl_hours"], 12);
        assert_eq!(json["short_code"], "abc123");
        assert_eq!(json["active"], true);
    }
}
