//! Outcome of a single redemption attempt.

use serde::Serialize;

use crate::domain::entities::Link;
use chrono::{DateTime, Utc};

/// Why a stored link could not be redeemed.
///
/// When several conditions hold at once, the first in declaration order is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnavailableReason {
    Inactive,
    Expired,
    LimitReached,
}

impl UnavailableReason {
    /// Classifies an unusable link, or returns `None` if it is still usable.
    pub fn of(link: &Link, now: DateTime<Utc>) -> Option<Self> {
        if !link.is_active() {
            Some(Self::Inactive)
        } else if link.is_expired_at(now) {
            Some(Self::Expired)
        } else if link.is_limit_reached() {
            Some(Self::LimitReached)
        } else {
            None
        }
    }
}

/// Terminal result of [`crate::application::services::LinkService::redeem`].
///
/// `opened` reports whether the URL opener succeeded; the click is consumed
/// either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedeemOutcome {
    /// No link with that code.
    NotFound,
    /// The link existed but was unusable; it has been evicted.
    Unavailable { reason: UnavailableReason },
    /// One click consumed; the link remains.
    Opened { link: Link, opened: bool },
    /// The final permitted click was consumed; the link has been evicted.
    OpenedAndExpired { link: Link, opened: bool },
}

impl RedeemOutcome {
    /// Returns true if the URL was served.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Opened { .. } | Self::OpenedAndExpired { .. })
    }

    /// The redeemed link, for successful outcomes.
    pub fn link(&self) -> Option<&Link> {
        match self {
            Self::Opened { link, .. } | Self::OpenedAndExpired { link, .. } => Some(link),
            Self::NotFound | Self::Unavailable { .. } => None,
        }
    }
}
