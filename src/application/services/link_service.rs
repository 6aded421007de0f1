//! Link lifecycle: creation, redemption, limit edits and removal.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::entities::{Link, UserId};
use crate::domain::redemption::{RedeemOutcome, UnavailableReason};
use crate::domain::repositories::{LinkStore, Retention};
use crate::error::AppError;
use crate::infrastructure::opener::UrlOpener;
use crate::utils::code_generator::CodeGenerator;
use crate::utils::short_url::{code_from_input, short_url};

/// Attempts before code generation is declared failed.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Bounds applied to every link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    /// Upper bound on a link's lifetime, in hours.
    pub max_lifetime_hours: u32,
    /// Lower bound on a link's click limit.
    pub min_clicks_limit: u32,
}

impl LinkPolicy {
    /// Clamps a requested lifetime into `0..=max_lifetime_hours`.
    pub fn lifetime_hours(&self, requested: i64) -> u32 {
        requested.clamp(0, i64::from(self.max_lifetime_hours)) as u32
    }

    /// Raises a requested click limit to at least `min_clicks_limit`.
    pub fn click_limit(&self, requested: i64) -> u32 {
        requested.clamp(i64::from(self.min_clicks_limit), i64::from(u32::MAX)) as u32
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self {
            max_lifetime_hours: 24,
            min_clicks_limit: 6,
        }
    }
}

/// Service enforcing the link policy on top of a [`LinkStore`].
///
/// Every operation takes the caller's identity explicitly; the service keeps no
/// session state. All operations are synchronous and bounded: each one is a
/// single per-key critical section in the store, except the sweep, which locks
/// one shard at a time.
pub struct LinkService<S: LinkStore, G: CodeGenerator> {
    store: Arc<S>,
    generator: Arc<G>,
    opener: Arc<dyn UrlOpener>,
    policy: LinkPolicy,
    base_url: String,
}

impl<S: LinkStore, G: CodeGenerator> LinkService<S, G> {
    /// Creates a new link service.
    pub fn new(
        store: Arc<S>,
        generator: Arc<G>,
        opener: Arc<dyn UrlOpener>,
        policy: LinkPolicy,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            generator,
            opener,
            policy,
            base_url: base_url.into(),
        }
    }

    pub fn policy(&self) -> LinkPolicy {
        self.policy
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of links currently stored.
    pub fn link_count(&self) -> usize {
        self.store.len()
    }

    /// Creates a short link owned by `owner`.
    ///
    /// The lifetime is clamped down to the configured maximum and the click
    /// limit raised to the configured minimum. A code already in the store is
    /// regenerated, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free code was found.
    pub fn create(
        &self,
        owner: UserId,
        original_url: impl Into<String>,
        requested_click_limit: i64,
        requested_lifetime_hours: i64,
    ) -> Result<Link, AppError> {
        let original_url = original_url.into();
        let lifetime_hours = self.policy.lifetime_hours(requested_lifetime_hours);
        let click_limit = self.policy.click_limit(requested_click_limit);
        let ttl = Duration::hours(i64::from(lifetime_hours));

        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = self.generator.generate();
            let link = Link::new(
                code.clone(),
                short_url(&self.base_url, &code),
                original_url.clone(),
                owner,
                Utc::now(),
                ttl,
                click_limit,
            );

            match self.store.insert_new(link) {
                Ok(link) => {
                    info!(
                        code = %link.short_code,
                        owner = %owner,
                        click_limit,
                        lifetime_hours,
                        "Short link created"
                    );
                    metrics::counter!("links_created_total").increment(1);
                    return Ok(link);
                }
                Err(_) => debug!(code, attempt, "Short code collision, regenerating"),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Too many collisions", "attempts": MAX_CODE_ATTEMPTS }),
        ))
    }

    /// Resolves a short code (or full short URL) and consumes one click.
    ///
    /// # State machine
    ///
    /// 1. Unknown code: [`RedeemOutcome::NotFound`], nothing changes.
    /// 2. Inactive, expired or limit reached: the link is disabled and evicted,
    ///    [`RedeemOutcome::Unavailable`].
    /// 3. Otherwise one click is consumed. If that was the last permitted click
    ///    the link is disabled and evicted, [`RedeemOutcome::OpenedAndExpired`];
    ///    else [`RedeemOutcome::Opened`].
    ///
    /// Steps 1 to 3 happen under the entry's lock, so concurrent callers can
    /// never both take the final click. The opener runs after the lock is
    /// released; its failure is logged and reported as `opened: false` but the
    /// click stays consumed.
    pub fn redeem(&self, code_or_url: &str) -> RedeemOutcome {
        let code = code_from_input(&self.base_url, code_or_url);
        let now = Utc::now();
        let mut unavailable = None;

        let updated = self.store.update(code, &mut |link| {
            if let Some(reason) = UnavailableReason::of(link, now) {
                unavailable = Some(reason);
                link.disable();
                return Retention::Evict;
            }

            link.increment_clicks();
            if link.is_limit_reached() {
                link.disable();
                Retention::Evict
            } else {
                Retention::Keep
            }
        });

        let Some(updated) = updated else {
            debug!(code, "Redeem of unknown code");
            return RedeemOutcome::NotFound;
        };

        if let Some(reason) = unavailable {
            info!(code, ?reason, "Unavailable link evicted on redeem");
            metrics::counter!("links_evicted_total", "reason" => "unavailable").increment(1);
            return RedeemOutcome::Unavailable { reason };
        }

        metrics::counter!("links_redeemed_total").increment(1);
        let link = updated.link;

        let opened = match self.opener.open(&link.original_url) {
            Ok(()) => true,
            Err(e) => {
                warn!(code, error = %e, "Failed to open link");
                false
            }
        };

        if updated.retention == Retention::Evict {
            info!(code, clicks = link.click_count, "Click limit reached, link evicted");
            metrics::counter!("links_evicted_total", "reason" => "limit_reached").increment(1);
            RedeemOutcome::OpenedAndExpired { link, opened }
        } else {
            debug!(code, clicks = link.click_count, limit = link.click_limit, "Link redeemed");
            RedeemOutcome::Opened { link, opened }
        }
    }

    /// Changes the click limit of a link owned by `requester`.
    ///
    /// The new limit is raised to the configured minimum. Lowering it below the
    /// current click count makes the link unusable but does not evict it; that
    /// happens on the next redeem or sweep.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the link does not exist
    /// - [`AppError::Unauthorized`] if `requester` is not the owner
    pub fn edit_limit(
        &self,
        requester: UserId,
        code_or_url: &str,
        new_limit: i64,
    ) -> Result<Link, AppError> {
        let code = code_from_input(&self.base_url, code_or_url);
        let effective = self.policy.click_limit(new_limit);
        let mut owner_mismatch = false;

        let updated = self.store.update(code, &mut |link| {
            if link.owner_id == requester {
                link.click_limit = effective;
            } else {
                owner_mismatch = true;
            }
            Retention::Keep
        });

        let updated = updated.ok_or_else(|| link_not_found(code))?;
        if owner_mismatch {
            warn!(code, requester = %requester, "Limit edit refused: not the owner");
            return Err(not_owner(code));
        }

        info!(code, click_limit = effective, "Click limit changed");
        Ok(updated.link)
    }

    /// Deletes a link owned by `requester`.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the link does not exist
    /// - [`AppError::Unauthorized`] if `requester` is not the owner
    pub fn remove_link(&self, requester: UserId, code_or_url: &str) -> Result<Link, AppError> {
        let code = code_from_input(&self.base_url, code_or_url);

        let updated = self.store.update(code, &mut |link| {
            if link.owner_id == requester {
                Retention::Evict
            } else {
                Retention::Keep
            }
        });

        let updated = updated.ok_or_else(|| link_not_found(code))?;
        if !updated.evicted() {
            warn!(code, requester = %requester, "Removal refused: not the owner");
            return Err(not_owner(code));
        }

        info!(code, "Link removed by owner");
        Ok(updated.link)
    }

    /// Removes every expired link regardless of owner or state.
    ///
    /// Idempotent. Returns how many links were removed.
    pub fn remove_expired_links(&self) -> usize {
        let now = Utc::now();
        let removed = self.store.remove_where(&|link| link.is_expired_at(now));

        info!(removed, "Expired links swept");
        metrics::counter!("links_swept_total").increment(removed as u64);
        removed
    }

    /// Links owned by `owner`, oldest first.
    pub fn links_of(&self, owner: UserId) -> Vec<Link> {
        let mut links: Vec<Link> = self
            .store
            .find_all()
            .into_iter()
            .filter(|link| link.owner_id == owner)
            .collect();
        links.sort_by_key(|link| link.created_at);
        links
    }

    /// Point lookup without side effects.
    pub fn find(&self, code_or_url: &str) -> Option<Link> {
        self.store.find(code_from_input(&self.base_url, code_or_url))
    }
}

fn link_not_found(code: &str) -> AppError {
    AppError::not_found("The link was not found", json!({ "code": code }))
}

fn not_owner(code: &str) -> AppError {
    AppError::unauthorized("You are not the owner of this link", json!({ "code": code }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::MemoryLinkStore;
    use crate::infrastructure::opener::{MockUrlOpener, NullOpener, OpenError};
    use crate::utils::code_generator::{MockCodeGenerator, RandomCodeGenerator};

    const BASE: &str = "http://clck.ru/";

    fn create_test_service(
        store: Arc<MemoryLinkStore>,
    ) -> LinkService<MemoryLinkStore, RandomCodeGenerator> {
        LinkService::new(
            store,
            Arc::new(RandomCodeGenerator::default()),
            Arc::new(NullOpener),
            LinkPolicy::default(),
            BASE,
        )
    }

    fn store_link(store: &MemoryLinkStore, code: &str, owner: UserId, ttl: Duration) -> Link {
        store.save(Link::new(
            code.to_string(),
            short_url(BASE, code),
            "https://example.com".to_string(),
            owner,
            Utc::now() - Duration::hours(2),
            ttl,
            6,
        ))
    }

    #[test]
    fn test_policy_clamps_both_directions() {
        let policy = LinkPolicy::default();

        assert_eq!(policy.lifetime_hours(100), 24);
        assert_eq!(policy.lifetime_hours(5), 5);
        assert_eq!(policy.lifetime_hours(-3), 0);
        assert_eq!(policy.click_limit(3), 6);
        assert_eq!(policy.click_limit(10), 10);
        assert_eq!(policy.click_limit(-1), 6);
    }

    #[test]
    fn test_create_applies_policy() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let owner = UserId::new();

        let link = service.create(owner, "https://example.com", 3, 100).unwrap();

        assert_eq!(link.click_limit, 6);
        assert_eq!(link.ttl, Duration::hours(24));
        assert_eq!(link.click_count, 0);
        assert!(link.active);
        assert_eq!(link.owner_id, owner);
        assert_eq!(link.short_code.len(), 6);
        assert_eq!(link.short_url, format!("{BASE}{}", link.short_code));
        assert_eq!(store.find(&link.short_code), Some(link));
    }

    #[test]
    fn test_create_retries_on_collision() {
        let store = Arc::new(MemoryLinkStore::new());
        store_link(&store, "taken1", UserId::new(), Duration::hours(24));

        let mut generator = MockCodeGenerator::new();
        let mut seq = mockall::Sequence::new();
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "taken1".to_string());
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "fresh1".to_string());

        let service = LinkService::new(
            store.clone(),
            Arc::new(generator),
            Arc::new(NullOpener),
            LinkPolicy::default(),
            BASE,
        );

        let link = service.create(UserId::new(), "https://rust-lang.org", 6, 1).unwrap();

        assert_eq!(link.short_code, "fresh1");
        assert_eq!(store.find("taken1").unwrap().original_url, "https://example.com");
    }

    #[test]
    fn test_create_gives_up_after_max_attempts() {
        let store = Arc::new(MemoryLinkStore::new());
        store_link(&store, "taken1", UserId::new(), Duration::hours(24));

        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|| "taken1".to_string());

        let service = LinkService::new(
            store,
            Arc::new(generator),
            Arc::new(NullOpener),
            LinkPolicy::default(),
            BASE,
        );

        let result = service.create(UserId::new(), "https://rust-lang.org", 6, 1);
        assert!(matches!(result, Err(AppError::Internal { .. })));
    }

    #[test]
    fn test_redeem_unknown_code() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());

        assert_eq!(service.redeem("nope00"), RedeemOutcome::NotFound);
        assert!(store.is_empty());
    }

    #[test]
    fn test_redeem_accepts_full_short_url() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let link = service.create(UserId::new(), "https://example.com", 6, 1).unwrap();

        let outcome = service.redeem(&link.short_url);

        assert!(matches!(outcome, RedeemOutcome::Opened { .. }));
        assert_eq!(store.find(&link.short_code).unwrap().click_count, 1);
    }

    #[test]
    fn test_redeem_counts_until_limit_then_evicts() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let link = service.create(UserId::new(), "https://example.com", 6, 1).unwrap();
        let code = link.short_code.clone();

        let mut last_count = 0;
        for _ in 0..5 {
            match service.redeem(&code) {
                RedeemOutcome::Opened { link, opened } => {
                    assert!(opened);
                    assert!(link.click_count > last_count);
                    last_count = link.click_count;
                }
                other => panic!("unexpected outcome {other:?}"),
            }
        }

        match service.redeem(&code) {
            RedeemOutcome::OpenedAndExpired { link, .. } => {
                assert_eq!(link.click_count, 6);
                assert!(!link.active);
            }
            other => panic!("unexpected outcome {other:?}"),
        }

        assert!(!store.contains(&code));
        assert_eq!(service.redeem(&code), RedeemOutcome::NotFound);
    }

    #[test]
    fn test_redeem_expired_link_is_evicted() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        store_link(&store, "old001", UserId::new(), Duration::hours(1));

        assert_eq!(
            service.redeem("old001"),
            RedeemOutcome::Unavailable {
                reason: UnavailableReason::Expired
            }
        );
        assert!(!store.contains("old001"));
    }

    #[test]
    fn test_redeem_after_limit_lowered_is_unavailable() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let owner = UserId::new();
        let link = service.create(owner, "https://example.com", 8, 1).unwrap();
        let code = link.short_code.clone();

        for _ in 0..7 {
            assert!(service.redeem(&code).is_success());
        }
        service.edit_limit(owner, &code, 1).unwrap();

        // Lowering the limit does not evict by itself.
        assert!(store.contains(&code));
        assert_eq!(
            service.redeem(&code),
            RedeemOutcome::Unavailable {
                reason: UnavailableReason::LimitReached
            }
        );
        assert!(!store.contains(&code));
    }

    #[test]
    fn test_redeem_open_failure_still_consumes_click() {
        let store = Arc::new(MemoryLinkStore::new());
        let mut opener = MockUrlOpener::new();
        opener
            .expect_open()
            .withf(|url| url == "https://example.com")
            .times(1)
            .returning(|url| {
                Err(OpenError {
                    url: url.to_string(),
                    reason: "no browser".to_string(),
                })
            });

        let service = LinkService::new(
            store.clone(),
            Arc::new(RandomCodeGenerator::default()),
            Arc::new(opener),
            LinkPolicy::default(),
            BASE,
        );
        let link = service.create(UserId::new(), "https://example.com", 6, 1).unwrap();

        match service.redeem(&link.short_code) {
            RedeemOutcome::Opened { opened, link } => {
                assert!(!opened);
                assert_eq!(link.click_count, 1);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(store.find(&link.short_code).unwrap().click_count, 1);
    }

    #[test]
    fn test_redeem_unavailable_does_not_open() {
        let store = Arc::new(MemoryLinkStore::new());
        let mut opener = MockUrlOpener::new();
        opener.expect_open().times(0);

        let service = LinkService::new(
            store.clone(),
            Arc::new(RandomCodeGenerator::default()),
            Arc::new(opener),
            LinkPolicy::default(),
            BASE,
        );
        store_link(&store, "old001", UserId::new(), Duration::hours(1));

        assert!(!service.redeem("old001").is_success());
    }

    #[test]
    fn test_edit_limit_by_owner() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let owner = UserId::new();
        let link = service.create(owner, "https://example.com", 6, 1).unwrap();

        let raised = service.edit_limit(owner, &link.short_code, 50).unwrap();
        assert_eq!(raised.click_limit, 50);

        let clamped = service.edit_limit(owner, &link.short_code, 2).unwrap();
        assert_eq!(clamped.click_limit, 6);
        assert_eq!(store.find(&link.short_code).unwrap().click_limit, 6);
    }

    #[test]
    fn test_edit_limit_by_stranger_is_refused() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let link = service.create(UserId::new(), "https://example.com", 9, 1).unwrap();

        let result = service.edit_limit(UserId::new(), &link.short_code, 100);

        assert!(matches!(result, Err(AppError::Unauthorized { .. })));
        assert_eq!(store.find(&link.short_code).unwrap().click_limit, 9);
    }

    #[test]
    fn test_edit_limit_unknown_code() {
        let service = create_test_service(Arc::new(MemoryLinkStore::new()));
        let result = service.edit_limit(UserId::new(), "nope00", 10);
        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_remove_link_ownership() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let owner = UserId::new();
        let link = service.create(owner, "https://example.com", 6, 1).unwrap();

        let refused = service.remove_link(UserId::new(), &link.short_code);
        assert!(matches!(refused, Err(AppError::Unauthorized { .. })));
        assert!(store.contains(&link.short_code));

        let removed = service.remove_link(owner, &link.short_url).unwrap();
        assert_eq!(removed.short_code, link.short_code);
        assert!(!store.contains(&link.short_code));

        let again = service.remove_link(owner, &link.short_code);
        assert!(matches!(again, Err(AppError::NotFound { .. })));
    }

    #[test]
    fn test_remove_expired_links_mixture() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store.clone());
        let owner = UserId::new();

        store_link(&store, "exp001", owner, Duration::hours(1));
        let mut inactive_expired = store_link(&store, "exp002", UserId::new(), Duration::hours(1));
        inactive_expired.disable();
        store.save(inactive_expired);
        store_link(&store, "live01", owner, Duration::hours(24));
        let mut inactive_live = store_link(&store, "live02", UserId::new(), Duration::hours(24));
        inactive_live.disable();
        store.save(inactive_live);

        assert_eq!(service.remove_expired_links(), 2);
        assert!(!store.contains("exp001"));
        assert!(!store.contains("exp002"));
        assert!(store.contains("live01"));
        assert!(store.contains("live02"));

        assert_eq!(service.remove_expired_links(), 0);
    }

    #[test]
    fn test_links_of_filters_by_owner() {
        let store = Arc::new(MemoryLinkStore::new());
        let service = create_test_service(store);
        let alice = UserId::new();
        let bob = UserId::new();

        service.create(alice, "https://a.example", 6, 1).unwrap();
        service.create(bob, "https://b.example", 6, 1).unwrap();
        service.create(alice, "https://c.example", 6, 1).unwrap();

        let links = service.links_of(alice);
        assert_eq!(links.len(), 2);
        assert!(links.iter().all(|link| link.owner_id == alice));
    }
}
