#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use clck::application::services::LinkPolicy;
use clck::domain::entities::{Link, UserId};
use clck::infrastructure::opener::NullOpener;
use clck::state::AppState;

pub const BASE_URL: &str = "http://clck.ru/";

pub fn create_test_state() -> AppState {
    AppState::new(LinkPolicy::default(), BASE_URL, Arc::new(NullOpener))
}

pub fn create_test_state_with_policy(max_lifetime_hours: u32, min_clicks_limit: u32) -> AppState {
    let policy = LinkPolicy {
        max_lifetime_hours,
        min_clicks_limit,
    };
    AppState::new(policy, BASE_URL, Arc::new(NullOpener))
}

pub fn register_user(state: &AppState) -> UserId {
    state.user_service.register()
}

pub fn create_test_link(state: &AppState, owner: UserId, url: &str, clicks_limit: i64) -> Link {
    state
        .link_service
        .create(owner, url, clicks_limit, 1)
        .unwrap()
}

/// Creates a zero-lifetime link and waits until it is past its expiry.
pub async fn create_expired_link(state: &AppState, owner: UserId, url: &str) -> Link {
    let link = state.link_service.create(owner, url, 10, 0).unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;
    link
}
