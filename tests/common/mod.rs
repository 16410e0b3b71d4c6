#![allow(dead_code)]

use curtail::application::services::{LinkService, RedirectService};
use curtail::infrastructure::dns::NullResolver;
use curtail::infrastructure::persistence::PgLinkRepository;
use curtail::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

/// Base URL the test state renders short URLs under.
pub const TEST_BASE_URL: &str = "http://short.test";

/// Builds an [`AppState`] over the given pool.
///
/// Uses [`NullResolver`] so shorten tests never touch the network.
pub fn create_test_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(repository.clone(), Arc::new(NullResolver)));
    let redirect_service = Arc::new(RedirectService::new(repository));

    AppState {
        link_service,
        redirect_service,
        base_url: TEST_BASE_URL.to_string(),
    }
}

pub async fn create_test_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url) VALUES ($1, $2)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_test_link_aged(pool: &PgPool, code: &str, url: &str, age_minutes: i32) {
    sqlx::query(
        "INSERT INTO links (code, target_url, created_at)
         VALUES ($1, $2, NOW() - make_interval(mins => $3))",
    )
    .bind(code)
    .bind(url)
    .bind(age_minutes)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn create_deleted_link(pool: &PgPool, code: &str, url: &str) {
    sqlx::query("INSERT INTO links (code, target_url, deleted) VALUES ($1, $2, TRUE)")
        .bind(code)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn fetch_total_clicks(pool: &PgPool, code: &str) -> i64 {
    sqlx::query_scalar("SELECT total_clicks FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn is_deleted(pool: &PgPool, code: &str) -> bool {
    sqlx::query_scalar("SELECT deleted FROM links WHERE code = $1")
        .bind(code)
        .fetch_one(pool)
        .await
        .unwrap()
}
