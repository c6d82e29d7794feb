//! Shared harness for the HTTP tests.
//!
//! Each `TestApp` owns a private in-memory SQLite database, so tests never see
//! each other's bags.

#![allow(dead_code)]

use api::{router, AppState};
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use bags::{Bag, BagStore, NewBag, SqlBagStore};
use http_body_util::BodyExt;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub store: SqlBagStore,
}

impl TestApp {
    pub async fn new() -> Self {
        let pool = db::pool::create_pool("sqlite::memory:", 1)
            .await
            .expect("in-memory pool should open");
        db::pool::run_migrations(&pool)
            .await
            .expect("migrations should apply");

        let store = SqlBagStore::new(pool);
        let router = router(AppState::new(store.clone()));

        Self { router, store }
    }

    /// Seed John (4), Mark (7) and Lucy (3) directly through the store.
    pub async fn seed(&self) -> Vec<Bag> {
        let mut seeded = Vec::new();
        for (player, capacity) in [("John", 4), ("Mark", 7), ("Lucy", 3)] {
            let bag = self
                .store
                .insert_bag(NewBag { player: player.into(), capacity })
                .await
                .expect("seed insert");
            seeded.push(bag);
        }
        seeded
    }

    pub async fn get(&self, uri: &str) -> Response {
        let request = Request::builder()
            .uri(uri)
            .method("GET")
            .body(Body::empty())
            .expect("valid request");
        self.router.clone().oneshot(request).await.expect("infallible")
    }

    /// POST `fields` as `application/x-www-form-urlencoded`.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> Response {
        let request = Request::builder()
            .uri(uri)
            .method("POST")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(encode_form(fields)))
            .expect("valid request");
        self.router.clone().oneshot(request).await.expect("infallible")
    }

    /// Assert `response` is a 303 and GET its `Location`, returning the
    /// location and the page body.
    pub async fn follow(&self, response: Response) -> (String, String) {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        let location = location(&response);
        let page = self.get(&location).await;
        assert_eq!(page.status(), StatusCode::OK, "GET {location}");
        (location, body_text(page).await)
    }
}

pub fn location(response: &Response) -> String {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect has a Location header")
        .to_str()
        .expect("ascii location")
        .to_owned()
}

pub async fn body_text(response: Response) -> String {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(body.to_vec()).expect("utf-8 body")
}

/// Minimal urlencoding: test values only contain letters, digits and spaces.
fn encode_form(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{k}={}", v.replace(' ', "+")))
        .collect::<Vec<_>>()
        .join("&")
}

// ---------------------------------------------------------------------------
// Page assertions
// ---------------------------------------------------------------------------

/// The list page shows `bag`'s id, player and capacity.
pub fn assert_listed(html: &str, bag: &Bag) {
    assert!(html.contains(&format!(r#"<td class="bag-id">{}</td>"#, bag.id)), "id {} missing", bag.id);
    assert!(html.contains(&bag.player), "{} missing", bag.player);
    assert!(html.contains(&format!(r#"<td class="bag-capacity">{}</td>"#, bag.capacity)));
}

pub fn assert_not_listed(html: &str, bag: &Bag) {
    assert!(!html.contains(&format!(r#"<td class="bag-id">{}</td>"#, bag.id)), "id {} present", bag.id);
    assert!(!html.contains(&bag.player), "{} present", bag.player);
    assert!(!html.contains(&format!(r#"<td class="bag-capacity">{}</td>"#, bag.capacity)));
    assert!(!html.contains(&format!("/bags/delete/{}\"", bag.id)));
}

/// A detail or edit page describes `bag`.
pub fn assert_describes(html: &str, bag: &Bag) {
    assert!(html.contains(&format!(r#"<dd class="bag-id">{}</dd>"#, bag.id)));
    assert!(html.contains(&format!(r#"<dd class="bag-player">{}</dd>"#, bag.player)));
    assert!(html.contains(&format!(r#"<dd class="bag-capacity">{}</dd>"#, bag.capacity)));
}

/// A detail or edit page carries nothing from `other`.
pub fn assert_excludes(html: &str, other: &Bag) {
    assert!(!html.contains(&other.player), "{} leaked", other.player);
    assert!(!html.contains(&format!(r#"<dd class="bag-id">{}</dd>"#, other.id)));
    assert!(!html.contains(&format!(r#"<dd class="bag-capacity">{}</dd>"#, other.capacity)));
    assert!(!html.contains(&format!("/bags/{}\"", other.id)));
    assert!(!html.contains(&format!("/bags/{}/", other.id)));
}
