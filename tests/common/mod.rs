//! Test helpers for integration tests.
//!
//! Provides a mock upstream feed server and helpers to build the application
//! state and an axum-test server around it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use axum_test::TestServer;
use tokio::net::TcpListener;

use sampler::config::FeedConfig;
use sampler::web::create_router;
use sampler::{
    AppState, Database, IngestionPipeline, NewPublisher, PublisherRepository, SharedDatabase,
};

/// Canned response for one publisher.
#[derive(Debug, Clone)]
pub enum MockFeed {
    /// 200 with the given body.
    Body(String),
    /// Empty body with the given status.
    Status(StatusCode),
}

#[derive(Clone)]
struct MockState {
    feeds: Arc<HashMap<String, MockFeed>>,
    delay: Duration,
    requests: Arc<AtomicUsize>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

/// Mock upstream serving `/feeds/videos.xml?channel_id=...`.
///
/// Unknown publishers get a 404.
pub struct MockFeedServer {
    addr: SocketAddr,
    state: MockState,
}

impl MockFeedServer {
    /// Start a server answering immediately.
    pub async fn start(feeds: HashMap<String, MockFeed>) -> Self {
        Self::start_with_delay(feeds, Duration::ZERO).await
    }

    /// Start a server that waits `delay` before answering each request.
    pub async fn start_with_delay(feeds: HashMap<String, MockFeed>, delay: Duration) -> Self {
        let state = MockState {
            feeds: Arc::new(feeds),
            delay,
            requests: Arc::new(AtomicUsize::new(0)),
            in_flight: Arc::new(AtomicUsize::new(0)),
            max_in_flight: Arc::new(AtomicUsize::new(0)),
        };

        let app = Router::new()
            .route("/feeds/videos.xml", get(serve_feed))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    /// Base URL to configure the fetcher with.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Requests received so far.
    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    /// Highest number of requests served at the same time.
    pub fn max_in_flight(&self) -> usize {
        self.state.max_in_flight.load(Ordering::SeqCst)
    }
}

async fn serve_feed(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, String) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    let current = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(current, Ordering::SeqCst);

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }

    let response = match params
        .get("channel_id")
        .and_then(|id| state.feeds.get(id))
    {
        Some(MockFeed::Body(body)) => (StatusCode::OK, body.clone()),
        Some(MockFeed::Status(status)) => (*status, String::new()),
        None => (StatusCode::NOT_FOUND, String::new()),
    };

    state.in_flight.fetch_sub(1, Ordering::SeqCst);
    response
}

/// Build an Atom feed whose entries are `(video_id, title)` pairs by `author`.
pub fn feed_xml(author: &str, entries: &[(&str, &str)]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns:yt="http://www.youtube.com/xml/schemas/2015" xmlns:media="http://search.yahoo.com/mrss/" xmlns="http://www.w3.org/2005/Atom">
"#,
    );
    xml.push_str(&format!(
        "<title>{author}</title>\n<author>\n<name>{author}</name>\n</author>\n"
    ));
    for (video_id, title) in entries {
        xml.push_str(&format!(
            "<entry>\n<id>yt:video:{video_id}</id>\n<yt:videoId>{video_id}</yt:videoId>\n<title>{title}</title>\n<author>\n<name>{author}</name>\n</author>\n<published>2024-01-01T00:00:00+00:00</published>\n</entry>\n"
        ));
    }
    xml.push_str("</feed>\n");
    xml
}

/// Fetcher configuration pointing at `base_url`.
pub fn feed_config(base_url: &str) -> FeedConfig {
    FeedConfig {
        base_url: base_url.to_string(),
        connect_timeout_secs: 2,
        read_timeout_secs: 2,
        total_timeout_secs: 5,
        ..FeedConfig::default()
    }
}

/// Create an in-memory database.
pub async fn create_test_db() -> SharedDatabase {
    Arc::new(
        Database::open_in_memory()
            .await
            .expect("Failed to create test database"),
    )
}

/// Register publishers with the given ids.
pub async fn seed_publishers(db: &Database, ids: &[&str]) {
    let publishers: Vec<NewPublisher> = ids
        .iter()
        .map(|id| NewPublisher::new(*id, format!("Publisher {id}")))
        .collect();
    PublisherRepository::new(db.pool())
        .insert_many(&publishers)
        .await
        .expect("Failed to seed publishers");
}

/// Create the application state around `db`, fetching from `base_url`.
pub fn create_test_state(db: SharedDatabase, base_url: &str) -> Arc<AppState> {
    let pipeline = IngestionPipeline::from_config(&feed_config(base_url))
        .expect("Failed to create pipeline");
    Arc::new(AppState::new(db, Arc::new(pipeline)))
}

/// Create an axum-test server for the full application.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(create_router(state, &[])).expect("Failed to create test server")
}

/// Make storage reject every media item with the given external id.
pub async fn reject_external_id(db: &Database, external_id: &str) {
    sqlx::query(&format!(
        "CREATE TRIGGER reject_{external_id} BEFORE INSERT ON media_items \
         WHEN NEW.external_id = '{external_id}' \
         BEGIN SELECT RAISE(ABORT, 'rejected'); END"
    ))
    .execute(db.pool())
    .await
    .expect("Failed to install trigger");
}
