#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, Response},
    Router,
};
use chrono::{DateTime, TimeZone, Utc};
use pipeline_backend::{
    build_router,
    config::Config,
    models::candidate::{Candidate, CandidateStatus},
    store::MemoryCandidateStore,
    utils::token::issue_token,
    AppState,
};
use serde_json::Value as JsonValue;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test_secret_key";

pub fn jan(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap()
}

fn seed(name: &str, role: &str, experience: u32, status: CandidateStatus, day: u32) -> Candidate {
    Candidate {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: None,
        role: role.to_string(),
        experience,
        status,
        resume: None,
        notes: String::new(),
        applied_date: jan(day),
        last_updated: jan(day),
    }
}

pub fn seed_pool() -> Vec<Candidate> {
    vec![
        seed("Alice Johnson", "Frontend Developer", 3, CandidateStatus::Applied, 15),
        seed("Bob Smith", "Backend Developer", 5, CandidateStatus::Applied, 10),
        seed("Carol White", "UX Designer", 2, CandidateStatus::Interview, 5),
        seed("David Brown", "Backend Developer", 7, CandidateStatus::Offer, 12),
        seed("Eve Davis", "QA Engineer", 1, CandidateStatus::Rejected, 8),
    ]
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryCandidateStore>,
    pub token: String,
}

impl TestApp {
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let store = Arc::new(MemoryCandidateStore::with_candidates(candidates));
        let config = Config::for_tests(JWT_SECRET);
        let state = AppState::new(store.clone(), config.jwt_secret.clone());
        let token = issue_token(&config.jwt_secret, "recruiter-1", Some("hr"), 3600).expect("token");
        Self {
            router: build_router(state, config.api_rps),
            store,
            token,
        }
    }

    pub fn request(&self, method: &str, uri: &str, body: Option<JsonValue>) -> Request<Body> {
        let builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("authorization", format!("Bearer {}", self.token));
        match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        }
    }
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    to_bytes(resp.into_body(), 1024 * 1024).await.unwrap().to_vec()
}

pub async fn body_json(resp: Response<Body>) -> JsonValue {
    serde_json::from_slice(&body_bytes(resp).await).unwrap()
}
