#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use pantrychef_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_MODEL: &str = "gemini-test";
pub const MODEL_PATH: &str = "/v1beta/models/gemini-test:generateContent";

/// Router under test wired to a stub standing in for the Gemini API.
pub struct TestApp {
    pub server: TestServer,
    pub upstream: MockServer,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> TestApp {
        let upstream = MockServer::start().await;
        let server = build_server(&upstream, &[]);

        TestApp { server, upstream }
    }
}

pub fn build_server(upstream: &MockServer, extra_args: &[&str]) -> TestServer {
    let uri = upstream.uri();
    let mut argv = vec![
        "pantrychef-api",
        "--gemini-api-key",
        "test-api-key",
        "--gemini-model",
        TEST_MODEL,
        "--gemini-base-url",
        uri.as_str(),
        "--request-timeout",
        "5",
        "--max-ingredients",
        "20",
    ];
    argv.extend_from_slice(extra_args);

    let args = Args::try_parse_from(argv).expect("valid test arguments");
    let app_state = state(Arc::new(args)).expect("application state");
    let router = router(app_state).expect("router");

    TestServer::new(router).expect("test server")
}

pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }]
    })
}

pub fn sample_recipe() -> Value {
    json!({
        "recipe_name": "Chicken Fried Rice",
        "description": "A quick fried rice",
        "cuisine_type": "Chinese",
        "prep_time": "10",
        "cook_time": "15",
        "servings": "2",
        "difficulty": "Easy",
        "ingredients": [
            {"item": "chicken", "quantity": "200", "unit": "g"},
            {"item": "rice", "quantity": "2", "unit": "cups"}
        ],
        "instructions": ["Cook rice", "Stir fry chicken", "Combine and season"],
        "nutritional_info": {"calories": "520", "protein": "35g", "carbs": "60g", "fat": "14g"},
        "tips": ["Use cold rice"]
    })
}

impl TestApp {
    pub async fn mock_model_reply(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(text)))
            .mount(&self.upstream)
            .await;
    }

    pub async fn mock_model_error(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path(MODEL_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.upstream)
            .await;
    }

    /// Fails the test on drop if the upstream model gets called.
    pub async fn expect_no_model_call(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.upstream)
            .await;
    }
}
