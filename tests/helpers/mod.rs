#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use portfolio::{AppState, router};
use portfolio_contact::OutboundMessage;
use portfolio_notification::{DeliveryError, Mailer, Relay};
use tower::ServiceExt;

pub const OPERATOR: &str = "contact@example.com";

/// Keeps every message handed to it
#[derive(Clone, Default)]
pub struct RecordingMailer {
    sent: Arc<Mutex<Vec<OutboundMessage>>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<OutboundMessage> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: &OutboundMessage) -> Result<(), DeliveryError> {
        self.sent.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Counts attempts and fails every one of them
#[derive(Clone, Default)]
pub struct FailingMailer {
    attempts: Arc<Mutex<usize>>,
}

impl FailingMailer {
    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: &OutboundMessage) -> Result<(), DeliveryError> {
        *self.attempts.lock().unwrap() += 1;
        Err(DeliveryError::Timeout(Duration::from_secs(10)))
    }
}

pub fn create_test_app(mailer: impl Mailer + 'static) -> Router {
    let relay = Relay::new(mailer, OPERATOR, Duration::from_secs(5));

    router(AppState { relay })
}

pub async fn post_contact(app: &Router, body: impl Into<Body>) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, serde_json::from_slice(&bytes).unwrap())
}
