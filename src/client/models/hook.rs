//! Webhook models

use serde::{Deserialize, Serialize};

/// A webhook registered on a stack
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hook {
    pub id: String,
    pub url: String,
}

/// Request body for registering or updating a hook
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookParams {
    pub url: String,
}

impl HookParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Outcome of triggering a test delivery for a hook
///
/// The request that was sent sits under `result`; the hook URL's answer is
/// a top-level `response`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookTest {
    pub id: String,
    pub result: HookTestResult,
    pub response: HookTestResponse,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookTestResult {
    pub request: HookTestRequest,
}

/// What was sent to the hook URL
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookTestRequest {
    pub url: String,
    pub body: String,
}

/// What the hook URL answered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookTestResponse {
    pub code: String,
    pub body: String,
    pub message: String,
}
