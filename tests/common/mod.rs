//! Shared test helpers and scripted generation client.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use roastline::client::GenerationClient;
use roastline::error::RoastError;
use roastline::types::{Actor, GenerationRequest, GenerationResponse};

/// A client that replays queued responses and records every request.
///
/// When the queue runs dry it fails with a network-style error.
pub struct ScriptedClient {
    script: Mutex<VecDeque<Result<GenerationResponse, RoastError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedClient {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful text response.
    pub fn then_text(self, text: &str) -> Self {
        self.script.lock().unwrap().push_back(Ok(GenerationResponse {
            text: text.to_string(),
            tokens_used: 30,
            latency_ms: 100,
        }));
        self
    }

    /// Queue a response with explicit usage figures.
    pub fn then_response(self, response: GenerationResponse) -> Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    /// Queue an error.
    pub fn then_error(self, error: RoastError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl GenerationClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResponse, RoastError> {
        self.requests.lock().unwrap().push(request.clone());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(RoastError::api(503, "script exhausted")))
    }
}

/// A client that always fails.
pub struct DownClient;

#[async_trait]
impl GenerationClient for DownClient {
    fn name(&self) -> &str {
        "down"
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> Result<GenerationResponse, RoastError> {
        Err(RoastError::Provider {
            provider: "gateway".into(),
            message: "connection refused".into(),
        })
    }
}

pub fn gpt() -> Actor {
    Actor::new("GPT-4o", "openai", "gpt-4o")
}

pub fn claude() -> Actor {
    Actor::new("Claude", "anthropic", "claude-3-5-sonnet")
}

pub const FOUR_BARS: &str = "Your context window's small and your answers are slow,\n\
My tokens hit harder everywhere that I go,\n\
You hallucinate facts like it's part of the show,\n\
I'm the model they trust when the stakes are high and low.";
