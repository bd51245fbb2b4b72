use rand::Rng;

use super::assistant::{AssistantClient, AssistantResult};
use super::metrics::HealthMetrics;
use super::progress::{AnalysisPlan, AnalysisProgress};
use super::types::{ChatRequest, Message};

pub const HISTORY_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Composing,
    AwaitingResponse,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<Message>,
    draft: String,
    in_flight: bool,
    progress: AnalysisProgress,
    metrics: HealthMetrics,
}

impl Default for ChatSession {
    fn default() -> Self {
        ChatSession::new()
    }
}

impl ChatSession {
    pub fn new() -> ChatSession {
        ChatSession {
            messages: vec![Message::welcome()],
            draft: String::new(),
            in_flight: false,
            progress: AnalysisProgress::default(),
            metrics: HealthMetrics::default(),
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn progress(&self) -> &AnalysisProgress {
        &self.progress
    }

    pub fn metrics(&self) -> &HealthMetrics {
        &self.metrics
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight
    }

    pub fn phase(&self) -> Phase {
        if self.in_flight {
            Phase::AwaitingResponse
        } else if self.draft.trim().is_empty() {
            Phase::Idle
        } else {
            Phase::Composing
        }
    }

    pub fn can_send(&self) -> bool {
        self.phase() == Phase::Composing
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn quick_action(&mut self, query: &str) {
        self.draft = query.to_string();
    }

    pub fn submit_draft(&mut self) -> Option<ChatRequest> {
        let text = std::mem::take(&mut self.draft);
        let request = self.submit(&text);
        if request.is_none() {
            self.draft = text;
        }
        request
    }

    /// Returns `None` and leaves the session untouched when `text` is blank
    /// or a request is already outstanding.
    pub fn submit(&mut self, text: &str) -> Option<ChatRequest> {
        if self.in_flight || text.trim().is_empty() {
            return None;
        }

        let start = self.messages.len().saturating_sub(HISTORY_WINDOW);
        let history = self.messages[start..].to_vec();

        self.messages.push(Message::user(text));
        self.draft.clear();
        self.in_flight = true;
        self.progress.reset();

        Some(ChatRequest {
            message: text.to_string(),
            history,
        })
    }

    pub fn enter_stage(&mut self, stage: usize) {
        if self.in_flight {
            self.progress.enter(stage);
        }
    }

    pub fn finish<R: Rng>(&mut self, result: AssistantResult, rng: &mut R) {
        if !self.in_flight {
            return;
        }

        match result {
            Ok(reply) => {
                self.messages.push(Message::from_reply(reply));
                self.metrics.record_exchange(rng);
            }
            Err(err) => {
                tracing::error!("Error sending message: {}", err);
                self.messages.push(Message::emergency_fallback());
            }
        }

        self.in_flight = false;
        self.progress.reset();
    }
}

pub trait SessionHandle {
    fn update<T>(&self, f: impl FnOnce(&mut ChatSession) -> T) -> T;
}

/// Submits the draft, walks the analysis stages, asks the assistant and
/// records the outcome. Returns `false` if the draft was not sendable.
pub async fn run_exchange<S, C, R>(
    session: &S,
    plan: &AnalysisPlan,
    client: &C,
    rng: &mut R,
) -> bool
where
    S: SessionHandle,
    C: AssistantClient + ?Sized,
    R: Rng,
{
    let Some(request) = session.update(ChatSession::submit_draft) else {
        return false;
    };
    tracing::info!(
        history = request.history.len(),
        "submitting question to assistant"
    );

    plan.run(|stage| session.update(|s| s.enter_stage(stage))).await;
    let result = client.send(&request).await;
    session.update(|s| s.finish(result, rng));
    true
}
