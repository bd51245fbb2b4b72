mod assistant;
mod catalog;
mod metrics;
mod progress;
mod session;
mod types;

pub use assistant::{AssistantClient, AssistantError, AssistantResult, HttpAssistant};
pub use catalog::{QuickAction, Specialty, QUICK_ACTIONS, SPECIALTIES};
pub use metrics::HealthMetrics;
pub use progress::{AnalysisPlan, AnalysisProgress, ANALYSIS_STEPS, DEFAULT_STEP_DELAY};
pub use session::{run_exchange, ChatSession, Phase, SessionHandle, HISTORY_WINDOW};
pub use types::*;
