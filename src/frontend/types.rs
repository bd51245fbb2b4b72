use crate::health_core::{AnalysisProgress, HealthMetrics, MessageKind, Severity};
use crate::utils::group_thousands;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub label: &'static str,
    pub value: String,
    pub color: &'static str,
}

pub fn metric_rows(metrics: &HealthMetrics) -> Vec<MetricRow> {
    vec![
        MetricRow {
            label: "Total Cases",
            value: group_thousands(metrics.total_interactions),
            color: "text-blue",
        },
        MetricRow {
            label: "AI Accuracy",
            value: format!("{}%", metrics.accuracy),
            color: "text-green",
        },
        MetricRow {
            label: "Response Time",
            value: format!("{:.1}s", metrics.response_time),
            color: "text-purple",
        },
        MetricRow {
            label: "Success Rate",
            value: format!("{}%", metrics.success_rate),
            color: "text-yellow",
        },
        MetricRow {
            label: "Patients Helped",
            value: group_thousands(metrics.patients_helped),
            color: "text-pink",
        },
        MetricRow {
            label: "Satisfaction",
            value: format!("{}/5", metrics.user_satisfaction),
            color: "text-green",
        },
    ]
}

pub fn analysis_label(progress: &AnalysisProgress) -> &'static str {
    progress.label().unwrap_or_default()
}

pub fn kind_icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Emergency => "⚠️",
        MessageKind::SymptomAnalysis => "🔬",
        MessageKind::Medication => "💊",
        MessageKind::DoctorReferral => "🩺",
        MessageKind::TreatmentPlan => "📄",
        MessageKind::HealthTip => "✅",
        MessageKind::General => "💬",
    }
}

pub fn severity_class(severity: Option<Severity>) -> &'static str {
    match severity {
        Some(Severity::Critical) => "badge severity-critical",
        Some(Severity::High) => "badge severity-high",
        Some(Severity::Medium) => "badge severity-medium",
        Some(Severity::Low) => "badge severity-low",
        None => "badge severity-none",
    }
}
