use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const WELCOME_ID: &str = "welcome";

pub const WELCOME_TEXT: &str = "🏥 Welcome to FellSync Advanced Health Platform! I'm your AI Medical Assistant powered by cutting-edge healthcare AI. I can provide comprehensive medical analysis, medication recommendations, doctor referrals, and complete treatment plans. How can I help optimize your health today?";

pub const FALLBACK_TEXT: &str = "🚨 System temporarily unavailable. For immediate medical emergencies, please call 911 or visit your nearest emergency room.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    General,
    HealthTip,
    SymptomAnalysis,
    Emergency,
    Medication,
    DoctorReferral,
    TreatmentPlan,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::General => "general",
            MessageKind::HealthTip => "health-tip",
            MessageKind::SymptomAnalysis => "symptom-analysis",
            MessageKind::Emergency => "emergency",
            MessageKind::Medication => "medication",
            MessageKind::DoctorReferral => "doctor-referral",
            MessageKind::TreatmentPlan => "treatment-plan",
        }
    }

    /// Badge text, e.g. `symptom analysis`.
    pub fn label(&self) -> String {
        self.as_str().replacen('-', " ", 1)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageKind {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s {
            "general" => MessageKind::General,
            "health-tip" => MessageKind::HealthTip,
            "symptom-analysis" => MessageKind::SymptomAnalysis,
            "emergency" => MessageKind::Emergency,
            "medication" => MessageKind::Medication,
            "doctor-referral" => MessageKind::DoctorReferral,
            "treatment-plan" => MessageKind::TreatmentPlan,
            other => return Err(UnknownTag(other.to_string())),
        };
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            "critical" => Ok(Severity::Critical),
            other => Err(UnknownTag(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown tag `{}`", self.0)
    }
}

impl std::error::Error for UnknownTag {}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Medication {
    #[serde(deserialize_with = "loose_text")]
    pub name: String,
    #[serde(deserialize_with = "loose_text")]
    pub dosage: String,
    #[serde(deserialize_with = "loose_text")]
    pub frequency: String,
    #[serde(deserialize_with = "loose_text")]
    pub duration: String,
    #[serde(deserialize_with = "loose_list")]
    pub side_effects: Vec<String>,
    #[serde(deserialize_with = "loose_list")]
    pub precautions: Vec<String>,
    #[serde(deserialize_with = "loose_text")]
    pub cost: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Doctor {
    #[serde(deserialize_with = "loose_text")]
    pub name: String,
    #[serde(deserialize_with = "loose_text")]
    pub specialty: String,
    #[serde(deserialize_with = "loose_number")]
    pub rating: f64,
    #[serde(deserialize_with = "loose_text")]
    pub experience: String,
    #[serde(deserialize_with = "loose_text")]
    pub location: String,
    #[serde(deserialize_with = "loose_text")]
    pub phone: String,
    #[serde(deserialize_with = "loose_text")]
    pub availability: String,
    #[serde(deserialize_with = "loose_text")]
    pub consultation_fee: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Treatment {
    #[serde(deserialize_with = "loose_text")]
    pub name: String,
    #[serde(deserialize_with = "loose_text")]
    pub description: String,
    #[serde(deserialize_with = "loose_text")]
    pub duration: String,
    #[serde(deserialize_with = "loose_number")]
    pub effectiveness: f64,
    #[serde(deserialize_with = "loose_text")]
    pub cost: String,
    #[serde(deserialize_with = "loose_list")]
    pub requirements: Vec<String>,
}

/// One entry of the conversation. Never edited after it is pushed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub content: String,
    pub role: Role,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MessageKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medications: Option<Vec<Medication>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doctors: Option<Vec<Doctor>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatments: Option<Vec<Treatment>>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Message {
        Message {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            role: Role::User,
            timestamp: Utc::now(),
            kind: None,
            severity: None,
            medications: None,
            doctors: None,
            treatments: None,
        }
    }

    pub fn welcome() -> Message {
        Message {
            id: WELCOME_ID.to_string(),
            content: WELCOME_TEXT.to_string(),
            role: Role::Assistant,
            timestamp: Utc::now(),
            kind: Some(MessageKind::General),
            severity: None,
            medications: None,
            doctors: None,
            treatments: None,
        }
    }

    /// The reply shown whenever the assistant endpoint cannot be reached.
    pub fn emergency_fallback() -> Message {
        Message {
            id: uuid::Uuid::new_v4().to_string(),
            content: FALLBACK_TEXT.to_string(),
            role: Role::Assistant,
            timestamp: Utc::now(),
            kind: Some(MessageKind::Emergency),
            severity: Some(Severity::Critical),
            medications: None,
            doctors: None,
            treatments: None,
        }
    }

    pub fn from_reply(reply: AssistantReply) -> Message {
        Message {
            id: uuid::Uuid::new_v4().to_string(),
            content: reply.response,
            role: Role::Assistant,
            timestamp: Utc::now(),
            kind: reply.kind,
            severity: reply.severity,
            medications: reply.medications,
            doctors: reply.doctors,
            treatments: reply.treatments,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<Message>,
}

/// Fields of the endpoint's reply that the chat consumes. Anything else is ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssistantReply {
    pub response: String,
    #[serde(rename = "type", default, deserialize_with = "lenient_tag")]
    pub kind: Option<MessageKind>,
    #[serde(default, deserialize_with = "lenient_tag")]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub medications: Option<Vec<Medication>>,
    #[serde(default)]
    pub doctors: Option<Vec<Doctor>>,
    #[serde(default)]
    pub treatments: Option<Vec<Treatment>>,
}

// Tags outside the known set are dropped rather than failing the whole reply.
fn lenient_tag<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = UnknownTag>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|tag| match tag.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::debug!("ignoring reply tag: {}", err);
            None
        }
    }))
}

// Record fields come straight from the assistant service. Nulls and
// mistyped scalars become defaults instead of rejecting the reply.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Number(f64),
    Text(String),
    Flag(bool),
    Other(serde::de::IgnoredAny),
}

impl Loose {
    fn into_text(self) -> String {
        match self {
            Loose::Number(n) => n.to_string(),
            Loose::Text(text) => text,
            Loose::Flag(flag) => flag.to_string(),
            Loose::Other(_) => String::new(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseList {
    Many(Vec<Loose>),
    One(Loose),
}

fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Option::<Loose>::deserialize(deserializer)?;
    Ok(raw.map(Loose::into_text).unwrap_or_default())
}

fn loose_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let number = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Number(n)) => n,
        Some(Loose::Text(text)) => text.trim().trim_end_matches('%').parse().unwrap_or_default(),
        _ => 0.0,
    };
    Ok(number)
}

fn loose_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = match Option::<LooseList>::deserialize(deserializer)? {
        Some(LooseList::Many(items)) => items,
        Some(LooseList::One(item)) => vec![item],
        None => Vec::new(),
    };
    Ok(items
        .into_iter()
        .map(Loose::into_text)
        .filter(|item| !item.is_empty())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_label() {
        assert_eq!(MessageKind::SymptomAnalysis.label(), "symptom analysis");
        assert_eq!(MessageKind::General.label(), "general");
        assert_eq!("doctor-referral".parse::<MessageKind>().unwrap(), MessageKind::DoctorReferral);
        assert!("referral".parse::<MessageKind>().is_err());
    }

    #[test]
    fn test_reply_decoding() {
        let reply: AssistantReply = serde_json::from_value(json!({
            "response": "Take it easy.",
            "type": "medication",
            "severity": "medium",
            "medications": [{
                "name": "Ibuprofen",
                "dosage": "200mg",
                "frequency": "every 6 hours",
                "duration": "3 days",
                "sideEffects": ["nausea"],
                "precautions": ["take with food"],
                "cost": "$8"
            }],
            "confidence": 0.9
        }))
        .unwrap();

        assert_eq!(reply.kind, Some(MessageKind::Medication));
        assert_eq!(reply.severity, Some(Severity::Medium));
        let meds = reply.medications.unwrap();
        assert_eq!(meds[0].side_effects, vec!["nausea".to_string()]);
        assert!(reply.doctors.is_none());
    }

    #[test]
    fn test_reply_decoding_loose_records() {
        let reply: AssistantReply = serde_json::from_value(json!({
            "response": "ok",
            "doctors": [
                { "name": "A", "rating": 4.5, "availability": null },
                { "name": "B", "rating": "4.8", "phone": 5550100, "consultationFee": null }
            ],
            "medications": [
                { "name": "Paracetamol", "sideEffects": null, "precautions": "avoid alcohol", "cost": 12 }
            ],
            "treatments": [
                { "name": "Rest", "effectiveness": "85%", "requirements": ["sleep", null] },
                { "name": "Hydration", "effectiveness": null, "duration": {"days": 3} }
            ]
        }))
        .unwrap();

        let doctors = reply.doctors.unwrap();
        assert_eq!(doctors[0].availability, "");
        assert_eq!(doctors[0].rating, 4.5);
        assert_eq!(doctors[1].rating, 4.8);
        assert_eq!(doctors[1].phone, "5550100");
        assert_eq!(doctors[1].consultation_fee, "");

        let meds = reply.medications.unwrap();
        assert!(meds[0].side_effects.is_empty());
        assert_eq!(meds[0].precautions, vec!["avoid alcohol".to_string()]);
        assert_eq!(meds[0].cost, "12");

        let treatments = reply.treatments.unwrap();
        assert_eq!(treatments[0].effectiveness, 85.0);
        assert_eq!(treatments[0].requirements, vec!["sleep".to_string()]);
        assert_eq!(treatments[1].effectiveness, 0.0);
        assert_eq!(treatments[1].duration, "");
    }

    #[test]
    fn test_reply_unknown_tags() {
        let reply: AssistantReply = serde_json::from_value(json!({
            "response": "Hello",
            "type": "horoscope",
            "severity": null
        }))
        .unwrap();
        assert_eq!(reply.kind, None);
        assert_eq!(reply.severity, None);
    }

    #[test]
    fn test_message_wire_shape() {
        let value = serde_json::to_value(Message::emergency_fallback()).unwrap();
        assert_eq!(value["role"], "assistant");
        assert_eq!(value["type"], "emergency");
        assert_eq!(value["severity"], "critical");
        assert!(value.get("medications").is_none());

        let value = serde_json::to_value(Message::user("hi")).unwrap();
        assert!(value.get("type").is_none());
        assert_eq!(value["content"], "hi");
    }
}
