#![allow(non_snake_case)]

use dioxus::prelude::*;

use super::types::*;
use crate::health_core::{
    Doctor, HealthMetrics, Medication, Message, Treatment, QUICK_ACTIONS, SPECIALTIES,
};
use crate::utils::clock_time;

pub fn Header(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            id: "header",
            div {
                class: "brand",
                div { class: "brand-logo", "❤️" }
                div {
                    h1 { "FellSync Advanced" }
                    p { class: "subtitle", "Next-Gen AI Medical Platform" }
                }
            }
            div {
                class: "header-badges",
                span { class: "badge badge-green", "⚡ Live AI" }
                span { class: "badge badge-blue", "🛡️ HIPAA Secure" }
                span { class: "badge badge-purple", "✨ Advanced AI" }
                span { class: "badge badge-orange", "🏆 Premium" }
            }
        }
    ))
}

pub fn ChatHeader(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            id: "chat-header",
            div {
                class: "brand",
                div { class: "avatar assistant-avatar", "🤖" }
                div {
                    h2 { "Advanced Medical AI" }
                    p { class: "subtitle", "Powered by Next-Gen Healthcare Intelligence" }
                }
            }
            div {
                class: "header-badges",
                span { class: "badge badge-green", "🕒 24/7 Available" }
                span { class: "badge badge-purple", "🧠 AI Powered" }
            }
        }
    ))
}

pub fn Footer(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            id: "footer",
            p { "🔒 End-to-end encrypted • HIPAA compliant • AI-powered medical assistance" }
            p { "⚠️ For emergencies, call 911 immediately" }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct MetricsProps {
    metrics: HealthMetrics,
}

pub fn MetricsPanel(cx: Scope<MetricsProps>) -> Element {
    let rows = metric_rows(&cx.props.metrics);
    cx.render(rsx!(
        div {
            class: "panel",
            h3 { "📈 AI Performance" }
            for row in rows.iter() {
                div {
                    class: "metric-row",
                    span { class: "metric-label", "{row.label}" }
                    span { class: "metric-value {row.color}", "{row.value}" }
                }
            }
        }
    ))
}

pub fn SpecialtyPanel(cx: Scope) -> Element {
    cx.render(rsx!(
        div {
            class: "panel",
            h3 { "🔬 Medical Specialties" }
            for specialty in SPECIALTIES.iter() {
                div {
                    class: "specialty-row",
                    span { class: "{specialty.color}", "{specialty.icon}" }
                    span { class: "specialty-name", "{specialty.name}" }
                    span { class: "badge badge-purple", "{specialty.patients}" }
                }
            }
        }
    ))
}

#[derive(Props)]
pub struct QuickActionProps<'a> {
    on_pick: EventHandler<'a, &'static str>,
}

pub fn QuickActions<'a>(cx: Scope<'a, QuickActionProps<'a>>) -> Element<'a> {
    cx.render(rsx!(
        div {
            class: "panel",
            h3 { "✨ Quick Actions" }
            for action in QUICK_ACTIONS.iter() {
                button {
                    class: "quick-action {action.gradient}",
                    onclick: move |_| cx.props.on_pick.call(action.query),
                    span { class: "quick-icon", "{action.icon}" }
                    span { "{action.label}" }
                }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct MessageProps {
    message: Message,
}

pub fn MessageView(cx: Scope<MessageProps>) -> Element {
    let message = &cx.props.message;
    let (row, avatar, bubble, meta) = if message.is_user() {
        ("message-row user-row", "👤", "bubble user-bubble", "meta meta-user")
    } else {
        ("message-row", "🤖", "bubble assistant-bubble", "meta")
    };
    let time = clock_time(&message.timestamp);

    let show_tags = !message.is_user() && message.kind.is_some();
    let kind_label = message.kind.map(|kind| kind.label()).unwrap_or_default();
    let icon = message.kind.map(kind_icon).unwrap_or_default();
    let show_severity = show_tags && message.severity.is_some();
    let severity = message.severity.map(|s| s.as_str()).unwrap_or_default();
    let severity_cls = severity_class(message.severity);

    let medications = message.medications.clone().unwrap_or_default();
    let doctors = message.doctors.clone().unwrap_or_default();
    let treatments = message.treatments.clone().unwrap_or_default();

    cx.render(rsx!(
        div {
            class: "{row}",
            div { class: "avatar", "{avatar}" }
            div {
                class: "message-body",
                div {
                    class: "{bubble}",
                    div { class: "message-text", "{message.content}" }
                    MedicationCards { medications: medications }
                    DoctorCards { doctors: doctors }
                    TreatmentCards { treatments: treatments }
                }
                div {
                    class: "{meta}",
                    if show_tags {
                        rsx!(
                            span { class: "kind-icon", "{icon}" }
                            span { class: "badge kind-badge", "{kind_label}" }
                        )
                    }
                    if show_severity {
                        rsx!(span { class: "{severity_cls}", "{severity}" })
                    }
                    span { class: "time", "{time}" }
                }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct MedicationsProps {
    medications: Vec<Medication>,
}

pub fn MedicationCards(cx: Scope<MedicationsProps>) -> Element {
    if cx.props.medications.is_empty() {
        return None;
    }
    cx.render(rsx!(
        div {
            class: "record-group medications",
            h4 { "💊 Recommended Medications" }
            for medication in cx.props.medications.iter() {
                MedicationCard { medication: medication.clone() }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct MedicationProps {
    medication: Medication,
}

fn MedicationCard(cx: Scope<MedicationProps>) -> Element {
    let med = &cx.props.medication;
    let side_effects = med.side_effects.join(", ");
    let precautions = med.precautions.join(", ");
    cx.render(rsx!(
        div {
            class: "record-card",
            div {
                class: "record-title",
                h5 { "{med.name}" }
                span { class: "badge badge-cost", "{med.cost}" }
            }
            p { strong { "Dosage: " } "{med.dosage}" }
            p { strong { "Frequency: " } "{med.frequency}" }
            p { strong { "Duration: " } "{med.duration}" }
            if !side_effects.is_empty() {
                rsx!(p { strong { "Side effects: " } "{side_effects}" })
            }
            if !precautions.is_empty() {
                rsx!(p { strong { "Precautions: " } "{precautions}" })
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct DoctorsProps {
    doctors: Vec<Doctor>,
}

pub fn DoctorCards(cx: Scope<DoctorsProps>) -> Element {
    if cx.props.doctors.is_empty() {
        return None;
    }
    cx.render(rsx!(
        div {
            class: "record-group doctors",
            h4 { "🩺 Recommended Specialists" }
            for doctor in cx.props.doctors.iter() {
                DoctorCard { doctor: doctor.clone() }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct DoctorProps {
    doctor: Doctor,
}

fn DoctorCard(cx: Scope<DoctorProps>) -> Element {
    let doctor = &cx.props.doctor;
    cx.render(rsx!(
        div {
            class: "record-card",
            div {
                class: "record-title",
                h5 { "Dr. {doctor.name}" }
                span { class: "rating", "⭐ {doctor.rating}" }
                span { class: "badge badge-cost", "{doctor.consultation_fee}" }
            }
            p { strong { "Specialty: " } "{doctor.specialty}" }
            p { strong { "Experience: " } "{doctor.experience}" }
            p { "📍 {doctor.location}" }
            p { "📞 {doctor.phone}" }
            if !doctor.availability.is_empty() {
                rsx!(p { strong { "Availability: " } "{doctor.availability}" })
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct TreatmentsProps {
    treatments: Vec<Treatment>,
}

pub fn TreatmentCards(cx: Scope<TreatmentsProps>) -> Element {
    if cx.props.treatments.is_empty() {
        return None;
    }
    cx.render(rsx!(
        div {
            class: "record-group treatments",
            h4 { "📄 Treatment Plan" }
            for treatment in cx.props.treatments.iter() {
                TreatmentCard { treatment: treatment.clone() }
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct TreatmentProps {
    treatment: Treatment,
}

fn TreatmentCard(cx: Scope<TreatmentProps>) -> Element {
    let treatment = &cx.props.treatment;
    let requirements = treatment.requirements.join(", ");
    cx.render(rsx!(
        div {
            class: "record-card",
            div {
                class: "record-title",
                h5 { "{treatment.name}" }
                span { class: "effectiveness", "🎯 {treatment.effectiveness}% effective" }
                span { class: "badge badge-cost", "{treatment.cost}" }
            }
            p { "{treatment.description}" }
            p { strong { "Duration: " } "{treatment.duration}" }
            if !requirements.is_empty() {
                rsx!(p { strong { "Requirements: " } "{requirements}" })
            }
        }
    ))
}

#[derive(PartialEq, Props)]
pub struct AnalysisProps {
    label: &'static str,
    percent: f64,
}

pub fn AnalysisIndicator(cx: Scope<AnalysisProps>) -> Element {
    let label = cx.props.label;
    let width = format!("{:.1}", cx.props.percent);
    cx.render(rsx!(
        div {
            class: "message-row",
            div { class: "avatar pulse", "🤖" }
            div {
                class: "bubble assistant-bubble",
                div {
                    class: "thinking",
                    div { class: "spinner" }
                    span { "Advanced AI Analysis..." }
                }
                if !label.is_empty() {
                    rsx!(
                        p { class: "analysis-step", "{label}" }
                        div {
                            class: "progress",
                            div { class: "progress-bar", style: "width: {width}%" }
                        }
                    )
                }
            }
        }
    ))
}
