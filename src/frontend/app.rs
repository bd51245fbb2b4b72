use std::sync::Arc;

use dioxus::html::input_data::keyboard_types::{Key, Modifiers};
use dioxus::prelude::*;

use super::components::*;
use super::types::analysis_label;
use crate::health_core::{
    run_exchange, AnalysisPlan, AssistantClient, ChatSession, SessionHandle,
};

/// Shared by every connection; one chat session is created per connection.
#[derive(Clone)]
pub struct AppProps {
    pub client: Arc<dyn AssistantClient>,
    pub plan: AnalysisPlan,
}

impl SessionHandle for UseRef<ChatSession> {
    fn update<T>(&self, f: impl FnOnce(&mut ChatSession) -> T) -> T {
        f(&mut *self.write())
    }
}

pub fn app(cx: Scope<AppProps>) -> Element {
    let session = use_ref(cx, ChatSession::new);

    let send = move |_| {
        if !session.read().can_send() {
            return;
        }

        let client = cx.props.client.clone();
        let plan = cx.props.plan;
        cx.spawn({
            to_owned![session];

            async move {
                run_exchange(&session, &plan, client.as_ref(), &mut rand::thread_rng()).await;
            }
        });
    };

    let send_enter = move |e: Event<KeyboardData>| {
        if let Key::Enter = e.data.key() {
            if !e.data.modifiers().contains(Modifiers::SHIFT) {
                send(());
            }
        }
    };

    let send_button = move |_| {
        send(());
    };

    let state = session.read();
    let metrics = state.metrics().clone();
    let draft = state.draft().to_string();
    let loading = state.is_loading();
    let send_disabled = !state.can_send();
    let step = analysis_label(state.progress());
    let percent = state.progress().percent();

    cx.render(rsx!(
        style { include_str!("./style.css") }
        Header {}
        div {
            id: "layout",
            div {
                id: "sidebar",
                MetricsPanel { metrics: metrics }
                SpecialtyPanel {}
                QuickActions {
                    on_pick: move |query: &'static str| session.write().quick_action(query),
                }
            }
            div {
                id: "chat-card",
                ChatHeader {}
                div {
                    id: "chat-window",
                    class: "chat-window",
                    for message in state.messages().iter() {
                        MessageView { key: "{message.id}", message: message.clone() }
                    }
                    if loading {
                        rsx!(AnalysisIndicator { label: step, percent: percent })
                    }
                }
                div {
                    id: "input-area",
                    input {
                        id: "user-input",
                        placeholder: "Describe your symptoms, ask for medications, find doctors, or request treatment plans...",
                        value: "{draft}",
                        disabled: "{loading}",
                        oninput: move |e| session.write().set_draft(e.value.clone()),
                        onkeydown: send_enter,
                    }
                    button {
                        id: "send-button",
                        disabled: "{send_disabled}",
                        onclick: send_button,
                        "➤"
                    }
                }
                Footer {}
            }
        }
    ))
}
