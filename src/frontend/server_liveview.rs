use std::sync::Arc;

use anyhow::Result;
use axum::{extract::ws::WebSocketUpgrade, response::Html, routing::get, Router};
use indoc::formatdoc;

use super::app::{app, AppProps};
use crate::config::Settings;
use crate::health_core::{AnalysisPlan, AssistantClient, HttpAssistant};

pub async fn start_server() -> Result<()> {
    let settings = Settings::from_env()?;
    let addr = settings.listen_addr;
    let reachable_addr = settings.reachable_addr.clone();

    let assistant = match settings.assistant_timeout {
        Some(timeout) => HttpAssistant::with_timeout(&settings.assistant_endpoint, timeout)?,
        None => HttpAssistant::new(&settings.assistant_endpoint),
    };
    tracing::info!(endpoint = assistant.endpoint(), "assistant endpoint configured");

    let props = AppProps {
        client: Arc::new(assistant) as Arc<dyn AssistantClient>,
        plan: AnalysisPlan::new(settings.analysis_step),
    };

    let view = dioxus_liveview::LiveViewPool::new();

    let router = Router::new()
        .route(
            "/",
            get(move || async move { Html(shell_page(&reachable_addr)) }),
        )
        .route(
            "/ws",
            get(move |ws: WebSocketUpgrade| async move {
                ws.on_upgrade(move |socket| async move {
                    tracing::debug!("chat session opened");
                    if let Err(err) = view
                        .launch_with_props(dioxus_liveview::axum_socket(socket), app, props)
                        .await
                    {
                        tracing::warn!("chat session ended with error: {:?}", err);
                    }
                })
            }),
        );

    tracing::info!("Listening on http://{addr}");

    axum::Server::bind(&addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

fn shell_page(reachable_addr: &str) -> String {
    formatdoc!(
        r#"
        <!DOCTYPE html>
        <html>
            <head>
                <title>FellSync Advanced</title>
                <meta charset="utf-8">
                <meta name="viewport"
                content="width=device-width,
                initial-scale=1,
                minimum-scale=1,
                maximum-scale=1,
                user-scalable=no">
            </head>
            <body> <div id="main"></div> </body>
            {glue}
        </html>
        "#,
        glue = dioxus_liveview::interpreter_glue(&format!("ws://{reachable_addr}/ws"))
    )
}
