use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{ensure, Context, Result};
use dotenvy::dotenv;

use crate::health_core::DEFAULT_STEP_DELAY;

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/api/advanced-chat";

/// Runtime settings, read from the environment (and `.env` if present).
///
/// | variable                 | default                                    |
/// |--------------------------|--------------------------------------------|
/// | `LISTEN_ADDR`            | `127.0.0.1:3030`                           |
/// | `REACHABLE_ADDR`         | same as `LISTEN_ADDR`                      |
/// | `ASSISTANT_ENDPOINT`     | `http://127.0.0.1:3000/api/advanced-chat`  |
/// | `ANALYSIS_STEP_MS`       | `400`                                      |
/// | `ASSISTANT_TIMEOUT_SECS` | unset (wait forever), must be > 0 if set   |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub listen_addr: SocketAddr,
    pub reachable_addr: String,
    pub assistant_endpoint: String,
    pub analysis_step: Duration,
    pub assistant_timeout: Option<Duration>,
}

impl Settings {
    pub fn from_env() -> Result<Settings> {
        dotenv().ok();
        Settings::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Settings> {
        let listen = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("LISTEN_ADDR `{listen}` is not a socket address"))?;

        let reachable_addr = lookup("REACHABLE_ADDR").unwrap_or(listen);
        let assistant_endpoint =
            lookup("ASSISTANT_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let analysis_step = match lookup("ANALYSIS_STEP_MS") {
            Some(ms) => Duration::from_millis(
                ms.parse()
                    .with_context(|| format!("ANALYSIS_STEP_MS `{ms}` is not a number"))?,
            ),
            None => DEFAULT_STEP_DELAY,
        };

        let assistant_timeout = match lookup("ASSISTANT_TIMEOUT_SECS") {
            Some(secs) => {
                let secs: u64 = secs
                    .parse()
                    .with_context(|| format!("ASSISTANT_TIMEOUT_SECS `{secs}` is not a number"))?;
                ensure!(secs > 0, "ASSISTANT_TIMEOUT_SECS must be at least 1");
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Settings {
            listen_addr,
            reachable_addr,
            assistant_endpoint,
            analysis_step,
            assistant_timeout,
        })
    }
}
