pub mod check;
pub mod server;

use anyhow::{Context, Result};
use cf_cheat_detector_libs::{Detector, StandardCodeforcesClient};
use std::{env, time::Duration};

const DEFAULT_API_URL: &str = "https://codeforces.com/api/";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Build a detector from `CODEFORCES_API_URL` and `CODEFORCES_API_TIMEOUT`.
pub fn create_detector() -> Result<Detector<StandardCodeforcesClient>> {
    let api_url = env::var("CODEFORCES_API_URL").unwrap_or_else(|_| {
        tracing::warn!(
            "CODEFORCES_API_URL environment variable is not set. Default value `{}` will be used.",
            DEFAULT_API_URL
        );
        String::from(DEFAULT_API_URL)
    });
    let timeout = match env::var("CODEFORCES_API_TIMEOUT") {
        Ok(timeout) => timeout.parse::<u64>().with_context(|| {
            let message = format!("CODEFORCES_API_TIMEOUT must be seconds, got `{}`", timeout);
            tracing::error!(message);
            message
        })?,
        Err(_) => DEFAULT_TIMEOUT_SECONDS,
    };

    let client = StandardCodeforcesClient::new(&api_url, Duration::from_secs(timeout))
        .with_context(|| {
            let message = format!("couldn't create Codeforces API client for {}", api_url);
            tracing::error!(message);
            message
        })?;

    Ok(Detector::new(client))
}
