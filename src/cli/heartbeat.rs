use std::time::Duration;

use clap::Parser;
use reqwest::{Client, Url};

use crate::{core::reconciler::Reconciliation, prelude::*};

#[derive(Parser)]
pub struct HeartbeatArgs {
    /// URL to POST the cycle status to after every run, for dead man's switch monitoring.
    #[clap(long = "heartbeat-url", env = "HEARTBEAT_URL")]
    pub url: Option<Url>,
}

impl HeartbeatArgs {
    pub async fn send(&self, reconciliation: &Reconciliation) {
        if let Some(url) = &self.url
            && let Err(error) = Self::send_fallible(url.clone(), reconciliation.to_string()).await
        {
            warn!("failed to send the heartbeat: {error:#}");
        }
    }

    #[instrument(skip_all, fields(url = %url))]
    async fn send_fallible(url: Url, status: String) -> Result {
        debug!("sending a heartbeat…");
        Client::builder()
            .timeout(Duration::from_secs(3))
            .build()?
            .post(url)
            .body(status)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}
