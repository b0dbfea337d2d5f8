mod heartbeat;

use std::path::PathBuf;

use chrono::{NaiveDateTime, TimeDelta};
use clap::Parser;
use reqwest::Url;

use crate::{
    api::dtu,
    cli::heartbeat::HeartbeatArgs,
    core::{cycle, sample::Sample},
    history::{History, timestamp},
    prelude::*,
    quantity::power::Watts,
};

/// Query the DTU once and append the result to the rolling PV history.
#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// DTU real-data URL. A bare host or IP address expands to `http://<host>/api/real-data`.
    #[clap(long = "dtu-url", alias = "ip", env = "DTU_URL", value_parser = dtu::parse_url)]
    pub dtu_url: Url,

    /// Rated system capacity in watts.
    #[clap(long = "max", env = "MAX_POWER_WATTS")]
    pub capacity: Watts,

    /// History file, rewritten on every run.
    #[clap(long = "out", env = "HISTORY_PATH", default_value = "public/history_daily.json")]
    pub history_path: PathBuf,

    /// How far back the history reaches.
    #[clap(long, env = "HISTORY_RETENTION", default_value = "24h")]
    pub retention: humantime::Duration,

    /// DTU request timeout.
    #[clap(long = "timeout", env = "DTU_TIMEOUT", default_value = "10s")]
    pub timeout: humantime::Duration,

    /// Do not write the history file.
    #[clap(long)]
    pub dry_run: bool,

    #[clap(flatten)]
    pub heartbeat: HeartbeatArgs,
}

impl Args {
    /// Run one cycle. Failures degrade into fallbacks and log messages, never into an error.
    pub async fn run(self) {
        let now = timestamp::now();
        let history = History::load(&self.history_path);
        let sample = self.query_dtu(now).await;

        let (history, reconciliation) = cycle::run(history, sample, now, self.retention());
        reconciliation.report();

        if self.dry_run {
            info!(n_entries = history.len(), "dry run, not saving");
        } else {
            history.save(&self.history_path);
        }

        self.heartbeat.send(&reconciliation).await;
    }

    async fn query_dtu(&self, now: NaiveDateTime) -> Option<Sample> {
        let sample = match dtu::Client::new(self.dtu_url.clone(), *self.timeout) {
            Ok(client) => client.get_sample(now).await,
            Err(error) => {
                warn!("failed to build the DTU client: {error:#}");
                None
            }
        };
        // The capacity is only a sanity check, the reading is recorded as is.
        if let Some(sample) = &sample
            && sample.power > self.capacity
        {
            warn!(power = %sample.power, capacity = %self.capacity, "power exceeds the system capacity");
        }
        sample
    }

    fn retention(&self) -> TimeDelta {
        TimeDelta::from_std(*self.retention).unwrap_or(TimeDelta::MAX)
    }
}
