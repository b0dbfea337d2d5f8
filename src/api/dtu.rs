//! DTU real-data client.
//!
//! Expects a gateway exposing the DTU real-data response as JSON: a `pv_data` array
//! with one record per PV input, power in tenths of a watt and energies in watt-hours.

use std::time::Duration;

use chrono::NaiveDateTime;
use reqwest::Url;
use serde::Deserialize;
use serde_with::{DefaultOnNull, serde_as};

use crate::{
    core::sample::Sample,
    prelude::*,
    quantity::{
        energy::{KilowattHours, MegawattHours},
        power::Watts,
    },
};

pub struct Client {
    inner: reqwest::Client,
    url: Url,
}

impl Client {
    #[instrument(skip_all, fields(url = %url))]
    pub fn new(url: Url, timeout: Duration) -> Result<Self> {
        let inner = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { inner, url })
    }

    /// Query the DTU, turning any failure or an empty response into `None`.
    pub async fn get_sample(&self, observed_at: NaiveDateTime) -> Option<Sample> {
        match self.get_real_data().await {
            Ok(real_data) => {
                let sample = real_data.into_sample(observed_at);
                if sample.is_none() {
                    warn!("the DTU responded without PV data");
                }
                sample
            }
            Err(error) => {
                warn!("failed to query the DTU: {error:#}");
                None
            }
        }
    }

    #[instrument(skip_all, fields(url = %self.url))]
    async fn get_real_data(&self) -> Result<RealData> {
        let real_data: RealData = self
            .inner
            .get(self.url.clone())
            .send()
            .await
            .with_context(|| format!("failed to request the real data from `{}`", self.url))?
            .error_for_status()?
            .json()
            .await
            .with_context(|| format!("failed to deserialize the response from `{}`", self.url))?;
        debug!(n_inputs = real_data.pv_data.len(), "received");
        Ok(real_data)
    }
}

/// Accept either a full URL or a bare DTU host.
pub fn parse_url(value: &str) -> Result<Url> {
    if value.contains("://") {
        Url::parse(value).with_context(|| format!("invalid DTU URL `{value}`"))
    } else {
        Url::parse(&format!("http://{value}/api/real-data"))
            .with_context(|| format!("invalid DTU address `{value}`"))
    }
}

#[must_use]
#[serde_as]
#[derive(Deserialize)]
pub struct RealData {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub pv_data: Vec<PvData>,
}

#[must_use]
#[derive(Copy, Clone, Deserialize)]
pub struct PvData {
    /// Tenths of a watt.
    #[serde(default)]
    pub power: f64,

    /// Watt-hours since midnight.
    #[serde(default)]
    pub energy_daily: f64,

    /// Lifetime watt-hours.
    #[serde(default)]
    pub energy_total: f64,
}

impl RealData {
    /// Sum up the PV inputs, `None` if there are none.
    pub fn into_sample(self, observed_at: NaiveDateTime) -> Option<Sample> {
        if self.pv_data.is_empty() {
            return None;
        }
        let sum = |field: fn(&PvData) -> f64| self.pv_data.iter().map(field).sum::<f64>();
        Some(
            Sample::builder()
                .observed_at(observed_at)
                .power(Watts::from_deciwatts(sum(|pv| pv.power)))
                .energy_daily(KilowattHours::from_watt_hours(sum(|pv| pv.energy_daily)))
                .energy_total(MegawattHours::from_watt_hours(sum(|pv| pv.energy_total)))
                .build(),
        )
    }
}
