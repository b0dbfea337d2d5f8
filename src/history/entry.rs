use std::fmt::{Display, Formatter};

use bon::Builder;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_with::{FromInto, serde_as};

use crate::{
    core::sample::Sample,
    history::timestamp,
    quantity::{
        energy::{KilowattHours, MegawattHours},
        power::Watts,
    },
};

/// One record of the history file.
#[must_use]
#[serde_as]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Builder)]
pub struct Entry {
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,

    /// Instant power, stored as whole watts.
    #[serde_as(as = "FromInto<u32>")]
    #[serde(default)]
    pub power: Watts,

    /// Energy produced since local midnight.
    #[serde(default)]
    pub energy_daily: KilowattHours,

    /// Lifetime energy.
    #[serde(default)]
    pub energy_total: MegawattHours,
}

impl Entry {
    /// Zero-valued entry.
    pub fn zero(timestamp: NaiveDateTime) -> Self {
        Self::builder()
            .timestamp(timestamp)
            .power(Watts::zero())
            .energy_daily(KilowattHours::zero())
            .energy_total(MegawattHours::zero())
            .build()
    }
}

impl From<Sample> for Entry {
    fn from(sample: Sample) -> Self {
        Self::builder()
            .timestamp(sample.observed_at)
            .power(sample.power)
            .energy_daily(sample.energy_daily)
            .energy_total(sample.energy_total)
            .build()
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: power {}, daily {}, total {}",
            self.timestamp.format(timestamp::FORMAT),
            self.power,
            self.energy_daily,
            self.energy_total,
        )
    }
}
