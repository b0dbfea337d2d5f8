use bon::Builder;
use chrono::NaiveDateTime;

use crate::quantity::{
    energy::{KilowattHours, MegawattHours},
    power::Watts,
};

/// Decoded DTU reading, summed over all PV inputs.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Builder)]
pub struct Sample {
    pub observed_at: NaiveDateTime,
    pub power: Watts,
    pub energy_daily: KilowattHours,
    pub energy_total: MegawattHours,
}

impl Sample {
    /// Round to the precision of the history: whole watts and hundredths of an energy unit.
    pub fn round(self) -> Self {
        Self {
            observed_at: self.observed_at,
            power: self.power.round(),
            energy_daily: self.energy_daily.round(),
            energy_total: self.energy_total.round(),
        }
    }
}
