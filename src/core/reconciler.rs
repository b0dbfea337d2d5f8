//! Decide what to record for a sampling cycle.
//!
//! The DTU goes to sleep together with the inverters at night and then either
//! stops answering or reports zeros and occasionally a slightly lower lifetime
//! counter. The last recorded entry is the trusted baseline: power may drop to
//! zero, but the counters never go back, and the daily counter is reset only
//! once at the first entry of a new calendar day.

use chrono::NaiveDateTime;

use crate::{
    core::sample::Sample,
    history::Entry,
    quantity::{energy::KilowattHours, power::Watts},
};

/// Path taken by [`reconcile`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, derive_more::Display)]
pub enum Outcome {
    /// The sample is recorded as reported.
    #[display("live DTU data appended")]
    Live,

    /// First sample of a calendar day: the daily counter starts from zero.
    #[display("new day, daily energy reset")]
    NewDayReset,

    /// The DTU reported implausible counters, the last known ones are kept.
    #[display("DTU reported stale counters, kept the last known ones")]
    NightFallback,

    /// No sample, the last entry is carried over.
    #[display("no DTU data, appended fallback")]
    NoData,

    /// No sample and no history.
    #[display("no DTU data and no history, appended zeros")]
    ColdStart,
}

/// The entry to append and how it was obtained.
#[must_use]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Reconciliation {
    pub outcome: Outcome,
    pub entry: Entry,
}

/// Produce the entry to append given the fresh sample (if any) and the last retained entry.
pub fn reconcile(
    sample: Option<Sample>,
    last_entry: Option<&Entry>,
    new_day: bool,
    now: NaiveDateTime,
) -> Reconciliation {
    match (sample.map(Sample::round), last_entry) {
        (Some(sample), last_entry) if new_day => {
            // The DTU may not have caught up after midnight, so its lifetime counter is not trusted.
            let entry = Entry {
                energy_daily: KilowattHours::zero(),
                energy_total: last_entry.map_or(sample.energy_total, |entry| entry.energy_total),
                ..Entry::from(sample)
            };
            Reconciliation { outcome: Outcome::NewDayReset, entry }
        }

        (Some(sample), Some(last_entry)) => reconcile_same_day(sample, last_entry),

        (Some(sample), None) => Reconciliation { outcome: Outcome::Live, entry: sample.into() },

        (None, Some(last_entry)) => {
            let entry = Entry {
                timestamp: now,
                power: Watts::zero(),
                energy_daily: if new_day { KilowattHours::zero() } else { last_entry.energy_daily },
                energy_total: last_entry.energy_total,
            };
            Reconciliation { outcome: Outcome::NoData, entry }
        }

        (None, None) => Reconciliation { outcome: Outcome::ColdStart, entry: Entry::zero(now) },
    }
}

fn reconcile_same_day(sample: Sample, last_entry: &Entry) -> Reconciliation {
    let mut entry = Entry::from(sample);
    let mut outcome = Outcome::Live;

    // Zero power and zero daily energy is what a sleeping DTU reports.
    if sample.power == Watts::zero() && sample.energy_daily == KilowattHours::zero() {
        entry.energy_daily = last_entry.energy_daily;
        outcome = Outcome::NightFallback;
    }

    if sample.energy_total < last_entry.energy_total {
        entry.energy_total = last_entry.energy_total;
        outcome = Outcome::NightFallback;
    }

    Reconciliation { outcome, entry }
}
