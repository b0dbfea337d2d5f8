use std::fmt::{Display, Formatter};

use crate::{core::reconciler::Reconciliation, prelude::*};

impl Display for Reconciliation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.outcome, self.entry)
    }
}

impl Reconciliation {
    /// Emit the one-line cycle status.
    pub fn report(&self) {
        info!(outcome = ?self.outcome, "{self}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::reconciler::Outcome,
        history::{Entry, timestamp},
        quantity::{
            energy::{KilowattHours, MegawattHours},
            power::Watts,
        },
    };

    #[test]
    fn test_live_line() -> Result {
        let reconciliation = Reconciliation {
            outcome: Outcome::Live,
            entry: Entry::builder()
                .timestamp(timestamp::parse("2024-06-01 12:05")?)
                .power(Watts(457.0))
                .energy_daily(KilowattHours(5.12))
                .energy_total(MegawattHours(4.5))
                .build(),
        };
        assert_eq!(
            reconciliation.to_string(),
            "live DTU data appended (2024-06-01 12:05: power 457 W, daily 5.12 kWh, total 4.5 MWh)",
        );
        Ok(())
    }

    #[test]
    fn test_cold_start_line() -> Result {
        let reconciliation = Reconciliation {
            outcome: Outcome::ColdStart,
            entry: Entry::zero(timestamp::parse("2024-06-01 12:05")?),
        };
        assert_eq!(
            reconciliation.to_string(),
            "no DTU data and no history, appended zeros (2024-06-01 12:05: power 0 W, daily 0 kWh, total 0 MWh)",
        );
        Ok(())
    }

    #[test]
    fn test_every_outcome_is_named() {
        let outcomes = [
            Outcome::Live,
            Outcome::NewDayReset,
            Outcome::NightFallback,
            Outcome::NoData,
            Outcome::ColdStart,
        ];
        let lines = outcomes.map(|outcome| outcome.to_string());
        for (i, line) in lines.iter().enumerate() {
            assert!(!line.is_empty());
            assert!(lines[i + 1..].iter().all(|other| other != line));
        }
    }
}
