quantity!(KilowattHours, f64, "kWh");
quantity!(MegawattHours, f64, "MWh");

impl KilowattHours {
    pub const fn from_watt_hours(watt_hours: f64) -> Self {
        Self(watt_hours / 1_000.0)
    }

    /// Round to two decimal places, the precision kept in the history.
    #[must_use]
    pub fn round(self) -> Self {
        Self(round_to_hundredths(self.0))
    }
}

impl MegawattHours {
    pub const fn from_watt_hours(watt_hours: f64) -> Self {
        Self(watt_hours / 1_000_000.0)
    }

    /// Round to two decimal places, the precision kept in the history.
    #[must_use]
    pub fn round(self) -> Self {
        Self(round_to_hundredths(self.0))
    }
}

/// Ties go to the even hundredth: 0.125 becomes 0.12.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
