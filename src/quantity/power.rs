quantity!(Watts, f64, "W");

impl Watts {
    /// The DTU reports power in tenths of a watt.
    pub const fn from_deciwatts(deciwatts: f64) -> Self {
        Self(deciwatts / 10.0)
    }

    /// Nearest whole watt, ties to even.
    #[must_use]
    pub fn round(self) -> Self {
        Self(self.0.round_ties_even())
    }
}

impl From<u32> for Watts {
    fn from(watts: u32) -> Self {
        Self(f64::from(watts))
    }
}

/// Whole watts with ties to even, negative values saturate to zero.
impl From<Watts> for u32 {
    #[expect(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
    fn from(watts: Watts) -> Self {
        watts.0.round_ties_even() as Self
    }
}
