//! Badge status projection.
//!
//! Pure derivation from (open count, limit); nothing here is persisted or
//! cached. Recomputed on every badge refresh.

/// Severity of current occupancy relative to the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTier {
    /// Comfortably under the limit.
    Safe,
    /// At 80% of the limit or more.
    Near,
    /// At or past the limit.
    Over,
}

impl StatusTier {
    /// Badge background for this tier (RGBA).
    pub fn badge_color(self) -> [u8; 4] {
        match self {
            StatusTier::Safe => [0x2e, 0x7d, 0x32, 0xff],
            StatusTier::Near => [0xf9, 0xa8, 0x25, 0xff],
            StatusTier::Over => [0xc6, 0x28, 0x28, 0xff],
        }
    }

    /// One-line summary for status surfaces.
    pub fn hint(self) -> &'static str {
        match self {
            StatusTier::Safe => "You are within the limit.",
            StatusTier::Near => "You are close to the limit.",
            StatusTier::Over => "Limit exceeded. New tabs will be closed.",
        }
    }
}

/// Badge text and severity for a given occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    /// The literal open-tab count.
    pub text: String,
    pub tier: StatusTier,
}

/// Project (open count, limit) onto a displayable status.
///
/// Upstream reads floor the limit at 1, but the projection stays total: a
/// zero limit maps to `Safe` instead of dividing by zero.
pub fn project(open_count: usize, limit: u32) -> Status {
    let tier = if limit == 0 {
        StatusTier::Safe
    } else if open_count as u64 >= u64::from(limit) {
        StatusTier::Over
    } else if open_count as f64 / f64::from(limit) >= 0.8 {
        StatusTier::Near
    } else {
        StatusTier::Safe
    };

    Status {
        text: open_count.to_string(),
        tier,
    }
}
