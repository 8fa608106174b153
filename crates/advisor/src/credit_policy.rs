//! Credit-hour limits by cumulative grade average.
//!
//! ## Default policy
//! | cgpa              | band      | limit |
//! |-------------------|-----------|-------|
//! | below 2.00        | Probation | 12    |
//! | 2.00 up to 3.00   | Standard  | 20    |
//! | 3.00 and above    | Honors    | 22    |

use serde::{Deserialize, Serialize};

/// Which side of the policy thresholds a cgpa falls on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditBand {
    Probation,
    Standard,
    Honors,
}

/// Monotone step function from cgpa to maximum credit hours per semester
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditPolicy {
    /// Lowest cgpa in the Standard band
    pub standard_threshold: f64,
    /// Lowest cgpa in the Honors band
    pub honors_threshold: f64,
    pub probation_limit: u32,
    pub standard_limit: u32,
    pub honors_limit: u32,
}

impl CreditPolicy {
    pub fn new() -> Self {
        Self {
            standard_threshold: 2.0,
            honors_threshold: 3.0,
            probation_limit: 12,
            standard_limit: 20,
            honors_limit: 22,
        }
    }

    /// Configure the band thresholds (defaults: 2.00 and 3.00)
    pub fn with_thresholds(mut self, standard: f64, honors: f64) -> Self {
        self.standard_threshold = standard;
        self.honors_threshold = honors;
        self
    }

    /// Configure the per-band limits (defaults: 12, 20, 22)
    pub fn with_limits(mut self, probation: u32, standard: u32, honors: u32) -> Self {
        self.probation_limit = probation;
        self.standard_limit = standard;
        self.honors_limit = honors;
        self
    }

    pub fn band(&self, cgpa: f64) -> CreditBand {
        if cgpa < self.standard_threshold {
            CreditBand::Probation
        } else if cgpa < self.honors_threshold {
            CreditBand::Standard
        } else {
            CreditBand::Honors
        }
    }

    pub fn limit_for_band(&self, band: CreditBand) -> u32 {
        match band {
            CreditBand::Probation => self.probation_limit,
            CreditBand::Standard => self.standard_limit,
            CreditBand::Honors => self.honors_limit,
        }
    }

    /// Maximum credit hours a student with `cgpa` may take
    pub fn credit_limit(&self, cgpa: f64) -> u32 {
        self.limit_for_band(self.band(cgpa))
    }
}

impl Default for CreditPolicy {
    fn default() -> Self {
        Self::new()
    }
}
