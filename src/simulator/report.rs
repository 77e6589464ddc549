//! Simulation report generation.

use crate::error::SimError;

/// Samples must exceed this to enter the conditional probability
/// denominator.
pub const LOOSE_DEVIATION_THRESHOLD: f64 = 0.2;

/// Samples in the denominator set count toward the numerator once they
/// also exceed this.
pub const STRICT_DEVIATION_THRESHOLD: f64 = 0.6;

/// Buckets over the [0, 1] deviation range for the histogram.
const HISTOGRAM_BUCKETS: usize = 10;

/// Aggregated results from multiple simulation trials.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub m: u32,
    pub n: u32,
    pub num_trials: u32,

    // Aggregated stats
    pub mean: f64,
    pub std_dev: f64,
    pub conditional_probability: f64,
    pub min_deviation: f64,
    pub max_deviation: f64,

    // Threshold exceedance counts
    pub above_loose_threshold: u32,
    pub above_strict_threshold: u32,

    // Distribution data
    pub histogram: Vec<u32>,

    // Individual samples for detailed analysis
    pub samples: Vec<f64>,
}

impl SimReport {
    /// Create a report from completed trial samples.
    ///
    /// `std_dev` is the population standard deviation (divide by N, not
    /// N - 1). `conditional_probability` is the fraction of samples above
    /// the strict threshold among those above the loose threshold; when no
    /// sample exceeds the loose threshold the denominator set is empty and
    /// this fails with `UndefinedConditionalProbability` instead of
    /// yielding NaN.
    pub fn from_samples(samples: Vec<f64>, m: u32, n: u32) -> Result<Self, SimError> {
        let above_loose_threshold = samples
            .iter()
            .filter(|&&d| d > LOOSE_DEVIATION_THRESHOLD)
            .count() as u32;
        let above_strict_threshold = samples
            .iter()
            .filter(|&&d| d > LOOSE_DEVIATION_THRESHOLD)
            .filter(|&&d| d > STRICT_DEVIATION_THRESHOLD)
            .count() as u32;

        if above_loose_threshold == 0 {
            return Err(SimError::UndefinedConditionalProbability {
                threshold: LOOSE_DEVIATION_THRESHOLD,
            });
        }
        let conditional_probability =
            above_strict_threshold as f64 / above_loose_threshold as f64;

        let num_trials = samples.len() as u32;
        let mean = samples.iter().sum::<f64>() / num_trials as f64;
        let variance = samples
            .iter()
            .map(|d| (d - mean) * (d - mean))
            .sum::<f64>()
            / num_trials as f64;
        let std_dev = variance.sqrt();

        let min_deviation = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max_deviation = samples.iter().copied().fold(0.0, f64::max);

        let mut histogram = vec![0u32; HISTOGRAM_BUCKETS];
        for &d in &samples {
            let bucket = ((d * HISTOGRAM_BUCKETS as f64) as usize).min(HISTOGRAM_BUCKETS - 1);
            histogram[bucket] += 1;
        }

        Ok(Self {
            m,
            n,
            num_trials,
            mean,
            std_dev,
            conditional_probability,
            min_deviation,
            max_deviation,
            above_loose_threshold,
            above_strict_threshold,
            histogram,
            samples,
        })
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 DEVIATION SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Grid: {} x {}, Trials: {}\n\n",
            self.m, self.n, self.num_trials
        ));

        report.push_str("── DEVIATION STATISTICS ─────────────────────────────────────────\n");
        report.push_str(&format!("  Mean:                {:.6}\n", self.mean));
        report.push_str(&format!("  Std Dev (pop.):      {:.6}\n", self.std_dev));
        report.push_str(&format!("  Min:                 {:.6}\n", self.min_deviation));
        report.push_str(&format!(
            "  Max:                 {:.6}\n\n",
            self.max_deviation
        ));

        report.push_str("── CONDITIONAL PROBABILITY ──────────────────────────────────────\n");
        report.push_str(&format!(
            "  P(d > {} | d > {}): {:.6}\n",
            STRICT_DEVIATION_THRESHOLD, LOOSE_DEVIATION_THRESHOLD, self.conditional_probability
        ));
        report.push_str(&format!(
            "  Samples > {}:       {}\n",
            LOOSE_DEVIATION_THRESHOLD, self.above_loose_threshold
        ));
        report.push_str(&format!(
            "  Samples > {}:       {}\n\n",
            STRICT_DEVIATION_THRESHOLD, self.above_strict_threshold
        ));

        report.push_str("── DISTRIBUTION ─────────────────────────────────────────────────\n");
        for (bucket, &count) in self.histogram.iter().enumerate() {
            let lo = bucket as f64 / HISTOGRAM_BUCKETS as f64;
            let hi = (bucket + 1) as f64 / HISTOGRAM_BUCKETS as f64;
            let pct = (count as f64 / self.num_trials as f64) * 100.0;
            let bar_len = (pct / 2.0) as usize;
            let bar: String = "█".repeat(bar_len);
            report.push_str(&format!(
                "  {:.1}-{:.1}: {:>5.1}% {}\n",
                lo, hi, pct, bar
            ));
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

// Raw samples are excluded from the JSON payload; 100k+ entries would
// dwarf the summary fields.
impl serde::Serialize for SimReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("SimReport", 11)?;
        state.serialize_field("m", &self.m)?;
        state.serialize_field("n", &self.n)?;
        state.serialize_field("num_trials", &self.num_trials)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("std_dev", &self.std_dev)?;
        state.serialize_field("conditional_probability", &self.conditional_probability)?;
        state.serialize_field("min_deviation", &self.min_deviation)?;
        state.serialize_field("max_deviation", &self.max_deviation)?;
        state.serialize_field("above_loose_threshold", &self.above_loose_threshold)?;
        state.serialize_field("above_strict_threshold", &self.above_strict_threshold)?;
        state.serialize_field("histogram", &self.histogram)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_statistics() {
        let samples = vec![0.1, 0.3, 0.5, 0.7, 0.9];
        let report = SimReport::from_samples(samples, 11, 7).unwrap();

        assert_eq!(report.num_trials, 5);
        assert!((report.mean - 0.5).abs() < 1e-9);
        // Population variance of the set is 0.08
        assert!((report.std_dev - 0.08f64.sqrt()).abs() < 1e-9);
        // Two of the four samples above 0.2 also exceed 0.6
        assert_eq!(report.above_loose_threshold, 4);
        assert_eq!(report.above_strict_threshold, 2);
        assert!((report.conditional_probability - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_empty_denominator_is_an_error() {
        let samples = vec![0.05, 0.1];
        let err = SimReport::from_samples(samples, 11, 7).unwrap_err();

        assert_eq!(
            err,
            SimError::UndefinedConditionalProbability {
                threshold: LOOSE_DEVIATION_THRESHOLD
            }
        );
    }

    #[test]
    fn test_histogram_counts_all_samples() {
        let samples = vec![0.05, 0.15, 0.25, 0.35, 0.95, 1.0];
        let report = SimReport::from_samples(samples, 2, 2).unwrap();

        assert_eq!(report.histogram.iter().sum::<u32>(), report.num_trials);
        assert_eq!(report.histogram[0], 1);
        // 1.0 lands in the top bucket rather than overflowing past it
        assert_eq!(report.histogram[9], 2);
    }

    #[test]
    fn test_min_max_tracking() {
        let samples = vec![0.3, 0.25, 0.6, 0.45];
        let report = SimReport::from_samples(samples, 5, 5).unwrap();

        assert_eq!(report.min_deviation, 0.25);
        assert_eq!(report.max_deviation, 0.6);
    }

    #[test]
    fn test_json_omits_raw_samples() {
        let samples = vec![0.3, 0.7];
        let report = SimReport::from_samples(samples, 5, 5).unwrap();
        let json = report.to_json();

        assert!(json.contains("\"mean\""));
        assert!(json.contains("\"conditional_probability\""));
        assert!(!json.contains("\"samples\""));
    }

    #[test]
    fn test_text_report_mentions_parameters() {
        let samples = vec![0.3, 0.7];
        let report = SimReport::from_samples(samples, 11, 7).unwrap();
        let text = report.to_text();

        assert!(text.contains("Grid: 11 x 7"));
        assert!(text.contains("Mean:"));
        assert!(text.contains("P(d > 0.6 | d > 0.2)"));
    }
}
