//! Fixed signal weights and risk-tier thresholds.
//!
//! The weight table and tier boundaries are product calibration, not
//! tunable constants. Evaluators stay weight-free; weights are attached
//! during aggregation so scoring and weighting policy stay separate.

use crate::report::RiskLevel;

/// Aggregation weight for a signal id. Unknown ids weigh 1.
pub const fn signal_weight(signal_id: u8) -> u8 {
    match signal_id {
        2 | 8 | 11 | 14 | 20 => 3,
        1 | 4 | 5 | 9 | 10 | 17 | 21 => 2,
        _ => 1,
    }
}

/// Classify a composite score into a risk tier.
pub fn risk_level(composite_score: f64) -> RiskLevel {
    if composite_score <= 2.0 {
        RiskLevel::Low
    } else if composite_score <= 3.2 {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

/// Round to two decimal places.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weight_table_matches_calibration() {
        let expected: [(u8, u8); 21] = [
            (1, 2),
            (2, 3),
            (3, 1),
            (4, 2),
            (5, 2),
            (6, 1),
            (7, 1),
            (8, 3),
            (9, 2),
            (10, 2),
            (11, 3),
            (12, 1),
            (13, 1),
            (14, 3),
            (15, 1),
            (16, 1),
            (17, 2),
            (18, 1),
            (19, 1),
            (20, 3),
            (21, 2),
        ];
        for (id, weight) in expected {
            assert_eq!(signal_weight(id), weight, "signal {id}");
        }
    }

    #[test]
    fn tier_boundaries_are_inclusive_below() {
        assert_eq!(risk_level(2.0), RiskLevel::Low);
        assert_eq!(risk_level(2.01), RiskLevel::Moderate);
        assert_eq!(risk_level(3.2), RiskLevel::Moderate);
        assert_eq!(risk_level(3.21), RiskLevel::High);
    }

    #[test]
    fn round2_behaves() {
        assert_eq!(round2(3.14159), 3.14);
        assert_eq!(round2(2.666_666), 2.67);
        assert_eq!(round2(1.0), 1.0);
    }
}
