//! Integration tests for cloud-db-advisor
//!
//! These tests exercise the public API end to end: engine construction,
//! metrics, recommendation, configuration-driven evaluation and reports.

use cloud_db_advisor::{
    AdvisorError, AppConfig, Architecture, PriorityPreset, Rationale, ReportFormat, ScoreBand,
    ScoringEngine, evaluate,
    reports::{ReportConfig, ReportKind, create_reporter},
};

fn engine(cost: f64, carbon: f64, security: f64) -> ScoringEngine {
    ScoringEngine::new(1000.0, 100.0, cost, carbon, security).expect("valid inputs")
}

// ============================================================================
// Metric Tests
// ============================================================================

mod metric_tests {
    use super::*;

    #[test]
    fn test_monthly_cost_and_carbon() {
        let e = engine(5.0, 5.0, 5.0);
        let expected = [
            (Architecture::RdsMultiAz, 585.0, 47.8),
            (Architecture::Dynamodb, 375.0, 6.3),
            (Architecture::AuroraServerless, 285.0, 22.0),
        ];
        for (arch, cost, carbon) in expected {
            assert_eq!(e.monthly_cost(arch), cost, "{arch} cost");
            assert_eq!(e.monthly_carbon(arch), carbon, "{arch} carbon");
        }
    }

    #[test]
    fn test_annual_figures() {
        let e = engine(5.0, 5.0, 5.0);
        assert_eq!(e.annual_cost(Architecture::RdsMultiAz), 7020.0);
        assert_eq!(e.annual_cost(Architecture::Dynamodb), 4500.0);
        assert_eq!(e.annual_cost(Architecture::AuroraServerless), 3420.0);
        assert_eq!(e.annual_carbon(Architecture::RdsMultiAz), 573.6);
        assert_eq!(e.annual_carbon(Architecture::Dynamodb), 75.6);
        assert_eq!(e.annual_carbon(Architecture::AuroraServerless), 264.0);
    }

    #[test]
    fn test_security_and_availability_are_workload_independent() {
        let small = ScoringEngine::new(1.0, 1.0, 1.0, 1.0, 1.0).unwrap();
        let large = ScoringEngine::new(50_000.0, 9_000.0, 1.0, 1.0, 1.0).unwrap();
        for arch in Architecture::ALL {
            assert_eq!(small.security_score(arch), large.security_score(arch));
            assert_eq!(small.availability(arch), large.availability(arch));
        }
        assert_eq!(small.availability(Architecture::Dynamodb), 99.99);
    }

    #[test]
    fn test_all_metrics_canonical_order() {
        let metrics = engine(5.0, 5.0, 5.0).all_metrics();
        let keys: Vec<_> = metrics.keys().copied().collect();
        assert_eq!(keys, Architecture::ALL);
    }

    #[test]
    fn test_huge_workload_floors_sub_scores() {
        let e = ScoringEngine::new(100_000.0, 100_000.0, 1.0, 1.0, 1.0).unwrap();
        for arch in Architecture::ALL {
            assert_eq!(e.cost_score(arch), 0.0);
            assert_eq!(e.carbon_score(arch), 0.0);
        }
        // Only security contributes: 96 / 3
        assert_eq!(e.overall_score(Architecture::RdsMultiAz), 32.0);
        assert_eq!(e.recommend().architecture_key, Architecture::RdsMultiAz);
    }
}

// ============================================================================
// Recommendation Tests
// ============================================================================

mod recommendation_tests {
    use super::*;

    #[test]
    fn test_balanced_weights() {
        let rec = engine(5.0, 5.0, 5.0).recommend();
        assert_eq!(rec.architecture_key, Architecture::AuroraServerless);
        assert_eq!(rec.score, 81.5);
        assert_eq!(rec.rationale, Rationale::Balanced);
        assert_eq!(rec.band, ScoreBand::High);
        assert_eq!(rec.all_scores[&Architecture::RdsMultiAz], 63.23);
        assert_eq!(rec.all_scores[&Architecture::Dynamodb], 81.07);
    }

    #[test]
    fn test_cost_dominant_weights() {
        let rec = engine(8.0, 1.0, 1.0).recommend();
        assert_eq!(rec.architecture_key, Architecture::AuroraServerless);
        assert_eq!(rec.score, 74.5);
        assert_eq!(rec.rationale, Rationale::CostFocused);
        assert!(rec.reason.contains("best value for money"));
    }

    #[test]
    fn test_carbon_dominant_weights() {
        let rec = engine(1.0, 8.0, 1.0).recommend();
        assert_eq!(rec.architecture_key, Architecture::Dynamodb);
        assert_eq!(rec.recommended_name, "DynamoDB On-Demand");
        assert_eq!(rec.score, 89.91);
        assert_eq!(rec.rationale, Rationale::CarbonFocused);
    }

    #[test]
    fn test_security_dominant_weights() {
        // Security-weighted but Aurora's low cost still carries it
        let rec = engine(1.0, 1.0, 8.0).recommend();
        assert_eq!(rec.architecture_key, Architecture::AuroraServerless);
        assert_eq!(rec.score, 90.95);
        assert_eq!(rec.all_scores[&Architecture::RdsMultiAz], 86.17);
        assert_eq!(rec.all_scores[&Architecture::Dynamodb], 85.22);
        assert_eq!(rec.rationale, Rationale::SecurityFocused);
    }

    #[test]
    fn test_security_only_weights() {
        let rec = engine(0.0, 0.0, 1.0).recommend();
        assert_eq!(rec.architecture_key, Architecture::RdsMultiAz);
        assert_eq!(rec.score, 96.0);
        assert_eq!(rec.delta_from_benchmark(), 26.0);
    }

    #[test]
    fn test_recommended_key_is_in_metrics() {
        for weights in [(1.0, 0.0, 0.0), (0.0, 1.0, 0.0), (3.0, 2.0, 1.0)] {
            let e = engine(weights.0, weights.1, weights.2);
            let rec = e.recommend();
            let metrics = e.all_metrics();
            assert!(metrics.contains_key(&rec.architecture_key));
            assert_eq!(metrics[&rec.architecture_key].overall_score, rec.score);
        }
    }

    #[test]
    fn test_weight_scale_does_not_matter() {
        let a = engine(1.0, 2.0, 3.0).recommend();
        let b = engine(10.0, 20.0, 30.0).recommend();
        assert_eq!(a, b);
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_zero_weights_rejected() {
        let err = ScoringEngine::new(1000.0, 100.0, 0.0, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidWeight { .. }));
        assert!(err.is_input_error());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let err = ScoringEngine::new(1000.0, 100.0, -1.0, 5.0, 5.0).unwrap_err();
        assert!(matches!(err, AdvisorError::InvalidWeight { .. }));
    }

    #[test]
    fn test_non_positive_workload_rejected() {
        assert!(matches!(
            ScoringEngine::new(0.0, 100.0, 1.0, 1.0, 1.0),
            Err(AdvisorError::InvalidWorkload { .. })
        ));
        assert!(matches!(
            ScoringEngine::new(100.0, -5.0, 1.0, 1.0, 1.0),
            Err(AdvisorError::InvalidWorkload { .. })
        ));
    }

    #[test]
    fn test_unknown_architecture_key() {
        let err = "cassandra".parse::<Architecture>().unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownArchitecture(ref key) if key == "cassandra"));
    }
}

// ============================================================================
// Configuration-Driven Evaluation
// ============================================================================

mod evaluation_tests {
    use super::*;

    #[test]
    fn test_presets_pick_expected_winner() {
        let expected = [
            (PriorityPreset::Balanced, Architecture::AuroraServerless),
            (PriorityPreset::CostFirst, Architecture::AuroraServerless),
            (PriorityPreset::Green, Architecture::Dynamodb),
            (PriorityPreset::SecurityFirst, Architecture::AuroraServerless),
        ];
        for (preset, winner) in expected {
            let evaluation = evaluate(&AppConfig::from_preset(preset)).unwrap();
            assert_eq!(evaluation.recommendation.architecture_key, winner, "{preset}");
        }
    }

    #[test]
    fn test_insights_for_default_workload() {
        let insights = evaluate(&AppConfig::default()).unwrap().insights;
        assert_eq!(insights.cheapest, Architecture::AuroraServerless);
        assert_eq!(insights.most_expensive, Architecture::RdsMultiAz);
        assert_eq!(insights.potential_annual_savings, 3600.0);
        assert_eq!(insights.greenest, Architecture::Dynamodb);
        assert_eq!(insights.annual_carbon_savings, 498.0);
        assert_eq!(insights.trees_equivalent_to_savings, 23.71);
    }

    #[test]
    fn test_small_workload_prefers_dynamodb() {
        let config = AppConfig::builder()
            .storage_gb(500.0)
            .requests_millions(10.0)
            .build();
        let evaluation = evaluate(&config).unwrap();
        assert_eq!(
            evaluation.recommendation.architecture_key,
            Architecture::Dynamodb
        );
        assert_eq!(evaluation.recommendation.score, 89.24);
    }

    #[test]
    fn test_every_format_renders() {
        let evaluation = evaluate(&AppConfig::default()).unwrap();
        for format in [
            ReportFormat::Summary,
            ReportFormat::Table,
            ReportFormat::Json,
            ReportFormat::Markdown,
        ] {
            for kind in [
                ReportKind::Recommendation,
                ReportKind::Metrics,
                ReportKind::Projection,
            ] {
                let text = create_reporter(format, false)
                    .generate_evaluation_report(&evaluation, &ReportConfig::new(kind))
                    .unwrap();
                assert!(!text.is_empty(), "{format} {kind:?}");
            }
        }
    }
}
