//! Property-based tests for the scoring engine.
//!
//! Checks normalization, score bounds, monotonicity and determinism
//! across random workloads and weightings.

use cloud_db_advisor::{
    Architecture, PriorityWeights, ScoringEngine,
    scoring::{carbon_score_for, cost_score_for},
    utils::round2,
};
use proptest::prelude::*;

fn workload() -> impl Strategy<Value = (f64, f64)> {
    (0.01f64..200_000.0, 0.01f64..50_000.0)
}

fn weights() -> impl Strategy<Value = (f64, f64, f64)> {
    (0.0f64..100.0, 0.0f64..100.0, 0.0f64..100.0)
        .prop_filter("at least one weight must be positive", |(a, b, c)| {
            a + b + c > 0.0
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn normalized_weights_sum_to_one((c, ca, s) in weights()) {
        let w = PriorityWeights::normalize(c, ca, s).unwrap();
        prop_assert!((w.cost() + w.carbon() + w.security() - 1.0).abs() < 1e-9);
        prop_assert!(w.cost() >= 0.0 && w.carbon() >= 0.0 && w.security() >= 0.0);
    }

    #[test]
    fn cost_score_is_monotone(a in 0.0f64..5000.0, b in 0.0f64..5000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(cost_score_for(lo) >= cost_score_for(hi));
    }

    #[test]
    fn carbon_score_is_monotone(a in 0.0f64..500.0, b in 0.0f64..500.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(carbon_score_for(lo) >= carbon_score_for(hi));
    }

    #[test]
    fn sub_scores_floor_at_caps(cost in 1000.0f64..1e7, carbon in 100.0f64..1e5) {
        prop_assert_eq!(cost_score_for(cost), 0.0);
        prop_assert_eq!(carbon_score_for(carbon), 0.0);
    }

    #[test]
    fn annual_is_twelve_months((storage, requests) in workload()) {
        let e = ScoringEngine::new(storage, requests, 1.0, 1.0, 1.0).unwrap();
        for arch in Architecture::ALL {
            let annual_cost = round2(e.monthly_cost(arch) * 12.0);
            let annual_carbon = round2(e.monthly_carbon(arch) * 12.0);
            prop_assert_eq!(e.annual_cost(arch), annual_cost);
            prop_assert_eq!(e.annual_carbon(arch), annual_carbon);
        }
    }

    #[test]
    fn overall_score_within_bounds((storage, requests) in workload(), (c, ca, s) in weights()) {
        let e = ScoringEngine::new(storage, requests, c, ca, s).unwrap();
        for arch in Architecture::ALL {
            let score = e.overall_score(arch);
            prop_assert!((0.0..=100.0).contains(&score), "{arch}: {score}");
        }
    }

    #[test]
    fn recommendation_is_the_maximum((storage, requests) in workload(), (c, ca, s) in weights()) {
        let e = ScoringEngine::new(storage, requests, c, ca, s).unwrap();
        let rec = e.recommend();
        let metrics = e.all_metrics();
        prop_assert!(metrics.contains_key(&rec.architecture_key));
        for snapshot in metrics.values() {
            prop_assert!(snapshot.overall_score <= rec.score);
        }
    }

    #[test]
    fn evaluation_is_deterministic((storage, requests) in workload(), (c, ca, s) in weights()) {
        let a = ScoringEngine::new(storage, requests, c, ca, s).unwrap();
        let b = ScoringEngine::new(storage, requests, c, ca, s).unwrap();
        prop_assert_eq!(a.all_metrics(), b.all_metrics());
        prop_assert_eq!(a.recommend(), b.recommend());
    }
}
