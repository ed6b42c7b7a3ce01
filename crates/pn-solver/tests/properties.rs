//! Property tests over random tree networks.

use pn_core::units::{as_lps, lps, m, mm};
use pn_graph::{NetworkBuilder, PipeNetwork, PipeSpec};
use pn_solver::{analyze, conservation_residuals, propagate_flows};
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct NodeSpec {
    parent: prop::sample::Index,
    elevation_m: f64,
    demand_lps: f64,
    diameter_mm: f64,
    length_m: f64,
}

fn node_spec() -> impl Strategy<Value = NodeSpec> {
    (
        any::<prop::sample::Index>(),
        -20.0_f64..40.0,
        prop_oneof![Just(0.0), 0.1_f64..25.0],
        20.0_f64..300.0,
        1.0_f64..200.0,
    )
        .prop_map(|(parent, elevation_m, demand_lps, diameter_mm, length_m)| NodeSpec {
            parent,
            elevation_m,
            demand_lps,
            diameter_mm,
            length_m,
        })
}

fn build(specs: &[NodeSpec]) -> (PipeNetwork, f64) {
    let mut builder = NetworkBuilder::new();
    let mut ids = vec![builder.add_node("source", m(0.0), lps(0.0))];
    let mut total = 0.0;
    for (i, spec) in specs.iter().enumerate() {
        let id = builder.add_node(format!("n{i}"), m(spec.elevation_m), lps(spec.demand_lps));
        let parent = ids[spec.parent.index(ids.len())];
        builder.add_pipe(
            format!("p{i}"),
            parent,
            id,
            PipeSpec::new(m(spec.length_m), mm(spec.diameter_mm), "Cast iron"),
        );
        ids.push(id);
        total += spec.demand_lps;
    }
    (builder.build().unwrap(), total)
}

proptest! {
    #[test]
    fn flow_is_conserved_at_every_node(specs in prop::collection::vec(node_spec(), 1..40)) {
        let (network, total) = build(&specs);
        let flows = propagate_flows(&network);
        for (_, residual) in conservation_residuals(&network, &flows) {
            prop_assert!(as_lps(residual).abs() < 1e-9 * total.max(1.0));
        }
    }

    #[test]
    fn pump_flow_is_total_demand(specs in prop::collection::vec(node_spec(), 1..40)) {
        let (network, total) = build(&specs);
        prop_assume!(total > 0.0);
        let result = analyze(&network).unwrap();
        prop_assert!((as_lps(result.pump.flow) - total).abs() < 1e-9 * total.max(1.0));
    }

    #[test]
    fn pump_head_is_max_over_paths(specs in prop::collection::vec(node_spec(), 1..40)) {
        let (network, total) = build(&specs);
        prop_assume!(total > 0.0);
        let result = analyze(&network).unwrap();
        for path in &result.paths {
            prop_assert!(path.total_head_m <= result.pump.head_m);
            let sum = path.head_loss_m + path.static_head_m;
            prop_assert!((path.total_head_m - sum).abs() < 1e-9);
        }
        prop_assert_eq!(result.pump.head_m, result.critical_path().total_head_m);
    }

    #[test]
    fn analysis_is_deterministic(specs in prop::collection::vec(node_spec(), 1..20)) {
        let (network, total) = build(&specs);
        prop_assume!(total > 0.0);
        prop_assert_eq!(analyze(&network).unwrap(), analyze(&network).unwrap());
    }
}
