//! Smoke tests for the pn-app service layer.

use std::path::PathBuf;

use pn_app::{AppError, Response, analyze_file, load_network, respond, summarize};
use pn_graph::GraphError;
use pn_solver::AnalysisOptions;

fn demo(name: &str) -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // go to crates
    path.pop(); // go to repo root
    path.push("demos");
    path.push("networks");
    path.push(name);
    path
}

#[test]
fn sprinkler_report() {
    let report = analyze_file(&demo("sprinkler.yaml"), &AnalysisOptions::default()).unwrap();

    assert!((report.pump.flow_lps - 35.0).abs() < 1e-9);
    assert_eq!(report.pump.critical_path, "Pump -> Union -> R2");
    assert!((report.pump.head_m - 100.130_79).abs() < 1e-3);

    let ids: Vec<&str> = report.pipes.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2", "P3"]);
    assert!((report.pipes[0].flow_lps - 35.0).abs() < 1e-9);
    assert!((report.pipes[1].flow_lps - 15.0).abs() < 1e-9);
    assert!((report.pipes[2].flow_lps - 20.0).abs() < 1e-9);
    for pipe in &report.pipes {
        assert_eq!(pipe.regime, "turbulent");
        assert_eq!(pipe.minor_loss_m, 0.0);
        assert_eq!(pipe.total_loss_m, pipe.friction_loss_m);
    }

    assert_eq!(report.paths.len(), 2);
    assert_eq!(report.paths[0].demand_node, "R1");
    assert_eq!(report.paths[0].pipes, vec!["P1".to_string(), "P2".to_string()]);
}

#[test]
fn fire_main_uses_fittings() {
    let report = analyze_file(&demo("fire_main.yaml"), &AnalysisOptions::default()).unwrap();
    assert!((report.pump.flow_lps - 10.0).abs() < 1e-9);
    assert!(report.pipes.iter().all(|p| p.minor_loss_m > 0.0));
    assert!(report.pump.critical_path.starts_with("Pump -> Riser -> Floor1"));
    let max = report
        .paths
        .iter()
        .map(|p| p.total_head_m)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_eq!(report.pump.head_m, max);
}

#[test]
fn json_and_yaml_give_identical_reports() {
    let options = AnalysisOptions::default();
    let yaml = analyze_file(&demo("sprinkler.yaml"), &options).unwrap();
    let json = analyze_file(&demo("sprinkler.json"), &options).unwrap();
    assert_eq!(
        serde_json::to_string(&yaml).unwrap(),
        serde_json::to_string(&json).unwrap()
    );
}

#[test]
fn ambiguous_source_becomes_error_object() {
    let def = load_network(&demo("two_sources.yaml")).unwrap();
    assert_eq!(summarize(&def).demand_node_count, 1);

    match analyze_file(&demo("two_sources.yaml"), &AnalysisOptions::default()) {
        Err(AppError::Structure(GraphError::AmbiguousSource { candidates })) => {
            assert_eq!(candidates, vec!["Pump".to_string(), "Tank".to_string()]);
        }
        other => panic!("expected ambiguous source, got {other:?}"),
    }

    let response = respond(&def, &AnalysisOptions::default());
    match response {
        Response::Error(e) => assert!(e.error.contains("Ambiguous source")),
        Response::Report(_) => panic!("expected an error response"),
    }
}

#[test]
fn render_text_marks_critical_path() {
    let report = analyze_file(&demo("sprinkler.yaml"), &AnalysisOptions::default()).unwrap();
    let text = report.render_text();
    assert!(text.contains("35.00 l/s"));
    assert!(text.contains("* Pump -> Union -> R2"));
    assert!(text.contains("  Pump -> Union -> R1"));
}
