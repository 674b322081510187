//! JSON round-trips of the boundary value types

use approx::assert_relative_eq;
use beam_solver::prelude::*;

#[test]
fn test_beam_input_round_trip() {
    let input = BeamInput::new(10.0, 200e9, 1e-4)
        .with_support(0.0, Support::Pin)
        .with_support(10.0, Support::Roller)
        .with_load(Load::point_force("P1", 5.0, -10_000.0, LoadCategory::Dead))
        .with_load(Load::point_moment("M1", 2.0, 1500.0, LoadCategory::Live))
        .with_load(Load::distributed("W1", 3.0, 8.0, -600.0, LoadCategory::Snow));

    let json = serde_json::to_string(&input).unwrap();
    let back: BeamInput = serde_json::from_str(&json).unwrap();
    assert_eq!(input, back);
}

#[test]
fn test_load_tagging() {
    let load = Load::distributed("W1", 0.0, 6.0, -1000.0, LoadCategory::Dead);
    let json = serde_json::to_string(&load).unwrap();

    // The variant tag travels with the payload
    assert!(json.contains("\"type\":\"DistributedForce\""));
    assert!(json.contains("\"w\":-1000.0"));
}

#[test]
fn test_analysis_result_round_trip() {
    let input = BeamInput::new(5.0, 200e9, 1e-4)
        .with_support(0.0, Support::Fixed)
        .with_load(Load::point_force("P1", 5.0, -1000.0, LoadCategory::Dead));
    let result = input.analyze().unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: AnalysisResult = serde_json::from_str(&json).unwrap();

    assert_eq!(result.nodes, back.nodes);
    assert_relative_eq!(
        back.reaction("N0").unwrap().fy,
        result.reaction("N0").unwrap().fy
    );
}

#[test]
fn test_diagram_serializes() {
    let input = BeamInput::new(5.0, 200e9, 1e-4)
        .with_support(0.0, Support::Fixed)
        .with_load(Load::point_force("P1", 5.0, -1000.0, LoadCategory::Dead));
    let result = input.analyze().unwrap();
    let diagrams = input.diagrams(&result, 10, LoadCategory::Dead);

    let json = serde_json::to_string(&diagrams).unwrap();
    let back: Diagram = serde_json::from_str(&json).unwrap();
    assert_eq!(diagrams, back);
}
