#![cfg(feature = "serde")]

use quadratic_solvers::QuadraticSolver;

#[test]
fn solver_serializes_as_coefficients() {
    let solver = QuadraticSolver::new(2.0, 5.0, -3.0);

    let json = serde_json::to_string(&solver).expect("serialize");
    assert_eq!(json, r#"{"a":2.0,"b":5.0,"c":-3.0}"#);

    let back: QuadraticSolver = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, solver);
}
