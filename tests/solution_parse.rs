use anfmap::error::Error;
use anfmap::map::CnfVar;
use anfmap::solution::{parse_solution, SolverOutput};

fn model(output: SolverOutput) -> indexmap::IndexMap<CnfVar, bool> {
    match output {
        SolverOutput::Sat(model) => model,
        SolverOutput::Unsat => panic!("expected SAT"),
    }
}

#[test]
fn unsat_marker_short_circuits() {
    let out = parse_solution("s UNSATISFIABLE\nv garbage after\n").expect("parse");
    assert_eq!(out, SolverOutput::Unsat);
}

#[test]
fn values_are_one_based_externally_zero_based_internally() {
    let out = parse_solution("s SATISFIABLE\nv 1 -2 3 0\n").expect("parse");
    let model = model(out);
    assert_eq!(model.len(), 3);
    assert_eq!(model[&CnfVar(0)], true);
    assert_eq!(model[&CnfVar(1)], false);
    assert_eq!(model[&CnfVar(2)], true);
}

#[test]
fn values_may_span_multiple_v_lines() {
    let out = parse_solution("s SATISFIABLE\nv 1 2 0\nv -3 0\n").expect("parse");
    let model = model(out);
    assert_eq!(model.len(), 3);
    assert_eq!(model[&CnfVar(2)], false);
}

#[test]
fn zero_terminates_the_line() {
    let out = parse_solution("s SATISFIABLE\nv 1 0 2\n").expect("parse");
    let model = model(out);
    assert_eq!(model.len(), 1);
    assert!(!model.contains_key(&CnfVar(1)));
}

#[test]
fn tokens_before_v_are_ignored() {
    let out = parse_solution("s SATISFIABLE\ntimings v 2 0\n").expect("parse");
    assert_eq!(model(out)[&CnfVar(1)], true);
}

#[test]
fn duplicate_variable_is_rejected_even_with_same_polarity() {
    let err = parse_solution("s SATISFIABLE\nv 1 1 0\n").expect_err("must fail");
    assert_eq!(err, Error::DuplicateVariable { var: 1 });
}

#[test]
fn conflicting_duplicate_is_rejected() {
    let err = parse_solution("s SATISFIABLE\nv 2 0\nv -2 0\n").expect_err("must fail");
    assert_eq!(err, Error::DuplicateVariable { var: 2 });
}

#[test]
fn non_integer_token_is_rejected() {
    let err = parse_solution("s SATISFIABLE\nv 1 two 0\n").expect_err("must fail");
    assert_eq!(
        err,
        Error::NonIntegerToken {
            token: "two".to_owned()
        }
    );
}

#[test]
fn missing_v_line_is_no_solution() {
    let err = parse_solution("s SATISFIABLE\n").expect_err("must fail");
    assert!(matches!(err, Error::NoSolutionMarker { .. }));
}

#[test]
fn missing_status_marker_is_no_solution() {
    let err = parse_solution("v 1 -2 0\n").expect_err("must fail");
    assert!(matches!(err, Error::NoSolutionMarker { .. }));
}

#[test]
fn empty_output_is_no_solution() {
    let err = parse_solution("").expect_err("must fail");
    assert!(matches!(err, Error::NoSolutionMarker { .. }));
}
