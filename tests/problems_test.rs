//! Behaviour of the nine exercises through the public API.

use serde_json::json;
use warmup_problems::problems::{
    century_from_year, count_smiles, fibonacci, hex_to_rgb, is_phone_number, sum,
    tic_tac_toe_result, to_base, transpose,
};
use warmup_problems::utils::error::ErrorCategory;
use warmup_problems::{solve, Outcome, ProblemKind};

#[test]
fn test_sum_matches_addition() {
    for (a, b) in [(0, 0), (1, 2), (-5, 5), (1_000_000, -3), (i64::MIN, 0)] {
        assert_eq!(sum(a, b).unwrap(), a + b);
    }
}

#[test]
fn test_sum_rejects_non_integers() {
    for args in [[json!(1.5), json!(1)], [json!(1), json!("2")], [json!(null), json!(1)]] {
        let err = solve(ProblemKind::Sum, &args).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Type, "args: {:?}", args);
    }
}

#[test]
fn test_century() {
    assert_eq!(century_from_year(100).unwrap(), 1);
    assert_eq!(century_from_year(101).unwrap(), 2);
    assert_eq!(century_from_year(2000).unwrap(), 20);
    assert_eq!(century_from_year(0).unwrap(), 0);
    assert_eq!(century_from_year(-1).unwrap_err().category(), ErrorCategory::Range);
    assert_eq!(
        solve(ProblemKind::Century, &[json!(19.5)]).unwrap_err().category(),
        ErrorCategory::Type
    );
}

#[test]
fn test_hex_to_rgb() {
    assert_eq!(hex_to_rgb("#FFFFFF").unwrap(), "(255, 255, 255)");
    assert_eq!(hex_to_rgb("#000000").unwrap(), "(0, 0, 0)");
    for bad in ["FFFFFF", "#ZZZZZZ", "#FFF"] {
        assert_eq!(hex_to_rgb(bad).unwrap_err().category(), ErrorCategory::Range);
    }
    assert_eq!(
        solve(ProblemKind::Colors, &[json!(["#FFFFFF"])]).unwrap_err().category(),
        ErrorCategory::Type
    );
}

#[test]
fn test_fibonacci() {
    assert_eq!(fibonacci(1).unwrap(), 1);
    assert_eq!(fibonacci(2).unwrap(), 1);
    assert_eq!(fibonacci(10).unwrap(), 55);
    assert_eq!(fibonacci(0).unwrap_err().category(), ErrorCategory::Range);
    assert_eq!(fibonacci(-1).unwrap_err().category(), ErrorCategory::Range);
}

#[test]
fn test_transpose_round_trip_and_input_untouched() {
    let matrix = vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]];
    let snapshot = matrix.clone();

    let transposed = transpose(&matrix).unwrap();
    assert_eq!(transposed.len(), 4);
    assert_eq!(transposed[3], vec![4, 8]);
    assert_eq!(transpose(&transposed).unwrap(), matrix);
    assert_eq!(matrix, snapshot);

    let jagged = vec![vec![1, 2, 3], vec![4, 5]];
    assert_eq!(transpose(&jagged).unwrap_err().category(), ErrorCategory::Type);
}

#[test]
fn test_to_base() {
    assert_eq!(to_base(255, 16).unwrap(), "ff");
    assert_eq!(to_base(10, 2).unwrap(), "1010");
    assert_eq!(to_base(10, 1).unwrap_err().category(), ErrorCategory::Range);
    assert_eq!(to_base(10, 37).unwrap_err().category(), ErrorCategory::Range);
}

#[test]
fn test_phone_and_smiles() {
    assert!(is_phone_number("8-800-555-35-35"));
    assert!(!is_phone_number("8-800-55-535-35"));
    assert_eq!(count_smiles("a :-) b (-: c"), 2);
    assert_eq!(count_smiles("no faces here"), 0);
}

#[test]
fn test_tic_tac_toe() {
    let top_row = [['x', 'x', 'x'], ['o', 'o', 'x'], ['o', 'x', 'o']];
    assert_eq!(tic_tac_toe_result(&top_row), Outcome::Winner('x'));

    let draw = [['x', 'o', 'x'], ['o', 'x', 'o'], ['o', 'x', 'o']];
    assert_eq!(tic_tac_toe_result(&draw), Outcome::Draw);
    assert_eq!(tic_tac_toe_result(&draw).to_string(), "draw");
}
