//! Untyped entry point: checks the kind of every argument, then calls the
//! typed function from [`crate::problems`].

use crate::domain::model::{Outcome, ProblemKind};
use crate::problems::{self, Board};
use crate::utils::error::{Result, WarmupError};
use crate::utils::validation::{
    expect_array, expect_integer, expect_number, expect_present, expect_str,
};
use serde_json::Value;

/// Solves `kind` with positional JSON arguments.
///
/// Missing arguments are type failures; surplus arguments are ignored.
pub fn solve(kind: ProblemKind, args: &[Value]) -> Result<Value> {
    tracing::debug!(problem = %kind, args = args.len(), "solving");

    let result = match kind {
        ProblemKind::Sum => {
            let a = expect_integer("a", expect_present("a", args, 0)?)?;
            let b = expect_integer("b", expect_present("b", args, 1)?)?;
            Value::from(problems::sum(a, b)?)
        }
        ProblemKind::Century => {
            let year = expect_integer("year", expect_present("year", args, 0)?)?;
            Value::from(problems::century_from_year(year)?)
        }
        ProblemKind::Colors => {
            let hex_color = expect_str("hex_color", expect_present("hex_color", args, 0)?)?;
            Value::from(problems::hex_to_rgb(hex_color)?)
        }
        ProblemKind::Fibonacci => {
            let n = expect_integer("n", expect_present("n", args, 0)?)?;
            fibonacci_value(problems::fibonacci(n)?)
        }
        ProblemKind::Matrix => {
            let matrix = matrix_rows(expect_present("matrix", args, 0)?)?;
            let transposed = problems::transpose(&matrix)?;
            Value::Array(transposed.into_iter().map(Value::Array).collect())
        }
        ProblemKind::NumberSystem => {
            let n = expect_number("n", expect_present("n", args, 0)?)?;
            let target_base =
                expect_integer("target_base", expect_present("target_base", args, 1)?)?;
            let digits = if let Some(i) = n.as_i64() {
                problems::to_base(i, target_base)?
            } else if let Some(u) = n.as_u64() {
                problems::to_base(u, target_base)?
            } else {
                let f = n.as_f64().ok_or_else(|| {
                    WarmupError::type_error("n", "a number", "an unrepresentable number")
                })?;
                problems::float_to_base(f, target_base)?
            };
            Value::from(digits)
        }
        ProblemKind::Phone => {
            let phone_number =
                expect_str("phone_number", expect_present("phone_number", args, 0)?)?;
            Value::Bool(problems::is_phone_number(phone_number))
        }
        ProblemKind::Smiles => {
            let text = expect_str("text", expect_present("text", args, 0)?)?;
            Value::from(problems::count_smiles(text))
        }
        ProblemKind::TicTacToe => {
            let field = board(expect_present("field", args, 0)?)?;
            match problems::tic_tac_toe_result(&field) {
                Outcome::Winner(symbol) => symbol,
                Outcome::Draw => Value::from("draw"),
            }
        }
    };

    tracing::debug!(problem = %kind, %result, "solved");
    Ok(result)
}

/// Values beyond `u64` are emitted as decimal strings.
fn fibonacci_value(value: u128) -> Value {
    match u64::try_from(value) {
        Ok(small) => Value::from(small),
        Err(_) => Value::String(value.to_string()),
    }
}

fn matrix_rows(value: &Value) -> Result<Vec<Vec<Value>>> {
    expect_array("matrix", value)?
        .iter()
        .map(|row| expect_array("matrix row", row).map(<[Value]>::to_vec))
        .collect()
}

/// Shapes the argument into a 3x3 grid. Cell contents are not inspected.
fn board(value: &Value) -> Result<Board<Value>> {
    let not_a_board =
        || WarmupError::type_error("field", "a 3x3 array", "a differently shaped value");

    let rows = expect_array("field", value)?
        .iter()
        .map(|row| {
            let cells = expect_array("field row", row)?.to_vec();
            <[Value; 3]>::try_from(cells).map_err(|_| not_a_board())
        })
        .collect::<Result<Vec<_>>>()?;

    <Board<Value>>::try_from(rows).map_err(|_| not_a_board())
}
