use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The nine exercises the crate can solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    Sum,
    Century,
    Colors,
    Fibonacci,
    Matrix,
    NumberSystem,
    Phone,
    Smiles,
    TicTacToe,
}

impl ProblemKind {
    pub const ALL: [ProblemKind; 9] = [
        ProblemKind::Sum,
        ProblemKind::Century,
        ProblemKind::Colors,
        ProblemKind::Fibonacci,
        ProblemKind::Matrix,
        ProblemKind::NumberSystem,
        ProblemKind::Phone,
        ProblemKind::Smiles,
        ProblemKind::TicTacToe,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ProblemKind::Sum => "sum",
            ProblemKind::Century => "century",
            ProblemKind::Colors => "colors",
            ProblemKind::Fibonacci => "fibonacci",
            ProblemKind::Matrix => "matrix",
            ProblemKind::NumberSystem => "number_system",
            ProblemKind::Phone => "phone",
            ProblemKind::Smiles => "smiles",
            ProblemKind::TicTacToe => "tic_tac_toe",
        }
    }

    /// Positional argument names, in call order.
    pub fn parameters(self) -> &'static [&'static str] {
        match self {
            ProblemKind::Sum => &["a", "b"],
            ProblemKind::Century => &["year"],
            ProblemKind::Colors => &["hex_color"],
            ProblemKind::Fibonacci => &["n"],
            ProblemKind::Matrix => &["matrix"],
            ProblemKind::NumberSystem => &["n", "target_base"],
            ProblemKind::Phone => &["phone_number"],
            ProblemKind::Smiles => &["text"],
            ProblemKind::TicTacToe => &["field"],
        }
    }

    pub fn arity(self) -> usize {
        self.parameters().len()
    }
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProblemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProblemKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| format!("unknown problem `{}`", s))
    }
}

/// A color decoded from `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.red, self.green, self.blue)
    }
}

/// Result of a finished tic-tac-toe game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Winner(T),
    Draw,
}

impl<T> Outcome<T> {
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl<T: fmt::Display> fmt::Display for Outcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(symbol) => write!(f, "{}", symbol),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}
