//! Outcome of a finished tic-tac-toe game.

use crate::domain::model::Outcome;

pub type Board<T> = [[T; 3]; 3];

/// Winning lines in evaluation order: rows, columns, then both diagonals.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns the symbol filling the first uniform line, or a draw.
///
/// The board is assumed to come from a completed, legal game and is not
/// validated.
pub fn tic_tac_toe_result<T: PartialEq + Clone>(field: &Board<T>) -> Outcome<T> {
    LINES
        .iter()
        .find_map(|line| line_winner(field, line))
        .map_or(Outcome::Draw, Outcome::Winner)
}

fn line_winner<T: PartialEq + Clone>(field: &Board<T>, line: &[(usize, usize); 3]) -> Option<T> {
    let [(r0, c0), (r1, c1), (r2, c2)] = *line;
    let first = &field[r0][c0];
    (first == &field[r1][c1] && first == &field[r2][c2]).then(|| first.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_row_winner() {
        let field = [['x', 'x', 'x'], ['o', 'o', 'x'], ['o', 'x', 'o']];
        assert_eq!(tic_tac_toe_result(&field), Outcome::Winner('x'));
    }

    #[test]
    fn test_column_and_diagonal_winners() {
        let column = [['o', 'x', 'x'], ['o', 'x', 'o'], ['o', 'o', 'x']];
        assert_eq!(tic_tac_toe_result(&column), Outcome::Winner('o'));

        let anti_diagonal = [['o', 'o', 'x'], ['o', 'x', 'o'], ['x', 'x', 'o']];
        assert_eq!(tic_tac_toe_result(&anti_diagonal), Outcome::Winner('x'));
    }

    #[test]
    fn test_draw() {
        let field = [['x', 'o', 'x'], ['x', 'o', 'o'], ['o', 'x', 'x']];
        assert!(tic_tac_toe_result(&field).is_draw());
    }

    #[test]
    fn test_first_uniform_line_wins() {
        // Not reachable in a legal game; pins the evaluation order.
        let field = [["o", "o", "o"], ["x", "x", "x"], ["x", "x", "x"]];
        assert_eq!(tic_tac_toe_result(&field), Outcome::Winner("o"));

        let field = [["x", "o", "o"], ["x", "o", "x"], ["x", "o", "x"]];
        assert_eq!(tic_tac_toe_result(&field), Outcome::Winner("x"));
    }
}
