pub const LEFT_TO_RIGHT_SMILE: &str = ":-)";
pub const RIGHT_TO_LEFT_SMILE: &str = "(-:";

/// Counts `:-)` and `(-:` in `text`. Each token is counted on its own pass,
/// so `(-:-)` contains one of each.
pub fn count_smiles(text: &str) -> usize {
    text.matches(LEFT_TO_RIGHT_SMILE).count() + text.matches(RIGHT_TO_LEFT_SMILE).count()
}
