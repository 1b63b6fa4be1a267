// Small formatting helpers shared by the views.

/// Scores are shown zero-padded to five digits.
pub fn format_score(score: u32) -> String {
    format!("{:05}", score)
}
