/// Token removed from feature ids before splitting into number and name.
pub const FEATURE_PREFIX: &str = "feat-";

/// Derive the git branch for a feature id.
///
/// `FEAT-001-auth` becomes `feature/001-auth`. Ids that do not split into a
/// number and a name once the prefix is gone fall back to
/// `feature/<lowercased id>`, so `FEAT-auth` becomes `feature/feat-auth`.
pub fn branch_name(feature_id: &str) -> String {
    let lowered = feature_id.to_lowercase();
    let stripped = lowered.replace(FEATURE_PREFIX, "");
    match stripped.split_once('-') {
        Some((num, desc)) => format!("feature/{num}-{desc}"),
        None => format!("feature/{lowered}"),
    }
}
