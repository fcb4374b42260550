/// Lower-case text and strip everything that is not a letter.
///
/// Applied to single requirement tokens ("tomatoes," becomes "tomatoes",
/// "2%" becomes "") and to whole pantry names, where spaces drop out too
/// ("chicken breast" compares as "chickenbreast").
pub(crate) fn clean_letters(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect()
}

/// The last whitespace-delimited token of a requirement, which is treated
/// as the canonical ingredient name once measure words are dropped.
pub(crate) fn last_token(requirement: &str) -> Option<&str> {
    requirement.split_whitespace().last()
}
