/// Normalize a raw token: lowercase it, then keep it only if every character is in `'a'..='z'`.
///
/// The empty string passes through unchanged.
pub fn normalize(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    if is_normalized(&lowered) { Some(lowered) } else { None }
}

/// True when `s` is already in normalized form (lowercase ASCII letters only).
pub fn is_normalized(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_lowercase())
}
