//! Comment-block extraction.
//!
//! Finds documentation comment bodies (`/** ... */`) in raw text without
//! understanding the surrounding language.

/// Opening delimiter of a documentation comment.
pub const DOC_COMMENT_OPEN: &str = "/**";

/// Closing delimiter of any block comment.
pub const COMMENT_CLOSE: &str = "*/";

/// Iterate the documentation comment bodies of `content` in source order.
///
/// The text is split on every `/**`; each fragment after the first contributes its
/// prefix up to the first `*/`. The text before the first opener is never a body, even
/// when it contains a `*/` of its own, and fragments without a closing delimiter
/// (unterminated comments) are skipped. Comments do not nest: the first `*/` always
/// ends the body.
pub fn comment_bodies(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(DOC_COMMENT_OPEN)
        .skip(1)
        .filter_map(|fragment| fragment.find(COMMENT_CLOSE).map(|end| &fragment[..end]))
}

/// Collect the documentation comment bodies of `content` in source order.
pub fn extract_comment_bodies(content: &str) -> Vec<&str> {
    comment_bodies(content).collect()
}
