//! Field cleaning and `{@link}` resolution.

use std::fmt;

/// Opening sequence of an inline link directive.
pub const LINK_OPEN: &str = "{@link";

/// Strip documentation-comment gutters and surrounding whitespace from a field.
///
/// On every line, a leading `*` (optionally preceded by whitespace) is a gutter when
/// whitespace or the end of the line follows it. The gutter is removed together with
/// at most one space or tab after it, and removal repeats while the line still starts
/// with a gutter, so cleaning twice gives the same value as cleaning once. A `*` glued
/// to text, as in `**bold**` or `*em*`, is content and stays. Indentation after the
/// gutter is kept.
pub fn clean(text: &str) -> String {
    text.split('\n')
        .map(strip_gutter)
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn strip_gutter(mut line: &str) -> &str {
    while let Some(after) = line.trim_start().strip_prefix('*') {
        if !(after.is_empty() || after.starts_with(char::is_whitespace)) {
            break;
        }
        line = after.strip_prefix([' ', '\t']).unwrap_or(after);
    }
    line
}

/// Where a resolved link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkContext {
    /// Same document (`#anchor` targets).
    SelfContext,
    /// New browsing context.
    Blank,
}

impl LinkContext {
    fn for_target(target: &str) -> Self {
        if target.starts_with('#') {
            Self::SelfContext
        } else {
            Self::Blank
        }
    }

    /// Value of the anchor's `target` attribute.
    pub fn as_attr(self) -> &'static str {
        match self {
            Self::SelfContext => "_self",
            Self::Blank => "_blank",
        }
    }
}

/// A parsed `{@link target text}` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link<'a> {
    /// Link destination.
    pub target: &'a str,
    /// Visible text; the target when the directive has none.
    pub text: &'a str,
}

impl<'a> Link<'a> {
    /// Parse the inside of a directive, i.e. the text between `{@link` and `}`.
    ///
    /// Accepts `target`, `target display text` and `target|display text`. The target
    /// ends at whichever of `|` or whitespace comes first, so it never holds a space.
    /// Returns `None` for an empty target.
    pub fn parse(inner: &'a str) -> Option<Self> {
        let inner = inner.trim();
        let (target, text) = match inner.find(|c: char| c == '|' || c.is_whitespace()) {
            Some(end) => {
                let sep_len = inner[end..].chars().next().map_or(1, char::len_utf8);
                (&inner[..end], inner[end + sep_len..].trim())
            }
            None => (inner, ""),
        };
        if target.is_empty() {
            return None;
        }
        let text = if text.is_empty() { target } else { text };
        Some(Self { target, text })
    }

    /// Rendering context chosen from the target.
    pub fn context(&self) -> LinkContext {
        LinkContext::for_target(self.target)
    }
}

impl fmt::Display for Link<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<a href=\"{}\" target=\"{}\">{}</a>",
            self.target,
            self.context().as_attr(),
            self.text
        )
    }
}

/// Replace every `{@link ...}` directive in `text` with anchor markup.
///
/// Directives are resolved left to right in a single pass. A directive that is not
/// followed by whitespace (`{@linkcode}`), has no closing `}`, or has an empty target
/// is copied through unchanged.
pub fn resolve_links(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(LINK_OPEN) {
        let body_start = start + LINK_OPEN.len();
        let after_open = &rest[body_start..];

        match directive(after_open) {
            Some((link, consumed)) => {
                output.push_str(&rest[..start]);
                output.push_str(&link.to_string());
                rest = &after_open[consumed..];
            }
            None => {
                output.push_str(&rest[..body_start]);
                rest = after_open;
            }
        }
    }

    output.push_str(rest);
    output
}

/// Parse a directive body; returns the link and the number of bytes consumed,
/// including the closing brace.
fn directive(after_open: &str) -> Option<(Link<'_>, usize)> {
    if !after_open.starts_with(char::is_whitespace) {
        return None;
    }
    let close = after_open.find('}')?;
    let link = Link::parse(&after_open[..close])?;
    Some((link, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_strips_gutters_and_trims() {
        let raw = "\n *\n * A simple button class.\n *\n * ";
        assert_eq!(clean(raw), "A simple button class.");
    }

    #[test]
    fn clean_keeps_line_breaks_between_wrapped_lines() {
        let raw = " First line.\n     * Second line.\n ";
        assert_eq!(clean(raw), "First line.\nSecond line.");
    }

    #[test]
    fn clean_keeps_indentation_after_gutter() {
        let raw = "\n * <List>\n *   <Item />\n * </List>\n ";
        assert_eq!(clean(raw), "<List>\n  <Item />\n</List>");
    }

    #[test]
    fn clean_leaves_inline_asterisks_alone() {
        assert_eq!(clean("a * b"), "a * b");
        assert_eq!(clean("2 * 3 = 6"), "2 * 3 = 6");
    }

    #[test]
    fn clean_is_idempotent_on_nested_gutters() {
        let raw = "x\n  *   * nested\n\t*\tTabbed";
        let once = clean(raw);
        assert_eq!(once, "x\nnested\nTabbed");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn clean_keeps_emphasis_at_line_start() {
        let raw = "\n * **Required.** Must be set.\n * *Deprecated* since 2.0\n ";
        let once = clean(raw);
        assert_eq!(once, "**Required.** Must be set.\n*Deprecated* since 2.0");
        assert_eq!(clean(&once), once);
    }

    #[test]
    fn clean_strips_bare_gutter_before_emphasis() {
        assert_eq!(clean("*\n* *em* text\n**"), "*em* text\n**");
        assert_eq!(clean("* * list item"), "list item");
    }

    #[test]
    fn link_without_text_uses_target() {
        assert_eq!(
            resolve_links("See {@link https://example.com }."),
            "See <a href=\"https://example.com\" target=\"_blank\">https://example.com</a>."
        );
    }

    #[test]
    fn anchor_link_opens_in_self() {
        assert_eq!(
            resolve_links("{@link #props the props}"),
            "<a href=\"#props\" target=\"_self\">the props</a>"
        );
    }

    #[test]
    fn pipe_separates_display_text() {
        assert_eq!(
            resolve_links("{@link docs/button.html|Button docs}"),
            "<a href=\"docs/button.html\" target=\"_blank\">Button docs</a>"
        );
    }

    #[test]
    fn resolves_every_directive_in_one_pass() {
        let text = "{@link #a} and {@link http://b.dev B}";
        assert_eq!(
            resolve_links(text),
            "<a href=\"#a\" target=\"_self\">#a</a> and \
             <a href=\"http://b.dev\" target=\"_blank\">B</a>"
        );
    }

    #[test]
    fn malformed_directives_are_copied_through() {
        assert_eq!(resolve_links("{@link }"), "{@link }");
        assert_eq!(resolve_links("{@link never closed"), "{@link never closed");
        assert_eq!(resolve_links("{@linkcode Foo}"), "{@linkcode Foo}");
        assert_eq!(resolve_links("no links"), "no links");
    }

    #[test]
    fn malformed_directive_does_not_block_later_ones() {
        assert_eq!(
            resolve_links("{@linkplain x} {@link #y}"),
            "{@linkplain x} <a href=\"#y\" target=\"_self\">#y</a>"
        );
    }

    #[test]
    fn link_parse_trims_target() {
        let link = Link::parse("  #top  ").unwrap();
        assert_eq!(link.target, "#top");
        assert_eq!(link.text, "#top");
        assert_eq!(link.context(), LinkContext::SelfContext);
        assert!(Link::parse("   ").is_none());
        assert!(Link::parse("| text").is_none());
    }

    #[test]
    fn link_target_stops_at_first_space_or_pipe() {
        let link = Link::parse("a b|c").unwrap();
        assert_eq!(link.target, "a");
        assert_eq!(link.text, "b|c");

        let link = Link::parse("a|b c").unwrap();
        assert_eq!(link.target, "a");
        assert_eq!(link.text, "b c");

        assert_eq!(
            resolve_links("{@link a b|c}"),
            "<a href=\"a\" target=\"_blank\">b|c</a>"
        );
    }
}
