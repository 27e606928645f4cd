//! Embed toggling for checklist-link lines
//!
//! A checklist-link line is a markdown task item whose text starts with a
//! wiki link:
//!
//! ```text
//! - [ ] [[Target]]       plain link
//! - [x] ![[Target]]      embedded link
//! ```
//!
//! The matcher is anchored at the start of the line and not at the end, so
//! anything after the closing `]]` is carried over untouched. Only the link
//! directly after the checkbox is considered; further links on the same line
//! are left alone.

use std::borrow::Cow;

const ITEM_PREFIX: &str = "- [";
const STATE_SUFFIX: &str = "] ";
const EMBED_MARKER: char = '!';
const LINK_OPEN: &str = "[[";
const LINK_CLOSE: &str = "]]";

/// A checklist-link line split into its parts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistLink<'a> {
    /// Checkbox state, `x` or a space
    pub state: char,
    /// Whether the link carries the `!` embed marker
    pub embedded: bool,
    /// Link target between `[[` and the first `]]`
    pub target: &'a str,
    /// Remainder of the line after the closing `]]`
    pub rest: &'a str,
}

impl ChecklistLink<'_> {
    /// Render the line back, with or without the embed marker
    pub fn render(&self, embed: bool) -> String {
        let marker = if embed { "!" } else { "" };
        format!(
            "{}{}{}{}{}{}{}{}",
            ITEM_PREFIX, self.state, STATE_SUFFIX, marker, LINK_OPEN, self.target, LINK_CLOSE, self.rest
        )
    }
}

/// Match a single line against the checklist-link grammar
pub fn parse_checklist_link(line: &str) -> Option<ChecklistLink<'_>> {
    let after_prefix = line.strip_prefix(ITEM_PREFIX)?;

    let mut chars = after_prefix.chars();
    let state = chars.next().filter(|c| *c == 'x' || *c == ' ')?;
    let after_state = chars.as_str().strip_prefix(STATE_SUFFIX)?;

    let (embedded, after_marker) = match after_state.strip_prefix(EMBED_MARKER) {
        Some(rest) => (true, rest),
        None => (false, after_state),
    };

    let body = after_marker.strip_prefix(LINK_OPEN)?;
    let end = body.find(LINK_CLOSE)?;

    Some(ChecklistLink {
        state,
        embedded,
        target: &body[..end],
        rest: &body[end + LINK_CLOSE.len()..],
    })
}

/// Rewrite one line; lines outside the grammar are borrowed back unchanged
pub fn rewrite_line(line: &str, embed: bool) -> Cow<'_, str> {
    match parse_checklist_link(line) {
        Some(link) => Cow::Owned(link.render(embed)),
        None => Cow::Borrowed(line),
    }
}

/// Add (`embed_enabled == true`) or remove the embed marker on every
/// checklist-link line of `text`.
///
/// Returns the new text and the negated flag, i.e. the direction the next
/// toggle should take.
pub fn toggle_embeds(text: &str, embed_enabled: bool) -> (String, bool) {
    let lines: Vec<Cow<'_, str>> = text
        .split('\n')
        .map(|line| rewrite_line(line, embed_enabled))
        .collect();

    (lines.join("\n"), !embed_enabled)
}

/// Number of lines the next toggle would actually change
pub fn count_changes(text: &str, embed_enabled: bool) -> usize {
    text.split('\n')
        .filter_map(parse_checklist_link)
        .filter(|link| link.embedded != embed_enabled)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_link() {
        let link = parse_checklist_link("- [ ] [[Alpha]]").unwrap();
        assert_eq!(link.state, ' ');
        assert!(!link.embedded);
        assert_eq!(link.target, "Alpha");
        assert_eq!(link.rest, "");
    }

    #[test]
    fn test_parse_embedded_link_with_trailing_text() {
        let link = parse_checklist_link("- [x] ![[Beta|alias]] due friday").unwrap();
        assert_eq!(link.state, 'x');
        assert!(link.embedded);
        assert_eq!(link.target, "Beta|alias");
        assert_eq!(link.rest, " due friday");
    }

    #[test]
    fn test_parse_rejects_other_shapes() {
        assert_eq!(parse_checklist_link("- plain text"), None);
        assert_eq!(parse_checklist_link("- [X] [[Upper]]"), None);
        assert_eq!(parse_checklist_link("- [-] [[Dash]]"), None);
        assert_eq!(parse_checklist_link("- [ ][[NoSpace]]"), None);
        assert_eq!(parse_checklist_link("  - [ ] [[Indented]]"), None);
        assert_eq!(parse_checklist_link("* [ ] [[Star]]"), None);
        assert_eq!(parse_checklist_link("- [ ] [[Unclosed"), None);
        assert_eq!(parse_checklist_link("- [ ] text [[Later]]"), None);
        assert_eq!(parse_checklist_link("- [ ] !![[Double]]"), None);
        assert_eq!(parse_checklist_link(""), None);
    }

    #[test]
    fn test_parse_empty_target() {
        let link = parse_checklist_link("- [ ] [[]]").unwrap();
        assert_eq!(link.target, "");
    }

    #[test]
    fn test_target_stops_at_first_close() {
        let link = parse_checklist_link("- [ ] [[a]]]").unwrap();
        assert_eq!(link.target, "a");
        assert_eq!(link.rest, "]");
    }

    #[test]
    fn test_toggle_embeds_on() {
        let doc = "- [ ] [[Alpha]]\n- [x] ![[Beta]]\n- plain text";
        let (text, flag) = toggle_embeds(doc, true);
        assert_eq!(text, "- [ ] ![[Alpha]]\n- [x] ![[Beta]]\n- plain text");
        assert!(!flag);
    }

    #[test]
    fn test_toggle_embeds_off() {
        let doc = "- [ ] [[Alpha]]\n- [x] ![[Beta]]\n- plain text";
        let (text, flag) = toggle_embeds(doc, false);
        assert_eq!(text, "- [ ] [[Alpha]]\n- [x] [[Beta]]\n- plain text");
        assert!(flag);
    }

    #[test]
    fn test_only_first_link_on_line() {
        let doc = "- [ ] [[One]] and - [ ] [[Two]] and ![[Three]]";
        let (text, _) = toggle_embeds(doc, true);
        assert_eq!(text, "- [ ] ![[One]] and - [ ] [[Two]] and ![[Three]]");
    }

    #[test]
    fn test_non_matching_lines_untouched() {
        let doc = "# Heading\r\n\n  - [ ] [[Nested]]\n- [ ] no link\ttab\n[[Bare]]\n";
        let (on, _) = toggle_embeds(doc, true);
        let (off, _) = toggle_embeds(doc, false);
        assert_eq!(on, doc);
        assert_eq!(off, doc);
    }

    #[test]
    fn test_line_endings_preserved() {
        let doc = "- [ ] [[Alpha]]\r\n- [x] [[Beta]]\n";
        let (text, _) = toggle_embeds(doc, true);
        assert_eq!(text, "- [ ] ![[Alpha]]\r\n- [x] ![[Beta]]\n");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(toggle_embeds("", true), (String::new(), false));
        assert_eq!(toggle_embeds("", false), (String::new(), true));
    }

    #[test]
    fn test_two_toggles_round_trip() {
        let doc = "intro\n- [ ] [[Alpha]]\n- [x] [[Beta]] done\n";
        for start in [true, false] {
            let (once, flag) = toggle_embeds(doc, start);
            let (twice, flag_back) = toggle_embeds(&once, flag);
            assert_eq!(flag_back, start);
            if start {
                assert_eq!(twice, doc);
            }
        }
    }

    #[test]
    fn test_count_changes() {
        let doc = "- [ ] [[Alpha]]\n- [x] ![[Beta]]\n- plain text";
        assert_eq!(count_changes(doc, true), 1);
        assert_eq!(count_changes(doc, false), 1);
        assert_eq!(count_changes("- [ ] ![[A]]\n- [ ] ![[B]]", true), 0);
    }
}
