//! Anchor windows over serialized content
//!
//! Positions are counted in characters. The window is computed exactly as
//! follows, with `length` the character count of the content:
//!
//! ```text
//! start = index_of(after) + 1          (0 without after; 0 when not found)
//! end   = index_of(before)             (length without before; -1 when not found)
//! window = substring(start, length - end)
//! ```
//!
//! `substring` clamps both bounds into `[0, length]` and swaps them when the
//! first is larger. The second bound is `length - end`, not `end`: with both
//! anchors present the window is generally not the text between them.

use super::options::Anchor;

/// Character index of the first occurrence of `anchor` in `content`
fn index_of(content: &str, anchor: &Anchor) -> Option<usize> {
    let byte_index = match anchor {
        Anchor::Text(text) => content.find(text.as_str()),
        Anchor::Pattern(pattern) => pattern.regex().find(content).map(|found| found.start()),
        Anchor::Node(_) => None,
    }?;
    Some(content[..byte_index].chars().count())
}

/// Slice of `content` between two character bounds, `substring` style
fn substring(content: &str, length: i64, from: i64, to: i64) -> &str {
    let from = from.clamp(0, length);
    let to = to.clamp(0, length);
    let (from, to) = if from > to { (to, from) } else { (from, to) };
    let byte_at = |index: i64| {
        content
            .char_indices()
            .nth(index as usize)
            .map_or(content.len(), |(byte, _)| byte)
    };
    &content[byte_at(from)..byte_at(to)]
}

/// The part of `content` a text or pattern term is searched in
pub fn window<'a>(content: &'a str, after: Option<&Anchor>, before: Option<&Anchor>) -> &'a str {
    let length = content.chars().count() as i64;
    let start = after.map_or(0, |anchor| {
        index_of(content, anchor).map_or(0, |index| index as i64 + 1)
    });
    let end = before.map_or(length, |anchor| {
        index_of(content, anchor).map_or(-1, |index| index as i64)
    });
    substring(content, length, start, length - end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Pattern;
    use rstest::rstest;

    fn text(anchor: &str) -> Anchor {
        Anchor::Text(anchor.to_string())
    }

    #[rstest]
    // The tail after `après` is long enough to reach back past `avant`
    #[case("avant recherché après la fin du texte", Some("avant"), Some("après"), "vant recherché après")]
    // Here it is not: the bounds swap and the window is two characters
    #[case("début avant le milieu, puis après", Some("avant"), Some("après"), " a")]
    // With `after` alone the window is everything up to one past the anchor
    #[case("xx avant recherché après", Some("avant"), None, "xx a")]
    #[case("un avant deux après trois", None, Some("après"), "un avant de")]
    #[case("sans ancre ici", Some("absent"), Some("absent"), "sans ancre ici")]
    #[case("é avant ç après", Some("avant"), Some("après"), "va")]
    fn test_window_bounds(
        #[case] content: &str,
        #[case] after: Option<&str>,
        #[case] before: Option<&str>,
        #[case] expected: &str,
    ) {
        let after = after.map(text);
        let before = before.map(text);
        assert_eq!(window(content, after.as_ref(), before.as_ref()), expected);
    }

    #[test]
    fn test_differs_from_text_between_anchors() {
        let content = "début avant le milieu, puis après";
        let between = &content[content.find("avant").unwrap() + 1..content.find("après").unwrap()];

        assert_eq!(between, "vant le milieu, puis ");
        assert_ne!(window(content, Some(&text("avant")), Some(&text("après"))), between);
    }

    #[test]
    fn test_pattern_anchor_uses_first_match_start() {
        let content = "avant recherché APRÈS la fin du texte";
        let before = Anchor::Pattern(Pattern::with_flags("après", "i").unwrap());

        assert_eq!(
            window(content, Some(&text("avant")), Some(&before)),
            "vant recherché APRÈS"
        );
    }

    #[test]
    fn test_no_anchors_is_whole_content() {
        assert_eq!(window("tout le texte", None, None), "tout le texte");
    }
}
