use super::{
    cursor::Cursor,
    kinds::{DelimitedRun, InlineImage, InlineLink, RUNS},
    types::RichText,
};

/// Splits one line of text into formatting spans.
///
/// At every position the constructs are tried in a fixed order (image,
/// the delimited runs of [`RUNS`], then link) and the first that matches
/// wins. Text between matches becomes plain spans. Spans never nest.
///
/// # Returns
/// The spans covering the entire input in order; empty input yields an
/// empty vector.
pub fn tokenize(s: &str) -> Vec<RichText> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    // Helper to flush accumulated text as a plain span
    fn flush_text(out: &mut Vec<RichText>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(RichText::plain(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.i;
        if let Some(span) = try_parse_construct(&mut cur) {
            flush_text(&mut out, s, text_start, start);
            text_start = cur.i;
            out.push(span);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, s, text_start, cur.i);
    out
}

fn try_parse_construct(cur: &mut Cursor<'_>) -> Option<RichText> {
    if let Some(span) = try_parse_image(cur) {
        return Some(span);
    }
    for run in &RUNS {
        if let Some(span) = try_parse_run(cur, run) {
            return Some(span);
        }
    }
    try_parse_link(cur)
}

/// Attempts to parse a delimited run (`**text**`, `` `code` ``, ...).
///
/// Content must be non-empty and cannot contain the delimiter byte.
/// On failure, cursor position is restored.
fn try_parse_run(cur: &mut Cursor<'_>, run: &DelimitedRun) -> Option<RichText> {
    let delim = run.delim();
    if run.guarded && cur.prev() == Some(delim) {
        return None;
    }
    if !cur.starts_with(run.open.as_bytes()) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(run.width());
    let inner_start = cur.i;
    let inner_len = cur.eat_while(|b| b != delim);
    let inner_end = cur.i;

    if inner_len == 0 || !cur.starts_with(run.open.as_bytes()) {
        *cur = saved;
        return None;
    }
    cur.bump_n(run.width());

    if run.guarded && cur.peek() == Some(delim) {
        *cur = saved;
        return None;
    }

    Some(RichText::styled(
        &cur.s[inner_start..inner_end],
        run.annotations,
    ))
}

/// Parses `[label](target)` from the cursor, returning `(label, target)`.
///
/// The label may be empty only when `allow_empty_label` is set; the target
/// must always be non-empty. On failure, cursor position is restored.
fn bracket_then_target<'a>(
    cur: &mut Cursor<'a>,
    allow_empty_label: bool,
) -> Option<(&'a str, &'a str)> {
    let saved = cur.clone();
    let s = cur.s;

    if cur.peek() != Some(InlineLink::OPEN) {
        return None;
    }
    cur.bump();
    let label_start = cur.i;
    let label_len = cur.eat_while(|b| b != InlineLink::CLOSE);
    let label_end = cur.i;
    if (label_len == 0 && !allow_empty_label) || cur.peek() != Some(InlineLink::CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump();

    if cur.peek() != Some(InlineLink::TARGET_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump();
    let target_start = cur.i;
    let target_len = cur.eat_while(|b| b != InlineLink::TARGET_CLOSE);
    let target_end = cur.i;
    if target_len == 0 || cur.peek() != Some(InlineLink::TARGET_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some((&s[label_start..label_end], &s[target_start..target_end]))
}

/// Attempts to parse `![alt](url)`; the alt text may be empty.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<RichText> {
    if cur.peek() != Some(InlineImage::BANG) {
        return None;
    }
    let saved = cur.clone();
    cur.bump();
    match bracket_then_target(cur, true) {
        Some((alt, url)) => Some(RichText::image(alt, url)),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[text](href)` as an underlined link span.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<RichText> {
    bracket_then_target(cur, false).map(|(text, href)| RichText::link(text, href))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::Annotations;
    use crate::tests::{bold, bold_italic, code, italic, plain, strike};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn empty_input_yields_no_spans() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn plain_text_is_one_span() {
        assert_eq!(tokenize("hello world"), vec![plain("hello world")]);
    }

    #[test]
    fn bold_in_the_middle() {
        assert_eq!(
            tokenize("Hello **world** today"),
            vec![plain("Hello "), bold("world"), plain(" today")]
        );
    }

    #[rstest]
    #[case("***both***", bold_italic("both"))]
    #[case("___both___", bold_italic("both"))]
    #[case("**strong**", bold("strong"))]
    #[case("__strong__", bold("strong"))]
    #[case("*soft*", italic("soft"))]
    #[case("_soft_", italic("soft"))]
    #[case("`let x`", code("let x"))]
    #[case("~~gone~~", strike("gone"))]
    fn single_construct(#[case] input: &str, #[case] expected: RichText) {
        assert_eq!(tokenize(input), vec![expected]);
    }

    #[test]
    fn link_is_underlined() {
        let spans = tokenize("see [docs](https://example.com) now");
        assert_eq!(
            spans,
            vec![
                plain("see "),
                RichText::link("docs", "https://example.com"),
                plain(" now"),
            ]
        );
        assert_eq!(spans[1].annotations, Annotations::UNDERLINE);
    }

    #[test]
    fn image_has_empty_text() {
        let spans = tokenize("![a cat](cat.png)");
        assert_eq!(spans, vec![RichText::image("a cat", "cat.png")]);
        assert_eq!(spans[0].text, "");
    }

    #[test]
    fn image_alt_may_be_empty() {
        assert_eq!(tokenize("![](x.png)"), vec![RichText::image("", "x.png")]);
    }

    #[test]
    fn image_wins_over_link() {
        let spans = tokenize("x ![i](u) [l](h)");
        assert_eq!(
            spans,
            vec![
                plain("x "),
                RichText::image("i", "u"),
                plain(" "),
                RichText::link("l", "h"),
            ]
        );
    }

    #[test]
    fn double_star_is_not_split_out_of_a_quadruple_run() {
        // `****x****` has no `**x**` with clean boundaries, nor `***x***`
        assert_eq!(tokenize("****x****"), vec![plain("****x****")]);
    }

    #[test]
    fn unclosed_constructs_become_text() {
        assert_eq!(
            tokenize("**open and `tick and [link"),
            vec![plain("**open and `tick and [link")]
        );
    }

    #[test]
    fn empty_delimited_content_is_not_a_match() {
        assert_eq!(tokenize("`` and ~~~~"), vec![plain("`` and ~~~~")]);
    }

    #[test]
    fn link_needs_a_target() {
        assert_eq!(tokenize("[text]()"), vec![plain("[text]()")]);
        assert_eq!(tokenize("[text] (x)"), vec![plain("[text] (x)")]);
    }

    #[test]
    fn code_is_literal_and_not_nested() {
        assert_eq!(tokenize("`**x**`"), vec![code("**x**")]);
    }

    #[test]
    fn adjacent_constructs() {
        assert_eq!(
            tokenize("*a*~~b~~`c`"),
            vec![italic("a"), strike("b"), code("c")]
        );
    }

    #[test]
    fn emphasis_does_not_nest_links() {
        // Bold content cannot contain `*`, the link text is kept verbatim.
        assert_eq!(tokenize("**[a](b)**"), vec![bold("[a](b)")]);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        assert_eq!(
            tokenize("héllo **wörld** 🚀"),
            vec![plain("héllo "), bold("wörld"), plain(" 🚀")]
        );
    }

    #[test]
    fn single_star_between_words_stays_plain() {
        assert_eq!(tokenize("2 * 3 = 6"), vec![plain("2 * 3 = 6")]);
    }
}
