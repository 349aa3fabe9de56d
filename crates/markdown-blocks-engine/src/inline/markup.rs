use super::{kinds::Markup, types::RichText};

/// Writes one span back to markdown.
///
/// Wrapping is sequential: bold, italic, strikethrough, underline, code,
/// and finally the link around the whole result. Image spans are written
/// in their `![alt](url)` source form.
pub fn to_markup(rt: &RichText) -> String {
    if let Some(image) = &rt.image {
        return format!("![{}]({})", image.alt, image.url);
    }

    let mut text = rt.text.clone();
    let wraps = [
        (rt.annotations.bold, Markup::BOLD),
        (rt.annotations.italic, Markup::ITALIC),
        (rt.annotations.strikethrough, Markup::STRIKETHROUGH),
        (rt.annotations.underline, Markup::UNDERLINE),
        (rt.annotations.code, Markup::CODE),
    ];
    for (on, delim) in wraps {
        if on {
            text = format!("{delim}{text}{delim}");
        }
    }
    if let Some(link) = &rt.link {
        text = format!("[{text}]({})", link.href);
    }
    text
}

/// Concatenated markup of a span sequence.
pub fn spans_to_markup(spans: &[RichText]) -> String {
    spans.iter().map(to_markup).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::{Annotations, tokenize};
    use crate::tests::{bold, bold_italic, code, italic, plain, strike};
    use rstest::rstest;

    #[rstest]
    #[case(plain("x"), "x")]
    #[case(bold("x"), "**x**")]
    #[case(italic("x"), "*x*")]
    #[case(bold_italic("x"), "***x***")]
    #[case(strike("x"), "~~x~~")]
    #[case(code("x"), "`x`")]
    #[case(RichText::styled("x", Annotations::UNDERLINE), "__x__")]
    fn wraps_annotations(#[case] span: RichText, #[case] expected: &str) {
        assert_eq!(to_markup(&span), expected);
    }

    #[test]
    fn link_wraps_outermost() {
        // The underline that comes with a link is written too
        assert_eq!(to_markup(&RichText::link("a", "b")), "[__a__](b)");
    }

    #[test]
    fn image_uses_source_form() {
        assert_eq!(to_markup(&RichText::image("cat", "c.png")), "![cat](c.png)");
    }

    #[test]
    fn single_annotation_spans_survive_a_round_trip() {
        let line = "a **b** *c* ***d*** ~~e~~ `f` ![g](h)";
        let spans = tokenize(line);
        assert_eq!(spans_to_markup(&spans), line);
        assert_eq!(tokenize(&spans_to_markup(&spans)), spans);
    }
}
