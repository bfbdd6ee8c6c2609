//! Monomer line normalization
//!
//! A raw monomer line may carry a `label:` prefix and a `,comment` suffix
//! around the space-separated domain tokens. The two tools of this crate
//! historically strip these differently, so the behavior is selected with
//! [`LineStyle`].

use crate::constants::{COMMENT_SEPARATOR, LABEL_SEPARATOR, NEGATION_MARKER};

/// How raw monomer lines are normalized and which lines are kept
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Vector encoder rules
    ///
    /// - blank lines are dropped by default
    /// - the label ends at the first `:`
    /// - the comment starts at the last `,`
    #[default]
    Encoder,
    /// Basis decoder rules
    ///
    /// - every raw line is kept by default (blank lines become empty monomers)
    /// - the label ends at the first `:`
    /// - the comment starts at the first `,`
    Decoder,
}

impl LineStyle {
    /// Blank-line handling each tool applies unless told otherwise
    pub fn default_blank_lines(self) -> BlankLines {
        match self {
            Self::Encoder => BlankLines::Skip,
            Self::Decoder => BlankLines::Keep,
        }
    }
}

/// Whether lines that are blank after trimming produce a monomer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlankLines {
    /// Blank lines become empty monomers, keeping line positions
    Keep,
    /// Blank lines are dropped
    Skip,
}

/// Normalize one raw line according to `style`
///
/// A line that is only a label (`m1:`) normalizes to an empty string under
/// both styles.
pub fn normalize_line(line: &str, style: LineStyle) -> String {
    match style {
        LineStyle::Encoder => normalize_encoder_line(line),
        LineStyle::Decoder => normalize_decoder_line(line),
    }
}

fn normalize_encoder_line(line: &str) -> String {
    let mut line = line.trim();

    if let Some((_, body)) = line.split_once(LABEL_SEPARATOR) {
        line = body.trim();
    }

    if let Some((body, _)) = line.rsplit_once(COMMENT_SEPARATOR) {
        line = body.trim();
    }

    line.to_string()
}

fn normalize_decoder_line(line: &str) -> String {
    let line = match line.split_once(LABEL_SEPARATOR) {
        Some((_, body)) => body.trim_start(),
        None => line,
    };

    let line = match line.split_once(COMMENT_SEPARATOR) {
        Some((body, _)) => body,
        None => line,
    };

    line.trim().to_string()
}

/// Normalize every line of `text` with the style's own blank-line handling
pub fn parse_monomers(text: &str, style: LineStyle) -> Vec<String> {
    parse_monomers_with(text, style, style.default_blank_lines())
}

/// Normalize every line of `text`, in order
pub fn parse_monomers_with(text: &str, style: LineStyle, blank_lines: BlankLines) -> Vec<String> {
    text.lines()
        .filter(|line| blank_lines == BlankLines::Keep || !is_blank(line))
        .map(|line| normalize_line(line, style))
        .collect()
}

/// Number of lines in `text` that are blank after trimming
pub fn count_blank_lines(text: &str) -> usize {
    text.lines().filter(|line| is_blank(line)).count()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// A single domain occurrence inside a monomer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DomainToken<'a> {
    /// Domain name without the negation marker
    pub base: &'a str,
    /// +1 for a plain token, -1 for a starred token
    pub sign: i64,
}

impl<'a> DomainToken<'a> {
    /// Split a token into its base domain and sign
    ///
    /// Only one trailing `*` is consumed: `a**` is the negated domain `a*`.
    pub fn parse(token: &'a str) -> Self {
        match token.strip_suffix(NEGATION_MARKER) {
            Some(base) => Self { base, sign: -1 },
            None => Self {
                base: token,
                sign: 1,
            },
        }
    }
}

/// Iterate over the domain tokens of a normalized monomer
pub fn domain_tokens(monomer: &str) -> impl Iterator<Item = DomainToken<'_>> {
    monomer.split_whitespace().map(DomainToken::parse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_strips_label_and_comment() {
        assert_eq!(normalize_line("m1: a b a*, note", LineStyle::Encoder), "a b a*");
    }

    #[test]
    fn test_encoder_cuts_at_last_comma() {
        assert_eq!(normalize_line("a b, c d, note", LineStyle::Encoder), "a b, c d");
    }

    #[test]
    fn test_decoder_cuts_at_first_comma() {
        assert_eq!(normalize_line("a b, c d, note", LineStyle::Decoder), "a b");
    }

    #[test]
    fn test_label_ends_at_first_colon() {
        assert_eq!(normalize_line("x: y: a b", LineStyle::Encoder), "y: a b");
        assert_eq!(normalize_line("x: y: a b", LineStyle::Decoder), "y: a b");
    }

    #[test]
    fn test_plain_line_is_trimmed() {
        assert_eq!(normalize_line("  a  b* ", LineStyle::Encoder), "a  b*");
        assert_eq!(normalize_line("  a  b* ", LineStyle::Decoder), "a  b*");
    }

    #[test]
    fn test_label_only_line_is_empty() {
        assert_eq!(normalize_line("m1:", LineStyle::Encoder), "");
        assert_eq!(normalize_line("m1:", LineStyle::Decoder), "");
    }

    #[test]
    fn test_parse_monomers_blank_handling() {
        let text = "a b\n\nm: c\n";
        assert_eq!(parse_monomers(text, LineStyle::Encoder), vec!["a b", "c"]);
        assert_eq!(parse_monomers(text, LineStyle::Decoder), vec!["a b", "", "c"]);
        assert_eq!(
            parse_monomers_with(text, LineStyle::Decoder, BlankLines::Skip),
            vec!["a b", "c"]
        );
        assert_eq!(count_blank_lines(text), 1);
    }

    #[test]
    fn test_label_only_line_survives_blank_skipping() {
        assert_eq!(
            parse_monomers("m1:\nm2: a\n", LineStyle::Encoder),
            vec!["", "a"]
        );
    }

    #[test]
    fn test_parse_monomers_crlf() {
        let text = "a b\r\nc\r\n";
        assert_eq!(parse_monomers(text, LineStyle::Decoder), vec!["a b", "c"]);
    }

    #[test]
    fn test_domain_token_sign() {
        assert_eq!(DomainToken::parse("a"), DomainToken { base: "a", sign: 1 });
        assert_eq!(DomainToken::parse("a*"), DomainToken { base: "a", sign: -1 });
        assert_eq!(DomainToken::parse("a**"), DomainToken { base: "a*", sign: -1 });
    }

    #[test]
    fn test_domain_tokens_split_on_whitespace() {
        let tokens: Vec<_> = domain_tokens("a\tb*  c").collect();
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].base, "b");
        assert_eq!(tokens[1].sign, -1);
    }
}
