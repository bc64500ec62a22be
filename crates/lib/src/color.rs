//! ANSI SGR wrapping for `PrettyFormat` (spec §6 `ColorConfig`, §4.6.2).
//!
//! `colorize` re-tokenizes the already-formatted string with the same
//! dialect grammar used to produce it and wraps each non-whitespace token
//! in the style configured for its kind, following the teacher's
//! `colorize_helper` idiom (`format!("{style}{s}{style:#}")`,
//! `cli-lib/src/formatters.rs`) rather than a bespoke ANSI-code table.

use anstyle::{AnsiColor, Effects, Style};
use sqlfmt_lib_core::{tokenize, DialectConfig, Token, TokenKind};

/// Per-token-kind ANSI SGR options (spec §6 `Config.ColorConfig`).
#[derive(Debug, Clone, Default)]
pub struct ColorConfig {
    pub reserved: Option<Style>,
    pub string: Option<Style>,
    pub number: Option<Style>,
    pub comment: Option<Style>,
    pub placeholder: Option<Style>,
}

impl ColorConfig {
    /// A reasonable default palette: bold blue keywords, green strings,
    /// magenta numbers, grey comments, yellow placeholders.
    pub fn ansi_defaults() -> Self {
        Self {
            reserved: Some(AnsiColor::Blue.on_default().effects(Effects::BOLD)),
            string: Some(AnsiColor::Green.on_default()),
            number: Some(AnsiColor::Magenta.on_default()),
            comment: Some(AnsiColor::BrightBlack.on_default()),
            placeholder: Some(AnsiColor::Yellow.on_default()),
        }
    }

    /// Only reserved-word and string/number tokens get wrapped (spec §6
    /// `PrettyFormat`). `OpenParen`/`CloseParen` only qualify as
    /// reserved-word-ish when they're the structural `CASE`/`BEGIN`/`IF`/
    /// `END` family (spec §4.6.2) — a literal grouping paren like the `(`
    /// in `COUNT(*)` is punctuation, not a keyword, and stays unstyled.
    fn style_for(&self, token: &Token) -> Option<Style> {
        match token.kind {
            TokenKind::Reserved
            | TokenKind::ReservedTopLevel
            | TokenKind::ReservedTopLevelNoIndent
            | TokenKind::ReservedNewline => self.reserved,
            TokenKind::OpenParen | TokenKind::CloseParen if token.structural => self.reserved,
            TokenKind::String => self.string,
            TokenKind::Number | TokenKind::Boolean => self.number,
            TokenKind::LineComment | TokenKind::BlockComment => self.comment,
            TokenKind::Placeholder => self.placeholder,
            _ => None,
        }
    }
}

pub(crate) fn colorize(formatted: &str, cfg: &DialectConfig, colors: &ColorConfig) -> String {
    let tokens = tokenize(formatted, cfg);
    let mut out = String::with_capacity(formatted.len());
    for token in &tokens {
        match colors.style_for(token) {
            Some(style) => out.push_str(&format!("{style}{text}{style:#}", text = token.text)),
            None => out.push_str(&token.text),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_lib_dialects::standard;

    #[test]
    fn reserved_tokens_get_wrapped_others_pass_through() {
        let cfg = standard::dialect();
        let colors = ColorConfig::ansi_defaults();
        let out = colorize("SELECT\n  foo\n", &cfg, &colors);
        assert!(out.contains("SELECT"));
        assert!(out.starts_with("\u{1b}["));
        assert!(out.contains("foo"));
    }

    #[test]
    fn no_styles_configured_is_a_pass_through() {
        let cfg = standard::dialect();
        let out = colorize("SELECT\n  foo\n", &cfg, &ColorConfig::default());
        assert_eq!(out, "SELECT\n  foo\n");
    }

    #[test]
    fn literal_parens_are_not_colored_but_structural_ones_are() {
        let colors = ColorConfig::ansi_defaults();
        let literal = Token::new(TokenKind::OpenParen, "(");
        let structural = Token::new(TokenKind::OpenParen, "CASE").structural();
        assert_eq!(colors.style_for(&literal), None);
        assert_eq!(colors.style_for(&structural), colors.reserved);
    }

    #[test]
    fn pretty_print_leaves_literal_grouping_parens_unstyled() {
        let cfg = standard::dialect();
        let colors = ColorConfig::ansi_defaults();
        let out = colorize("SELECT\n  count(*)\n", &cfg, &colors);
        assert!(out.contains("(*)"));
    }
}
