//! Longest-match lexer: raw text -> ordered token sequence (spec §4.2).

use smol_str::SmolStr;

use crate::dialect::{DialectConfig, EscapeStyle, QuoteStyle, ReservedClass};
use crate::token::{Token, TokenKind};

/// `Tokenize(sql, cfg) -> sequence of Token` (spec §4.2).
///
/// Never fails: unknown characters become single-character `word` tokens
/// and unterminated spans consume to end of input (spec §4.2 contract
/// point 4, §7 "Malformed input").
pub fn tokenize(sql: &str, cfg: &DialectConfig) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = sql;

    while !rest.is_empty() {
        let (token, consumed) = next_token(rest, cfg);
        tokens.push(token);
        rest = &rest[consumed..];
    }

    tokens
}

fn next_token(s: &str, cfg: &DialectConfig) -> (Token, usize) {
    if let Some(len) = match_whitespace(s) {
        return (Token::new(TokenKind::Whitespace, &s[..len]), len);
    }

    if let Some((open, close)) = cfg.no_reflow_comment
        && let Some(len) = match_block_comment(s, open, close)
    {
        return (
            Token::new(TokenKind::BlockComment, &s[..len]).no_reflow(),
            len,
        );
    }

    {
        let (open, close) = cfg.block_comment;
        if let Some(len) = match_block_comment(s, open, close) {
            return (Token::new(TokenKind::BlockComment, &s[..len]), len);
        }
    }

    for marker in &cfg.line_comment_markers {
        if let Some(len) = match_line_comment(s, marker) {
            return (Token::new(TokenKind::LineComment, &s[..len]), len);
        }
    }

    if cfg.dollar_quoted_strings
        && let Some(len) = match_dollar_quoted_string(s)
    {
        return (Token::new(TokenKind::String, &s[..len]), len);
    }

    for quote in &cfg.string_quotes {
        if let Some(len) = match_quoted_span(s, *quote, cfg.escape_style) {
            return (Token::new(TokenKind::String, &s[..len]), len);
        }
    }

    if let Some(len) = match_blob_literal(s, cfg) {
        return (Token::new(TokenKind::Number, &s[..len]), len);
    }

    for quote in &cfg.identifier_quotes {
        if let Some(len) = match_quoted_span(s, *quote, cfg.escape_style) {
            let kind = if quote.open == '"' && !cfg.double_quote_is_identifier {
                TokenKind::String
            } else {
                TokenKind::Word
            };
            return (Token::new(kind, &s[..len]), len);
        }
    }

    if let Some(len) = match_number(s, cfg) {
        return (Token::new(TokenKind::Number, &s[..len]), len);
    }

    if let Some((len, key)) = match_placeholder(s, cfg) {
        let mut tok = Token::new(TokenKind::Placeholder, &s[..len]);
        if let Some(key) = key {
            tok = tok.with_key(key);
        }
        return (tok, len);
    }

    // Literal grouping parens. Tried before reserved-phrase/operator matching
    // since neither of those scan bare `(`/`)`; structural block-open/close
    // keywords (CASE/BEGIN/IF/END...) are matched separately below and only
    // ever start with a letter, so there is no ambiguity with this branch.
    if let Some(c) = s.chars().next() {
        if c == '(' {
            return (Token::new(TokenKind::OpenParen, "("), 1);
        }
        if c == ')' {
            return (Token::new(TokenKind::CloseParen, ")"), 1);
        }
    }

    if let Some(len) = match_boolean_literal(s, cfg) {
        return (Token::new(TokenKind::Boolean, &s[..len]), len);
    }

    if let Some((len, token)) = match_phrase_candidates(s, cfg) {
        return (token, len);
    }

    if let Some(op) = match_operator(s, &cfg.operators) {
        return (Token::new(TokenKind::Operator, op), op.len());
    }

    let word_len = match_bare_word(s);
    if word_len > 0 {
        return (Token::new(TokenKind::Word, &s[..word_len]), word_len);
    }

    // Unknown character: emit as a single-character word and keep scanning
    // (spec §7 "Malformed input (non-fatal)").
    let len = s.chars().next().map(|c| c.len_utf8()).unwrap_or(1);
    log::debug!("unrecognized character {:?}, passing through as a word token", &s[..len]);
    (Token::new(TokenKind::Word, &s[..len]), len)
}

fn match_whitespace(s: &str) -> Option<usize> {
    let len = s
        .char_indices()
        .take_while(|(_, c)| c.is_whitespace())
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    (len > 0).then_some(len)
}

fn match_block_comment(s: &str, open: &str, close: &str) -> Option<usize> {
    if !s.starts_with(open) {
        return None;
    }
    match s[open.len()..].find(close) {
        Some(idx) => Some(open.len() + idx + close.len()),
        None => Some(s.len()),
    }
}

fn match_line_comment(s: &str, marker: &str) -> Option<usize> {
    if !s.starts_with(marker) {
        return None;
    }
    match s.find('\n') {
        Some(idx) => Some(idx + 1),
        None => Some(s.len()),
    }
}

fn match_quoted_span(s: &str, quote: QuoteStyle, escape: EscapeStyle) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    if first != quote.open {
        return None;
    }

    let open_len = quote.open.len_utf8();
    let mut idx = open_len;
    let bytes = s;

    loop {
        if idx >= bytes.len() {
            return Some(bytes.len());
        }
        let c = bytes[idx..].chars().next().unwrap();
        if escape == EscapeStyle::Backslash && c == '\\' {
            idx += 1;
            if idx < bytes.len() {
                idx += bytes[idx..].chars().next().unwrap().len_utf8();
            }
            continue;
        }
        if c == quote.close {
            let after = idx + c.len_utf8();
            // Doubled-quote escape: `''` or `""` inside the span continues it.
            if bytes[after..].starts_with(quote.close) {
                idx = after + quote.close.len_utf8();
                continue;
            }
            return Some(after);
        }
        idx += c.len_utf8();
    }
}

/// PostgreSQL dollar-quoted strings: `$tag$ ... $tag$`, tag may be empty.
fn match_dollar_quoted_string(s: &str) -> Option<usize> {
    if !s.starts_with('$') {
        return None;
    }
    let mut tag_end = 1;
    for c in s[1..].chars() {
        if c.is_alphanumeric() || c == '_' {
            tag_end += c.len_utf8();
        } else {
            break;
        }
    }
    if !s[tag_end..].starts_with('$') {
        return None;
    }
    let open_tag = &s[..=tag_end];
    match s[open_tag.len()..].find(open_tag) {
        Some(idx) => Some(open_tag.len() + idx + open_tag.len()),
        None => None,
    }
}

fn match_blob_literal(s: &str, cfg: &DialectConfig) -> Option<usize> {
    if cfg.numeric.hex_blob && (s.starts_with("X'") || s.starts_with("x'")) {
        return match_quoted_span(&s[1..], QuoteStyle::new('\'', '\''), EscapeStyle::DoubledQuoteOnly)
            .map(|len| len + 1);
    }
    if cfg.numeric.binary_blob && (s.starts_with("B'") || s.starts_with("b'")) {
        return match_quoted_span(&s[1..], QuoteStyle::new('\'', '\''), EscapeStyle::DoubledQuoteOnly)
            .map(|len| len + 1);
    }
    None
}

fn match_number(s: &str, cfg: &DialectConfig) -> Option<usize> {
    if cfg.numeric.hex && (s.starts_with("0x") || s.starts_with("0X")) {
        let len = 2 + s[2..]
            .chars()
            .take_while(|c| c.is_ascii_hexdigit())
            .count();
        if len > 2 {
            return Some(len);
        }
    }
    if cfg.numeric.binary && (s.starts_with("0b") || s.starts_with("0B")) {
        let len = 2 + s[2..]
            .chars()
            .take_while(|c| *c == '0' || *c == '1')
            .count();
        if len > 2 {
            return Some(len);
        }
    }

    let bytes = s.as_bytes();
    let mut len = 0;
    while len < bytes.len() && bytes[len].is_ascii_digit() {
        len += 1;
    }
    if len == 0 {
        return None;
    }

    if len < bytes.len() && bytes[len] == b'.' {
        let mut j = len + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > len + 1 {
            len = j;
        }
    }

    if len < bytes.len() && (bytes[len] == b'e' || bytes[len] == b'E') {
        let mut j = len + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let start_digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > start_digits {
            len = j;
        }
    }

    Some(len)
}

fn match_placeholder(s: &str, cfg: &DialectConfig) -> Option<(usize, Option<SmolStr>)> {
    let forms = &cfg.placeholders;
    let mut chars = s.chars();
    let first = chars.next()?;

    match first {
        '?' if forms.question_numbered => {
            let digits = s[1..].chars().take_while(|c| c.is_ascii_digit()).count();
            if digits > 0 {
                return Some((1 + digits, Some(SmolStr::new(&s[1..1 + digits]))));
            }
            if forms.question {
                return Some((1, None));
            }
        }
        '?' if forms.question => return Some((1, None)),
        ':' if forms.colon_name => {
            let name_len = ident_len(&s[1..]);
            if name_len > 0 {
                return Some((1 + name_len, Some(SmolStr::new(&s[1..1 + name_len]))));
            }
        }
        '@' if forms.at_name => {
            let name_len = ident_len(&s[1..]);
            if name_len > 0 {
                return Some((1 + name_len, Some(SmolStr::new(&s[1..1 + name_len]))));
            }
        }
        '$' if forms.dollar_numbered || forms.dollar_name => {
            let digits = s[1..].chars().take_while(|c| c.is_ascii_digit()).count();
            if digits > 0 && forms.dollar_numbered {
                return Some((1 + digits, Some(SmolStr::new(&s[1..1 + digits]))));
            }
            if forms.dollar_name {
                let name_len = ident_len(&s[1..]);
                if name_len > 0 {
                    return Some((1 + name_len, Some(SmolStr::new(&s[1..1 + name_len]))));
                }
            }
        }
        _ => {}
    }
    None
}

fn ident_len(s: &str) -> usize {
    s.char_indices()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

/// Reserved-phrase and structural block-keyword matching (spec §4.2 point 8,
/// point 2 — `END IF` must be tried before bare `END`).
fn match_phrase_candidates(s: &str, cfg: &DialectConfig) -> Option<(usize, Token)> {
    let first_word_len = ident_len(s);
    if first_word_len == 0 {
        return None;
    }
    let first_word = s[..first_word_len].to_lowercase();

    struct Candidate<'a> {
        phrase: String,
        words: usize,
        priority: u8,
        token: Token,
        canonical: &'a str,
    }

    let mut candidates: Vec<Candidate> = Vec::new();

    for (phrase, class, canonical) in cfg.phrases_starting_with(&first_word) {
        let words = phrase.split(' ').count();
        let kind = match class {
            ReservedClass::TopLevel => TokenKind::ReservedTopLevel,
            ReservedClass::TopLevelNoIndent => TokenKind::ReservedTopLevelNoIndent,
            ReservedClass::Newline => TokenKind::ReservedNewline,
            ReservedClass::Reserved => TokenKind::Reserved,
        };
        candidates.push(Candidate {
            phrase: phrase.to_string(),
            words,
            priority: class_priority(class),
            token: Token::new(kind, "").with_canonical(canonical),
            canonical,
        });
    }

    for pair in &cfg.block_pairs {
        if pair.open.to_lowercase().split(' ').next() == Some(first_word.as_str())
            && pair.open.split(' ').count() == 1
        {
            candidates.push(Candidate {
                phrase: pair.open.to_lowercase(),
                words: 1,
                priority: 4,
                token: Token::new(TokenKind::OpenParen, "")
                    .with_canonical(pair.open.as_str())
                    .structural(),
                canonical: pair.open.as_str(),
            });
        }
        if pair.close.to_lowercase().split(' ').next() == Some(first_word.as_str()) {
            let words = pair.close.split(' ').count();
            candidates.push(Candidate {
                phrase: pair.close.to_lowercase(),
                words,
                priority: 4,
                token: Token::new(TokenKind::CloseParen, "")
                    .with_canonical(pair.close.as_str())
                    .structural(),
                canonical: pair.close.as_str(),
            });
        }
    }

    candidates.sort_by(|a, b| b.words.cmp(&a.words).then_with(|| a.priority.cmp(&b.priority)));

    for candidate in candidates {
        if let Some(len) = match_phrase_text(s, &candidate.phrase) {
            let mut token = candidate.token;
            token.text = SmolStr::new(&s[..len]);
            let _ = candidate.canonical;
            return Some((len, token));
        }
    }
    None
}

fn class_priority(class: ReservedClass) -> u8 {
    match class {
        ReservedClass::TopLevel => 0,
        ReservedClass::TopLevelNoIndent => 1,
        ReservedClass::Newline => 2,
        ReservedClass::Reserved => 3,
    }
}

/// Does `s` begin with `phrase` (lowercase, single-space-joined), allowing
/// runs of spaces/tabs (never newlines) between its words, with exact
/// word-boundary matching on both ends?
fn match_phrase_text(s: &str, phrase: &str) -> Option<usize> {
    let words: Vec<&str> = phrase.split(' ').collect();
    let mut pos = 0usize;

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let gap = s[pos..]
                .chars()
                .take_while(|c| *c == ' ' || *c == '\t')
                .count();
            if gap == 0 {
                return None;
            }
            pos += gap;
        }
        let remaining = &s[pos..];
        if remaining.len() < word.len() || !remaining[..word.len()].eq_ignore_ascii_case(word) {
            return None;
        }
        pos += word.len();
    }

    // word-boundary: next char must not continue an identifier.
    if let Some(c) = s[pos..].chars().next()
        && (c.is_alphanumeric() || c == '_')
    {
        return None;
    }
    Some(pos)
}

/// `TRUE`/`FALSE` (or whatever [`DialectConfig::boolean_words`] names),
/// matched as a whole word ahead of reserved-phrase matching so they become
/// `boolean` tokens rather than `reserved` (spec §3 Token kinds).
fn match_boolean_literal(s: &str, cfg: &DialectConfig) -> Option<usize> {
    let word_len = ident_len(s);
    if word_len == 0 {
        return None;
    }
    let word = &s[..word_len];
    cfg.boolean_words
        .iter()
        .any(|w| w.eq_ignore_ascii_case(word))
        .then_some(word_len)
}

fn match_operator(s: &str, ops: &[&'static str]) -> Option<&'static str> {
    ops.iter().find(|op| s.starts_with(**op)).copied()
}

fn match_bare_word(s: &str) -> usize {
    s.char_indices()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::PlaceholderForms;

    fn standard() -> DialectConfig {
        DialectConfig::builder("standard")
            .reserved(ReservedClass::TopLevel, &["select", "from", "where"])
            .reserved(ReservedClass::Newline, &["and", "or"])
            .placeholders(PlaceholderForms {
                question: true,
                colon_name: true,
                ..Default::default()
            })
            .build()
    }

    #[test]
    fn tokenizes_basic_select() {
        let cfg = standard();
        let tokens = tokenize("SELECT * FROM foo WHERE goo = 'taco'", &cfg);
        let kinds: Vec<_> = tokens
            .iter()
            .filter(|t| !t.is_whitespace())
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::ReservedTopLevel, // SELECT
                TokenKind::Operator,         // *
                TokenKind::ReservedTopLevel, // FROM
                TokenKind::Word,             // foo
                TokenKind::ReservedTopLevel, // WHERE
                TokenKind::Word,             // goo
                TokenKind::Operator,         // =
                TokenKind::String,           // 'taco'
            ]
        );
    }

    #[test]
    fn unterminated_string_consumes_to_eof() {
        let cfg = standard();
        let tokens = tokenize("SELECT 'abc", &cfg);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::String);
        assert_eq!(last.text, "'abc");
    }

    #[test]
    fn placeholder_inside_string_is_not_tokenized() {
        let cfg = standard();
        let tokens = tokenize("'?' :name", &cfg);
        assert_eq!(tokens[0].kind, TokenKind::String);
        assert_eq!(tokens[0].text, "'?'");
    }

    #[test]
    fn unknown_character_is_passed_through() {
        let cfg = standard();
        let tokens = tokenize("€", &cfg);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Word);
    }

    #[test]
    fn true_and_false_tokenize_as_boolean_not_reserved() {
        let cfg = standard();
        let tokens = tokenize("TRUE false truely", &cfg);
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Boolean,
                TokenKind::Whitespace,
                TokenKind::Boolean,
                TokenKind::Whitespace,
                TokenKind::Word,
            ]
        );
    }
}
