//! Token consumer: emits formatted output, owning indentation, inline-block,
//! and block-context state for exactly one `Format` call (spec §4.6).

use smol_str::SmolStr;

use crate::block_context::BlockContext;
use crate::dialect::DialectConfig;
use crate::indentation::Indentation;
use crate::inline_block::InlineBlock;
use crate::params::Params;
use crate::token::{Token, TokenKind};
use crate::tokenizer::tokenize;

/// `Config.KeywordCase` (spec §4.6.3, §6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordCase {
    Preserve,
    Uppercase,
    Lowercase,
    #[default]
    Dialect,
}

/// The formatting knobs `Format`/`PrettyFormat` thread down to the
/// formatter (spec §6 `Config`, minus `Language`/`Params`/`ColorConfig`
/// which live one layer up in `sqlfmt-lib`).
#[derive(Debug, Clone)]
pub struct FormatOptions {
    pub indent: SmolStr,
    pub keyword_case: KeywordCase,
    pub lines_between_queries: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: SmolStr::new("  "),
            keyword_case: KeywordCase::default(),
            lines_between_queries: 2,
        }
    }
}

/// `Format(sql, config) -> string` (spec §4.6.1, §6).
///
/// Tokenizes `sql` with `cfg`, then replays the tokens through a fresh
/// [`Formatter`]. Never fails (spec §7): the worst case is suboptimally
/// indented but well-formed text.
pub fn format(sql: &str, cfg: &DialectConfig, opts: &FormatOptions, params: Option<&Params>) -> String {
    let tokens = tokenize(sql, cfg);
    let mut f = Formatter::new(cfg, opts, params);
    for i in 0..tokens.len() {
        f.emit(&tokens, i);
    }
    f.finish()
}

/// Owns every piece of emit-time state for one `Format` call: the output
/// buffer, [`Indentation`], [`InlineBlock`], [`BlockContext`], and a lazy
/// newline request used to coalesce blank-line policy (spec §3 "Ownership").
struct Formatter<'a> {
    cfg: &'a DialectConfig,
    opts: &'a FormatOptions,
    params: Option<&'a Params>,
    indent: Indentation,
    inline: InlineBlock,
    block_ctx: BlockContext,
    out: String,
    /// Newlines owed before the next non-whitespace content is written,
    /// flushed (with the indent computed AT FLUSH TIME, i.e. after any
    /// indent-stack mutation the requesting dispatch step made) the moment
    /// real text is appended. Multiple requests before any flush take the
    /// max, not the sum — this is what keeps `LinesBetweenQueries` exact
    /// even though both the `;` handler and the next top-level keyword's
    /// own "newline + indent" step ask for a break (spec §8 property 7,
    /// Scenario F).
    pending_newlines: usize,
    /// Set by a tight-binding token (`(`, `.`, `::`) to suppress the
    /// otherwise-default leading space on the token that follows it.
    suppress_space: bool,
}

impl<'a> Formatter<'a> {
    fn new(cfg: &'a DialectConfig, opts: &'a FormatOptions, params: Option<&'a Params>) -> Self {
        Self {
            cfg,
            opts,
            params,
            indent: Indentation::new(opts.indent.clone()),
            inline: InlineBlock::default(),
            block_ctx: BlockContext::default(),
            out: String::new(),
            pending_newlines: 0,
            suppress_space: false,
        }
    }

    fn request_newlines(&mut self, n: usize) {
        if n > self.pending_newlines {
            self.pending_newlines = n;
        }
    }

    /// Write any owed newlines plus the indent current at flush time, then
    /// clear the request. A leading request at the very start of output
    /// contributes no newline characters, only the (empty) indent.
    fn flush_pending(&mut self) {
        if self.pending_newlines > 0 {
            if !self.out.is_empty() {
                for _ in 0..self.pending_newlines {
                    self.out.push('\n');
                }
            }
            self.out.push_str(&self.indent.get_indent());
            self.pending_newlines = 0;
        }
    }

    /// Flush any pending newline; otherwise insert a single space unless
    /// suppressed, or we're at the very start of output.
    fn maybe_space(&mut self) {
        if self.pending_newlines > 0 {
            self.flush_pending();
            self.suppress_space = false;
            return;
        }
        if self.out.is_empty() || self.suppress_space {
            self.suppress_space = false;
            return;
        }
        self.out.push(' ');
    }

    /// Append `s` verbatim, flushing any pending newline first. Bypasses
    /// `maybe_space` for tokens that always tight-bind on their left
    /// (`(`, `)`, `,`, `;`, `.`, `::`, structural block keywords whose
    /// leading space was already decided by their own dispatch).
    fn push(&mut self, s: &str) {
        self.flush_pending();
        self.out.push_str(s);
    }

    fn keyword_text(&self, token: &Token) -> String {
        let collapsed = || token.text.split_whitespace().collect::<Vec<_>>().join(" ");
        match self.opts.keyword_case {
            KeywordCase::Preserve => collapsed(),
            KeywordCase::Uppercase => token
                .canonical
                .as_deref()
                .map(str::to_string)
                .unwrap_or_else(|| token.text.to_uppercase()),
            KeywordCase::Lowercase => token
                .canonical
                .as_deref()
                .map(str::to_lowercase)
                .unwrap_or_else(|| token.text.to_lowercase()),
            KeywordCase::Dialect => token
                .canonical
                .as_deref()
                .map(str::to_string)
                .unwrap_or_else(collapsed),
        }
    }

    /// Is the `ReservedTopLevel` token at `tokens[i]` the only top-level
    /// clause of its statement inside a procedural block, i.e. does the next
    /// `;` at structural depth 0 arrive before any other `ReservedTopLevel`/
    /// `ReservedTopLevelNoIndent` keyword? Such a statement (`SELECT 1;`
    /// inside `BEGIN ... END`) stays on the line it opened rather than
    /// breaking its single clause onto its own indented line (spec.md §8
    /// Scenario E; resolved in DESIGN.md's Open Question decisions).
    ///
    /// Outside a procedural block this is always `false`, leaving §4.6.2's
    /// unconditional top-level break rule untouched for ordinary queries.
    fn is_single_clause_in_procedural_body(&self, tokens: &[Token], i: usize) -> bool {
        if self.indent.procedural_depth() == 0 {
            return false;
        }
        let mut depth: i32 = 0;
        for token in &tokens[i + 1..] {
            match token.kind {
                TokenKind::OpenParen => depth += 1,
                TokenKind::CloseParen => {
                    if depth == 0 && token.structural {
                        return true;
                    }
                    depth -= 1;
                }
                TokenKind::ReservedTopLevel | TokenKind::ReservedTopLevelNoIndent if depth <= 0 => {
                    return false;
                }
                TokenKind::Operator if depth <= 0 && token.text == ";" => return true,
                _ => {}
            }
        }
        true
    }

    fn emit(&mut self, tokens: &[Token], i: usize) {
        let token = &tokens[i];
        match token.kind {
            TokenKind::Whitespace => {}

            TokenKind::LineComment => {
                if !self.out.is_empty() && self.pending_newlines == 0 {
                    self.out.push(' ');
                }
                let text = token.text.trim_end_matches(['\n', '\r']).to_string();
                self.push(&text);
                self.request_newlines(1);
            }

            TokenKind::BlockComment => {
                if token.no_reflow {
                    if !self.out.is_empty() && self.pending_newlines == 0 {
                        self.out.push(' ');
                    }
                    let text = token.text.to_string();
                    self.push(&text);
                } else if token.text.contains('\n') {
                    self.request_newlines(1);
                    let text = token.text.to_string();
                    self.push(&text);
                    self.request_newlines(1);
                } else {
                    if !self.out.is_empty() && self.pending_newlines == 0 {
                        self.out.push(' ');
                    }
                    let text = token.text.to_string();
                    self.push(&text);
                }
            }

            TokenKind::ReservedTopLevel => {
                self.indent.decrease_top_level();
                self.request_newlines(1);
                let text = self.keyword_text(token);
                self.push(&text);
                if self.is_single_clause_in_procedural_body(tokens, i) {
                    // spec.md §8 Scenario E: a bare top-level statement with
                    // no further top-level clause before its terminator
                    // (`SELECT 1;` inside `BEGIN ... END`) stays on one line
                    // instead of opening a fresh indent level (spec §9 Open
                    // Question decisions, DESIGN.md).
                } else {
                    self.indent.increase_top_level();
                    self.request_newlines(1);
                }
            }

            TokenKind::ReservedTopLevelNoIndent => {
                self.indent.decrease_top_level();
                self.request_newlines(1);
                let text = self.keyword_text(token);
                self.push(&text);
            }

            TokenKind::ReservedNewline => {
                let text = self.keyword_text(token);
                // `ELSE`/`ELSIF` inside an IF block are procedural branches
                // that align with their own IF, one level shallower than
                // the statements they separate — unlike `WHEN`/`ELSE`
                // inside a CASE, which stay at the CASE body's indent like
                // any other reserved-newline token (spec §9).
                let dedents_to_if = self.block_ctx.is_in_if()
                    && token
                        .canonical
                        .as_deref()
                        .is_some_and(|c| c.eq_ignore_ascii_case("else") || c.eq_ignore_ascii_case("elsif"));
                if self.inline.is_active() {
                    self.maybe_space();
                    self.push(&text);
                } else if dedents_to_if {
                    let n = self.pending_newlines.max(1);
                    self.pending_newlines = 0;
                    if !self.out.is_empty() {
                        for _ in 0..n {
                            self.out.push('\n');
                        }
                    }
                    let depth = self.indent.depth().saturating_sub(1);
                    self.out.push_str(&self.opts.indent.repeat(depth));
                    self.out.push_str(&text);
                } else {
                    self.request_newlines(1);
                    self.push(&text);
                }
            }

            TokenKind::Reserved => {
                let text = self.keyword_text(token);
                self.maybe_space();
                self.push(&text);
            }

            TokenKind::OpenParen => {
                if token.structural {
                    let canonical = token
                        .canonical
                        .clone()
                        .unwrap_or_else(|| token.text.clone());
                    self.block_ctx.push(canonical.clone());
                    let procedural = self
                        .cfg
                        .block_open(&canonical)
                        .map(|p| p.procedural)
                        .unwrap_or(false);
                    let text = self.keyword_text(token);
                    self.maybe_space();
                    self.push(&text);
                    if procedural {
                        self.indent.increase_procedural(canonical.clone());
                        if canonical.eq_ignore_ascii_case("begin") {
                            self.request_newlines(1);
                        }
                        // IF/LOOP/WHILE/REPEAT: leave it inline — the next
                        // token's own default `maybe_space` supplies the
                        // single separating space (spec §4.6.2 `open-paren`).
                    } else {
                        self.indent.increase_block_level();
                        self.request_newlines(1);
                    }
                } else {
                    self.inline.begin_if_possible(tokens, i);
                    self.push("(");
                    if self.inline.is_active() {
                        self.suppress_space = true;
                    } else {
                        self.indent.increase_block_level();
                        self.request_newlines(1);
                    }
                }
            }

            TokenKind::CloseParen => {
                if token.structural {
                    let ctx_kind = self.block_ctx.current().map(str::to_string);
                    self.block_ctx.pop();
                    self.indent.reset_to_procedural_base();
                    if ctx_kind
                        .as_deref()
                        .is_some_and(|k| k.eq_ignore_ascii_case("case"))
                    {
                        self.indent.decrease_block_level();
                    } else {
                        self.indent.decrease_procedural();
                    }
                    self.request_newlines(1);
                    let text = self.keyword_text(token);
                    self.push(&text);
                } else if self.inline.is_active() {
                    self.push(")");
                    self.inline.end();
                } else {
                    self.indent.decrease_block_level();
                    self.request_newlines(1);
                    self.push(")");
                }
            }

            TokenKind::Placeholder => {
                let text = match self.params {
                    Some(p) => p.get(token.key.as_deref(), &token.text),
                    None => token.text.to_string(),
                };
                self.maybe_space();
                self.push(&text);
            }

            TokenKind::Operator => {
                let text = token.text.clone();
                match text.as_str() {
                    "," => {
                        self.push(",");
                        if !self.inline.is_active() {
                            self.request_newlines(1);
                        }
                        // inline: next token's default `maybe_space` gives
                        // the single space after the comma.
                    }
                    ";" => {
                        self.push(";");
                        if self.indent.procedural_depth() > 0 {
                            self.indent.reset_to_procedural_base();
                            self.request_newlines(1);
                        } else {
                            self.indent.reset();
                            self.request_newlines(self.opts.lines_between_queries);
                        }
                    }
                    "." | "::" => {
                        self.push(text.as_str());
                        self.suppress_space = true;
                    }
                    "[" => {
                        // N1QL JSON-path subscript access (spec §4.1 "N1QL"):
                        // binds tight on both sides, e.g. `doc.items[0]`.
                        self.push("[");
                        self.suppress_space = true;
                    }
                    "]" => {
                        self.push("]");
                    }
                    _ => {
                        self.maybe_space();
                        self.push(text.as_str());
                    }
                }
            }

            TokenKind::Word | TokenKind::String | TokenKind::Number | TokenKind::Boolean => {
                let text = token.text.clone();
                self.maybe_space();
                self.push(text.as_str());
            }
        }
    }

    /// Post-process: trim trailing whitespace on each line, ensure exactly
    /// one trailing newline (spec §4.6.1 point 3). Empty input formats to
    /// an empty string.
    fn finish(self) -> String {
        if self.out.trim().is_empty() {
            return String::new();
        }
        let mut lines: Vec<&str> = self.out.split('\n').map(|l| l.trim_end()).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut result = lines.join("\n");
        result.push('\n');
        result
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::dialect::{BlockPair, PlaceholderForms, ReservedClass};

    fn standard() -> DialectConfig {
        DialectConfig::builder("standard")
            .reserved(
                ReservedClass::TopLevel,
                &["select", "from", "where", "group by", "order by"],
            )
            .reserved(ReservedClass::Newline, &["and", "or"])
            .reserved(ReservedClass::Reserved, &["as"])
            .placeholders(PlaceholderForms {
                question: true,
                colon_name: true,
                ..Default::default()
            })
            .build()
    }

    fn plsql() -> DialectConfig {
        DialectConfig::builder("plsql")
            .reserved(ReservedClass::TopLevel, &["select"])
            .reserved(ReservedClass::Reserved, &["declare", "int", "then"])
            .reserved(ReservedClass::Newline, &["else", "elsif"])
            .block_pairs(vec![
                BlockPair {
                    open: "BEGIN".into(),
                    close: "END".into(),
                    procedural: true,
                },
                BlockPair {
                    open: "IF".into(),
                    close: "END IF".into(),
                    procedural: true,
                },
                BlockPair {
                    open: "CASE".into(),
                    close: "END".into(),
                    procedural: false,
                },
            ])
            .build()
    }

    #[test]
    fn scenario_a_basic_select() {
        let cfg = standard();
        let opts = FormatOptions {
            keyword_case: KeywordCase::Preserve,
            ..Default::default()
        };
        let out = format("SELECT * FROM foo WHERE goo = 'taco'", &cfg, &opts, None);
        assert_eq!(out, "SELECT\n  *\nFROM\n  foo\nWHERE\n  goo = 'taco'\n");
    }

    #[test]
    fn scenario_b_inline_function_call() {
        let cfg = standard();
        let opts = FormatOptions::default();
        let out = format(
            "SELECT COALESCE(name, 'anon') FROM users",
            &cfg,
            &opts,
            None,
        );
        assert_eq!(out, "SELECT\n  COALESCE(name, 'anon')\nFROM\n  users\n");
    }

    #[test]
    fn long_subquery_breaks_onto_multiple_lines() {
        let cfg = standard();
        let opts = FormatOptions::default();
        let out = format(
            "SELECT * FROM (SELECT * FROM some_really_long_table_name_here) t",
            &cfg,
            &opts,
            None,
        );
        assert!(out.contains("(\n"));
        assert!(out.contains("SELECT\n"));
    }

    #[test]
    fn multiple_queries_get_lines_between_queries_blank_lines() {
        let cfg = standard();
        let opts = FormatOptions {
            lines_between_queries: 2,
            ..Default::default()
        };
        let out = format("SELECT 1; SELECT 2;", &cfg, &opts, None);
        assert_eq!(out, "SELECT\n  1;\n\nSELECT\n  2;\n");
    }

    #[test]
    fn procedural_semicolons_stay_on_one_newline() {
        let cfg = plsql();
        let opts = FormatOptions::default();
        let out = format("BEGIN DECLARE x INT; SELECT 1; END;", &cfg, &opts, None);
        assert_eq!(out, "BEGIN\n  DECLARE x INT;\n  SELECT 1;\nEND;\n");
    }

    #[test]
    fn case_else_stays_at_case_indent_if_else_stays_at_if_indent() {
        let cfg = plsql();
        let opts = FormatOptions::default();
        let out = format("BEGIN IF x THEN SELECT 1; ELSE SELECT 2; END IF; END;", &cfg, &opts, None);
        // ELSE aligns as a procedural branch at the IF's own indent, not
        // nested one level deeper than the statements it separates.
        let else_line = out.lines().find(|l| l.trim_start() == "ELSE").unwrap();
        let if_line = out.lines().find(|l| l.trim_start().starts_with("IF")).unwrap();
        assert_eq!(
            else_line.len() - else_line.trim_start().len(),
            if_line.len() - if_line.trim_start().len()
        );
    }

    #[test]
    fn empty_input_formats_to_empty_string() {
        let cfg = standard();
        let opts = FormatOptions::default();
        assert_eq!(format("", &cfg, &opts, None), "");
        assert_eq!(format("   \n\t", &cfg, &opts, None), "");
    }

    #[test]
    fn trailing_whitespace_is_trimmed_and_single_trailing_newline_kept() {
        let cfg = standard();
        let opts = FormatOptions::default();
        let out = format("SELECT 1   ", &cfg, &opts, None);
        assert!(!out.contains("1   "));
        assert!(out.ends_with('\n') && !out.ends_with("\n\n"));
    }

    #[test]
    fn idempotent_on_its_own_output() {
        let cfg = standard();
        let opts = FormatOptions::default();
        let once = format("select * from foo where goo = 'taco' and x = 1", &cfg, &opts, None);
        let twice = format(&once, &cfg, &opts, None);
        assert_eq!(once, twice);
    }

    #[test]
    fn bracket_balance_is_preserved() {
        let cfg = standard();
        let opts = FormatOptions::default();
        let out = format("SELECT (1 + (2 * 3)) FROM foo", &cfg, &opts, None);
        let opens = out.chars().filter(|c| *c == '(').count();
        let closes = out.chars().filter(|c| *c == ')').count();
        assert_eq!(opens, closes);
    }
}
