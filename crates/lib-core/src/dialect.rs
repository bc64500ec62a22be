use smol_str::SmolStr;
use sqlfmt_helpers::IndexMap;

/// Priority order used to break ties when more than one reserved class
/// would match the same longest phrase (spec §4.2 point 8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReservedClass {
    TopLevel,
    TopLevelNoIndent,
    Newline,
    Reserved,
}

impl ReservedClass {
    fn priority(self) -> u8 {
        match self {
            ReservedClass::TopLevel => 0,
            ReservedClass::TopLevelNoIndent => 1,
            ReservedClass::Newline => 2,
            ReservedClass::Reserved => 3,
        }
    }
}

/// A quote-delimited span style: identifier quoting, string quoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuoteStyle {
    pub open: char,
    pub close: char,
}

impl QuoteStyle {
    pub const fn new(open: char, close: char) -> Self {
        Self { open, close }
    }
}

/// How a quoted span escapes its own quote character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeStyle {
    /// `\'` and a trailing backslash escape the next character.
    Backslash,
    /// Only `''`/`""` (the doubled delimiter) is an escape.
    DoubledQuoteOnly,
}

/// The keyword pair that opens/closes a structural block (spec §4.2 point 2,
/// §4.6.2 `open-paren`/`close-paren`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockPair {
    /// Canonical open keyword, e.g. `"CASE"`, `"BEGIN"`, `"IF"`.
    pub open: SmolStr,
    /// Canonical close phrase, e.g. `"END"`, `"END IF"`, `"END CASE"`.
    pub close: SmolStr,
    /// Procedural blocks (`BEGIN`, `IF`, `LOOP`, `WHILE`, `REPEAT`) push an
    /// [`crate::indentation::IndentEntry`] procedural source; `CASE` pushes a
    /// block-level source instead (spec §4.6.2).
    pub procedural: bool,
}

/// Which placeholder sigil forms a dialect recognizes (spec §3, §4.1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaceholderForms {
    /// Bare `?`.
    pub question: bool,
    /// `?NNN`.
    pub question_numbered: bool,
    /// `:name`.
    pub colon_name: bool,
    /// `@name`.
    pub at_name: bool,
    /// `$name` (non-numeric).
    pub dollar_name: bool,
    /// `$NNN`.
    pub dollar_numbered: bool,
}

/// Numeric-literal grammar flags (spec §3, §4.1).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumericFlags {
    pub hex: bool,
    pub binary: bool,
    pub hex_blob: bool,
    pub binary_blob: bool,
}

/// Immutable-after-construction grammar description for one SQL dialect
/// (spec §3 "DialectConfig", §4.1).
#[derive(Debug, Clone)]
pub struct DialectConfig {
    pub name: &'static str,
    /// Lowercase, single-space-joined phrase -> (class, canonical casing).
    reserved: IndexMap<SmolStr, (ReservedClass, SmolStr)>,
    max_phrase_words: usize,
    pub line_comment_markers: Vec<&'static str>,
    pub block_comment: (&'static str, &'static str),
    /// A comment span whose content must never be reflowed, e.g. MySQL's
    /// `/*! ... */` versioned-comment marker.
    pub no_reflow_comment: Option<(&'static str, &'static str)>,
    pub identifier_quotes: Vec<QuoteStyle>,
    pub string_quotes: Vec<QuoteStyle>,
    pub dollar_quoted_strings: bool,
    pub escape_style: EscapeStyle,
    pub numeric: NumericFlags,
    /// Operator glyphs, longest-first so the tokenizer's longest-match scan
    /// is a simple linear probe.
    pub operators: Vec<&'static str>,
    pub placeholders: PlaceholderForms,
    pub one_based_positional: bool,
    pub double_quote_is_identifier: bool,
    pub block_pairs: Vec<BlockPair>,
    /// Bare words the dialect treats as boolean literals (spec §3 Token
    /// kinds "`boolean`"), matched case-insensitively as a whole word ahead
    /// of reserved-phrase matching. Every dialect here enables `TRUE`/
    /// `FALSE`; the field exists so a dialect without boolean literals could
    /// opt out by leaving it empty.
    pub boolean_words: Vec<&'static str>,
}

impl DialectConfig {
    pub fn builder(name: &'static str) -> DialectConfigBuilder {
        DialectConfigBuilder::new(name)
    }

    /// Look up the longest reserved phrase starting with `first_word`
    /// (lowercase). Returns candidates ordered longest-phrase-first, each
    /// tagged with its word count so the tokenizer can try them in order.
    pub fn phrases_starting_with(&self, first_word: &str) -> Vec<(&str, ReservedClass, &str)> {
        let mut matches: Vec<(&str, ReservedClass, &str)> = self
            .reserved
            .iter()
            .filter(|(phrase, _)| {
                phrase
                    .split(' ')
                    .next()
                    .map(|w| w == first_word)
                    .unwrap_or(false)
            })
            .map(|(phrase, (class, canonical))| (phrase.as_str(), *class, canonical.as_str()))
            .collect();

        matches.sort_by(|a, b| {
            let a_words = a.0.split(' ').count();
            let b_words = b.0.split(' ').count();
            b_words
                .cmp(&a_words)
                .then_with(|| a.1.priority().cmp(&b.1.priority()))
        });
        matches
    }

    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    pub fn block_open(&self, canonical_word: &str) -> Option<&BlockPair> {
        self.block_pairs
            .iter()
            .find(|p| p.open.eq_ignore_ascii_case(canonical_word))
    }

    /// Does `phrase` (already lowercased, space-normalized) name a block
    /// close keyword, e.g. `"end"`, `"end if"`, `"end case"`?
    pub fn block_close(&self, phrase_lower: &str) -> Option<&BlockPair> {
        self.block_pairs
            .iter()
            .find(|p| p.close.to_lowercase() == phrase_lower)
    }

    /// [AMBIENT] `TokenizerConfig` override: extend a reserved class with
    /// caller-supplied phrases without forking a whole dialect (spec §6).
    pub fn with_extra_reserved(mut self, class: ReservedClass, phrase: &str) -> Self {
        insert_phrase(&mut self.reserved, &mut self.max_phrase_words, class, phrase);
        self
    }

    pub fn with_extra_operators(mut self, ops: impl IntoIterator<Item = &'static str>) -> Self {
        self.operators.extend(ops);
        self.operators.sort_by_key(|o| std::cmp::Reverse(o.len()));
        self.operators.dedup();
        self
    }
}

fn insert_phrase(
    reserved: &mut IndexMap<SmolStr, (ReservedClass, SmolStr)>,
    max_phrase_words: &mut usize,
    class: ReservedClass,
    phrase: &str,
) {
    let normalized: String = phrase.split_whitespace().collect::<Vec<_>>().join(" ");
    let lower = normalized.to_lowercase();
    let words = lower.split(' ').count();
    *max_phrase_words = (*max_phrase_words).max(words);
    reserved.insert(SmolStr::new(&lower), (class, SmolStr::new(&normalized.to_uppercase())));
}

/// Fluent builder for [`DialectConfig`], used once per dialect by
/// `sqlfmt-lib-dialects` (spec §4.1).
pub struct DialectConfigBuilder {
    cfg: DialectConfig,
}

impl DialectConfigBuilder {
    fn new(name: &'static str) -> Self {
        Self {
            cfg: DialectConfig {
                name,
                reserved: IndexMap::default(),
                max_phrase_words: 1,
                line_comment_markers: vec!["--"],
                block_comment: ("/*", "*/"),
                no_reflow_comment: None,
                identifier_quotes: vec![QuoteStyle::new('"', '"')],
                string_quotes: vec![QuoteStyle::new('\'', '\'')],
                dollar_quoted_strings: false,
                escape_style: EscapeStyle::DoubledQuoteOnly,
                numeric: NumericFlags::default(),
                operators: vec![
                    "<>", "<=", ">=", "!=", "<<", ">>", "||", "->", "=", "<", ">", "+", "-", "*",
                    "/", "%", "|", "&", "^", "~", ",", ";", ".",
                ],
                placeholders: PlaceholderForms {
                    question: true,
                    ..Default::default()
                },
                one_based_positional: false,
                double_quote_is_identifier: true,
                block_pairs: Vec::new(),
                boolean_words: vec!["true", "false"],
            },
        }
    }

    pub fn boolean_words(mut self, words: Vec<&'static str>) -> Self {
        self.cfg.boolean_words = words;
        self
    }

    pub fn reserved(mut self, class: ReservedClass, phrases: &[&str]) -> Self {
        for phrase in phrases {
            insert_phrase(
                &mut self.cfg.reserved,
                &mut self.cfg.max_phrase_words,
                class,
                phrase,
            );
        }
        self
    }

    pub fn line_comment_markers(mut self, markers: Vec<&'static str>) -> Self {
        self.cfg.line_comment_markers = markers;
        self
    }

    pub fn no_reflow_comment(mut self, open: &'static str, close: &'static str) -> Self {
        self.cfg.no_reflow_comment = Some((open, close));
        self
    }

    pub fn identifier_quotes(mut self, quotes: Vec<QuoteStyle>) -> Self {
        self.cfg.identifier_quotes = quotes;
        self
    }

    pub fn string_quotes(mut self, quotes: Vec<QuoteStyle>) -> Self {
        self.cfg.string_quotes = quotes;
        self
    }

    pub fn dollar_quoted_strings(mut self, enabled: bool) -> Self {
        self.cfg.dollar_quoted_strings = enabled;
        self
    }

    pub fn escape_style(mut self, style: EscapeStyle) -> Self {
        self.cfg.escape_style = style;
        self
    }

    pub fn numeric(mut self, flags: NumericFlags) -> Self {
        self.cfg.numeric = flags;
        self
    }

    pub fn operators(mut self, mut ops: Vec<&'static str>) -> Self {
        ops.sort_by_key(|o| std::cmp::Reverse(o.len()));
        self.cfg.operators = ops;
        self
    }

    pub fn placeholders(mut self, forms: PlaceholderForms) -> Self {
        self.cfg.placeholders = forms;
        self
    }

    pub fn one_based_positional(mut self, enabled: bool) -> Self {
        self.cfg.one_based_positional = enabled;
        self
    }

    pub fn double_quote_is_identifier(mut self, enabled: bool) -> Self {
        self.cfg.double_quote_is_identifier = enabled;
        self
    }

    pub fn block_pair(mut self, open: &str, close: &str, procedural: bool) -> Self {
        self.cfg.block_pairs.push(BlockPair {
            open: SmolStr::new(open),
            close: SmolStr::new(close),
            procedural,
        });
        self
    }

    pub fn block_pairs(mut self, pairs: Vec<BlockPair>) -> Self {
        self.cfg.block_pairs = pairs;
        self
    }

    /// Mirrors [`DialectConfig::with_extra_reserved`] so a dialect builder
    /// can layer an extra phrase onto the baseline reserved set mid-chain,
    /// before `.build()`.
    pub fn with_extra_reserved(self, class: ReservedClass, phrase: &str) -> Self {
        Self {
            cfg: self.cfg.with_extra_reserved(class, phrase),
        }
    }

    /// Mirrors [`DialectConfig::with_extra_operators`] so a dialect builder
    /// can add operator glyphs beyond the default set mid-chain, before
    /// `.build()`.
    pub fn with_extra_operators(self, ops: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            cfg: self.cfg.with_extra_operators(ops),
        }
    }

    pub fn build(self) -> DialectConfig {
        self.cfg
    }
}
