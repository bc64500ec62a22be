use smol_str::SmolStr;

/// The closed set of token kinds the tokenizer ever produces (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenKind {
    Whitespace,
    Word,
    String,
    Reserved,
    ReservedTopLevel,
    ReservedTopLevelNoIndent,
    ReservedNewline,
    Operator,
    OpenParen,
    CloseParen,
    LineComment,
    BlockComment,
    Number,
    Placeholder,
    Boolean,
}

impl TokenKind {
    pub fn is_reserved(self) -> bool {
        matches!(
            self,
            TokenKind::Reserved
                | TokenKind::ReservedTopLevel
                | TokenKind::ReservedTopLevelNoIndent
                | TokenKind::ReservedNewline
        )
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::LineComment | TokenKind::BlockComment)
    }
}

/// A single lexed unit of source text (spec §3 Data Model).
///
/// Immutable after the tokenizer emits it. `text` preserves the original
/// source bytes verbatim (case, interior whitespace) except for multi-word
/// reserved phrases, whose interior whitespace may be measured but is
/// reflowed to single spaces by the formatter, never by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: SmolStr,
    /// Extracted placeholder key: the bare name for `:name`/`@name`/`$name`,
    /// the digit string for `?NNN`/`$NNN`, or `None` for bare `?`.
    pub key: Option<SmolStr>,
    /// True for block-open/close tokens that represent a structural
    /// keyword pair (`CASE`, `BEGIN`, `IF`, `END ...`) rather than a literal
    /// `(`/`)`.
    pub structural: bool,
    /// The canonical lowercase phrase this token matched, for reserved
    /// tokens and structural parens. Used for casing and for looking up the
    /// block keyword without re-parsing `text`.
    pub canonical: Option<SmolStr>,
    /// True when a versioned/no-reflow block comment (e.g. MySQL `/*! ... */`)
    /// must never be split across lines by the formatter.
    pub no_reflow: bool,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<SmolStr>) -> Self {
        Self {
            kind,
            text: text.into(),
            key: None,
            structural: false,
            canonical: None,
            no_reflow: false,
        }
    }

    pub fn with_key(mut self, key: impl Into<SmolStr>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn with_canonical(mut self, canonical: impl Into<SmolStr>) -> Self {
        self.canonical = Some(canonical.into());
        self
    }

    pub fn structural(mut self) -> Self {
        self.structural = true;
        self
    }

    pub fn no_reflow(mut self) -> Self {
        self.no_reflow = true;
        self
    }

    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }
}
