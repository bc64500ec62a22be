//! Core of the sqlfmt pretty-printer: tokenizer, dialect grammar, and the
//! small stateful pieces (indentation, inline-block lookahead, block
//! context, placeholder substitution) the formatter composes. No I/O, no
//! AST, no lint rules — see the crate-level Non-goals in `SPEC_FULL.md`.

pub mod block_context;
pub mod dialect;
pub mod formatter;
pub mod indentation;
pub mod inline_block;
pub mod params;
pub mod token;
pub mod tokenizer;

pub use block_context::BlockContext;
pub use dialect::{
    BlockPair, DialectConfig, DialectConfigBuilder, EscapeStyle, NumericFlags, PlaceholderForms,
    QuoteStyle, ReservedClass,
};
pub use formatter::{format, FormatOptions, KeywordCase};
pub use indentation::{IndentEntry, IndentSource, Indentation};
pub use inline_block::InlineBlock;
pub use params::Params;
pub use token::{Token, TokenKind};
pub use tokenizer::tokenize;
