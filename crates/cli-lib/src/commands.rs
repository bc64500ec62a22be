//! Clap argument surface for the `sqlfmt` binary (spec §6 `Config` table,
//! `SPEC_FULL.md` §12 "the CLI shell layers `clap::Parser` on top").

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use sqlfmt_lib::KeywordCase;

#[derive(Debug, Parser)]
#[command(name = "sqlfmt")]
#[command(
    about = "sqlfmt is a multi-dialect SQL pretty-printer",
    long_about = None,
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// SQL file to format. Omit, or pass `-`, to read from stdin.
    pub path: Option<PathBuf>,

    /// Dialect to format for.
    #[arg(long, default_value = "standard-sql")]
    pub dialect: String,

    /// Indentation unit.
    #[arg(long, default_value = "  ")]
    pub indent: String,

    /// Keyword casing.
    #[arg(long, value_enum, default_value_t = KeywordCaseArg::Dialect)]
    pub case: KeywordCaseArg,

    /// Blank lines between top-level statements.
    #[arg(long, default_value_t = 2)]
    pub lines_between_queries: usize,

    /// Parameter substitution: `name=value` for a named placeholder, or a
    /// bare `value` to fill the next positional/cursor-based placeholder
    /// in source order.
    #[arg(long = "param", value_name = "KEY=VALUE")]
    pub params: Vec<String>,

    /// Force ANSI color output even when stdout is not a terminal.
    #[arg(long)]
    pub color: bool,

    /// Disable ANSI color output.
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Increase logging verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum KeywordCaseArg {
    Preserve,
    Uppercase,
    Lowercase,
    #[default]
    Dialect,
}

impl From<KeywordCaseArg> for KeywordCase {
    fn from(value: KeywordCaseArg) -> Self {
        match value {
            KeywordCaseArg::Preserve => KeywordCase::Preserve,
            KeywordCaseArg::Uppercase => KeywordCase::Uppercase,
            KeywordCaseArg::Lowercase => KeywordCase::Lowercase,
            KeywordCaseArg::Dialect => KeywordCase::Dialect,
        }
    }
}
