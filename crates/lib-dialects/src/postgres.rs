//! PostgreSQL (spec §4.1 "PostgreSQL").
//!
//! Layers onto the ANSI baseline: `$1`...`$n` numbered placeholders, the
//! `::` cast operator, `RETURNING`/`ON CONFLICT` as top-level clauses,
//! `DO UPDATE`/`DO NOTHING` as reserved, and dollar-quoted strings
//! (`$tag$...$tag$`, tokenized verbatim as a string — spec §4.2 point 4,
//! the tokenizer tries `match_dollar_quoted_string` before the bare `$NNN`
//! placeholder form so a body containing `$1`-looking text is never split).

use sqlfmt_lib_core::{DialectConfig, PlaceholderForms, ReservedClass};

use crate::common::{apply_standard_reserved, ansi_numeric};

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("postgres"))
        .reserved(ReservedClass::TopLevel, &["returning", "on conflict"])
        .reserved(ReservedClass::Reserved, &["do update", "do nothing"])
        .placeholders(PlaceholderForms {
            question: true,
            colon_name: true,
            at_name: true,
            dollar_numbered: true,
            ..Default::default()
        })
        .dollar_quoted_strings(true)
        .numeric(ansi_numeric())
        .with_extra_operators(["::", "->>"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_lib_core::{format, FormatOptions};

    #[test]
    fn returning_and_on_conflict_are_top_level() {
        let cfg = dialect();
        let kinds: Vec<_> = cfg
            .phrases_starting_with("returning")
            .into_iter()
            .map(|(p, _, _)| p)
            .collect();
        assert!(kinds.contains(&"returning"));
        let kinds: Vec<_> = cfg
            .phrases_starting_with("on")
            .into_iter()
            .map(|(p, _, _)| p)
            .collect();
        assert!(kinds.contains(&"on conflict"));
    }

    #[test]
    fn dollar_quoted_body_is_preserved_verbatim() {
        let cfg = dialect();
        let out = format(
            "SELECT $$it's a $1 trap$$ FROM foo",
            &cfg,
            &FormatOptions::default(),
            None,
        );
        assert!(out.contains("$$it's a $1 trap$$"));
    }
}
