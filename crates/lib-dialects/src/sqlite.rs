//! SQLite (spec §4.1 "SQLite").
//!
//! Identifiers in `"..."`, `` `...` ``, or `[...]`; placeholders `?`,
//! `?NNN` (1-based — spec §4.5, Scenario C), `:name`, `@name`, `$name`;
//! `X'...'` blob literals; JSON path operators `->`/`->>`; `ON CONFLICT`
//! UPSERT and `PRAGMA` as top-level clauses; `WITHOUT ROWID`/`STRICT` as
//! reserved table-definition keywords.

use sqlfmt_lib_core::{
    DialectConfig, NumericFlags, PlaceholderForms, QuoteStyle, ReservedClass,
};

use crate::common::apply_standard_reserved;

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("sqlite"))
        .reserved(ReservedClass::TopLevel, &["on conflict", "pragma"])
        .reserved(ReservedClass::Reserved, &["without rowid", "strict"])
        .identifier_quotes(vec![
            QuoteStyle::new('"', '"'),
            QuoteStyle::new('`', '`'),
            QuoteStyle::new('[', ']'),
        ])
        .placeholders(PlaceholderForms {
            question: true,
            question_numbered: true,
            colon_name: true,
            at_name: true,
            dollar_name: true,
            ..Default::default()
        })
        .one_based_positional(true)
        .numeric(NumericFlags {
            hex: true,
            hex_blob: true,
            ..Default::default()
        })
        .with_extra_operators(["->>", "->"])
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlfmt_lib_core::{format, FormatOptions, Params};

    use super::*;

    #[test]
    fn scenario_c_one_based_positional_placeholders() {
        let cfg = dialect();
        let params = Params::new([], vec!["'alice'".into(), "42".into()], true);
        let out = format(
            "SELECT * FROM t WHERE name = ?1 AND age = ?2",
            &cfg,
            &FormatOptions::default(),
            Some(&params),
        );
        assert_eq!(
            out,
            "SELECT\n  *\nFROM\n  t\nWHERE\n  name = 'alice'\n  AND age = 42\n"
        );
    }

    #[test]
    fn bracket_identifier_is_word_not_number() {
        let cfg = dialect();
        let out = format("SELECT [col] FROM [tbl]", &cfg, &FormatOptions::default(), None);
        assert!(out.contains("[col]"));
        assert!(out.contains("[tbl]"));
    }
}
