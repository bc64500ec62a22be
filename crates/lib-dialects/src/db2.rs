//! IBM DB2 (spec §4.1 "DB2").
//!
//! `FETCH FIRST` and `OFFSET` pagination clauses are top-level; the
//! `n ROWS ONLY` / `n ROWS` tail is ordinary tokens (a number plus the
//! reserved words `ROWS ONLY`/`ROWS`) since a reserved phrase can only ever
//! be a fixed sequence of words, never one with a variable slot in the
//! middle (spec §4.2 point 8). `CONCAT` is a reserved operator keyword.
//! Qualified names like `SYSIBM.SYSDUMMY1` need no special handling: `.`
//! already tight-binds two ordinary `word` tokens (spec §4.6.2 `operator`).

use sqlfmt_lib_core::{DialectConfig, PlaceholderForms, ReservedClass};

use crate::common::apply_standard_reserved;

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("db2"))
        .reserved(ReservedClass::TopLevel, &["fetch first"])
        .reserved(ReservedClass::Reserved, &["rows only", "rows", "concat", "fetch"])
        .placeholders(PlaceholderForms {
            question: true,
            colon_name: true,
            ..Default::default()
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_lib_core::{format, FormatOptions};

    #[test]
    fn fetch_first_rows_only_round_trips() {
        let cfg = dialect();
        let out = format(
            "SELECT * FROM t FETCH FIRST 10 ROWS ONLY",
            &cfg,
            &FormatOptions::default(),
            None,
        );
        assert!(out.contains("FETCH FIRST"));
        assert!(out.contains("10 ROWS ONLY"));
    }

    #[test]
    fn qualified_name_stays_joined() {
        let cfg = dialect();
        let out = format(
            "SELECT * FROM SYSIBM.SYSDUMMY1",
            &cfg,
            &FormatOptions::default(),
            None,
        );
        assert!(out.contains("SYSIBM.SYSDUMMY1"));
    }
}
