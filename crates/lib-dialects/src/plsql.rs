//! Oracle PL/SQL (spec §4.1 "PL/SQL").
//!
//! A procedural dialect: `BEGIN`/`DECLARE`/`EXCEPTION`/`LOOP`/`IF`/`ELSIF`/
//! `CASE`/`WHEN` drive the indentation and block-context machinery (spec
//! §4.4, §4.6.2, §9) rather than just flat top-level clauses. Named
//! placeholders only — no positional `?`.

use sqlfmt_lib_core::{DialectConfig, PlaceholderForms, ReservedClass};

use crate::common::{apply_standard_reserved, case_only_block_pair, procedural_block_pairs};

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("plsql"))
        .reserved(
            ReservedClass::Reserved,
            &[
                "declare",
                "exception",
                "procedure",
                "function",
                "is",
                "return",
                "raise",
                "exit",
                "pragma",
                "number",
                "varchar2",
                "constant",
            ],
        )
        .reserved(ReservedClass::Newline, &["elsif"])
        .placeholders(PlaceholderForms {
            colon_name: true,
            ..Default::default()
        })
        .block_pairs(procedural_block_pairs())
        .build()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlfmt_lib_core::{format, FormatOptions};

    use super::*;

    #[test]
    fn case_pairs_are_registered() {
        let cfg = dialect();
        assert!(cfg.block_open("CASE").is_some());
        assert_eq!(case_only_block_pair().len(), 2);
    }

    #[test]
    fn scenario_e_procedural_block_with_semicolons() {
        let cfg = dialect();
        let out = format(
            "BEGIN DECLARE x INT; SELECT 1; END;",
            &cfg,
            &FormatOptions::default(),
            None,
        );
        assert_eq!(out, "BEGIN\n  DECLARE x INT;\n  SELECT 1;\nEND;\n");
    }
}
