//! MySQL / MariaDB (spec §4.1 "MySQL").
//!
//! Adds `#` line comments, backtick identifiers, `ON DUPLICATE KEY UPDATE`
//! as a top-level clause, `REGEXP`/`RLIKE`/`NOT REGEXP` as multi-word
//! reserved-newline operators, hex/bit literals (`0xFF`, `0b10`, `X'FF'`,
//! `B'10'`), and MySQL's extra operator glyphs (`<=>`, `->`, `->>`, the
//! bitwise family). `/*! ... */` versioned comments are flagged
//! no-reflow so the formatter never splits them across lines (spec §4.2
//! point 2 "no_reflow_comment", Scenario D).

use sqlfmt_lib_core::{DialectConfig, NumericFlags, PlaceholderForms, QuoteStyle, ReservedClass};

use crate::common::apply_standard_reserved;

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("mysql"))
        .reserved(ReservedClass::TopLevel, &["on duplicate key update"])
        .reserved(ReservedClass::Newline, &["regexp", "rlike", "not regexp"])
        .line_comment_markers(vec!["--", "#"])
        .no_reflow_comment("/*!", "*/")
        .identifier_quotes(vec![QuoteStyle::new('`', '`')])
        .placeholders(PlaceholderForms {
            question: true,
            ..Default::default()
        })
        .numeric(NumericFlags {
            hex: true,
            binary: true,
            hex_blob: true,
            binary_blob: true,
        })
        .operators(vec![
            "<=>", "<>", "<=", ">=", "!=", "->>", "<<", ">>", "->", "||", "=", "<", ">", "+", "-",
            "*", "/", "%", "|", "&", "^", "~", ",", ";", ".",
        ])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_lib_core::{format, FormatOptions};

    #[test]
    fn versioned_comment_is_never_reflowed() {
        let cfg = dialect();
        let out = format(
            "SELECT /*! STRAIGHT_JOIN */ a.x FROM a JOIN b ON a.id=b.id",
            &cfg,
            &FormatOptions::default(),
            None,
        );
        assert!(out.contains("/*! STRAIGHT_JOIN */"));
    }

    #[test]
    fn on_duplicate_key_update_is_top_level() {
        let cfg = dialect();
        let matches = cfg.phrases_starting_with("on");
        assert!(matches.iter().any(|(p, _, _)| *p == "on duplicate key update"));
    }

    #[test]
    fn hash_line_comment_is_recognized() {
        let cfg = dialect();
        assert!(cfg.line_comment_markers.contains(&"#"));
    }
}
