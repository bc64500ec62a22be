//! ANSI Standard SQL (spec §4.1 "Standard SQL").
//!
//! The baseline every other dialect in this crate starts from: `--` and
//! `/* */` comments, `'...'` strings, `"..."` identifiers, and `?`/`:name`/
//! `@name`/`$NNN` placeholders. No backticks, no brackets, no dollar-quoted
//! strings, no hex/binary literals.

use sqlfmt_lib_core::{DialectConfig, PlaceholderForms};

use crate::common::{apply_standard_reserved, ansi_numeric};

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("standard"))
        .placeholders(PlaceholderForms {
            question: true,
            colon_name: true,
            at_name: true,
            dollar_numbered: true,
            ..Default::default()
        })
        .numeric(ansi_numeric())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_top_level_and_placeholder_forms() {
        let cfg = dialect();
        assert!(cfg.phrases_starting_with("select").iter().any(|(p, _, _)| *p == "select"));
        assert!(cfg.placeholders.colon_name);
        assert!(cfg.placeholders.dollar_numbered);
        assert!(!cfg.placeholders.dollar_name);
    }
}
