//! Couchbase N1QL (spec §4.1 "N1QL").
//!
//! Document-oriented SQL dialect: `NEST`/`UNNEST` join-like clauses,
//! `USE KEYS` as a reserved modifier on `FROM`, and JSON path access via
//! ordinary `.` (tight-bind operator) and `[...]` (treated as a bracketed
//! literal subscript rather than an identifier-quote style, since N1QL's
//! brackets index into arrays rather than quote a name).

use sqlfmt_lib_core::{DialectConfig, PlaceholderForms, ReservedClass};

use crate::common::apply_standard_reserved;

pub fn dialect() -> DialectConfig {
    apply_standard_reserved(DialectConfig::builder("n1ql"))
        .reserved(ReservedClass::Newline, &["nest", "unnest", "left nest", "left unnest"])
        .reserved(ReservedClass::Reserved, &["use keys", "use index", "missing", "satisfies"])
        .placeholders(PlaceholderForms {
            question: true,
            dollar_name: true,
            ..Default::default()
        })
        .with_extra_operators(["[", "]"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_lib_core::{format, FormatOptions};

    #[test]
    fn use_keys_and_unnest_round_trip() {
        let cfg = dialect();
        let out = format(
            "SELECT a.* FROM bucket a USE KEYS \"k1\" UNNEST a.items AS item",
            &cfg,
            &FormatOptions::default(),
            None,
        );
        assert!(out.contains("USE KEYS"));
        assert!(out.contains("UNNEST"));
    }

    #[test]
    fn dotted_json_path_tight_binds() {
        let cfg = dialect();
        let out = format("SELECT doc.address.city FROM bucket doc", &cfg, &FormatOptions::default(), None);
        assert!(out.contains("doc.address.city"));
    }

    #[test]
    fn bracketed_json_path_tight_binds() {
        let cfg = dialect();
        let out = format("SELECT doc.items[0] FROM bucket doc", &cfg, &FormatOptions::default(), None);
        assert!(out.contains("doc.items[0]"));
    }
}
