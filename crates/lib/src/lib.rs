//! Public API: `Format`, `PrettyFormat`, `PrettyPrint`, and the `Config`
//! record that selects a dialect and tunes the formatter (spec §6).
//!
//! This crate is the thin "assemble the core" layer: it owns no emit-time
//! state of its own (that lives in `sqlfmt-lib-core::formatter`) and holds
//! no I/O beyond `PrettyPrint`'s single write to stdout.

mod color;
mod config;

pub use color::ColorConfig;
pub use config::Config;
pub use sqlfmt_lib_core::{KeywordCase, Params, ReservedClass};
pub use sqlfmt_lib_dialects::Language;

/// `Format(sql, config) -> string` (spec §6). Never fails (spec §7):
/// returns the formatted SQL with a single trailing newline.
pub fn format(sql: &str, config: &Config) -> String {
    let dialect = config.resolve_dialect();
    let opts = config.format_options();
    let params = (!config.params.is_empty()).then_some(&config.params);
    sqlfmt_lib_core::format(sql, &dialect, &opts, params)
}

/// `PrettyFormat(sql, config) -> string` (spec §6): `Format` then wraps
/// reserved-word and string/number tokens in ANSI SGR escapes per
/// `config.color`.
pub fn pretty_format(sql: &str, config: &Config) -> String {
    let dialect = config.resolve_dialect();
    let formatted = format(sql, config);
    color::colorize(&formatted, &dialect, &config.color)
}

/// `PrettyPrint(sql, config)` (spec §6): `PrettyFormat` written to stdout.
pub fn pretty_print(sql: &str, config: &Config) {
    print!("{}", pretty_format(sql, config));
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlfmt_helpers::Config as _;

    #[test]
    fn format_uses_the_selected_language() {
        let config = Config::default().config(|c| c.language = Language::Sqlite);
        let out = format("select * from t where x = ?1", &config);
        assert!(out.starts_with("SELECT\n") || out.starts_with("select\n"));
    }

    #[test]
    fn pretty_format_wraps_keywords_when_colors_are_set() {
        let config = Config::default().config(|c| c.color = ColorConfig::ansi_defaults());
        let out = pretty_format("SELECT 1", &config);
        assert!(out.contains("SELECT"));
        assert!(out.len() > format("SELECT 1", &config).len());
    }

    #[test]
    fn idempotent_end_to_end() {
        let config = Config::default();
        let once = format("select * from foo where x = 1 and y = 2", &config);
        let twice = format(&once, &config);
        assert_eq!(once, twice);
    }
}
