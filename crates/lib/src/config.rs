//! `Config` (spec §6): the whole of the core's public configuration
//! surface. No config-file loading lives here (explicit Non-goal,
//! `SPEC_FULL.md` §12) — that is the CLI shell's job.

use smol_str::SmolStr;
use sqlfmt_lib_core::{DialectConfig, FormatOptions, KeywordCase, Params, ReservedClass};
use sqlfmt_lib_dialects::{dialect_for, Language};

use crate::color::ColorConfig;

/// `Config` (spec §6 table). Built with the teacher's `Config` builder-
/// closure trait: `Config::default().config(|c| c.language = Language::MySql)`.
#[derive(Debug, Clone)]
pub struct Config {
    pub language: Language,
    pub indent: SmolStr,
    pub keyword_case: KeywordCase,
    pub lines_between_queries: usize,
    pub params: Params,
    pub color: ColorConfig,
    /// `TokenizerConfig` (spec §6 table row): caller-supplied additions to
    /// the selected dialect's reserved-word classes and operator alphabet,
    /// applied on top of [`Language`]'s base [`DialectConfig`] without
    /// forking a whole dialect (spec §4.1 "[SUPPLEMENT]").
    extra_reserved: Vec<(ReservedClass, String)>,
    extra_operators: Vec<&'static str>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::StandardSql,
            indent: SmolStr::new("  "),
            keyword_case: KeywordCase::default(),
            lines_between_queries: 2,
            params: Params::default(),
            color: ColorConfig::default(),
            extra_reserved: Vec::new(),
            extra_operators: Vec::new(),
        }
    }
}

impl Config {
    /// Extend the selected dialect's reserved-word set with `phrase`,
    /// without forking a dialect module.
    pub fn with_extra_reserved(mut self, class: ReservedClass, phrase: impl Into<String>) -> Self {
        self.extra_reserved.push((class, phrase.into()));
        self
    }

    pub fn with_extra_operator(mut self, op: &'static str) -> Self {
        self.extra_operators.push(op);
        self
    }

    /// Build the effective [`DialectConfig`] for this `Config`: the
    /// [`Language`]'s base grammar plus any `TokenizerConfig` overrides.
    pub(crate) fn resolve_dialect(&self) -> DialectConfig {
        let mut cfg = dialect_for(self.language);
        for (class, phrase) in &self.extra_reserved {
            cfg = cfg.with_extra_reserved(*class, phrase);
        }
        if !self.extra_operators.is_empty() {
            cfg = cfg.with_extra_operators(self.extra_operators.iter().copied());
        }
        cfg
    }

    pub(crate) fn format_options(&self) -> FormatOptions {
        FormatOptions {
            indent: self.indent.clone(),
            keyword_case: self.keyword_case,
            lines_between_queries: self.lines_between_queries,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sqlfmt_helpers::Config as _;

    use super::*;

    #[test]
    fn builder_closure_matches_teacher_idiom() {
        let config = Config::default().config(|c| {
            c.language = Language::MySql;
            c.lines_between_queries = 1;
        });
        assert_eq!(config.language, Language::MySql);
        assert_eq!(config.lines_between_queries, 1);
    }

    #[test]
    fn extra_reserved_is_visible_on_the_resolved_dialect() {
        let config = Config::default().with_extra_reserved(ReservedClass::Reserved, "frobnicate");
        let dialect = config.resolve_dialect();
        assert!(
            dialect
                .phrases_starting_with("frobnicate")
                .iter()
                .any(|(p, _, _)| *p == "frobnicate")
        );
    }
}
