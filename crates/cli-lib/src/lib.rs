//! Thin host shell over the sqlfmt core (`SPEC_FULL.md` §1): stdin/file
//! reading, dialect-name resolution with the documented fallback-to-
//! Standard warning (spec §7 "Configuration errors"), and the
//! `--color`/`--indent`/`--case`/`--lines-between-queries`/`--param` flags
//! that map onto `sqlfmt_lib::Config`. Out of scope here (spec §1): config
//! files, ignore-file filtering, diff/validation reporting, dialect
//! auto-detection, editor integration.

pub mod commands;
mod errors;
mod logger;
mod stdin;

use std::io::IsTerminal;
use std::str::FromStr;

use clap::Parser as _;
use sqlfmt_lib::{pretty_format, Config, Language, Params};

pub use commands::Cli;
pub use errors::CliError;

/// Parses `args`, runs the formatter, writes the result to stdout, and
/// returns the process exit code (0 on success, 1 on a host-shell I/O or
/// argument error — the core formatter itself never fails, spec §7).
pub fn run_with_args<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let _ = logger::init(cli.verbose);

    let language = resolve_language(&cli.dialect);

    let params = match parse_params(&cli.params, language) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let sql = match stdin::read_input(cli.path.as_deref()) {
        Ok(sql) => sql,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let use_color = cli.color || (!cli.no_color && std::io::stdout().is_terminal());

    let mut config = Config::default();
    config.language = language;
    config.indent = cli.indent.into();
    config.keyword_case = cli.case.into();
    config.lines_between_queries = cli.lines_between_queries;
    config.params = params;
    config.color = if use_color {
        sqlfmt_lib::ColorConfig::ansi_defaults()
    } else {
        sqlfmt_lib::ColorConfig::default()
    };

    print!("{}", pretty_format(&sql, &config));
    0
}

/// Unknown `--dialect` strings fall back to Standard SQL with a single
/// warning on the diagnostic stream (spec §7 "Configuration errors
/// (non-fatal)") — the core `DialectConfig`/`format` layer never sees or
/// makes this decision; it is entirely a host-shell concern.
fn resolve_language(name: &str) -> Language {
    Language::from_str(name).unwrap_or_else(|_| {
        log::warn!("unknown dialect '{name}', falling back to standard-sql");
        Language::StandardSql
    })
}

fn parse_params(raw: &[String], language: Language) -> Result<Params, CliError> {
    let one_based = sqlfmt_lib_dialects::dialect_for(language).one_based_positional;
    let mut named = Vec::new();
    let mut positional = Vec::new();

    for entry in raw {
        match entry.split_once('=') {
            Some(("", _)) => return Err(CliError::InvalidParam(entry.clone())),
            Some((key, value)) => named.push((key.to_string(), value.to_string())),
            None => positional.push(entry.clone()),
        }
    }

    Ok(Params::new(named, positional, one_based))
}
