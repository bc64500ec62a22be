//! `fern`-backed logging dispatcher (`SPEC_FULL.md` §10), mirroring the
//! teacher's `cli-lib/src/logger.rs`. `-v`/`-vv` raise the default level;
//! `SQLFMT_LOG` overrides it outright.

pub(crate) fn init(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let default_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    fern::Dispatch::new()
        .format(|out, message, record| out.finish(format_args!("[{}] {}", record.level(), message)))
        .level(
            std::env::var("SQLFMT_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(default_level),
        )
        .chain(std::io::stderr())
        .apply()
}
