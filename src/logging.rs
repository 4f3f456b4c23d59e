//! Diagnostic logging to stderr.
//!
//! `RUST_LOG` wins when set. Otherwise `-q` keeps errors only, `-v` turns on
//! debug and `-vv` trace; the default is info. Stdout is left to prompts and
//! results.

use std::io::Write;

use env_logger::Builder;
use log::LevelFilter;

/// Install the stderr logger. Later calls are ignored.
pub fn init_logging(verbose: u8, quiet: bool) {
    let mut builder = Builder::new();
    if std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    } else {
        builder.filter_level(determine_level(verbose, quiet));
    }

    let with_module = verbose >= 1;
    builder.format(move |buf, record| {
        let style = buf.default_level_style(record.level());
        if with_module {
            writeln!(
                buf,
                "{style}{}{style:#} {}: {}",
                record.level(),
                record.module_path().unwrap_or("dupescan"),
                record.args()
            )
        } else {
            writeln!(buf, "{style}{}{style:#} {}", record.level(), record.args())
        }
    });

    if builder.try_init().is_ok() {
        log::trace!("logger ready");
    }
}

fn determine_level(verbose: u8, quiet: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, 0) => LevelFilter::Info,
        (false, 1) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    }
}
