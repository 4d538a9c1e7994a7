/*!
   Process-wide initialization of logging and error reporting.
*/

use std::env;
use std::io::{stdout, IsTerminal};
use std::sync::Once;
use tracing_subscriber::{
    self as ts,
    filter::{EnvFilter, LevelFilter},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

static INIT: Once = Once::new();

/**
   Install the global logger and the colored error report handler.

   Colors are disabled when stdout is not a terminal, or when the
   `NO_COLOR_LOG` environment variable is set to `1`. Calling this more
   than once has no further effect.
*/
pub fn init() {
    let no_color_log = env::var("NO_COLOR_LOG")
        .ok()
        .map(|val| val == "1")
        .unwrap_or(false);

    let with_color = stdout().is_terminal() && !no_color_log;

    INIT.call_once(|| {
        if with_color {
            // Fails only if a handler was already installed by the caller.
            let _ = color_eyre::install();
        }
        install_logger(with_color);
    });
}

/**
   Install the [`tracing_subscriber`] logger handlers so that the progress
   of the bootstrap is displayed.
*/
pub fn install_logger(with_color: bool) {
    // Use log level INFO by default if RUST_LOG is not set.
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();

    let layer = ts::fmt::layer().with_ansi(with_color);

    ts::registry().with(env_filter).with(layer).init();
}
