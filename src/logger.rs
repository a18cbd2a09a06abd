use log::LevelFilter;
use std::io::Write;

/// Map the number of `-v` flags to a log level
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Initialize the logging system
///
/// Logs go to stderr so stdout only ever carries the resolved URL.
///
/// The level can be controlled via the `RUST_LOG` environment variable,
/// which takes precedence over the `-v` count:
/// - `RUST_LOG=error` - Only errors
/// - `RUST_LOG=info` - Note when credentials were stripped
/// - `RUST_LOG=debug` - Repository and remote lookups
///
/// ## Examples
///
/// ```bash
/// RUST_LOG=debug repo-url ~/src/project
/// repo-url -vv ~/src/project
/// ```
pub fn init_logger(verbosity: u8) {
    let level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|s| s.parse::<LevelFilter>().ok())
        .unwrap_or_else(|| level_for_verbosity(verbosity));

    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:5}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter_level(level)
        .target(env_logger::Target::Stderr)
        .try_init()
        .ok(); // Ignore error if logger is already initialized
}
