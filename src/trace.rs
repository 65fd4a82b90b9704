use tracing_subscriber::{EnvFilter, fmt};

/// Install a global `fmt` subscriber filtered by `levels`, an `EnvFilter`
/// directive string such as `"info,metric_sinks=debug"`.
///
/// An unparsable `levels` falls back to `info` and is reported once the
/// subscriber is up. Only the first call in a process has any effect.
pub fn init(color: bool, json: bool, levels: &str) {
    let (filter, invalid) = match EnvFilter::try_new(levels) {
        Ok(filter) => (filter, None),
        Err(error) => (EnvFilter::new("info"), Some(error)),
    };

    let builder = fmt().with_env_filter(filter).with_ansi(color);

    // Ignore errors when setting, since tests can initialize this
    // multiple times.
    let installed = if json {
        builder.json().flatten_event(true).try_init()
    } else {
        builder.try_init()
    };

    if let (Ok(()), Some(error)) = (installed, invalid) {
        warn!(
            message = "Invalid log level directives; falling back to info.",
            levels = %levels,
            %error,
        );
    }
}
