use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directive used when neither `RUST_LOG` nor the caller asks for more.
pub const DEFAULT_DIRECTIVE: &str = "info,age_of_war=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` applies. With `json` every
/// line is a structured JSON object, which is what the simulator writes when
/// its output is collected by other tools.
pub fn init_tracing(fallback: &str, json: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false);

    let registry = tracing_subscriber::registry().with(env_filter);
    // try_init so a second call (e.g. from a test harness) is harmless
    if json {
        registry.with(fmt_layer.json()).try_init().ok();
    } else {
        registry.with(fmt_layer).try_init().ok();
    }
}
