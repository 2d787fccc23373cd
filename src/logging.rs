use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Respects `RUST_LOG`; otherwise debug builds log at `debug` and release
/// builds at `info`. The HTTP and windowing stacks are kept at `warn`.
pub fn init() {
    let default_level = if cfg!(debug_assertions) { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{default_level},wgpu_core=warn,wgpu_hal=warn,naga=warn,cosmic_text=warn,hyper_util=warn,reqwest=warn"
        ))
    });

    // A second init (e.g. in tests) is harmless, so ignore the error
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
