// ============================================================
// Layer 6 — Logging
// ============================================================
// Installs the global tracing subscriber.
//
// The review form prints to stdout, so log lines go to
// stderr and never interleave with it. When RUST_LOG is set
// it decides verbosity on its own; otherwise our crate logs
// at `info`.
//
//   RUST_LOG=doc_label_review=debug doc-label-review annotate ...
//
// Reference: tracing-subscriber crate documentation

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "doc_label_review=info";

/// Filter from a RUST_LOG value, falling back to the default
/// directive when it is unset, blank or unparsable.
pub fn filter_from(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Build the filter from the process environment
pub fn env_filter() -> EnvFilter {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    filter_from(rust_log.as_deref())
}

/// Initialise logging once at startup.
/// Calling it a second time is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init();
}
