//! Structured logging via **tracing**.
//!
//! The analyzer itself only traces at `debug` level (skip decisions in the
//! observer); hosts that want an audit trail of why definitions were
//! excluded can enable it with `RUST_LOG=macrolint_core=debug`.

/// Initializes the global tracing collector (subscriber).
///
/// Call *once* at the beginning of the process. Configures structured JSON
/// output to stderr so stdout stays clean for diagnostic output.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g. `RUST_LOG=macrolint_core=debug`)
pub fn init_structured_logging() {
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
