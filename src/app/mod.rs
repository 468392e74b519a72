//! fieldwright application module: terminal lifecycle, runtime loop and the
//! autosave adapter.

/// Autosave adapter for draft form values.
pub mod persist;
/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::run;
