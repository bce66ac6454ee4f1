//! Run console display interface.
//!
//! The embedding environment provides a titled, focusable surface that shows
//! streamed output of a running external tool. Chunks arrive incrementally
//! from background tasks, so implementations must be `Send + Sync`.

/// Display sink for one or more external-tool runs.
pub trait RunConsole: Send + Sync {
    /// Register a new run under the given title.
    fn register(&self, title: &str);

    /// Append a chunk of process output. Chunks are delivered in stream
    /// order per stream; stdout and stderr are interleaved as produced.
    fn append(&self, chunk: &str);

    /// Ask the environment to bring the console surface to the foreground.
    fn focus(&self);
}
