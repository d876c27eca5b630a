//! Purpose: Host print capability seam behind the `say_hello` export.
//! Exports: `HostPrint`, `print`, `println`, `install`, `reset`.
//! Role: Injected output capability; the ABI export and any Rust caller delegate here.
//! Invariants: Text passes through to the sink byte-for-byte, including empty writes.
//! Invariants: One sink is active per process; the default writes to stdout.
use std::io::Write;
use std::sync::{Arc, PoisonError, RwLock};

/// Output capability supplied by the embedding host.
///
/// Implementations must tolerate empty writes and must not buffer past the
/// call: a write is observable once `print` returns.
pub trait HostPrint: Send + Sync {
    fn print(&self, text: &str);
}

/// Process-default capability when no host has installed one.
struct StdoutPrint;

impl HostPrint for StdoutPrint {
    fn print(&self, text: &str) {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        let _ = handle.write_all(text.as_bytes());
        let _ = handle.flush();
    }
}

static SINK: RwLock<Option<Arc<dyn HostPrint>>> = RwLock::new(None);

/// Install `sink` as the process print capability.
pub fn install(sink: Arc<dyn HostPrint>) {
    tracing::debug!("host print sink installed");
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = Some(sink);
}

/// Restore the default stdout capability.
pub fn reset() {
    tracing::debug!("host print sink reset to stdout");
    *SINK.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// Forward `text` to the installed sink as a single write.
pub fn print(text: &str) {
    tracing::trace!(len = text.len(), "forwarding text to host print sink");
    let guard = SINK.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_deref() {
        Some(sink) => sink.print(text),
        None => StdoutPrint.print(text),
    }
}

/// Forward `text` followed by a newline, still as a single write.
pub fn println(text: &str) {
    let mut line = String::with_capacity(text.len() + 1);
    line.push_str(text);
    line.push('\n');
    print(&line);
}
