//! Filesystem existence probe
//!
//! [`which`] performs a single synchronous existence check. A positive answer
//! only describes the moment of the call: the entry may be removed (or
//! created) before the caller acts on it. Callers must not treat the result
//! as a guarantee.

use std::path::Path;

/// Existence check used by [`which_with`].
///
/// Hosts without a native filesystem supply their own implementation.
pub trait PathProbe {
    /// Whether any filesystem entry exists at `path` right now.
    fn exists(&self, path: &str) -> bool;
}

/// Probe backed by `std::fs`.
///
/// Symbolic links are followed, so a dangling link counts as missing.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProbe;

impl PathProbe for StdProbe {
    fn exists(&self, path: &str) -> bool {
        !path.is_empty() && Path::new(path).exists()
    }
}

/// Return `path` if an entry exists there, otherwise the empty string.
pub fn which(path: &str) -> String {
    which_with(&StdProbe, path)
}

/// [`which`] with a caller-supplied existence check.
pub fn which_with<P: PathProbe + ?Sized>(probe: &P, path: &str) -> String {
    let found = probe.exists(path);
    tracing::debug!(path, found, "probed path");
    if found {
        path.to_string()
    } else {
        String::new()
    }
}
