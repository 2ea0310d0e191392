//! Release-directory port for the supported stable release set.

use crate::sru::domain::SeriesName;

/// Lookup of currently supported stable release series.
///
/// Implementations are consulted during argument resolution, before any
/// network activity, so they must not perform remote calls.
pub trait ReleaseDirectory: Send + Sync {
    /// Returns all currently supported stable series, oldest first.
    fn supported(&self) -> Vec<SeriesName>;

    /// Returns `true` when the series is a supported stable release.
    fn is_supported(&self, series: &SeriesName) -> bool {
        self.supported().contains(series)
    }
}
