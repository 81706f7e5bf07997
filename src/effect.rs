//! Effects - side effects declared by the reducer

use std::path::PathBuf;

/// Side effects that can be triggered by actions
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Read and parse the forecast file at `path`
    LoadForecast { path: PathBuf },
}
