//! Query string parameters shared by several endpoints.

use serde::Deserialize;

use crate::server::model::mode::Mode;

/// Optional exact-name filter, e.g. `/regions?name=The%20Forge`.
#[derive(Deserialize, Default)]
pub struct NameParams {
    pub name: Option<String>,
}

impl NameParams {
    /// Name to look up, ignoring an empty `?name=`.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// Optional time-window mode, e.g. `?mode=week`.
#[derive(Deserialize, Default)]
pub struct ModeParams {
    pub mode: Option<String>,
}

impl ModeParams {
    /// Raw mode token, or the endpoint's default when absent or empty.
    ///
    /// The token is not validated here; the service rejects unsupported values.
    pub fn mode_or(&self, default: Mode) -> &str {
        match self.mode.as_deref() {
            Some(mode) if !mode.is_empty() => mode,
            _ => default.as_str(),
        }
    }
}
