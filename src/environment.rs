//! The environment descriptor.
//!
//! A frozen-at-load configuration value describing how the client reaches
//! its backend REST API and UI namespace. Everything except the namespaces
//! is derived from the page location, so the same build artifact works
//! across deployment hosts and ports.

use serde::{Deserialize, Serialize};

use crate::error::EnvResult;
use crate::location::LocationContext;

/// Mount point of the backend REST API.
const REST_NAMESPACE: &str = "/server";

/// Root of the UI namespace.
const UI_NAMESPACE: &str = "/";

// =============================================================================
// Descriptor Types
// =============================================================================

/// Connection parameters for one logical service.
///
/// Serialized with camelCase keys (`nameSpace`) so the JSON shape matches
/// what JavaScript consumers expect.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Endpoint {
    /// Whether clients should use TLS for this service.
    pub ssl: bool,
    /// Hostname, without scheme or port.
    pub host: String,
    /// TCP port. Always numeric; see [`LocationContext::effective_port`]
    /// for the coercion rule applied to the browser's port string.
    pub port: u16,
    /// Path-like prefix distinguishing the service behind the shared host.
    pub name_space: String,
}

/// Deployment-specific connection configuration for the application.
///
/// Immutable after construction; `rest` and `ui` always share the same
/// `host`/`port`/`ssl`, only the namespace differs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    /// Production-mode flag for this variant.
    pub production: bool,
    /// How to reach the backend REST API.
    pub rest: Endpoint,
    /// How to reach the UI namespace.
    pub ui: Endpoint,
}

// =============================================================================
// Derivation
// =============================================================================

impl Environment {
    /// Build the production variant from a page location.
    ///
    /// Host and port come from the runtime browser location so client
    /// requests do not hardcode container ports. `ssl` is always `true`
    /// in this variant, independent of the scheme the port was derived
    /// from; that matches the deployed configuration and is preserved
    /// as-is.
    pub fn production(location: &LocationContext) -> EnvResult<Self> {
        let port = location.effective_port()?;
        let endpoint = |name_space: &str| Endpoint {
            ssl: true,
            host: location.hostname.clone(),
            port,
            name_space: name_space.to_string(),
        };

        log::debug!(
            "resolved environment: host={} port={} ({})",
            location.hostname,
            port,
            location.protocol
        );

        Ok(Self {
            production: true,
            rest: endpoint(REST_NAMESPACE),
            ui: endpoint(UI_NAMESPACE),
        })
    }

    /// Build the production variant from the current browser location.
    #[cfg(target_arch = "wasm32")]
    pub fn from_browser() -> EnvResult<Self> {
        Self::production(&LocationContext::from_window()?)
    }
}

/// The environment for the current page, resolved once and frozen.
///
/// The first call reads `window.location`; every later call returns the
/// same value. Safe to read from anywhere without synchronization since
/// the value is never mutated.
#[cfg(target_arch = "wasm32")]
pub fn environment() -> EnvResult<&'static Environment> {
    use once_cell::sync::OnceCell;

    static ENVIRONMENT: OnceCell<Environment> = OnceCell::new();
    ENVIRONMENT.get_or_try_init(Environment::from_browser)
}
