//! Runtime Environment - deployment-aware endpoint configuration
//!
//! Derives the connection parameters for the application's backend REST
//! API and UI namespace from the browser's current location at startup,
//! so the same WebAssembly bundle works across deployment hosts and
//! ports (Kubernetes services, reverse proxies, port-forwards).
//!
//! The derivation itself is a pure function of a [`LocationContext`],
//! which keeps it testable outside the browser; only the thin
//! wasm-bindgen layer reads `window.location`.
//!
//! # Modules
//!
//! - [`location`] - the page location as an explicit, injectable value
//! - [`environment`] - the [`Environment`] descriptor and its derivation
//! - [`error`] - resolution errors

// =============================================================================
// Module declarations
// =============================================================================

pub mod environment;
pub mod error;
pub mod location;

// =============================================================================
// Re-exports
// =============================================================================

pub use environment::{Endpoint, Environment};
pub use error::{EnvResult, EnvironmentError};
pub use location::LocationContext;

#[cfg(target_arch = "wasm32")]
pub use environment::environment;

// =============================================================================
// Browser Bootstrap
// =============================================================================

#[cfg(target_arch = "wasm32")]
mod bootstrap {
    use wasm_bindgen::prelude::*;

    /// Runs automatically when the WASM module is instantiated.
    ///
    /// Resolves the environment eagerly: a missing location context
    /// aborts instantiation instead of being discovered on the first
    /// network call.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        _ = console_log::init_with_level(log::Level::Debug);

        let env = crate::environment().map_err(|e| JsValue::from_str(&e.to_string()))?;
        log::info!(
            "runtime environment ready: rest={}:{}{}",
            env.rest.host,
            env.rest.port,
            env.rest.name_space
        );
        Ok(())
    }

    /// The resolved environment as a plain JavaScript object.
    #[wasm_bindgen(js_name = environment)]
    pub fn environment_js() -> Result<JsValue, JsValue> {
        let env = crate::environment().map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(env).map_err(Into::into)
    }
}
