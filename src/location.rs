//! The browser page location as an explicit value.
//!
//! The descriptor in [`crate::environment`] is a pure function of this
//! context. Browser code obtains it from `window.location` via
//! [`LocationContext::from_window`]; tests and non-browser hosts construct
//! it directly with [`LocationContext::new`].

use crate::error::{EnvResult, EnvironmentError};

/// Default port for pages served over `https:` without an explicit port.
const HTTPS_DEFAULT_PORT: u16 = 443;

/// Default port for every other scheme.
const HTTP_DEFAULT_PORT: u16 = 80;

/// The parts of the page location the environment derivation reads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationContext {
    /// Hostname portion of the page URL (no scheme, no port).
    pub hostname: String,
    /// Raw port string. Browsers report the default port as `""`.
    pub port: String,
    /// Protocol scheme including the trailing colon, e.g. `"https:"`.
    pub protocol: String,
}

impl LocationContext {
    /// Build a context from its parts.
    pub fn new(
        hostname: impl Into<String>,
        port: impl Into<String>,
        protocol: impl Into<String>,
    ) -> Self {
        Self {
            hostname: hostname.into(),
            port: port.into(),
            protocol: protocol.into(),
        }
    }

    /// Read the current page location.
    ///
    /// Fails with [`EnvironmentError::ContextUnavailable`] when no window
    /// exists, so the problem surfaces at bootstrap rather than on the
    /// first network call.
    #[cfg(target_arch = "wasm32")]
    pub fn from_window() -> EnvResult<Self> {
        let window = web_sys::window().ok_or(EnvironmentError::ContextUnavailable)?;
        let location = window.location();

        let hostname = location
            .hostname()
            .map_err(|_| EnvironmentError::ContextUnavailable)?;
        let port = location
            .port()
            .map_err(|_| EnvironmentError::ContextUnavailable)?;
        let protocol = location
            .protocol()
            .map_err(|_| EnvironmentError::ContextUnavailable)?;

        Ok(Self {
            hostname,
            port,
            protocol,
        })
    }

    /// Whether the page was served over TLS.
    pub fn is_secure(&self) -> bool {
        self.protocol == "https:"
    }

    /// Port the page is actually reachable on, normalized to a number.
    ///
    /// An explicit port always wins, even `"0"`. The presence check is on
    /// the string: browsers report the default port as the empty string,
    /// never as an absent value. Without an explicit port the scheme
    /// default applies (443 for `https:`, 80 otherwise).
    pub fn effective_port(&self) -> EnvResult<u16> {
        if self.port.is_empty() {
            return Ok(if self.is_secure() {
                HTTPS_DEFAULT_PORT
            } else {
                HTTP_DEFAULT_PORT
            });
        }

        self.port
            .parse()
            .map_err(|_| EnvironmentError::InvalidPort(self.port.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_https_default_port() {
        let ctx = LocationContext::new("app.example.com", "", "https:");
        assert_eq!(ctx.effective_port().unwrap(), 443);
    }

    #[test]
    fn test_http_default_port() {
        let ctx = LocationContext::new("app.example.com", "", "http:");
        assert_eq!(ctx.effective_port().unwrap(), 80);
    }

    #[test]
    fn test_unknown_scheme_falls_back_to_http_default() {
        let ctx = LocationContext::new("app.example.com", "", "file:");
        assert_eq!(ctx.effective_port().unwrap(), 80);
    }

    #[test]
    fn test_explicit_port_wins_over_scheme() {
        let ctx = LocationContext::new("app.example.com", "8443", "https:");
        assert_eq!(ctx.effective_port().unwrap(), 8443);
    }

    #[test]
    fn test_port_zero_is_explicit() {
        // "0" is a non-empty string, not an absent port
        let ctx = LocationContext::new("app.example.com", "0", "http:");
        assert_eq!(ctx.effective_port().unwrap(), 0);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let ctx = LocationContext::new("app.example.com", "not-a-port", "http:");
        assert_eq!(
            ctx.effective_port(),
            Err(EnvironmentError::InvalidPort("not-a-port".to_string()))
        );
    }

    #[test]
    fn test_is_secure() {
        assert!(LocationContext::new("h", "", "https:").is_secure());
        assert!(!LocationContext::new("h", "", "http:").is_secure());
        assert!(!LocationContext::new("h", "", "ftp:").is_secure());
    }
}
