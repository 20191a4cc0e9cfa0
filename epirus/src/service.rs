use tracing::debug;

use crate::config::{EpirusConfig, APP_URL_ENV, LOGIN_TOKEN_ENV};
use crate::error::{EpirusError, Result};
use crate::types::Network;

/// Builds Epirus RPC gateway URLs of the form
/// `<app_url>/api/rpc/<network>/<login_token>/`.
#[derive(Debug, Clone)]
pub struct ServiceUrlResolver {
    config: EpirusConfig,
}

impl ServiceUrlResolver {
    pub fn new(config: EpirusConfig) -> Self {
        Self { config }
    }

    /// Resolve the gateway URL for `network`.
    ///
    /// # Errors
    ///
    /// Returns [`EpirusError::ConfigurationMissing`] if the login token or the
    /// application URL is unset or empty. The token is checked first.
    pub fn resolve(&self, network: Network) -> Result<String> {
        let token = required(self.config.login_token.as_deref(), LOGIN_TOKEN_ENV)?;
        let app_url = required(self.config.app_url.as_deref(), APP_URL_ENV)?;

        debug!(%network, app_url, "resolved service url");
        Ok(format!("{app_url}/api/rpc/{network}/{token}/"))
    }
}

/// One-shot form of [`ServiceUrlResolver::resolve`].
pub fn resolve_service_url(config: &EpirusConfig, network: Network) -> Result<String> {
    ServiceUrlResolver::new(config.clone()).resolve(network)
}

fn required<'a>(value: Option<&'a str>, name: &'static str) -> Result<&'a str> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(EpirusError::ConfigurationMissing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_rinkeby() {
        let resolver = ServiceUrlResolver::new(EpirusConfig::new("token", "http://localhost:8000"));
        assert_eq!(
            resolver.resolve(Network::Rinkeby).unwrap(),
            "http://localhost:8000/api/rpc/rinkeby/token/"
        );
    }

    #[test]
    fn test_resolve_every_network() {
        let resolver = ServiceUrlResolver::new(EpirusConfig::new("T", "https://app.epirus.io"));
        for network in Network::ALL {
            assert_eq!(
                resolver.resolve(network).unwrap(),
                format!("https://app.epirus.io/api/rpc/{}/T/", network.name())
            );
        }
    }

    #[test]
    fn test_resolve_keeps_inputs_verbatim() {
        let url = resolve_service_url(
            &EpirusConfig::new("abc-123", "http://example.com/base/"),
            Network::Mainnet,
        )
        .unwrap();
        assert_eq!(url, "http://example.com/base//api/rpc/mainnet/abc-123/");
    }

    #[test]
    fn test_missing_token() {
        let config = EpirusConfig {
            login_token: None,
            app_url: Some("http://localhost:8000".into()),
        };
        let err = resolve_service_url(&config, Network::Mainnet).unwrap_err();
        assert!(matches!(err, EpirusError::ConfigurationMissing(LOGIN_TOKEN_ENV)));
    }

    #[test]
    fn test_missing_app_url() {
        let config = EpirusConfig {
            login_token: Some("token".into()),
            app_url: None,
        };
        let err = resolve_service_url(&config, Network::Mainnet).unwrap_err();
        assert!(matches!(err, EpirusError::ConfigurationMissing(APP_URL_ENV)));
    }

    #[test]
    fn test_empty_values_are_missing() {
        let err = resolve_service_url(&EpirusConfig::new("", "http://x"), Network::Kovan).unwrap_err();
        assert!(matches!(err, EpirusError::ConfigurationMissing(LOGIN_TOKEN_ENV)));

        let err = resolve_service_url(&EpirusConfig::new("t", ""), Network::Kovan).unwrap_err();
        assert!(matches!(err, EpirusError::ConfigurationMissing(APP_URL_ENV)));
    }

    #[test]
    fn test_both_missing_reports_token_first() {
        let err = resolve_service_url(&EpirusConfig::default(), Network::Goerli).unwrap_err();
        assert_eq!(err.to_string(), "configuration missing: EPIRUS_LOGIN_TOKEN is not set");
    }
}
