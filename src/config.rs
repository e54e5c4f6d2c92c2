use std::env;

use crate::error::Error;

/// Cleanup target, read once at startup from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub deployment_name: String,
    pub namespace: String,
    pub ingress_name: String,
    pub dns_domain: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Ok(Self {
            deployment_name: require("DEPLOYMENT_NAME")?,
            namespace: require("NAMESPACE")?,
            ingress_name: require("INGRESS_NAME")?,
            dns_domain: require("DNS_DOMAIN")?,
        })
    }

    /// Host owned by the deployment on the shared ingress. Plain
    /// concatenation: `DNS_DOMAIN` is expected to carry its own leading
    /// delimiter (e.g. ".example.com").
    pub fn ingress_host(&self) -> String {
        format!("{}{}", self.deployment_name, self.dns_domain)
    }
}

fn require(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingEnv(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(deployment_name: &str, dns_domain: &str) -> Config {
        Config {
            deployment_name: deployment_name.to_string(),
            namespace: "default".to_string(),
            ingress_name: "shared".to_string(),
            dns_domain: dns_domain.to_string(),
        }
    }

    #[test]
    fn host_is_plain_concatenation() {
        assert_eq!(
            config("app", ".example.com").ingress_host(),
            "app.example.com"
        );
    }

    #[test]
    fn host_without_domain_is_bare_name() {
        assert_eq!(config("app", "").ingress_host(), "app");
    }

    #[test]
    fn missing_variable_is_reported_by_name() {
        env::remove_var("DEPLOYMENT_NAME");
        match Config::from_env() {
            Err(Error::MissingEnv(name)) => assert_eq!(name, "DEPLOYMENT_NAME"),
            other => panic!("expected MissingEnv, got {other:?}"),
        }
    }
}
