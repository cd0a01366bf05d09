use crate::application::api::Api;

/// Configuration types for the admin runner.
pub mod config {
    use std::time::Duration;

    use url::Url;

    /// Backend used when `ARMORY_API_URL` is not set.
    pub const DEFAULT_API_URL: &str = "http://localhost:8080";

    pub const API_URL_VAR: &str = "ARMORY_API_URL";
    pub const REQUEST_TIMEOUT_VAR: &str = "ARMORY_REQUEST_TIMEOUT_MS";

    #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
    pub enum ConfigError {
        #[error("{var} is not a valid URL ({value}): {reason}")]
        InvalidUrl {
            var: &'static str,
            value: String,
            reason: String,
        },
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub struct RunnerConfig {
        pub api_base_url: Url,
        /// Per-request timeout; `None` waits indefinitely.
        pub request_timeout: Option<Duration>,
    }

    impl RunnerConfig {
        pub fn from_env() -> Result<Self, ConfigError> {
            Self::from_lookup(|key| std::env::var(key).ok())
        }

        /// Build the config from any variable source.
        pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
            let raw_url = lookup(API_URL_VAR)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_API_URL.to_string());
            let api_base_url = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidUrl {
                var: API_URL_VAR,
                value: raw_url.clone(),
                reason: e.to_string(),
            })?;

            // Unparseable or zero disables the timeout.
            let request_timeout = lookup(REQUEST_TIMEOUT_VAR)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis);

            Ok(Self {
                api_base_url,
                request_timeout,
            })
        }
    }

    #[cfg(test)]
    mod tests {
        use std::collections::HashMap;

        use super::*;

        fn config(vars: &[(&str, &str)]) -> Result<RunnerConfig, ConfigError> {
            let vars: HashMap<String, String> = vars
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            RunnerConfig::from_lookup(|key| vars.get(key).cloned())
        }

        #[test]
        fn defaults_to_local_backend_without_timeout() {
            let config = config(&[]).unwrap();

            assert_eq!(config.api_base_url.as_str(), "http://localhost:8080/");
            assert_eq!(config.request_timeout, None);
        }

        #[test]
        fn reads_url_and_timeout() {
            let config = config(&[
                (API_URL_VAR, "https://armory.example.com/backend"),
                (REQUEST_TIMEOUT_VAR, "2500"),
            ])
            .unwrap();

            assert_eq!(config.api_base_url.host_str(), Some("armory.example.com"));
            assert_eq!(config.request_timeout, Some(Duration::from_millis(2500)));
        }

        #[test]
        fn rejects_malformed_url() {
            let err = config(&[(API_URL_VAR, "not a url")]).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidUrl { var: API_URL_VAR, .. }));
        }

        #[test]
        fn zero_timeout_means_none() {
            let config = config(&[(REQUEST_TIMEOUT_VAR, "0")]).unwrap();
            assert_eq!(config.request_timeout, None);
        }
    }
}

use config::RunnerConfig;

pub struct RunnerDeps {
    pub api: Api,
    pub config: RunnerConfig,
}

pub fn run(deps: RunnerDeps) {
    let RunnerDeps { api, config } = deps;

    let css = load_admin_css();
    let head = format!("<style>{}</style>", css);
    let window = dioxus_desktop::WindowBuilder::new().with_title("Armory Admin");
    let cfg = dioxus_desktop::Config::new()
        .with_custom_head(head)
        .with_window(window);

    tracing::info!(api = %config.api_base_url, "Launching admin window");

    dioxus::LaunchBuilder::new()
        .with_cfg(cfg)
        .with_context(crate::ui::presentation::Services::new(api))
        .launch(crate::ui::app);
}

fn load_admin_css() -> String {
    const FALLBACK_CSS: &str = "";

    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    let css_path = repo_root.join("crates/admin/assets/css/admin.css");
    std::fs::read_to_string(css_path).unwrap_or_else(|_| FALLBACK_CSS.to_string())
}
