#[derive(Clone, Debug)]
pub struct AppConfig {
    pub default_url: String,
    pub fallback_url: String,
    pub bind_addr: String,
    pub processor_timeout_ms: u64,
}

pub const DEFAULT_PROCESSOR_TIMEOUT_MS: u64 = 5_000;

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            default_url: trim_base_url(
                get("DEFAULT_URL")
                    .unwrap_or_else(|| "http://payment-processor-default:8080".to_string()),
            ),
            fallback_url: trim_base_url(
                get("FALLBACK_URL")
                    .unwrap_or_else(|| "http://payment-processor-fallback:8080".to_string()),
            ),
            bind_addr: normalize_bind_addr(
                get("BIND_ADDR")
                    .or_else(|| get("ADDR"))
                    .unwrap_or_else(|| "0.0.0.0:9999".to_string()),
            ),
            processor_timeout_ms: get("PROCESSOR_TIMEOUT_MS")
                .and_then(|s| s.trim().parse::<u64>().ok())
                .unwrap_or(DEFAULT_PROCESSOR_TIMEOUT_MS),
        }
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

// ":9999" means every interface.
fn normalize_bind_addr(addr: String) -> String {
    let addr = addr.trim();
    if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(vars: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn uses_documented_defaults() {
        let cfg = from_map(&[]);
        assert_eq!(cfg.default_url, "http://payment-processor-default:8080");
        assert_eq!(cfg.fallback_url, "http://payment-processor-fallback:8080");
        assert_eq!(cfg.bind_addr, "0.0.0.0:9999");
        assert_eq!(cfg.processor_timeout_ms, 5_000);
    }

    #[test]
    fn accepts_port_only_addr_and_trims_urls() {
        let cfg = from_map(&[
            ("ADDR", ":8080"),
            ("DEFAULT_URL", "http://a:1/"),
            ("FALLBACK_URL", "http://b:2"),
        ]);
        assert_eq!(cfg.bind_addr, "0.0.0.0:8080");
        assert_eq!(cfg.default_url, "http://a:1");
        assert_eq!(cfg.fallback_url, "http://b:2");
    }

    #[test]
    fn bind_addr_wins_over_addr() {
        let cfg = from_map(&[("ADDR", ":1"), ("BIND_ADDR", "127.0.0.1:2")]);
        assert_eq!(cfg.bind_addr, "127.0.0.1:2");
    }

    #[test]
    fn bad_timeout_falls_back_to_default() {
        let cfg = from_map(&[("PROCESSOR_TIMEOUT_MS", "soon")]);
        assert_eq!(cfg.processor_timeout_ms, DEFAULT_PROCESSOR_TIMEOUT_MS);

        let cfg = from_map(&[("PROCESSOR_TIMEOUT_MS", "250")]);
        assert_eq!(cfg.processor_timeout_ms, 250);
    }
}
