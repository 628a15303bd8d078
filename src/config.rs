use std::net::SocketAddr;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CoachConfig {
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub supplement_recipe_id: String,
    pub coach: CoachConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let host = var("APP_HOST")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "0.0.0.0".into());
        let port = var("APP_PORT")
            .and_then(|v| v.trim().parse::<u16>().ok())
            .unwrap_or(8080);
        let supplement_recipe_id = var("SUPPLEMENT_RECIPE_ID")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| crate::recipes::catalog::PROTEIN_SHAKE_ID.into());
        let coach = CoachConfig {
            delay_ms: var("COACH_DELAY_MS")
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(1500),
        };
        Ok(Self {
            host,
            port,
            supplement_recipe_id,
            coach,
        })
    }

    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned()).unwrap()
    }

    #[test]
    fn defaults_when_unset() {
        let cfg = config(&[]);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.supplement_recipe_id, crate::recipes::catalog::PROTEIN_SHAKE_ID);
        assert_eq!(cfg.coach.delay_ms, 1500);
    }

    #[test]
    fn malformed_numbers_fall_back_to_defaults() {
        let cfg = config(&[("COACH_DELAY_MS", "soon"), ("APP_PORT", "http")]);
        assert_eq!(cfg.coach.delay_ms, 1500);
        assert_eq!(cfg.port, 8080);
    }

    #[test]
    fn reads_overrides() {
        let cfg = config(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("SUPPLEMENT_RECIPE_ID", "my_shake"),
            ("COACH_DELAY_MS", " 0 "),
        ]);
        assert_eq!(cfg.supplement_recipe_id, "my_shake");
        assert_eq!(cfg.coach.delay_ms, 0);
        assert_eq!(cfg.bind_addr().unwrap(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn blank_supplement_id_uses_default() {
        let cfg = config(&[("SUPPLEMENT_RECIPE_ID", "  ")]);
        assert_eq!(cfg.supplement_recipe_id, crate::recipes::catalog::PROTEIN_SHAKE_ID);
    }
}
