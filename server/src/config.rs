use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub cors_allowed_origins: Vec<String>,
    /// Fallback revenue target for agents without a seeded one.
    pub default_agent_target: i64,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let cors_allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .filter_map(|s| {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            })
            .collect::<Vec<_>>();

        let default_agent_target = match std::env::var("AGENT_REVENUE_TARGET") {
            Ok(raw) => raw
                .trim()
                .parse::<i64>()
                .context("AGENT_REVENUE_TARGET must be an integer")?,
            Err(_) => 2_000_000,
        };

        Ok(Self {
            cors_allowed_origins,
            default_agent_target,
        })
    }
}
