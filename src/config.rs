//! Server settings read from the environment. Leptos' own options come from
//! `get_configuration` and the `[package.metadata.leptos]` table.

pub const DB_PATH_VAR: &str = "PRODVOTE_DB";
pub const SEED_DEMO_VAR: &str = "PRODVOTE_SEED_DEMO";
pub const DEFAULT_DB_PATH: &str = "prodvote.db";

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub db_path: String,
    /// Insert the demo product when the database is empty.
    pub seed_demo: bool,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = lookup(DB_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_PATH.to_string());
        let seed_demo = lookup(SEED_DEMO_VAR).map_or(true, |v| parse_flag(&v));
        Self { db_path, seed_demo }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]);
        assert_eq!(config.db_path, DEFAULT_DB_PATH);
        assert!(config.seed_demo);
    }

    #[test]
    fn reads_overrides() {
        let config = config(&[(DB_PATH_VAR, "/tmp/votes.db"), (SEED_DEMO_VAR, "no")]);
        assert_eq!(config.db_path, "/tmp/votes.db");
        assert!(!config.seed_demo);
    }

    #[test]
    fn blank_path_falls_back() {
        assert_eq!(config(&[(DB_PATH_VAR, "  ")]).db_path, DEFAULT_DB_PATH);
        assert!(config(&[(SEED_DEMO_VAR, "TRUE")]).seed_demo);
    }
}
