use std::path::{Path, PathBuf};

use super::types::AppConfig;

/// Get the default rasdesk data directory: ~/.rasdesk
pub fn get_rasdesk_data_dir() -> anyhow::Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(home.join(".rasdesk"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<AppConfig>(&s)?)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.rasdesk/config.toml
    let user_config = get_rasdesk_data_dir()?.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());

    tracing::debug!(
        target: "rasdesk.config",
        base_url = %cfg.gemini.base_url,
        text_model = %cfg.gemini.text_model,
        has_api_key = !cfg.gemini.api_key.is_empty(),
        "config loaded"
    );
    Ok(cfg)
}

/// Environment variable overrides (highest priority after CLI flags).
///
/// `lookup` is injected so tests do not have to mutate the process env.
pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = ["RASDESK_API_KEY", "GEMINI_API_KEY", "API_KEY"]
        .iter()
        .find_map(|k| non_empty(*k))
    {
        cfg.gemini.api_key = v;
    }
    if let Some(v) = non_empty("RASDESK_BASE_URL") {
        cfg.gemini.base_url = v;
    }
    if let Some(v) = non_empty("RASDESK_TEXT_MODEL") {
        cfg.gemini.text_model = v;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn api_key_precedence() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(
            &mut cfg,
            lookup_from(&[("API_KEY", "plain"), ("GEMINI_API_KEY", "gemini")]),
        );
        assert_eq!(cfg.gemini.api_key, "gemini");

        let mut cfg = AppConfig::default();
        apply_env_overrides(
            &mut cfg,
            lookup_from(&[("RASDESK_API_KEY", "own"), ("GEMINI_API_KEY", "gemini")]),
        );
        assert_eq!(cfg.gemini.api_key, "own");
    }

    #[test]
    fn blank_values_are_ignored() {
        let mut cfg = AppConfig::default();
        cfg.gemini.api_key = "from-file".to_string();
        apply_env_overrides(
            &mut cfg,
            lookup_from(&[("RASDESK_API_KEY", "  "), ("RASDESK_BASE_URL", "")]),
        );
        assert_eq!(cfg.gemini.api_key, "from-file");
        assert_eq!(
            cfg.gemini.base_url,
            "https://generativelanguage.googleapis.com"
        );
    }

    #[test]
    fn load_from_path_reads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[gemini]\nbase_url = \"http://localhost:9\"\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        let cfg = load_from_path(&path).unwrap();
        assert_eq!(cfg.gemini.base_url, "http://localhost:9");
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn load_from_path_rejects_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gemini\n").unwrap();
        assert!(load_from_path(&path).is_err());
    }
}
