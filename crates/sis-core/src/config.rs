use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Tool configuration loaded from `~/.config/sis/config.toml`.
///
/// Paths are interpreted relative to the working directory the tool runs in,
/// matching the convention of running the setup next to the import script.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SisConfig {
    /// Interpreter used for both `pip` and the import script.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Path to the import script whose placeholders get patched.
    #[serde(default = "default_script")]
    pub script: PathBuf,
    /// Path to the pip requirements manifest.
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_script() -> PathBuf {
    PathBuf::from("import_studios.py")
}

fn default_manifest() -> PathBuf {
    PathBuf::from("requirements.txt")
}

impl Default for SisConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            script: default_script(),
            manifest: default_manifest(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sis")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SisConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SisConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SisConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SisConfig::default();
        assert_eq!(cfg.interpreter, "python3");
        assert_eq!(cfg.script, PathBuf::from("import_studios.py"));
        assert_eq!(cfg.manifest, PathBuf::from("requirements.txt"));
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SisConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SisConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.interpreter, cfg.interpreter);
        assert_eq!(parsed.script, cfg.script);
        assert_eq!(parsed.manifest, cfg.manifest);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            interpreter = "python3.12"
            script = "scripts/import_studios.py"
            manifest = "scripts/requirements.txt"
        "#;
        let cfg: SisConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.interpreter, "python3.12");
        assert_eq!(cfg.script, PathBuf::from("scripts/import_studios.py"));
        assert_eq!(cfg.manifest, PathBuf::from("scripts/requirements.txt"));
    }

    #[test]
    fn config_toml_partial_fills_defaults() {
        let toml = r#"interpreter = "python3.11""#;
        let cfg: SisConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.interpreter, "python3.11");
        assert_eq!(cfg.script, PathBuf::from("import_studios.py"));
        assert_eq!(cfg.manifest, PathBuf::from("requirements.txt"));
    }
}
