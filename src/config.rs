use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::info;

use crate::housing::ProjectionInput;

/// 기본 설정 파일 경로.
pub const CONFIG_PATH: &str = "config.toml";

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 언어 코드(auto/ko/en-us ...)
    pub language: String,
    /// 사용자 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 금액 표시에 쓰는 통화 기호
    pub currency_symbol: String,
    /// GUI 창 투명도(0.3~1.0)
    pub window_alpha: f32,
    /// 입력 폼 기본값
    pub defaults: ProjectionInput,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".into(),
            language_pack_dir: None,
            currency_symbol: "$".into(),
            window_alpha: 1.0,
            defaults: ProjectionInput::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Parse(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_create(Path::new(CONFIG_PATH))
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값을 저장한 뒤 돌려준다.
pub fn load_or_create(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        cfg.save_to(path)?;
        info!(path = %path.display(), "created default config");
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rent_buy_{}_{name}.toml", std::process::id()))
    }

    #[test]
    fn missing_file_creates_defaults() {
        let path = temp_path("create");
        let _ = fs::remove_file(&path);
        let cfg = load_or_create(&path).expect("create");
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
        fs::remove_file(&path).ok();
    }

    #[test]
    fn saved_defaults_survive_reload() {
        let path = temp_path("reload");
        let mut cfg = Config::default();
        cfg.currency_symbol = "₩".into();
        cfg.defaults.horizon_years = 15;
        cfg.defaults.appreciation_rate = -1.5;
        cfg.save_to(&path).expect("save");
        let loaded = load_or_create(&path).expect("load");
        assert_eq!(loaded, cfg);
        fs::remove_file(&path).ok();
    }

    #[test]
    fn partial_file_fills_missing_fields() {
        let cfg: Config = toml::from_str("language = \"ko\"\n").expect("parse");
        assert_eq!(cfg.language, "ko");
        assert_eq!(cfg.currency_symbol, "$");
        assert_eq!(cfg.defaults, ProjectionInput::default());
    }
}
