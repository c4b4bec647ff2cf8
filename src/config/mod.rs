#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::app::messages::Language;
use crate::domain::ports::ConfigProvider;
use toml_config::TomlConfig;

/// 命令列與設定檔合併後的結果；命令列優先
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppSettings {
    pub language: Language,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_json: bool,
}

impl AppSettings {
    pub fn merge(
        file: Option<&TomlConfig>,
        language: Option<Language>,
        verbose: bool,
        log_json: bool,
    ) -> Self {
        let file_language = file.and_then(|f| f.display.language);
        let file_json = file.and_then(|f| f.logging.json).unwrap_or(false);

        Self {
            language: language.or(file_language).unwrap_or_default(),
            verbose,
            log_level: file.and_then(|f| f.logging.level.clone()),
            log_json: log_json || file_json,
        }
    }
}

impl ConfigProvider for AppSettings {
    fn language(&self) -> Language {
        self.language
    }

    fn verbose(&self) -> bool {
        self.verbose
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }

    fn log_json(&self) -> bool {
        self.log_json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let settings = AppSettings::merge(None, None, false, false);
        assert_eq!(settings.language(), Language::ZhTw);
        assert!(settings.log_level().is_none());
        assert!(!settings.log_json());
    }

    #[test]
    fn test_command_line_overrides_file() {
        let file = TomlConfig::from_toml_str(
            "[display]\nlanguage = \"zh-TW\"\n[logging]\nlevel = \"info\"\njson = true\n",
        )
        .unwrap();

        let settings = AppSettings::merge(Some(&file), Some(Language::En), true, false);
        assert_eq!(settings.language(), Language::En);
        assert!(settings.verbose());
        assert_eq!(settings.log_level(), Some("info"));
        assert!(settings.log_json());
    }
}
