use crate::app::messages::Language;
use crate::config::toml_config::TomlConfig;
use crate::config::AppSettings;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "library-console")]
#[command(about = "An interactive console for managing books and borrowers")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Interface language, overrides the configuration file
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    /// 載入設定檔 (若有指定) 並與命令列參數合併
    pub fn settings(&self) -> Result<AppSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        Ok(AppSettings::merge(
            file.as_ref(),
            self.lang,
            self.verbose,
            self.log_json,
        ))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_flags() {
        let config = CliConfig::parse_from(["library-console", "--lang", "en", "-v"]);
        assert_eq!(config.lang, Some(Language::En));
        assert!(config.verbose);
        assert!(config.config.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unknown_language() {
        assert!(CliConfig::try_parse_from(["library-console", "--lang", "fr"]).is_err());
    }

    #[test]
    fn test_settings_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[display]\nlanguage = \"en\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliConfig::parse_from(["library-console", "--config", &path]);
        let settings = config.settings().unwrap();
        assert_eq!(settings.language, Language::En);
    }

    #[test]
    fn test_settings_rejects_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[logging]\nlevel = \"loud\"\n").unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let config = CliConfig::parse_from(["library-console", "-c", &path]);
        assert!(config.settings().is_err());
    }
}
