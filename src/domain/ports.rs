use crate::app::messages::Language;

/// 已合併 (命令列 + TOML) 的執行設定
pub trait ConfigProvider {
    fn language(&self) -> Language;
    fn verbose(&self) -> bool;
    fn log_level(&self) -> Option<&str>;
    fn log_json(&self) -> bool;
}
