//! LoggingConfig - ログ設定
//!
//! JSON で書いた設定を読み込み、カテゴリごとのしきい値を解決します。
//!
//! ```json
//! {
//!   "min_level": "info",
//!   "categories": { "Diagcat.Database": "debug", "Diagcat.Query": "none" },
//!   "sensitive_data_logging": false
//! }
//! ```
//!
//! # カテゴリの解決
//! - `categories` のキーをドット区切りのセグメント単位で前方一致させる
//! - 一致したもののうち最も長いキーのレベルを使う
//! - 一致しなければ `min_level`

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{CategoryName, ConfigError, Level, LoggingOptions};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub min_level: Level,
    pub categories: BTreeMap<String, Level>,
    pub sensitive_data_logging: bool,
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// 全カテゴリ共通のしきい値を変える
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// カテゴリ（とその配下）のしきい値を設定する
    pub fn with_category(mut self, prefix: impl Into<String>, level: Level) -> Self {
        self.categories.insert(prefix.into(), level);
        self
    }

    pub fn with_sensitive_data_logging(mut self, enabled: bool) -> Self {
        self.sensitive_data_logging = enabled;
        self
    }

    /// カテゴリに適用されるしきい値
    pub fn level_for(&self, category: &CategoryName) -> Level {
        self.categories
            .iter()
            .filter(|(prefix, _)| category.starts_with_segments(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, level)| *level)
            .unwrap_or(self.min_level)
    }

    pub fn is_enabled(&self, category: &CategoryName, level: Level) -> bool {
        self.level_for(category).enables(level)
    }

    /// この設定から共有用の LoggingOptions を作る
    pub fn options(&self) -> LoggingOptions {
        LoggingOptions::new(self.sensitive_data_logging)
    }
}
