//! Errors - ドメインエラー
//!
//! # 分類
//! - **CategoryError**: カテゴリ tag の宣言ミス（プログラミングエラー、リトライ無意味）
//! - **ConfigError**: ログ設定の読み込み・解釈の失敗

use std::path::PathBuf;

/// CategoryError はカテゴリ名を導出できないことを表す
///
/// tag の `PATH` が壊れている場合にだけ発生します。
/// 実行時に回復するものではなく、宣言を直すべきエラーです。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CategoryError {
    #[error("category path '{path}' cannot be named: {reason}")]
    Unnameable { path: String, reason: &'static str },
}

/// ConfigError はログ設定の読み込みエラー
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read logging config {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid logging config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unknown log level '{0}'. Use trace, debug, info, warn, error, critical or none")]
    InvalidLevel(String),
}
