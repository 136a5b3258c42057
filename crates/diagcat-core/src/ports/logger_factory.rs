//! LoggerFactory port - カテゴリ名からロガーを作る
//!
//! ログ基盤（tracing, メモリ上のシンクなど）ごとに実装します。

use std::sync::Arc;

use super::logger::Logger;
use crate::domain::CategoryName;

/// LoggerFactory はカテゴリ名からロガーのハンドルを作る
///
/// # 契約
/// - 同期的に、すぐ返ること
/// - 副作用はシンクの登録だけ
/// - 同じ名前で複数回呼ばれてもよい（呼ぶたびに新しいハンドルでよい）
pub trait LoggerFactory: Send + Sync {
    fn create_logger(&self, category: &CategoryName) -> Result<Arc<dyn Logger>, LoggerFactoryError>;
}

/// LoggerFactoryError はログ基盤側の設定エラー
#[derive(Debug, thiserror::Error)]
pub enum LoggerFactoryError {
    #[error("no logging provider accepts category '{0}'")]
    Rejected(CategoryName),

    #[error("logging provider unavailable: {0}")]
    Unavailable(String),
}
