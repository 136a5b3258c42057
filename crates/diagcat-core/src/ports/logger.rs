//! Logger port - カテゴリに束縛されたログ出力先

use crate::domain::{CategoryName, Level};

/// Logger は 1 つのカテゴリに束縛されたシンク
///
/// LoggerFactory が返す不透明なハンドルです。
/// `Arc<dyn Logger>` として DiagnosticsLogger が所有します。
pub trait Logger: Send + Sync {
    /// このロガーが束縛されているカテゴリ
    fn category(&self) -> &CategoryName;

    /// `level` のログを出すか（高速なフィルタ用）
    fn is_enabled(&self, level: Level) -> bool;

    fn log(&self, level: Level, message: &str);
}
