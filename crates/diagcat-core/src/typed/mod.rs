//! Typed - 型付きカテゴリ API
//!
//! カテゴリ名の typo を型で排除し、ロガーとカテゴリの対応を静的に保証します。
//!
//! # 二層構造
//! - **表層（Typed）**: `LoggerCategory` trait, `DiagnosticsLogger<C>` - 型安全
//! - **内部（Dyn）**: `Arc<dyn Logger>` - ログ基盤ごとの実装を型消去して保持

pub mod category;
pub mod diagnostics_logger;

// 主要な trait/型 を再エクスポート
pub use self::category::{LoggerCategory, name_of};
pub use self::diagnostics_logger::{DiagnosticsContext, DiagnosticsError, DiagnosticsLogger};
