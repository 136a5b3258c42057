//! diagcat-core
//!
//! 型をキーにした診断ロガーのカテゴリ管理。
//!
//! # モジュール構成
//! - **domain**: ドメインモデル（category_name, level, options, record, errors）
//! - **ports**: 抽象化レイヤー（Logger, LoggerFactory, DiagnosticListener, Interceptor, Clock）
//! - **typed**: 型付きカテゴリ API（LoggerCategory trait, DiagnosticsLogger<C>）
//! - **app**: 組み立て（DiagnosticsBuilder, Diagnostics）
//! - **impls**: 実装（InMemoryLoggerFactory, TracingLoggerFactory）
//! - **config**: ログ設定（LoggingConfig）
//! - **categories**: 標準カテゴリ

pub mod app;
pub mod categories;
pub mod config;
pub mod domain;
pub mod impls;
pub mod ports;
pub mod typed;

pub use self::app::{BuildError, Diagnostics, DiagnosticsBuilder};
pub use self::config::LoggingConfig;
pub use self::domain::{CategoryError, CategoryName, ConfigError, Level, LoggingOptions};
pub use self::typed::{DiagnosticsContext, DiagnosticsError, DiagnosticsLogger, LoggerCategory, name_of};
