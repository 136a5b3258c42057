//! Impls - ports の実装
//!
//! # 含まれる実装
//! - **InMemoryLoggerFactory**: 開発用・テスト用。ログをメモリに記録する
//! - **TracingLoggerFactory**: `tracing` のイベントとして出力する
//!
//! どちらも LoggingConfig のカテゴリ別しきい値に従います。

pub mod inmem_logger;
pub mod tracing_logger;

// 主要な型を再エクスポート
pub use self::inmem_logger::{InMemoryLogger, InMemoryLoggerFactory};
pub use self::tracing_logger::{TracingLogger, TracingLoggerFactory};
