//! Ports - 抽象化レイヤー
//!
//! このモジュールは Hexagonal Architecture の「ポート」を定義します。
//! ロガーの生成元（ログ基盤）や診断イベントの受け手は外部のものなので、
//! trait として切り出し、実装は impls か利用側が用意します。

pub mod clock;
pub mod diagnostic_listener;
pub mod interceptor;
pub mod logger;
pub mod logger_factory;

// 主要な trait を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::diagnostic_listener::{DiagnosticListener, NoopDiagnosticListener};
pub use self::interceptor::{Interceptor, Interceptors};
pub use self::logger::Logger;
pub use self::logger_factory::{LoggerFactory, LoggerFactoryError};
