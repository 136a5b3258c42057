//! InMemoryLoggerFactory - 開発用のロガー
//!
//! # 学習ポイント
//! - Arc<Mutex<Vec<_>>> で複数のロガーが 1 つのバッファを共有する
//! - Clock port で時刻を差し替え、記録を決定的にする
//! - 拒否するカテゴリを指定して、ログ基盤の設定エラーを再現する

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::LoggingConfig;
use crate::domain::{CategoryName, Level, LogRecord};
use crate::ports::{Clock, Logger, LoggerFactory, LoggerFactoryError, SystemClock};

/// InMemoryLoggerFactory は全てのログを共有バッファに記録する
///
/// clone したものは同じバッファを共有します。
///
/// # 使用例
/// ```ignore
/// let factory = InMemoryLoggerFactory::new()
///     .with_config(LoggingConfig::default().with_min_level(Level::Debug))
///     .reject("Diagcat.Migrations");
///
/// let logger = DiagnosticsLogger::<Query>::new(&factory, DiagnosticsContext::default())?;
/// logger.log(Level::Debug, "compiled");
/// assert_eq!(factory.records().len(), 1);
/// ```
#[derive(Clone)]
pub struct InMemoryLoggerFactory {
    clock: Arc<dyn Clock>,
    config: Arc<LoggingConfig>,
    /// このプレフィックス（セグメント単位）のカテゴリにはロガーを作らない
    rejected: Vec<String>,
    records: Arc<Mutex<Vec<LogRecord>>>,
    created: Arc<Mutex<Vec<CategoryName>>>,
}

impl InMemoryLoggerFactory {
    pub fn new() -> Self {
        Self {
            clock: Arc::new(SystemClock),
            config: Arc::new(LoggingConfig::default()),
            rejected: Vec::new(),
            records: Arc::new(Mutex::new(Vec::new())),
            created: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn with_config(mut self, config: LoggingConfig) -> Self {
        self.config = Arc::new(config);
        self
    }

    /// `prefix` 配下のカテゴリを拒否する
    pub fn reject(mut self, prefix: impl Into<String>) -> Self {
        self.rejected.push(prefix.into());
        self
    }

    /// 記録されたログ（記録順）
    pub fn records(&self) -> Vec<LogRecord> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// `category` のログだけ
    pub fn records_for(&self, category: &str) -> Vec<LogRecord> {
        self.records()
            .into_iter()
            .filter(|r| r.category.as_str() == category)
            .collect()
    }

    /// これまでにロガーを作ったカテゴリ（作った順）
    pub fn created_categories(&self) -> Vec<CategoryName> {
        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for InMemoryLoggerFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerFactory for InMemoryLoggerFactory {
    fn create_logger(&self, category: &CategoryName) -> Result<Arc<dyn Logger>, LoggerFactoryError> {
        if self
            .rejected
            .iter()
            .any(|prefix| category.starts_with_segments(prefix))
        {
            return Err(LoggerFactoryError::Rejected(category.clone()));
        }

        self.created
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(category.clone());

        Ok(Arc::new(InMemoryLogger {
            category: category.clone(),
            threshold: self.config.level_for(category),
            clock: Arc::clone(&self.clock),
            records: Arc::clone(&self.records),
        }))
    }
}

/// InMemoryLogger は 1 カテゴリ分のロガー
///
/// しきい値は作成時に解決して固定します。
pub struct InMemoryLogger {
    category: CategoryName,
    threshold: Level,
    clock: Arc<dyn Clock>,
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl Logger for InMemoryLogger {
    fn category(&self) -> &CategoryName {
        &self.category
    }

    fn is_enabled(&self, level: Level) -> bool {
        self.threshold.enables(level)
    }

    fn log(&self, level: Level, message: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let record = LogRecord {
            timestamp: self.clock.now(),
            category: self.category.clone(),
            level,
            message: message.to_string(),
        };
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record);
    }
}
