//! TracingLoggerFactory - `tracing` へ出力するロガー
//!
//! `tracing` の target は `'static` でなければならないので、
//! カテゴリ名は `category` フィールドとして載せます。
//! サブスクライバ側では `category` で絞り込めます。

use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};

use crate::config::LoggingConfig;
use crate::domain::{CategoryName, Level};
use crate::ports::{Logger, LoggerFactory, LoggerFactoryError};

#[derive(Debug, Clone, Default)]
pub struct TracingLoggerFactory {
    config: Arc<LoggingConfig>,
}

impl TracingLoggerFactory {
    pub fn new(config: LoggingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn create_logger(&self, category: &CategoryName) -> Result<Arc<dyn Logger>, LoggerFactoryError> {
        Ok(Arc::new(TracingLogger {
            category: category.clone(),
            threshold: self.config.level_for(category),
        }))
    }
}

#[derive(Debug)]
pub struct TracingLogger {
    category: CategoryName,
    threshold: Level,
}

impl Logger for TracingLogger {
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
        let category = self.category.as_str();
        match level {
            Level::Trace => trace!(category, "{message}"),
            Level::Debug => debug!(category, "{message}"),
            Level::Information => info!(category, "{message}"),
            Level::Warning => warn!(category, "{message}"),
            Level::Error => error!(category, "{message}"),
            Level::Critical => error!(category, critical = true, "{message}"),
            Level::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::derive;
    use tracing_test::traced_test;

    fn logger(config: LoggingConfig, path: &str) -> Arc<dyn Logger> {
        TracingLoggerFactory::new(config)
            .create_logger(&derive(path).unwrap())
            .unwrap()
    }

    #[traced_test]
    #[test]
    fn emits_event_with_category_field() {
        let logger = logger(LoggingConfig::default(), "Diagcat.ChangeTracking");
        logger.log(Level::Warning, "detected 3 changes");

        assert!(logs_contain("detected 3 changes"));
        assert!(logs_contain("category=\"Diagcat.ChangeTracking\""));
    }

    #[traced_test]
    #[test]
    fn critical_is_marked() {
        let logger = logger(LoggingConfig::default(), "Diagcat.Update");
        logger.log(Level::Critical, "save aborted");

        assert!(logs_contain("save aborted"));
        assert!(logs_contain("critical=true"));
    }

    #[traced_test]
    #[test]
    fn disabled_category_emits_nothing() {
        let config = LoggingConfig::default().with_category("Diagcat.Query", Level::None);
        let logger = logger(config, "Diagcat.Query");

        assert!(!logger.is_enabled(Level::Critical));
        logger.log(Level::Critical, "never seen");
        assert!(!logs_contain("never seen"));
    }
}
