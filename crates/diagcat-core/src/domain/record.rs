//! LogRecord - 記録されたログ 1 件

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::category_name::CategoryName;
use super::level::Level;

/// LogRecord はメモリ上のシンクが保持するログ
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogRecord {
    pub timestamp: DateTime<Utc>,
    pub category: CategoryName,
    pub level: Level,
    pub message: String,
}
