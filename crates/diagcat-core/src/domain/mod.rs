//! Domain model (category names, levels, options, records).
//!
//! ここにあるものは I/O を持たない純粋な値と、その値に対する操作だけです。

pub mod category_name;
pub mod errors;
pub mod level;
pub mod options;
pub mod record;

pub use self::category_name::{CategoryName, WRAPPER_SEGMENT, derive};
pub use self::errors::{CategoryError, ConfigError};
pub use self::level::Level;
pub use self::options::LoggingOptions;
pub use self::record::LogRecord;
