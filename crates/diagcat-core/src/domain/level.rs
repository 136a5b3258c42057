//! Level - ログレベル

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::ConfigError;

/// Level はログの重要度
///
/// 宣言順がそのまま大小関係になります（`Trace` が最小）。
/// `None` はしきい値としてだけ使い、カテゴリのログを全て止めます。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    #[default]
    #[serde(alias = "info")]
    Information,
    #[serde(alias = "warn")]
    Warning,
    Error,
    Critical,
    None,
}

impl Level {
    /// しきい値 `self` のもとで `level` のログを出すか
    pub fn enables(self, level: Level) -> bool {
        self != Level::None && level != Level::None && level >= self
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Information => "information",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
            Level::None => "none",
        };
        f.write_str(s)
    }
}

impl FromStr for Level {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" | "information" => Ok(Level::Information),
            "warn" | "warning" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" => Ok(Level::Critical),
            "none" => Ok(Level::None),
            _ => Err(ConfigError::InvalidLevel(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("trace", Level::Trace)]
    #[case("INFO", Level::Information)]
    #[case("warn", Level::Warning)]
    #[case("Warning", Level::Warning)]
    #[case("none", Level::None)]
    fn parses_level_names(#[case] input: &str, #[case] expected: Level) {
        assert_eq!(input.parse::<Level>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_level() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLevel(s) if s == "verbose"));
    }

    #[test]
    fn threshold_enables_equal_and_higher_levels() {
        assert!(Level::Information.enables(Level::Information));
        assert!(Level::Information.enables(Level::Critical));
        assert!(!Level::Information.enables(Level::Debug));
    }

    #[test]
    fn none_disables_everything() {
        assert!(!Level::None.enables(Level::Critical));
        assert!(!Level::Trace.enables(Level::None));
    }

    #[test]
    fn deserializes_aliases() {
        let levels: Vec<Level> = serde_json::from_str(r#"["info", "warn", "error"]"#).unwrap();
        assert_eq!(levels, vec![Level::Information, Level::Warning, Level::Error]);
    }
}
