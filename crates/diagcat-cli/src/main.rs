use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use diagcat_core::categories::{self, ChangeTracking, Query, database, model};
use diagcat_core::impls::TracingLoggerFactory;
use diagcat_core::{
    BuildError, CategoryError, CategoryName, ConfigError, DiagnosticsBuilder, DiagnosticsError,
    DiagnosticsLogger, Level, LoggerCategory, LoggingConfig,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// 型付きカテゴリのロガーを配線して動かすデモ
#[derive(Debug, Parser)]
#[command(name = "diagcat", version)]
struct Args {
    /// ログ設定（JSON）
    #[arg(long)]
    config: Option<PathBuf>,

    /// 全カテゴリ共通のしきい値を上書き
    #[arg(long)]
    min_level: Option<Level>,

    /// センシティブデータのログ出力を有効にする
    #[arg(long)]
    sensitive: bool,

    /// 標準カテゴリの名前を JSON で表示して終了
    #[arg(long)]
    list_categories: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Diagnostics(#[from] DiagnosticsError),

    #[error(transparent)]
    Category(#[from] CategoryError),

    #[error("failed to render category list: {0}")]
    Render(#[from] serde_json::Error),
}

/// コンストラクタで ChangeTracking のロガーを受け取るサービス
struct ChangeTrackerService {
    logger: Arc<DiagnosticsLogger<ChangeTracking>>,
}

impl ChangeTrackerService {
    fn new(logger: Arc<DiagnosticsLogger<ChangeTracking>>) -> Self {
        logger.log(Level::Information, "change tracker service constructed");
        Self { logger }
    }

    fn track(&self, entity: &str, key: &str) {
        // キーの値はセンシティブデータ扱い
        let message = if self.logger.should_log_sensitive_data() {
            format!("tracking {entity} with key {key}")
        } else {
            format!("tracking {entity}")
        };
        self.logger.log(Level::Information, &message);
    }
}

fn builtin_categories() -> Result<Vec<CategoryName>, CategoryError> {
    Ok(vec![
        categories::Database::name()?,
        database::Command::name()?,
        database::Connection::name()?,
        database::Transaction::name()?,
        ChangeTracking::name()?,
        categories::Infrastructure::name()?,
        categories::Migrations::name()?,
        categories::Model::name()?,
        model::Validation::name()?,
        Query::name()?,
        categories::Scaffolding::name()?,
        categories::Update::name()?,
    ])
}

fn run(args: Args) -> Result<(), CliError> {
    if args.list_categories {
        println!("{}", serde_json::to_string_pretty(&builtin_categories()?)?);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => LoggingConfig::from_path(path)?,
        None => LoggingConfig::default(),
    };
    if let Some(level) = args.min_level {
        config = config.with_min_level(level);
    }
    if args.sensitive {
        config = config.with_sensitive_data_logging(true);
    }

    let diagnostics = DiagnosticsBuilder::new(TracingLoggerFactory::new(config.clone()))
        .options(config.options())
        .expect_category::<ChangeTracking>()
        .expect_category::<Query>()
        .build()?;

    let service = ChangeTrackerService::new(diagnostics.logger::<ChangeTracking>()?);
    service.track("User", "42");
    service.track("Order", "1001");

    diagnostics
        .logger::<Query>()?
        .log(Level::Debug, "compiled query for User");

    let resolved: Vec<String> = diagnostics
        .resolved_categories()
        .iter()
        .map(ToString::to_string)
        .collect();
    info!(categories = ?resolved, "done");
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("DIAGCAT_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
