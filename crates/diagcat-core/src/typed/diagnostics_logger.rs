//! DiagnosticsLogger - カテゴリ tag に束縛されたロガー
//!
//! # 学習ポイント
//! - PhantomData によるマーカー型の保持（実行時のデータはない）
//! - 構築時に一度だけ束縛し、以後は不変
//! - 失敗したら値を返さない（中途半端に構築された状態を作らない）
//!
//! # 状態遷移
//! Uninitialized → Bound（`new()` の中だけ。以後の遷移はない）

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use super::category::LoggerCategory;
use crate::domain::{CategoryError, CategoryName, Level, LoggingOptions};
use crate::ports::{
    DiagnosticListener, Interceptors, Logger, LoggerFactory, LoggerFactoryError,
    NoopDiagnosticListener,
};

/// センシティブデータのログ出力が有効なときに一度だけ出す警告
pub const SENSITIVE_DATA_WARNING: &str = "Sensitive data logging is enabled. \
    Log entries and exception messages may include sensitive application data; \
    this mode should only be enabled during development.";

/// DiagnosticsContext は DiagnosticsLogger に渡す共有の協調オブジェクト
///
/// どれも DiagnosticsLogger 自身は解釈せず、保持してアクセサで公開するだけです。
/// `options` の警告済みラッチだけは `should_log_sensitive_data()` が触ります。
#[derive(Clone)]
pub struct DiagnosticsContext {
    pub options: Arc<LoggingOptions>,
    pub diagnostic_listener: Arc<dyn DiagnosticListener>,
    pub interceptors: Option<Arc<Interceptors>>,
}

impl Default for DiagnosticsContext {
    fn default() -> Self {
        Self {
            options: Arc::new(LoggingOptions::default()),
            diagnostic_listener: Arc::new(NoopDiagnosticListener),
            interceptors: None,
        }
    }
}

/// DiagnosticsError は DiagnosticsLogger の構築エラー
#[derive(Debug, thiserror::Error)]
pub enum DiagnosticsError {
    /// tag の宣言が壊れている（プログラミングエラー）
    #[error(transparent)]
    InvalidCategory(#[from] CategoryError),

    /// ログ基盤がこのカテゴリのロガーを作れない（設定エラー）
    #[error("cannot create a logger for category '{category}'")]
    Configuration {
        category: CategoryName,
        #[source]
        source: LoggerFactoryError,
    },
}

/// DiagnosticsLogger はカテゴリ `C` に束縛されたロガー
///
/// # 使用例
/// ```ignore
/// let logger = DiagnosticsLogger::<ChangeTracking>::new(&factory, DiagnosticsContext::default())?;
/// logger.log(Level::Information, "tracking started");
/// ```
///
/// # ジェネリクスによる型安全性
/// - `DiagnosticsLogger<ChangeTracking>` と `DiagnosticsLogger<Query>` は別の型
/// - 依存先はコンストラクタの型でカテゴリを指定でき、文字列を書かずに済む
pub struct DiagnosticsLogger<C: LoggerCategory> {
    category: CategoryName,
    logger: Arc<dyn Logger>,
    context: DiagnosticsContext,
    _category: PhantomData<fn() -> C>,
}

impl<C: LoggerCategory> DiagnosticsLogger<C> {
    /// tag `C` のロガーを作って束縛する
    ///
    /// tag を 1 つ作り、その名前で `factory` にロガーを要求します。
    /// ロガーの生成はこの 1 回だけです。
    pub fn new(
        factory: &dyn LoggerFactory,
        context: DiagnosticsContext,
    ) -> Result<Self, DiagnosticsError> {
        let tag = C::default();
        let category = tag.category_name()?;
        let logger = factory
            .create_logger(&category)
            .map_err(|source| DiagnosticsError::Configuration {
                category: category.clone(),
                source,
            })?;

        debug!(category = %category, "diagnostics logger bound");
        Ok(Self {
            category,
            logger,
            context,
            _category: PhantomData,
        })
    }

    pub fn category_name(&self) -> &CategoryName {
        &self.category
    }

    /// 束縛済みのロガー（このインスタンスでは常に同じもの）
    pub fn logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }

    pub fn options(&self) -> &LoggingOptions {
        &self.context.options
    }

    pub fn diagnostic_listener(&self) -> &Arc<dyn DiagnosticListener> {
        &self.context.diagnostic_listener
    }

    pub fn interceptors(&self) -> Option<&Interceptors> {
        self.context.interceptors.as_deref()
    }

    /// センシティブデータをログに含めてよいか
    ///
    /// 有効なときは、共有している LoggingOptions ごとに最初の 1 回だけ
    /// 警告済みラッチを立て、このロガーに警告を出します。
    /// 同じ options を共有するロガーが何個あっても、警告は 1 回です。
    pub fn should_log_sensitive_data(&self) -> bool {
        let options = self.options();
        let enabled = options.is_sensitive_data_logging_enabled();
        if enabled && options.try_mark_warned() {
            self.log(Level::Warning, SENSITIVE_DATA_WARNING);
        }
        enabled
    }

    /// レベルが有効ならロガーに渡す
    pub fn log(&self, level: Level, message: &str) {
        if self.logger.is_enabled(level) {
            self.logger.log(level, message);
        }
    }
}

impl<C: LoggerCategory> fmt::Debug for DiagnosticsLogger<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticsLogger")
            .field("category", &self.category)
            .field("interceptors", &self.context.interceptors)
            .finish_non_exhaustive()
    }
}
