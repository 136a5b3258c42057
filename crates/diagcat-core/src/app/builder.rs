//! DiagnosticsBuilder - 診断ロガーの構築とワイヤリング
//!
//! # 学習ポイント
//! - Builder パターンの実装
//! - 起動時検証（Fail-fast 設計）
//! - `TypeId` をキーにしたシングルトンの払い出し

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError, TryLockError};

use crate::domain::{CategoryError, CategoryName, LoggingOptions};
use crate::ports::{
    DiagnosticListener, Interceptor, Interceptors, LoggerFactory, NoopDiagnosticListener,
};
use crate::typed::{DiagnosticsContext, DiagnosticsError, DiagnosticsLogger, LoggerCategory};

/// DiagnosticsBuilder は Diagnostics を構築
///
/// # 使用例
/// ```ignore
/// let diagnostics = DiagnosticsBuilder::new(TracingLoggerFactory::new(config))
///     .options(config.options())
///     .expect_category::<ChangeTracking>()
///     .build()?;
///
/// let logger = diagnostics.logger::<ChangeTracking>()?;
/// ```
///
/// # Fail-fast 設計
/// - expect_category() で起動時に必要なカテゴリを登録
/// - build() 時に全てのカテゴリの DiagnosticsLogger を実際に作る
/// - 作ったロガーはそのままシングルトンになる（ロガー基盤への登録は 1 カテゴリ 1 回）
/// - 失敗があればまとめて BuildError を返す
pub struct DiagnosticsBuilder {
    factory: Arc<dyn LoggerFactory>,
    options: Arc<LoggingOptions>,
    diagnostic_listener: Option<Arc<dyn DiagnosticListener>>,
    interceptors: Interceptors,
    expected: Vec<ExpectedCategory>,
}

/// カテゴリ `C` ごとに単相化された起動時の解決処理
type ExpectedCategory = Box<dyn Fn(&Diagnostics) -> Result<(), DiagnosticsError>>;

/// BuildError は Diagnostics 構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Unresolvable logger categories: {0:?}. These categories were expected but no logger could be created.")]
    UnresolvableCategories(Vec<String>),
}

impl DiagnosticsBuilder {
    pub fn new(factory: impl LoggerFactory + 'static) -> Self {
        Self::from_shared(Arc::new(factory))
    }

    /// 既に共有されている LoggerFactory から作成
    pub fn from_shared(factory: Arc<dyn LoggerFactory>) -> Self {
        Self {
            factory,
            options: Arc::new(LoggingOptions::default()),
            diagnostic_listener: None,
            interceptors: Interceptors::new(),
            expected: Vec::new(),
        }
    }

    pub fn options(mut self, options: LoggingOptions) -> Self {
        self.options = Arc::new(options);
        self
    }

    /// 他のコンテキストと LoggingOptions（警告済みラッチ）を共有する
    pub fn shared_options(mut self, options: Arc<LoggingOptions>) -> Self {
        self.options = options;
        self
    }

    pub fn diagnostic_listener(mut self, listener: impl DiagnosticListener + 'static) -> Self {
        self.diagnostic_listener = Some(Arc::new(listener));
        self
    }

    /// Interceptor をチェーンの末尾に追加
    pub fn interceptor(mut self, interceptor: impl Interceptor + 'static) -> Self {
        self.interceptors.push(Arc::new(interceptor));
        self
    }

    /// 起動時にロガーを作れることを保証したいカテゴリを追加
    pub fn expect_category<C: LoggerCategory>(mut self) -> Self {
        self.expected
            .push(Box::new(|diagnostics: &Diagnostics| {
                diagnostics.logger::<C>().map(|_| ())
            }));
        self
    }

    /// DiagnosticsBuilder を構築して Diagnostics を生成
    ///
    /// # 検証
    /// - expect_category() で登録したカテゴリの名前を導出できるか
    /// - LoggerFactory がそのカテゴリのロガーを作れるか
    pub fn build(self) -> Result<Diagnostics, BuildError> {
        let interceptors = (!self.interceptors.is_empty()).then(|| Arc::new(self.interceptors));
        let context = DiagnosticsContext {
            options: self.options,
            diagnostic_listener: self
                .diagnostic_listener
                .unwrap_or_else(|| Arc::new(NoopDiagnosticListener)),
            interceptors,
        };
        let diagnostics = Diagnostics {
            factory: self.factory,
            context,
            slots: Mutex::new(HashMap::new()),
        };

        let failures: Vec<String> = self
            .expected
            .iter()
            .filter_map(|resolve| resolve(&diagnostics).err())
            .map(|e| match e {
                DiagnosticsError::InvalidCategory(CategoryError::Unnameable { path, reason }) => {
                    format!("{path}: {reason}")
                }
                DiagnosticsError::Configuration { category, source } => {
                    format!("{category}: {source}")
                }
            })
            .collect();
        if !failures.is_empty() {
            return Err(BuildError::UnresolvableCategories(failures));
        }
        Ok(diagnostics)
    }
}

struct Binding {
    category: CategoryName,
    logger: Arc<dyn Any + Send + Sync>,
}

/// カテゴリ 1 つ分のシングルトンの置き場
type Slot = Mutex<Option<Binding>>;

/// Diagnostics はカテゴリごとの DiagnosticsLogger を管理
///
/// `DiagnosticsLogger<C>` はカテゴリ `C` ごとに 1 つだけ作られ、
/// 以後は同じ `Arc` が返ります（シングルトン）。
///
/// # ロック
/// - 全体のテーブルはスロットの取得・作成の間だけロックする
/// - ロガーの作成中はそのカテゴリのスロットだけをロックする
///
/// そのため LoggerFactory の中から別カテゴリの `logger()` を呼んでもよいが、
/// 作成中のカテゴリ自身を要求するとデッドロックする。
pub struct Diagnostics {
    factory: Arc<dyn LoggerFactory>,
    context: DiagnosticsContext,
    slots: Mutex<HashMap<TypeId, Arc<Slot>>>,
}

impl Diagnostics {
    /// カテゴリ `C` の DiagnosticsLogger
    ///
    /// 初回の呼び出しで作成します。作成に失敗した場合は何もキャッシュしないので、
    /// 次の呼び出しで再び作成を試みます。
    pub fn logger<C: LoggerCategory>(&self) -> Result<Arc<DiagnosticsLogger<C>>, DiagnosticsError> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(slots.entry(TypeId::of::<C>()).or_default())
        };

        let mut binding = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(existing) = binding.as_ref() {
            if let Ok(logger) = Arc::clone(&existing.logger).downcast::<DiagnosticsLogger<C>>() {
                return Ok(logger);
            }
        }

        let logger = Arc::new(DiagnosticsLogger::<C>::new(
            self.factory.as_ref(),
            self.context.clone(),
        )?);
        *binding = Some(Binding {
            category: logger.category_name().clone(),
            logger: logger.clone(),
        });
        Ok(logger)
    }

    /// これまでに払い出したカテゴリ（名前順）
    ///
    /// 作成中のカテゴリは含まない。
    pub fn resolved_categories(&self) -> Vec<CategoryName> {
        let slots: Vec<Arc<Slot>> = self
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .cloned()
            .collect();

        let mut categories: Vec<CategoryName> = slots
            .iter()
            .filter_map(|slot| match slot.try_lock() {
                Ok(binding) => binding.as_ref().map(|b| b.category.clone()),
                Err(TryLockError::Poisoned(e)) => {
                    e.into_inner().as_ref().map(|b| b.category.clone())
                }
                Err(TryLockError::WouldBlock) => None,
            })
            .collect();
        categories.sort();
        categories
    }

    pub fn options(&self) -> &Arc<LoggingOptions> {
        &self.context.options
    }

    pub fn interceptors(&self) -> Option<&Interceptors> {
        self.context.interceptors.as_deref()
    }
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("resolved_categories", &self.resolved_categories())
            .field("interceptors", &self.context.interceptors)
            .finish_non_exhaustive()
    }
}
