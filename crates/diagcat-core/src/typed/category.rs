//! LoggerCategory trait - カテゴリ tag の定義
//!
//! # 学習ポイント
//! - Associated Constants (`const PATH`)
//! - データを持たないマーカー型をジェネリクスのキーとして使う
//! - `TypeId` をキーにしたプロセス全体のメモ化

use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock};

use crate::domain::{CategoryError, CategoryName, derive};

/// LoggerCategory はカテゴリ tag とカテゴリ名を対応付ける
///
/// # 使用例
/// ```
/// use diagcat_core::typed::LoggerCategory;
///
/// #[derive(Default)]
/// struct ChangeTracking;
///
/// impl LoggerCategory for ChangeTracking {
///     const PATH: &'static str = "App.Diagnostics.DbLoggerCategory.ChangeTracking";
/// }
///
/// assert_eq!(
///     ChangeTracking::name().unwrap().as_str(),
///     "App.Diagnostics.ChangeTracking"
/// );
/// ```
///
/// # Trait Bounds
/// - `Default`: 引数なしで tag を作れるようにするため
/// - `Send + Sync + 'static`: `DiagnosticsLogger<Self>` をスレッド間で共有するため
pub trait LoggerCategory: Default + Send + Sync + 'static {
    /// 宣言パス
    ///
    /// # 命名規約
    /// - `{root}.DbLoggerCategory.{category}` の形で書くとラッパーが取り除かれる
    /// - ネストは `.`、`::`、`+` のどれで区切ってもよい
    const PATH: &'static str;

    /// この tag のカテゴリ名（メモ化済み）
    fn name() -> Result<CategoryName, CategoryError> {
        name_of::<Self>()
    }

    /// tag のインスタンスからカテゴリ名を得る
    fn category_name(&self) -> Result<CategoryName, CategoryError> {
        name_of::<Self>()
    }
}

static NAMES: LazyLock<RwLock<HashMap<TypeId, CategoryName>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// tag `C` のカテゴリ名
///
/// 初回だけ導出し、以後はキャッシュを返します。
/// 導出は純粋関数なので、初回が競合しても同じ値が入るだけです。
pub fn name_of<C: LoggerCategory>() -> Result<CategoryName, CategoryError> {
    let key = TypeId::of::<C>();
    if let Some(name) = NAMES
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&key)
    {
        return Ok(name.clone());
    }

    let name = derive(C::PATH)?;
    let mut names = NAMES.write().unwrap_or_else(PoisonError::into_inner);
    Ok(names.entry(key).or_insert(name).clone())
}
