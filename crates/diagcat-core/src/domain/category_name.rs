//! CategoryName - カテゴリ名の導出
//!
//! カテゴリ tag が宣言したパス（例: `App.Diagnostics.DbLoggerCategory.ChangeTracking`）から、
//! ログの出力先を選ぶためのフラットな名前（`App.Diagnostics.ChangeTracking`）を導出します。
//!
//! # 学習ポイント
//! - 純粋関数としての名前導出（I/O なし、同じ入力には同じ出力）
//! - `Arc<str>` で clone を安くする

use std::fmt;
use std::sync::Arc;

use serde::{Serialize, Serializer};

use super::errors::CategoryError;

/// カテゴリ宣言を束ねるためだけのラッパー型のセグメント
///
/// 名前にはこのセグメントを含めない。
pub const WRAPPER_SEGMENT: &str = ".DbLoggerCategory";

/// ネストした型の区切り（どちらも `.` に揃える）
const NESTED_SEPARATORS: [&str; 2] = ["::", "+"];

/// CategoryName はロガーのカテゴリ名
///
/// 一度導出したら変わりません。
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryName(Arc<str>);

impl CategoryName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `prefix` がドット区切りのセグメント単位で先頭に一致するか
    ///
    /// `App.Diagnostics` は `App.Diagnostics.Query` に一致するが、
    /// `App.DiagnosticsX` には一致しない。
    pub fn starts_with_segments(&self, prefix: &str) -> bool {
        match self.0.strip_prefix(prefix) {
            Some(rest) => !prefix.is_empty() && (rest.is_empty() || rest.starts_with('.')),
            None => false,
        }
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for CategoryName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// 宣言パスからカテゴリ名を導出する
///
/// 1. `::` と `+` を `.` に置き換える
/// 2. 最初に現れる [`WRAPPER_SEGMENT`] を取り除き、前後をそのままつなぐ
/// 3. 空セグメントや空白を含むパスは [`CategoryError::Unnameable`]
///
/// ラッパーが含まれないパスは（区切りを揃える以外は）そのまま返します。
///
/// ラッパーはセグメント単位でだけ一致させます。単純な部分文字列検索とは違い、
/// `App.DbLoggerCategoryExtras.Query` のような名前は意図的にそのまま残します。
///
/// ```
/// use diagcat_core::domain::derive;
///
/// let name = derive("App.Diagnostics.DbLoggerCategory.ChangeTracking").unwrap();
/// assert_eq!(name.as_str(), "App.Diagnostics.ChangeTracking");
/// ```
pub fn derive(path: &str) -> Result<CategoryName, CategoryError> {
    let mut name = path.to_string();
    for separator in NESTED_SEPARATORS {
        if name.contains(separator) {
            name = name.replace(separator, ".");
        }
    }

    if let Some(index) = find_wrapper(&name) {
        name.replace_range(index..index + WRAPPER_SEGMENT.len(), "");
    }

    validate(path, &name)?;
    Ok(CategoryName(Arc::from(name)))
}

// セグメント境界で終わる出現だけを対象にする（`.DbLoggerCategoryX` は対象外）
fn find_wrapper(name: &str) -> Option<usize> {
    name.match_indices(WRAPPER_SEGMENT)
        .map(|(index, _)| index)
        .find(|&index| {
            let rest = &name[index + WRAPPER_SEGMENT.len()..];
            rest.is_empty() || rest.starts_with('.')
        })
}

fn validate(path: &str, name: &str) -> Result<(), CategoryError> {
    let unnameable = |reason| CategoryError::Unnameable {
        path: path.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(unnameable("empty path"));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(unnameable("path contains whitespace"));
    }
    if name.split('.').any(str::is_empty) {
        return Err(unnameable("path contains an empty segment"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::nested(
        "App.Diagnostics.DbLoggerCategory.ChangeTracking",
        "App.Diagnostics.ChangeTracking"
    )]
    #[case::root_level("App.Diagnostics.Database", "App.Diagnostics.Database")]
    #[case::deeply_nested(
        "Root.DbLoggerCategory.Database.Command",
        "Root.Database.Command"
    )]
    #[case::plus_separator(
        "App.Diagnostics.DbLoggerCategory+Database+Transaction",
        "App.Diagnostics.Database.Transaction"
    )]
    #[case::rust_path_separator(
        "app::diagnostics::DbLoggerCategory::Query",
        "app.diagnostics.Query"
    )]
    #[case::wrapper_is_last_segment("App.DbLoggerCategory", "App")]
    #[case::only_first_wrapper_removed(
        "A.DbLoggerCategory.B.DbLoggerCategory.C",
        "A.B.DbLoggerCategory.C"
    )]
    fn derives_flat_name(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(derive(path).unwrap().as_str(), expected);
    }

    #[test]
    fn wrapper_must_match_whole_segment() {
        let name = derive("App.DbLoggerCategoryExtras.Query").unwrap();
        assert_eq!(name.as_str(), "App.DbLoggerCategoryExtras.Query");
    }

    #[test]
    fn leading_wrapper_without_dot_is_kept() {
        // ラッパーは「何かの中にネストしている」ときだけ取り除く
        let name = derive("DbLoggerCategory.Query").unwrap();
        assert_eq!(name.as_str(), "DbLoggerCategory.Query");
    }

    #[test]
    fn derive_is_deterministic() {
        let path = "App.Diagnostics.DbLoggerCategory.Update";
        assert_eq!(derive(path).unwrap(), derive(path).unwrap());
    }

    #[rstest]
    #[case::empty("")]
    #[case::only_wrapper(".DbLoggerCategory")]
    #[case::double_dot("App..Query")]
    #[case::trailing_dot("App.Query.")]
    #[case::whitespace("App.Change Tracking")]
    fn malformed_paths_are_unnameable(#[case] path: &str) {
        let err = derive(path).unwrap_err();
        assert!(matches!(err, CategoryError::Unnameable { path: p, .. } if p == path));
    }

    #[test]
    fn segment_prefix_matching() {
        let name = derive("App.Diagnostics.Query").unwrap();
        assert!(name.starts_with_segments("App"));
        assert!(name.starts_with_segments("App.Diagnostics"));
        assert!(name.starts_with_segments("App.Diagnostics.Query"));
        assert!(!name.starts_with_segments("App.Diag"));
        assert!(!name.starts_with_segments(""));
    }

    #[test]
    fn serializes_as_plain_string() {
        let name = derive("App.Query").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"App.Query\"");
    }
}
