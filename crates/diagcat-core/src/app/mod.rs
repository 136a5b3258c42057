//! App - 組み立て層
//!
//! ports と typed を組み合わせ、アプリケーションの起動時にロガーを配線します。
//!
//! # 主要コンポーネント
//! - **DiagnosticsBuilder**: ロガー基盤と共有オブジェクトの配線、起動時検証
//! - **Diagnostics**: カテゴリごとに 1 つの DiagnosticsLogger を払い出す

pub mod builder;

// 主要な型を再エクスポート
pub use self::builder::{BuildError, Diagnostics, DiagnosticsBuilder};
