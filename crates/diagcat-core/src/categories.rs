//! Built-in logger categories
//!
//! ORM の診断ログで使う標準カテゴリです。全て `Diagcat.DbLoggerCategory` の下に
//! 宣言しているので、名前は `Diagcat.{category}` になります。
//!
//! | tag | カテゴリ名 |
//! |-----|-----------|
//! | [`Database`] | `Diagcat.Database` |
//! | [`database::Command`] | `Diagcat.Database.Command` |
//! | [`ChangeTracking`] | `Diagcat.ChangeTracking` |
//! | [`model::Validation`] | `Diagcat.Model.Validation` |

use crate::typed::LoggerCategory;

/// 全ての標準カテゴリの共通プレフィックス
pub const ROOT: &str = "Diagcat";

/// データベースとのやり取り全般
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Database;

impl LoggerCategory for Database {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Database";
}

pub mod database {
    use crate::typed::LoggerCategory;

    /// 実行したコマンド（SQL）
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Command;

    impl LoggerCategory for Command {
        const PATH: &'static str = "Diagcat.DbLoggerCategory.Database.Command";
    }

    /// 接続の開閉
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Connection;

    impl LoggerCategory for Connection {
        const PATH: &'static str = "Diagcat.DbLoggerCategory.Database.Connection";
    }

    /// トランザクション
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Transaction;

    impl LoggerCategory for Transaction {
        const PATH: &'static str = "Diagcat.DbLoggerCategory.Database.Transaction";
    }
}

/// 変更の検出と追跡
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChangeTracking;

impl LoggerCategory for ChangeTracking {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.ChangeTracking";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Infrastructure;

impl LoggerCategory for Infrastructure {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Infrastructure";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Migrations;

impl LoggerCategory for Migrations {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Migrations";
}

/// モデルの構築
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Model;

impl LoggerCategory for Model {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Model";
}

pub mod model {
    use crate::typed::LoggerCategory;

    /// モデルの検証
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Validation;

    impl LoggerCategory for Validation {
        const PATH: &'static str = "Diagcat.DbLoggerCategory.Model.Validation";
    }
}

/// クエリのコンパイルと実行
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Query;

impl LoggerCategory for Query {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Query";
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Scaffolding;

impl LoggerCategory for Scaffolding {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Scaffolding";
}

/// 変更の保存
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Update;

impl LoggerCategory for Update {
    const PATH: &'static str = "Diagcat.DbLoggerCategory.Update";
}
