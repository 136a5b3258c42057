//! LoggingOptions - 複数のロガーで共有するオプション
//!
//! # 学習ポイント
//! - `AtomicBool::compare_exchange` による一方向ラッチ
//! - `&self` のまま状態遷移させる（`Arc` で共有される前提）

use std::sync::atomic::{AtomicBool, Ordering};

/// LoggingOptions はセンシティブデータのログ出力設定を持つ
///
/// `sensitive_data_logging_enabled` は構築時に決まり、以後変わりません。
/// `warned` は false → true の一度きりの遷移だけを許します。
#[derive(Debug, Default)]
pub struct LoggingOptions {
    sensitive_data_logging_enabled: bool,
    sensitive_data_logging_warned: AtomicBool,
}

impl LoggingOptions {
    pub fn new(sensitive_data_logging_enabled: bool) -> Self {
        Self {
            sensitive_data_logging_enabled,
            sensitive_data_logging_warned: AtomicBool::new(false),
        }
    }

    pub fn is_sensitive_data_logging_enabled(&self) -> bool {
        self.sensitive_data_logging_enabled
    }

    pub fn is_sensitive_data_logging_warned(&self) -> bool {
        self.sensitive_data_logging_warned.load(Ordering::Acquire)
    }

    /// 警告済みフラグを立てる
    ///
    /// このインスタンスで最初に呼んだ 1 回だけ `true` を返します。
    /// 複数スレッドから同時に呼んでも `true` になるのは 1 回です。
    pub fn try_mark_warned(&self) -> bool {
        self.sensitive_data_logging_warned
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}
