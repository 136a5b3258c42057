//! DiagnosticListener port - 構造化された診断イベントの受け手
//!
//! DiagnosticsLogger はこれを保持して公開するだけで、自分では呼びません。
//! イベントの組み立てと配送は外側のパイプラインの責務です。

use serde_json::Value;

pub trait DiagnosticListener: Send + Sync {
    /// `event_name` のイベントを受け取るか
    fn is_enabled(&self, event_name: &str) -> bool;

    fn write(&self, event_name: &str, payload: &Value);
}

/// NoopDiagnosticListener は何も受け取らない（デフォルト）
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnosticListener;

impl DiagnosticListener for NoopDiagnosticListener {
    fn is_enabled(&self, _event_name: &str) -> bool {
        false
    }

    fn write(&self, _event_name: &str, _payload: &Value) {}
}
