//! Interceptor port - イベント割り込みのチェーン
//!
//! 個々の Interceptor が何をするかはこのクレートの関心外です。
//! ここではチェーンを組み立てて持ち回すことだけを扱います。

use std::fmt;
use std::sync::Arc;

pub trait Interceptor: Send + Sync {
    /// ログやデバッグ表示に使う名前
    fn name(&self) -> &str;
}

/// Interceptors は登録順に並んだ Interceptor のチェーン
#[derive(Clone, Default)]
pub struct Interceptors {
    chain: Vec<Arc<dyn Interceptor>>,
}

impl Interceptors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, interceptor: Arc<dyn Interceptor>) {
        self.chain.push(interceptor);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Interceptor>> {
        self.chain.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl fmt::Debug for Interceptors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Named(&'static str);

    impl Interceptor for Named {
        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn keeps_registration_order() {
        let mut interceptors = Interceptors::new();
        interceptors.push(Arc::new(Named("audit")));
        interceptors.push(Arc::new(Named("timing")));

        assert_eq!(interceptors.len(), 2);
        assert_eq!(interceptors.names(), vec!["audit", "timing"]);
        assert_eq!(format!("{interceptors:?}"), r#"["audit", "timing"]"#);
    }
}
