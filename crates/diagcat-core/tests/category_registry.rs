use std::sync::Arc;
use std::thread;

use diagcat_core::categories::{self, ChangeTracking, Query};
use diagcat_core::domain::derive;
use diagcat_core::impls::InMemoryLoggerFactory;
use diagcat_core::typed::diagnostics_logger::SENSITIVE_DATA_WARNING;
use diagcat_core::{
    DiagnosticsBuilder, DiagnosticsContext, DiagnosticsError, DiagnosticsLogger, Level,
    LoggerCategory, LoggingConfig, LoggingOptions, name_of,
};

mod app_diagnostics {
    use diagcat_core::LoggerCategory;

    #[derive(Default)]
    pub struct ChangeTracking;

    impl LoggerCategory for ChangeTracking {
        const PATH: &'static str = "App.Diagnostics.DbLoggerCategory.ChangeTracking";
    }

    #[derive(Default)]
    pub struct Database;

    impl LoggerCategory for Database {
        const PATH: &'static str = "App.Diagnostics.Database";
    }
}

/// コンストラクタでカテゴリ付きロガーを受け取るサービス
struct ChangeTrackerService {
    logger: Arc<DiagnosticsLogger<ChangeTracking>>,
}

impl ChangeTrackerService {
    fn new(logger: Arc<DiagnosticsLogger<ChangeTracking>>) -> Self {
        logger.log(Level::Information, "change tracker ready");
        Self { logger }
    }

    fn detect_changes(&self, count: usize) {
        self.logger
            .log(Level::Debug, &format!("detected {count} changes"));
    }
}

#[test]
fn nested_category_name_drops_wrapper() {
    let name = name_of::<app_diagnostics::ChangeTracking>().unwrap();
    assert_eq!(name.as_str(), "App.Diagnostics.ChangeTracking");
}

#[test]
fn root_level_category_name_is_unchanged() {
    let name = name_of::<app_diagnostics::Database>().unwrap();
    assert_eq!(name.as_str(), "App.Diagnostics.Database");
}

#[test]
fn nested_and_flat_declarations_agree() {
    assert_eq!(
        derive("Root.DbLoggerCategory.ChangeTracking").unwrap(),
        derive("Root.ChangeTracking").unwrap()
    );
}

#[test]
fn name_is_usable_without_a_registry() {
    assert_eq!(Query::name().unwrap().as_str(), "Diagcat.Query");
    assert!(Query::name().unwrap().starts_with_segments(categories::ROOT));
}

#[test]
fn service_receives_category_logger_from_composition_root() {
    let factory = InMemoryLoggerFactory::new()
        .with_config(LoggingConfig::default().with_category("Diagcat.ChangeTracking", Level::Debug));
    let diagnostics = DiagnosticsBuilder::new(factory.clone())
        .expect_category::<ChangeTracking>()
        .build()
        .unwrap();

    let service = ChangeTrackerService::new(diagnostics.logger::<ChangeTracking>().unwrap());
    service.detect_changes(3);

    let messages: Vec<String> = factory
        .records_for("Diagcat.ChangeTracking")
        .into_iter()
        .map(|r| r.message)
        .collect();
    assert_eq!(messages, vec!["change tracker ready", "detected 3 changes"]);
}

#[test]
fn handle_is_stable_for_the_registry_lifetime() {
    let factory = InMemoryLoggerFactory::new();
    let logger =
        DiagnosticsLogger::<app_diagnostics::Database>::new(&factory, DiagnosticsContext::default())
            .unwrap();

    let handle = Arc::clone(logger.logger());
    assert!((0..100).all(|_| Arc::ptr_eq(&handle, logger.logger())));
}

#[test]
fn missing_provider_fails_construction() {
    let factory = InMemoryLoggerFactory::new().reject("App");
    let result = DiagnosticsLogger::<app_diagnostics::ChangeTracking>::new(
        &factory,
        DiagnosticsContext::default(),
    );

    assert!(matches!(result, Err(DiagnosticsError::Configuration { .. })));
}

#[test]
fn warn_once_across_registries_and_threads() {
    let factory = InMemoryLoggerFactory::new();
    let context = DiagnosticsContext {
        options: Arc::new(LoggingOptions::new(true)),
        ..DiagnosticsContext::default()
    };

    let tracking =
        DiagnosticsLogger::<app_diagnostics::ChangeTracking>::new(&factory, context.clone())
            .unwrap();
    let database =
        DiagnosticsLogger::<app_diagnostics::Database>::new(&factory, context.clone()).unwrap();

    thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                for _ in 0..50 {
                    assert!(tracking.should_log_sensitive_data());
                    assert!(database.should_log_sensitive_data());
                }
            });
        }
    });

    let warnings: Vec<_> = factory
        .records()
        .into_iter()
        .filter(|r| r.message == SENSITIVE_DATA_WARNING)
        .collect();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].level, Level::Warning);
    assert!(context.options.is_sensitive_data_logging_warned());
}

#[test]
fn config_file_drives_factory_and_options() {
    let config = LoggingConfig::from_json_str(
        r#"{
            "min_level": "error",
            "categories": { "Diagcat.Query": "debug" },
            "sensitive_data_logging": true
        }"#,
    )
    .unwrap();
    let factory = InMemoryLoggerFactory::new().with_config(config.clone());
    let diagnostics = DiagnosticsBuilder::new(factory.clone())
        .options(config.options())
        .build()
        .unwrap();

    let query = diagnostics.logger::<Query>().unwrap();
    let tracking = diagnostics.logger::<ChangeTracking>().unwrap();

    query.log(Level::Debug, "query compiled");
    tracking.log(Level::Information, "suppressed");
    assert!(tracking.should_log_sensitive_data());

    // 警告は ChangeTracking のしきい値（error）で落ちるが、ラッチは立つ
    assert_eq!(factory.records().len(), 1);
    assert!(diagnostics.options().is_sensitive_data_logging_warned());

    assert!(query.should_log_sensitive_data());
    assert_eq!(factory.records().len(), 1);
}
