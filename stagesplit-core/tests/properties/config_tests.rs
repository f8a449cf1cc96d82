//! Property-based tests for settings persistence

use proptest::prelude::*;
use stagesplit_core::config::{ConfigManager, SplitSettings};
use stagesplit_core::split::{DegeneratePolicy, SplitPositionOption, StagePosition, StageType};
use stagesplit_core::tracing::TracingLevel;
use tempfile::TempDir;

fn level_strategy() -> impl Strategy<Value = TracingLevel> {
    prop_oneof![
        Just(TracingLevel::Error),
        Just(TracingLevel::Warn),
        Just(TracingLevel::Info),
        Just(TracingLevel::Debug),
        Just(TracingLevel::Trace),
    ]
}

fn option_strategy() -> impl Strategy<Value = SplitPositionOption> {
    (
        any::<i32>(),
        any::<i32>(),
        prop_oneof![
            Just(StagePosition::Undefined),
            Just(StagePosition::TopOrLeft),
            Just(StagePosition::BottomOrRight),
        ],
        prop_oneof![
            Just(StageType::Undefined),
            Just(StageType::Main),
            Just(StageType::Side),
        ],
    )
        .prop_map(|(icon, text, position, stage_type)| {
            SplitPositionOption::new(icon, text, position, stage_type)
        })
}

fn settings_strategy() -> impl Strategy<Value = SplitSettings> {
    (
        level_strategy(),
        prop_oneof![Just(DegeneratePolicy::Propagate), Just(DegeneratePolicy::Reject)],
        proptest::collection::vec(option_strategy(), 0..6),
    )
        .prop_map(|(level, degenerate, position_options)| {
            let mut settings = SplitSettings::default();
            settings.logging.level = level;
            settings.bounds.degenerate = degenerate;
            settings.position_options = position_options;
            settings
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn settings_survive_save_and_load(settings in settings_strategy()) {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_config_dir(dir.path().to_path_buf());

        manager.save_settings(&settings).unwrap();
        let loaded = manager.load_settings().unwrap();
        prop_assert_eq!(loaded, settings);
    }
}
