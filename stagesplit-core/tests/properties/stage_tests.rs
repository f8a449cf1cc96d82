//! Property-based tests for stage enumerations, menu entries and task slots

use proptest::prelude::*;
use stagesplit_core::split::{
    SplitError, SplitPositionOption, StagePosition, StageType, StagedSplitTaskPosition,
};

// ============================================================================
// Test Strategies
// ============================================================================

fn stage_position_strategy() -> impl Strategy<Value = StagePosition> {
    prop_oneof![
        Just(StagePosition::Undefined),
        Just(StagePosition::TopOrLeft),
        Just(StagePosition::BottomOrRight),
    ]
}

fn stage_type_strategy() -> impl Strategy<Value = StageType> {
    prop_oneof![
        Just(StageType::Undefined),
        Just(StageType::Main),
        Just(StageType::Side),
    ]
}

fn option_strategy() -> impl Strategy<Value = SplitPositionOption> {
    (
        any::<i32>(),
        any::<i32>(),
        stage_position_strategy(),
        stage_type_strategy(),
    )
        .prop_map(|(icon, text, position, stage_type)| {
            SplitPositionOption::new(icon, text, position, stage_type)
        })
}

/// Operations a split-session controller performs on a task slot
#[derive(Debug, Clone)]
enum SlotOperation {
    Assign(i32, StagePosition, StageType),
    SetTaskId(i32),
    Clear,
}

fn slot_operation_strategy() -> impl Strategy<Value = SlotOperation> {
    prop_oneof![
        (0i32..10_000, stage_position_strategy(), stage_type_strategy())
            .prop_map(|(id, p, t)| SlotOperation::Assign(id, p, t)),
        (-1i32..10_000).prop_map(SlotOperation::SetTaskId),
        Just(SlotOperation::Clear),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn stage_position_accepts_only_declared_tags(value in any::<i32>()) {
        let result = StagePosition::try_from(value);
        if (-1..=1).contains(&value) {
            prop_assert_eq!(result.unwrap().as_i32(), value);
        } else {
            prop_assert_eq!(result, Err(SplitError::InvalidStagePosition(value)));
        }
    }

    #[test]
    fn stage_type_accepts_only_declared_tags(value in any::<i32>()) {
        let result = StageType::try_from(value);
        if (-1..=1).contains(&value) {
            prop_assert_eq!(i32::from(result.unwrap()), value);
        } else {
            prop_assert_eq!(result, Err(SplitError::InvalidStageType(value)));
        }
    }

    #[test]
    fn opposite_is_an_involution(position in stage_position_strategy()) {
        prop_assert_eq!(position.opposite().opposite(), position);
        prop_assert_eq!(position.opposite().is_defined(), position.is_defined());
    }

    #[test]
    fn option_equality_is_field_equality(a in option_strategy(), b in option_strategy()) {
        let fields_equal = a.icon_res_id == b.icon_res_id
            && a.text_res_id == b.text_res_id
            && a.stage_position == b.stage_position
            && a.stage_type == b.stage_type;
        prop_assert_eq!(a == b, fields_equal);
    }

    #[test]
    fn option_json_roundtrip(option in option_strategy()) {
        let json = serde_json::to_string(&option).unwrap();
        let parsed: SplitPositionOption = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, option);
    }

    #[test]
    fn slot_tracks_last_operation(
        ops in proptest::collection::vec(slot_operation_strategy(), 0..20)
    ) {
        let mut slot = StagedSplitTaskPosition::default();
        for op in &ops {
            match *op {
                SlotOperation::Assign(id, position, stage_type) => {
                    slot.assign(id, position, stage_type);
                    prop_assert_eq!(slot.task_id, id);
                    prop_assert_eq!(slot.stage_position, position);
                    prop_assert_eq!(slot.stage_type, stage_type);
                }
                SlotOperation::SetTaskId(id) => {
                    let before = slot;
                    slot.task_id = id;
                    prop_assert_eq!(slot.stage_position, before.stage_position);
                    prop_assert_eq!(slot.stage_type, before.stage_type);
                }
                SlotOperation::Clear => {
                    slot.clear();
                    prop_assert_eq!(slot, StagedSplitTaskPosition::default());
                }
            }
            prop_assert_eq!(slot.has_task(), slot.task_id != -1);
        }
    }
}

#[test]
fn default_task_position_is_unassigned() {
    let slot = StagedSplitTaskPosition::default();
    assert_eq!(slot.task_id, -1);
    assert_eq!(slot.stage_position, StagePosition::Undefined);
    assert_eq!(slot.stage_type, StageType::Undefined);
}

#[test]
fn options_with_different_positions_differ() {
    let left = SplitPositionOption::new(1, 2, StagePosition::TopOrLeft, StageType::Main);
    let right = SplitPositionOption::new(1, 2, StagePosition::BottomOrRight, StageType::Main);
    assert_eq!(
        left,
        SplitPositionOption::new(1, 2, StagePosition::TopOrLeft, StageType::Main)
    );
    assert_ne!(left, right);
}
