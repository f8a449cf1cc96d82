//! Live assignment of a running task to a stage slot

use std::fmt;

use serde::{Deserialize, Serialize};

use super::types::{INVALID_TASK_ID, StagePosition, StageType};

/// Records which task occupies which stage.
///
/// Owned and mutated by the split-session controller as tasks move
/// between stages. Nothing ties `task_id` to the stage fields, so a task
/// with an undefined stage is representable; avoiding it is up to the owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StagedSplitTaskPosition {
    /// Task occupying the slot, [`INVALID_TASK_ID`] when empty.
    pub task_id: i32,
    /// Which half of the screen the task occupies.
    pub stage_position: StagePosition,
    /// Role of the stage the task occupies.
    pub stage_type: StageType,
}

impl StagedSplitTaskPosition {
    /// Creates a position with every field set.
    #[must_use]
    pub const fn new(task_id: i32, stage_position: StagePosition, stage_type: StageType) -> Self {
        Self {
            task_id,
            stage_position,
            stage_type,
        }
    }

    /// Returns true if a task is assigned.
    #[must_use]
    pub const fn has_task(&self) -> bool {
        self.task_id != INVALID_TASK_ID
    }

    /// Assigns a task to a stage, replacing the previous assignment.
    pub fn assign(&mut self, task_id: i32, stage_position: StagePosition, stage_type: StageType) {
        tracing::debug!(
            task_id,
            previous_task_id = self.task_id,
            stage_position = %stage_position,
            stage_type = %stage_type,
            "Assigning task to stage"
        );
        self.task_id = task_id;
        self.stage_position = stage_position;
        self.stage_type = stage_type;
    }

    /// Resets to the unassigned state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Default for StagedSplitTaskPosition {
    fn default() -> Self {
        Self {
            task_id: INVALID_TASK_ID,
            stage_position: StagePosition::Undefined,
            stage_type: StageType::Undefined,
        }
    }
}

impl fmt::Display for StagedSplitTaskPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Task({}) at {} / {}",
            self.task_id, self.stage_position, self.stage_type
        )
    }
}
