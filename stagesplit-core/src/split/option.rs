//! Menu-entry descriptors for split affordances

use serde::{Deserialize, Serialize};

use super::types::{StagePosition, StageType};

/// One selectable "split here" entry offered to the user.
///
/// Pairs the icon and text resources shown in a menu with the stage the
/// task lands in when the entry is picked. Resource ids are opaque to
/// this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitPositionOption {
    /// Icon resource shown for the entry.
    pub icon_res_id: i32,
    /// Text resource shown for the entry.
    pub text_res_id: i32,
    /// Stage position the task is placed in.
    pub stage_position: StagePosition,
    /// Stage type the task is placed in.
    pub stage_type: StageType,
}

impl SplitPositionOption {
    /// Creates a new option.
    #[must_use]
    pub const fn new(
        icon_res_id: i32,
        text_res_id: i32,
        stage_position: StagePosition,
        stage_type: StageType,
    ) -> Self {
        Self {
            icon_res_id,
            text_res_id,
            stage_position,
            stage_type,
        }
    }
}
