//! Split-screen staging model
//!
//! This module provides the value types a launcher-style host uses to
//! describe split-screen staging: which half of the screen a task
//! occupies, which role that stage plays, the menu entries offered to
//! start a split, and the geometry of an active two-pane layout.
//!
//! # Module Structure
//!
//! - `types` - Stage enumerations (`StagePosition`, `StageType`, `SplitOrientation`)
//! - `geometry` - Integer rectangles (`Rect`)
//! - `option` - Menu-entry descriptors (`SplitPositionOption`)
//! - `bounds` - Split geometry with derived pane shares (`StagedSplitBounds`)
//! - `task` - Task to stage assignment (`StagedSplitTaskPosition`)
//! - `error` - Error types (`SplitError`, `Axis`)
//!
//! # Example
//!
//! ```
//! use stagesplit_core::split::{
//!     Rect, StagePosition, StageType, StagedSplitBounds, StagedSplitTaskPosition,
//! };
//!
//! let bounds = StagedSplitBounds::new(
//!     Rect::new(0, 0, 100, 50),
//!     Rect::new(100, 0, 200, 50),
//!     Rect::new(100, 0, 100, 50),
//! );
//! assert!((bounds.left_task_percent() - 0.5).abs() < f32::EPSILON);
//!
//! let mut slot = StagedSplitTaskPosition::default();
//! assert!(!slot.has_task());
//! slot.assign(12, StagePosition::TopOrLeft, StageType::Main);
//! assert!(slot.has_task());
//! ```

mod bounds;
mod error;
mod geometry;
mod option;
mod task;
mod types;

pub use bounds::{DegeneratePolicy, SplitRects, StagedSplitBounds, serialize_share};
pub use error::{Axis, SplitError};
pub use geometry::Rect;
pub use option::SplitPositionOption;
pub use task::StagedSplitTaskPosition;
pub use types::{INVALID_TASK_ID, SplitOrientation, StagePosition, StageType};
