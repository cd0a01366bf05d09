//! Equipment editor
//!
//! [`EquipmentEditor`] is the pure state behind the create-equipment screen;
//! [`EditorWorkflow`] runs the network side of each user action against it.

mod state;
mod workflow;

pub use state::{
    ConfirmedDelete, DeleteOutcome, DirectoryData, EditorError, EditorPhase, EquipmentEditor,
};
pub use workflow::EditorWorkflow;
