// src/ui/elements/editor/state.rs
use bevy::prelude::*;

use crate::matrix::definitions::DocumentId;

/// Identifies the cell a widget instance is rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellRef {
    pub document_id: DocumentId,
    pub dimension_name: String,
}

/// Per-cell edit transaction. The draft accumulates locally while editing;
/// the store is only touched on commit, and cancel throws the draft away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CellEditState {
    #[default]
    Viewing,
    Editing { baseline: String, draft: String },
}

impl CellEditState {
    /// Enters editing, snapshotting the current stored text as the draft
    /// baseline.
    pub fn begin(&mut self, current_text: &str) {
        *self = CellEditState::Editing {
            baseline: current_text.to_string(),
            draft: current_text.to_string(),
        };
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, CellEditState::Editing { .. })
    }

    pub fn draft_mut(&mut self) -> Option<&mut String> {
        match self {
            CellEditState::Editing { draft, .. } => Some(draft),
            CellEditState::Viewing => None,
        }
    }

    /// Normal edit exit: returns the final draft to commit and goes back
    /// to viewing. The draft is returned even when it equals the baseline;
    /// commit is always invoked, the store update is merely idempotent.
    pub fn commit(&mut self) -> Option<String> {
        match std::mem::take(self) {
            CellEditState::Editing { draft, .. } => Some(draft),
            CellEditState::Viewing => None,
        }
    }

    /// Explicit cancellation: discards the draft, returns the baseline
    /// text for display, and performs no store mutation.
    pub fn cancel(&mut self) -> Option<String> {
        match std::mem::take(self) {
            CellEditState::Editing { baseline, .. } => Some(baseline),
            CellEditState::Viewing => None,
        }
    }
}

/// UI-side window state: which cell is being edited (at most one at a
/// time) and the dimension list typed into the top panel.
#[derive(Resource, Debug)]
pub struct EditorWindowState {
    pub active_cell: Option<CellRef>,
    pub edit: CellEditState,
    /// Set when an edit just started so the text widget grabs focus once.
    pub edit_needs_focus: bool,
    /// Comma-separated dimension names for the next comparison run.
    pub dimension_input: String,
}

impl Default for EditorWindowState {
    fn default() -> Self {
        EditorWindowState {
            active_cell: None,
            edit: CellEditState::default(),
            edit_needs_focus: false,
            dimension_input: "Study Design, Model/Architecture/Tools Used, Key Findings"
                .to_string(),
        }
    }
}

impl EditorWindowState {
    pub fn is_editing_cell(&self, document_id: DocumentId, dimension_name: &str) -> bool {
        self.edit.is_editing()
            && self
                .active_cell
                .as_ref()
                .is_some_and(|c| c.document_id == document_id && c.dimension_name == dimension_name)
    }

    pub fn begin_cell_edit(
        &mut self,
        document_id: DocumentId,
        dimension_name: &str,
        current_text: &str,
    ) {
        self.active_cell = Some(CellRef {
            document_id,
            dimension_name: dimension_name.to_string(),
        });
        self.edit.begin(current_text);
        self.edit_needs_focus = true;
    }

    pub fn clear_cell_edit(&mut self) {
        self.active_cell = None;
        self.edit = CellEditState::Viewing;
        self.edit_needs_focus = false;
    }
}
