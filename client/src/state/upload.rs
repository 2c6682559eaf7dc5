//! Upload widget state: drag highlight, in-flight flag, request sequencing.
//!
//! DESIGN
//! ======
//! Every analyze start takes a fresh sequence number. Selecting or removing
//! an image bumps the number too, so a response that lands after the user
//! moved on no longer matches and is dropped by `finish_analysis`.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Drag-and-drop events the drop zone reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragEventKind {
    Enter,
    Over,
    Leave,
    Drop,
}

/// What removing the selected image does, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemoveStep {
    /// Report an empty selection to the page.
    ClearSelection,
    /// Report an empty analysis to the page.
    ClearResult,
    /// Empty the file input so the same file can be picked again.
    ResetInput,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadState {
    pub drag_active: bool,
    pub loading: bool,
    pub analysis_seq: u64,
}

impl UploadState {
    pub fn apply_drag(&mut self, kind: DragEventKind) {
        self.drag_active = matches!(kind, DragEventKind::Enter | DragEventKind::Over);
    }

    /// Start a request. Returns its sequence number, or `None` when there is
    /// nothing to analyze or a request is already in flight.
    pub fn begin_analysis(&mut self, has_image: bool) -> Option<u64> {
        if !has_image || self.loading {
            return None;
        }
        self.loading = true;
        self.analysis_seq += 1;
        Some(self.analysis_seq)
    }

    /// Forget any in-flight request; its response will be ignored.
    pub fn invalidate(&mut self) {
        self.loading = false;
        self.analysis_seq += 1;
    }

    /// Drop the selected image: forget any in-flight request and return the
    /// steps the widget runs.
    pub fn remove(&mut self) -> [RemoveStep; 3] {
        self.invalidate();
        [RemoveStep::ClearSelection, RemoveStep::ClearResult, RemoveStep::ResetInput]
    }

    /// Settle request `seq`. Returns `true` if it is still current, in which
    /// case loading is cleared and its outcome should be applied.
    pub fn finish_analysis(&mut self, seq: u64) -> bool {
        if seq != self.analysis_seq || !self.loading {
            return false;
        }
        self.loading = false;
        true
    }
}
