//! Page shell state: the chosen image and the analysis of it.
//!
//! DESIGN
//! ======
//! The page owns both values and hands them to the upload widget and results
//! display. A result only ever describes the currently selected image, so
//! any change of selection drops it.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "page_test.rs"]
mod page_test;

use std::fmt;

use crate::net::types::AnalysisResult;
use crate::util::file_select::is_image_mime;

/// Browser file behind a selection. Builds without a browser carry nothing.
#[cfg(feature = "hydrate")]
pub type FileHandle = send_wrapper::SendWrapper<web_sys::File>;
#[cfg(not(feature = "hydrate"))]
pub type FileHandle = ();

/// Image picked by the user, plus the browser handle used for upload.
pub struct SelectedImage {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    /// Object URL for the `<img>` preview. Revoked when the image is dropped.
    pub preview_url: Option<String>,
    file: FileHandle,
}

impl SelectedImage {
    /// Admit a file as the selection, or `None` if its type is not an image.
    pub fn accept(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        size: u64,
        file: FileHandle,
    ) -> Option<Self> {
        let mime_type = mime_type.into();
        if !is_image_mime(&mime_type) {
            return None;
        }
        Some(Self { name: name.into(), mime_type, size, preview_url: None, file })
    }

    /// Wrap a browser file with a preview URL, or `None` if it is not an image.
    #[cfg(feature = "hydrate")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: web_sys::File) -> Option<Self> {
        let (name, mime_type, size) = (file.name(), file.type_(), file.size() as u64);
        let mut image = Self::accept(name, mime_type, size, send_wrapper::SendWrapper::new(file))?;
        image.preview_url = web_sys::Url::create_object_url_with_blob(image.file()).ok();
        Some(image)
    }

    /// Browser handle for the multipart upload.
    #[cfg(feature = "hydrate")]
    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}

impl Clone for SelectedImage {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            mime_type: self.mime_type.clone(),
            size: self.size,
            preview_url: self.preview_url.clone(),
            #[cfg(feature = "hydrate")]
            file: send_wrapper::SendWrapper::new((*self.file).clone()),
            #[cfg(not(feature = "hydrate"))]
            file: self.file,
        }
    }
}

impl fmt::Debug for SelectedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectedImage")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size)
            .field("preview_url", &self.preview_url)
            .finish_non_exhaustive()
    }
}

/// Where the whole upload flow currently stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    #[default]
    Idle,
    FileSelected,
    Analyzing,
    Displayed,
    Failed,
}

impl FlowPhase {
    /// Short status shown in the analysis tool header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Waiting for an image",
            Self::FileSelected => "Ready to analyze",
            Self::Analyzing => "Analyzing",
            Self::Displayed => "Analysis complete",
            Self::Failed => "Analysis failed",
        }
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Idle => "phase--idle",
            Self::FileSelected => "phase--selected",
            Self::Analyzing => "phase--analyzing",
            Self::Displayed => "phase--displayed",
            Self::Failed => "phase--failed",
        }
    }
}

/// State held by the page shell.
#[derive(Clone, Debug, Default)]
pub struct PageState {
    pub selected_image: Option<SelectedImage>,
    pub analysis_result: Option<AnalysisResult>,
    /// Set when an analysis of the current image came back empty.
    pub last_analysis_failed: bool,
}

impl PageState {
    /// Replace the selection, dropping any result. Returns the image that was
    /// replaced so its preview URL can be released.
    pub fn select_image(&mut self, image: Option<SelectedImage>) -> Option<SelectedImage> {
        self.analysis_result = None;
        self.last_analysis_failed = false;
        std::mem::replace(&mut self.selected_image, image)
    }

    /// Record the outcome of an analysis. `None` with an image selected is a failure.
    pub fn complete_analysis(&mut self, result: Option<AnalysisResult>) {
        self.last_analysis_failed = result.is_none() && self.selected_image.is_some();
        self.analysis_result = result;
    }

    /// Derive the flow phase, given whether the widget has a request in flight.
    pub fn phase(&self, loading: bool) -> FlowPhase {
        if self.selected_image.is_none() {
            FlowPhase::Idle
        } else if loading {
            FlowPhase::Analyzing
        } else if self.analysis_result.is_some() {
            FlowPhase::Displayed
        } else if self.last_analysis_failed {
            FlowPhase::Failed
        } else {
            FlowPhase::FileSelected
        }
    }
}
