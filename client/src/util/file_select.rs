//! Picking image files out of browser inputs and drag events.
//!
//! Only the MIME check is platform independent; the rest touches `web_sys`
//! and is compiled for the browser only.

#[cfg(test)]
#[path = "file_select_test.rs"]
mod file_select_test;

#[cfg(feature = "hydrate")]
use crate::state::page::SelectedImage;

/// Accepts any `image/*` type. Anything else is ignored by the upload widget.
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// First file of a list, if it is an image.
#[cfg(feature = "hydrate")]
pub fn first_image(files: Option<web_sys::FileList>) -> Option<SelectedImage> {
    files?.get(0).and_then(SelectedImage::from_file)
}

/// First image dropped onto the drop zone.
#[cfg(feature = "hydrate")]
pub fn dropped_image(ev: &web_sys::DragEvent) -> Option<SelectedImage> {
    first_image(ev.data_transfer().and_then(|dt| dt.files()))
}

/// Release the preview object URL of an image that is no longer shown.
#[cfg(feature = "hydrate")]
pub fn revoke_preview(image: &SelectedImage) {
    if let Some(url) = image.preview_url.as_deref() {
        let _ = web_sys::Url::revoke_object_url(url);
    }
}
