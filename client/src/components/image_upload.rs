//! Image upload widget: drop zone, file picker, preview, and analyze trigger.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell owns the selected image and the result; this widget only
//! reads the selection and reports changes through callbacks. Drag highlight,
//! the in-flight flag, and request sequencing live in a local `UploadState`.
//!
//! ERROR HANDLING
//! ==============
//! Non-image files are ignored without feedback. Any analysis failure is
//! logged to the console, shown as an error toast, and reported to the page
//! as an empty result.

#[cfg(test)]
#[path = "image_upload_test.rs"]
mod image_upload_test;

use leptos::prelude::*;

use crate::components::toaster::notify;
use crate::net::api::{AnalyzeError, analyze_image};
use crate::net::types::AnalysisResult;
use crate::state::page::SelectedImage;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::upload::{DragEventKind, RemoveStep, UploadState};

pub(crate) const ANALYZING_MESSAGE: &str = "Analyzing your land...";
pub(crate) const SUCCESS_MESSAGE: &str = "Analysis complete!";

/// Upload widget for a single land image.
#[component]
pub fn ImageUpload(
    #[prop(into)] selected_image: Signal<Option<SelectedImage>>,
    on_image_select: Callback<Option<SelectedImage>>,
    on_analysis_complete: Callback<Option<AnalysisResult>>,
    #[prop(optional)] on_loading_change: Option<Callback<bool>>,
) -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let upload = RwSignal::new(UploadState::default());
    let file_input = NodeRef::<leptos::html::Input>::new();

    if let Some(on_loading_change) = on_loading_change {
        Effect::new(move || on_loading_change.run(upload.with(|u| u.loading)));
    }

    let select_image = move |image: SelectedImage| {
        upload.update(UploadState::invalidate);
        on_image_select.run(Some(image));
    };

    let on_drag = move |kind: DragEventKind| {
        move |ev: leptos::ev::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            upload.update(|u| u.apply_drag(kind));
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        upload.update(|u| u.apply_drag(DragEventKind::Drop));
        #[cfg(feature = "hydrate")]
        {
            if let Some(image) = crate::util::file_select::dropped_image(&ev) {
                select_image(image);
            }
        }
    };

    let on_file_input = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            if let Some(image) = crate::util::file_select::first_image(input.files()) {
                select_image(image);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, select_image);
        }
    };

    let open_file_dialog = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get_untracked() {
                input.click();
            }
        }
    };

    let on_remove = move |_| {
        for step in upload.try_update(UploadState::remove).into_iter().flatten() {
            match step {
                RemoveStep::ClearSelection => on_image_select.run(None),
                RemoveStep::ClearResult => on_analysis_complete.run(None),
                RemoveStep::ResetInput => reset_file_input(file_input),
            }
        }
    };

    let on_analyze = move |_| {
        let Some(image) = selected_image.get_untracked() else {
            return;
        };
        let Some(seq) = upload.try_update(|u| u.begin_analysis(true)).flatten() else {
            return;
        };
        notify(toasts, ToastKind::Info, ANALYZING_MESSAGE);

        leptos::task::spawn_local(async move {
            let outcome = analyze_image(&image).await;
            if !upload.try_update(|u| u.finish_analysis(seq)).unwrap_or(false) {
                leptos::logging::log!("dropping stale analysis response #{seq}");
                return;
            }
            if let Err(err) = &outcome {
                leptos::logging::error!("Error analyzing image: {err}");
            }
            let (kind, message) = completion_notice(&outcome);
            notify(toasts, kind, message);
            on_analysis_complete.run(outcome.ok());
        });
    };

    let image_name = move || selected_image.get().map(|i| i.name).unwrap_or_default();
    let preview_src = move || selected_image.get().and_then(|i| i.preview_url).unwrap_or_default();
    let loading = move || upload.get().loading;

    view! {
        <div class="image-upload">
            <input
                node_ref=file_input
                type="file"
                accept="image/*"
                class="image-upload__input"
                title="Upload land image"
                on:change=on_file_input
            />

            <Show
                when=move || selected_image.get().is_some()
                fallback=move || {
                    view! {
                        <div
                            class=move || drop_zone_class(upload.get().drag_active)
                            on:dragenter=on_drag(DragEventKind::Enter)
                            on:dragleave=on_drag(DragEventKind::Leave)
                            on:dragover=on_drag(DragEventKind::Over)
                            on:drop=on_drop
                            on:click=open_file_dialog
                        >
                            <div class="image-upload__badge" aria-hidden="true">"⇪"</div>
                            <h3 class="image-upload__title">"Upload Land Image"</h3>
                            <p class="image-upload__hint">
                                "Drag and drop your image here, or click to select"
                            </p>
                            <p class="image-upload__formats">
                                "Supports JPG, PNG, and other image formats"
                            </p>
                        </div>
                    }
                }
            >
                <div class="image-upload__card">
                    <div class="image-upload__header">
                        <span class="image-upload__name">{image_name}</span>
                        <button
                            class="btn btn--ghost image-upload__remove"
                            title="Remove image"
                            on:click=on_remove
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="image-upload__preview-frame">
                        <img class="image-upload__preview" src=preview_src alt="Selected land"/>
                    </div>

                    <div class="image-upload__actions">
                        <button class="btn btn--primary" disabled=loading on:click=on_analyze>
                            <Show when=loading>
                                <span class="spinner" aria-hidden="true"></span>
                            </Show>
                            {move || analyze_button_label(loading())}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}

fn reset_file_input(input: NodeRef<leptos::html::Input>) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(input) = input.get_untracked() {
            input.set_value("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
    }
}

fn drop_zone_class(drag_active: bool) -> &'static str {
    if drag_active {
        "image-upload__dropzone image-upload__dropzone--active"
    } else {
        "image-upload__dropzone"
    }
}

fn analyze_button_label(loading: bool) -> &'static str {
    if loading { "Analyzing..." } else { "Analyze Land" }
}

fn failure_message(err: &AnalyzeError) -> String {
    format!("Analysis failed: {err}")
}

/// Toast to show once a request settles.
pub(crate) fn completion_notice(outcome: &Result<AnalysisResult, AnalyzeError>) -> (ToastKind, String) {
    match outcome {
        Ok(_) => (ToastKind::Success, SUCCESS_MESSAGE.to_owned()),
        Err(err) => (ToastKind::Error, failure_message(err)),
    }
}
