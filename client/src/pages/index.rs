//! Landing page: marketing header plus the land analysis tool.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is the single owner of the selected image and its analysis. It
//! passes a read-only view of the selection and two callbacks down to the
//! upload widget, and shows the results cards once a result arrives.

use leptos::prelude::*;

use crate::components::analysis_results::AnalysisResults;
use crate::components::feature_cards::FeatureCards;
use crate::components::image_upload::ImageUpload;
use crate::net::types::AnalysisResult;
use crate::state::page::{PageState, SelectedImage};

/// Page shell composing the upload widget and results display.
#[component]
pub fn IndexPage() -> impl IntoView {
    let page = RwSignal::new(PageState::default());
    let analyzing = RwSignal::new(false);

    let selected_image = Signal::derive(move || page.with(|p| p.selected_image.clone()));

    let on_image_select = Callback::new(move |image: Option<SelectedImage>| {
        let replaced = page.try_update(|p| p.select_image(image)).flatten();
        #[cfg(feature = "hydrate")]
        {
            if let Some(old) = replaced {
                crate::util::file_select::revoke_preview(&old);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = replaced;
        }
    });

    let on_analysis_complete = Callback::new(move |result: Option<AnalysisResult>| {
        page.update(|p| p.complete_analysis(result));
    });

    let on_loading_change = Callback::new(move |loading: bool| analyzing.set(loading));

    let phase = move || page.with(|p| p.phase(analyzing.get()));

    view! {
        <div class="index-page">
            <header class="site-header">
                <div class="site-header__inner">
                    <span class="site-header__logo" aria-hidden="true">"🍃"</span>
                    <h1 class="site-header__title">"Sustainable Farming Advisory"</h1>
                </div>
            </header>

            <main class="index-page__content">
                <section class="hero">
                    <h2 class="hero__title">"Transform Your Land with AI-Powered Insights"</h2>
                    <p class="hero__lead">
                        "Upload an image of your land and get personalized, sustainable farming "
                        "recommendations tailored to your specific conditions and environment."
                    </p>
                </section>

                <FeatureCards/>

                <section class="card analysis-tool">
                    <header class="analysis-tool__header">
                        <h2 class="analysis-tool__title">"Land Analysis Tool"</h2>
                        <p class="card__description">"Upload an image of your land to get started"</p>
                        <span class=move || format!("phase {}", phase().css_modifier())>
                            {move || phase().label()}
                        </span>
                    </header>

                    <ImageUpload
                        selected_image=selected_image
                        on_image_select=on_image_select
                        on_analysis_complete=on_analysis_complete
                        on_loading_change=on_loading_change
                    />

                    {move || {
                        page.with(|p| p.analysis_result.clone())
                            .map(|result| {
                                view! {
                                    <hr class="separator"/>
                                    <AnalysisResults result=result/>
                                }
                            })
                    }}
                </section>
            </main>
        </div>
    }
}
