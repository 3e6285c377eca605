//! Fixed diagonal line drawn behind every page

use leptos::prelude::*;

#[component]
pub fn DiagonalBackdrop() -> impl IntoView {
    view! { <div class="diagonal-line" aria-hidden="true"></div> }
}
