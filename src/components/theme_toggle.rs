//! Theme toggle button flipping the light/dark context signal.

use leptos::prelude::*;

use crate::state::theme::ThemeVariant;

/// Corner button that switches between the light and dark variants.
///
/// Purely visual: it only touches the theme signal provided by `App`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeVariant>>();

    view! {
        <button
            class="theme-toggle"
            type="button"
            title="Toggle theme"
            style:color=move || theme.get().tokens().text
            on:click=move |_| theme.update(|t| *t = t.toggled())
        >
            {move || theme.get().icon()}
        </button>
    }
}
