use crate::shared::config::{BIOREV_LOGO, TIMBER_CRAFT_LOGO};
use leptos::prelude::*;

/// Фиксированные логотипы в верхних углах
#[component]
pub fn Branding() -> impl IntoView {
    view! {
        <div class="branding branding--left">
            <img src=TIMBER_CRAFT_LOGO alt="Timber Craft" class="branding__logo" />
        </div>
        <div class="branding branding--right">
            <img src=BIOREV_LOGO alt="Biorev Technology" class="branding__logo branding__logo--small" />
        </div>
    }
}
