use crate::shared::components::option_selector::{OptionSelector, SelectorLayout};
use crate::shared::icons::icon;
use contracts::domain::a004_wall_color::PRESET_COLORS;
use contracts::shared::selection::SelectMode;
use leptos::prelude::*;

/// Выбор цвета стен: произвольный цвет через нативный picker
/// и сетка готовых цветов под ним.
///
/// Клик по готовому цвету всегда назначает его, выбор не снимается.
#[component]
pub fn ColorPicker(
    #[prop(into)]
    color: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    search_term: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="color-picker">
            <h3 class="option-selector__title">
                {icon("palette")}
                <span>"Wall Color"</span>
            </h3>
            <div class="color-picker__custom">
                <input
                    type="color"
                    class="color-picker__input"
                    prop:value=move || color.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                />
                <div>
                    <div class="color-picker__label">"Custom Color"</div>
                    <div class="color-picker__value">{move || color.get()}</div>
                </div>
            </div>
            {match search_term {
                Some(term) => view! {
                    <OptionSelector
                        catalog=PRESET_COLORS
                        selected=color
                        on_select=on_change
                        search_term=term
                        mode=SelectMode::Replace
                        layout=SelectorLayout::Grid
                    />
                }.into_any(),
                None => view! {
                    <OptionSelector
                        catalog=PRESET_COLORS
                        selected=color
                        on_select=on_change
                        mode=SelectMode::Replace
                        layout=SelectorLayout::Grid
                    />
                }.into_any(),
            }}
        </div>
    }
}
