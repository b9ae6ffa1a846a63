use crate::pages::home::KitchenViewModel;
use crate::shared::components::card_animated::CardAnimated;
use leptos::prelude::*;

/// Карточка с составом текущего дизайна
#[component]
pub fn DesignInfoCard(vm: KitchenViewModel) -> impl IntoView {
    let summary = vm.summary();

    view! {
        <CardAnimated class="design-info">
            <div class="design-info__header">
                <h3 class="design-info__title">{move || summary().title}</h3>
                <button
                    class="design-info__close"
                    title="Close"
                    on:click=move |_| vm.page.update(|p| p.close_design_info())
                >
                    "×"
                </button>
            </div>
            <div class="design-info__lines">
                {move || summary().lines.into_iter().map(|line| {
                    let swatch_class = if line.swatch.is_some() {
                        "design-info__swatch"
                    } else {
                        "design-info__swatch design-info__swatch--missing"
                    };
                    view! {
                        <div class="design-info__line">
                            <div
                                class=swatch_class
                                style:background-color=line.swatch.unwrap_or_default()
                            ></div>
                            <span>{line.label}</span>
                        </div>
                    }
                }).collect_view()}
            </div>
        </CardAnimated>
    }
}
