use crate::pages::home::KitchenViewModel;
use crate::shared::components::color_picker::ColorPicker;
use crate::shared::components::option_selector::OptionSelector;
use crate::shared::components::ui::{Button, Input};
use crate::shared::config::SEARCH_PLACEHOLDER;
use crate::shared::icons::icon;
use contracts::domain::a001_cabinet_style::CABINET_STYLES;
use contracts::domain::a002_backsplash::BACKSPLASH_OPTIONS;
use contracts::domain::a003_flooring::FLOORING_OPTIONS;
use contracts::enums::category::Category;
use leptos::prelude::*;

/// Панель настройки: список категорий или селектор выбранной категории
#[component]
pub fn CustomizationPanel(vm: KitchenViewModel) -> impl IntoView {
    let page = vm.page;
    let current = Memo::new(move |_| page.with(|p| p.current_category));
    let search_term = vm.search_term();

    view! {
        <div class="customize-panel">
            <div class="customize-panel__header">
                <Show when=move || current.get().is_some()>
                    <button
                        class="customize-panel__icon-button"
                        title="Back to categories"
                        on:click=move |_| page.update(|p| p.back_to_categories())
                    >
                        {icon("arrow-left")}
                    </button>
                </Show>
                <h2 class="customize-panel__title">
                    {move || page.with(|p| p.header_title())}
                </h2>
                <button
                    class="customize-panel__icon-button"
                    title="Close"
                    on:click=move |_| page.update(|p| p.close_sidebar())
                >
                    {icon("x")}
                </button>
            </div>

            <Show when=move || current.get().is_some()>
                <div class="customize-panel__search">
                    <Input
                        value=search_term
                        on_input=Callback::new(move |term: String| page.update(|p| p.set_search_term(term)))
                        placeholder=SEARCH_PLACEHOLDER
                        leading_icon="search"
                    />
                </div>
            </Show>

            <div class="customize-panel__body">
                {move || match current.get() {
                    None => view! { <CategoryList vm=vm /> }.into_any(),
                    Some(Category::WallColors) => view! {
                        <ColorPicker
                            color=vm.selected(Category::WallColors)
                            on_change=vm.setter(Category::WallColors)
                            search_term=search_term
                        />
                    }.into_any(),
                    Some(Category::Cabinets) => view! {
                        <OptionSelector
                            catalog=CABINET_STYLES
                            selected=vm.selected(Category::Cabinets)
                            on_select=vm.setter(Category::Cabinets)
                            search_term=search_term
                            title="Cabinet Style"
                            title_icon="door"
                        />
                    }.into_any(),
                    Some(Category::Backsplash) => view! {
                        <OptionSelector
                            catalog=BACKSPLASH_OPTIONS
                            selected=vm.selected(Category::Backsplash)
                            on_select=vm.setter(Category::Backsplash)
                            search_term=search_term
                            title="Backsplash"
                            title_icon="grid"
                        />
                    }.into_any(),
                    Some(Category::Flooring) => view! {
                        <OptionSelector
                            catalog=FLOORING_OPTIONS
                            selected=vm.selected(Category::Flooring)
                            on_select=vm.setter(Category::Flooring)
                            search_term=search_term
                            title="Flooring"
                            title_icon="home"
                        />
                    }.into_any(),
                }}
            </div>

            <div class="customize-panel__actions">
                <Button block=true on_click=Callback::new(move |_| vm.export_command())>
                    {icon("download")}
                    <span>"Download Design"</span>
                </Button>
                <Button
                    variant="success"
                    block=true
                    on_click=Callback::new(move |_| page.update(|p| p.open_inquiry()))
                >
                    {icon("send")}
                    <span>"Send Inquiry"</span>
                </Button>
            </div>
        </div>
    }
}

#[component]
fn CategoryList(vm: KitchenViewModel) -> impl IntoView {
    let page = vm.page;

    view! {
        <div class="category-list">
            {Category::all().into_iter().map(|category| view! {
                <button
                    class="category-list__item"
                    on:click=move |_| page.update(|p| p.select_category(category))
                >
                    <span class="category-list__icon">{category.icon()}</span>
                    <span class="category-list__name">{category.display_name()}</span>
                </button>
            }).collect_view()}
        </div>
    }
}
