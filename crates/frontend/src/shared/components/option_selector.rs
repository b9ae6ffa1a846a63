use crate::shared::icons::icon;
use contracts::domain::common::CatalogOption;
use contracts::shared::search::filter_options;
use contracts::shared::selection::SelectMode;
use leptos::prelude::*;

/// Как рисовать элементы каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectorLayout {
    /// Строки: образец, имя и описание
    #[default]
    List,
    /// Сетка цветных образцов
    Grid,
}

/// Новое значение поля после активации элемента `item` при текущем
/// выборе `selected`
pub fn activation_value<T: CatalogOption>(mode: SelectMode, selected: &str, item: &T) -> String {
    mode.next(selected, item.id())
}

/// Универсальный селектор одного каталога.
///
/// Показывает элементы, прошедшие фильтр по имени, подсвечивает текущий
/// выбор и передаёт в `on_select` новое значение по правилу `mode`.
/// Собственного состояния нет: всё приходит от страницы.
#[component]
pub fn OptionSelector<T>(
    /// Каталог категории
    catalog: &'static [T],
    /// Текущий выбранный id
    #[prop(into)]
    selected: Signal<String>,
    /// Callback с новым значением поля
    on_select: Callback<String>,
    /// Строка поиска, по умолчанию пустая
    #[prop(optional, into)]
    search_term: Option<Signal<String>>,
    #[prop(optional)]
    mode: SelectMode,
    #[prop(optional)]
    layout: SelectorLayout,
    /// Заголовок секции (необязательный)
    #[prop(optional, into)]
    title: Option<String>,
    #[prop(optional)]
    title_icon: Option<&'static str>,
) -> impl IntoView
where
    T: CatalogOption,
{
    let container_class = match layout {
        SelectorLayout::List => "option-selector__list",
        SelectorLayout::Grid => "option-selector__grid",
    };

    let activate = move |item: &'static T| {
        let next = activation_value(mode, &selected.get_untracked(), item);
        log::debug!("select '{}' -> '{}'", item.id(), next);
        on_select.run(next);
    };

    let items = move || {
        let term = search_term.map(|s| s.get()).unwrap_or_default();
        filter_options(catalog, &term)
    };

    view! {
        <div class="option-selector">
            {title.map(|t| view! {
                <h3 class="option-selector__title">
                    {title_icon.map(icon)}
                    <span>{t}</span>
                </h3>
            })}
            <div class=container_class>
                {move || {
                    let visible = items();
                    if visible.is_empty() {
                        return view! {
                            <div class="option-selector__empty">"No options match your search"</div>
                        }.into_any();
                    }

                    visible.into_iter().map(|item| {
                        let is_selected = move || selected.with(|s| s == item.id());
                        let body = match layout {
                            SelectorLayout::List => view! {
                                <div class="option-card__text">
                                    <div class="option-card__name">{item.name()}</div>
                                    <div class="option-card__detail">{item.detail()}</div>
                                </div>
                            }.into_any(),
                            SelectorLayout::Grid => view! { <></> }.into_any(),
                        };

                        view! {
                            <div
                                class="option-card"
                                class:option-card--selected=is_selected
                                class:option-card--swatch={layout == SelectorLayout::Grid}
                                role="button"
                                tabindex="0"
                                title=item.name()
                                aria-pressed=move || if is_selected() { "true" } else { "false" }
                                on:click=move |_| activate(item)
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    let key = ev.key();
                                    if key == "Enter" || key == " " {
                                        ev.prevent_default();
                                        activate(item);
                                    }
                                }
                            >
                                <div
                                    class="option-card__color"
                                    style:background-color=item.color()
                                ></div>
                                {body}
                            </div>
                        }
                    }).collect_view().into_any()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_cabinet_style::CABINET_STYLES;
    use contracts::domain::a003_flooring::FLOORING_OPTIONS;
    use contracts::domain::a004_wall_color::PRESET_COLORS;

    #[test]
    fn test_toggle_clears_selected_item() {
        let natural = &CABINET_STYLES[0];
        assert_eq!(activation_value(SelectMode::Toggle, "natural-wood", natural), "");
        assert_eq!(activation_value(SelectMode::Toggle, "", natural), "natural-wood");
    }

    #[test]
    fn test_toggle_replaces_other_item() {
        let walnut = &FLOORING_OPTIONS[1];
        assert_eq!(activation_value(SelectMode::Toggle, "light-oak", walnut), "dark-walnut");
    }

    #[test]
    fn test_replace_keeps_selected_preset() {
        let white = &PRESET_COLORS[0];
        assert_eq!(activation_value(SelectMode::Replace, "#ffffff", white), "#ffffff");
        assert_eq!(activation_value(SelectMode::Replace, "#123456", white), "#ffffff");
    }
}
