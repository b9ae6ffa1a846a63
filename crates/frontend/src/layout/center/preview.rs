use crate::layout::center::design_info::DesignInfoCard;
use crate::pages::home::KitchenViewModel;
use crate::shared::components::ui::Button;
use crate::shared::config::KITCHEN_IMAGE;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Inline style of the wall color overlay
pub fn overlay_style(wall_color: &str, opacity: f64) -> String {
    format!("background-color: {}; opacity: {};", wall_color, opacity)
}

/// Превью кухни: фото, цветной оверлей стен и кнопки управления
#[component]
pub fn KitchenPreview(vm: KitchenViewModel) -> impl IntoView {
    let page = vm.page;
    let opacity = vm.overlay_opacity();
    let chrome_visible = move || page.with(|p| p.chrome_visible());
    let preview_mode = move || page.with(|p| p.preview_mode);

    view! {
        <div class="preview">
            <img src=KITCHEN_IMAGE alt="Kitchen Design Preview" class="preview__image" />

            <div
                class="preview__overlay"
                style=move || vm.selection.with(|s| overlay_style(&s.wall_color, opacity()))
            ></div>

            <Show when=chrome_visible>
                <div class="preview__controls">
                    <Button
                        variant="ghost"
                        active=Signal::derive(move || page.with(|p| p.show_sidebar))
                        on_click=Callback::new(move |_| page.update(|p| p.toggle_sidebar()))
                    >
                        {icon("settings")}
                        <span>"Customize"</span>
                    </Button>
                    <Button
                        variant="ghost"
                        on_click=Callback::new(move |_| page.update(|p| p.toggle_design_info()))
                    >
                        {icon("info")}
                        <span>"Design Info"</span>
                    </Button>
                </div>
            </Show>

            <div class="preview__mode-toggle">
                <Button
                    variant=Signal::derive(move || {
                        if preview_mode() { "danger".to_string() } else { "primary".to_string() }
                    })
                    on_click=Callback::new(move |_| page.update(|p| p.toggle_preview_mode()))
                >
                    {icon("expand")}
                    <span>{move || if preview_mode() { "Exit Preview" } else { "Preview" }}</span>
                </Button>
            </div>

            <Show when=move || page.with(|p| p.design_info_visible())>
                <DesignInfoCard vm=vm />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_style() {
        assert_eq!(
            overlay_style("#e6f3ff", 0.25),
            "background-color: #e6f3ff; opacity: 0.25;"
        );
        assert_eq!(
            overlay_style("#ffffff", 0.0),
            "background-color: #ffffff; opacity: 0;"
        );
    }
}
