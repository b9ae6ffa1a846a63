pub mod center;
pub mod footer;
pub mod header;
pub mod right;

use leptos::prelude::*;

/// Оболочка страницы конфигуратора.
///
/// ```text
/// +----------------------------------+--------------+
/// |  Logos (fixed)                   |              |
/// |            Preview (center)      |  RightPanel  |
/// |                  Save / Share    |  (optional)  |
/// +----------------------------------+--------------+
/// ```
///
/// Логотипы и нижние кнопки скрываются в режиме превью, правая панель
/// показывается только когда `sidebar_open`.
#[component]
pub fn Shell<C, R>(
    #[prop(into)] chrome_visible: Signal<bool>,
    #[prop(into)] sidebar_open: Signal<bool>,
    center: C,
    right: R,
    children: Children,
) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout">
            {move || chrome_visible.get().then(|| view! { <header::branding::Branding /> })}

            <div class="app-main">
                <center::center::Center>
                    {center()}
                </center::center::Center>
            </div>

            <right::right::Right is_open=sidebar_open>
                {right()}
            </right::right::Right>

            {children()}
        </div>
    }
}
