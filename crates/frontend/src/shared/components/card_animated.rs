//! CardAnimated, обёртка над Thaw Card с анимацией выезда сверху.
//!
//! Анимация определена в `style/kitchen.css` (`@keyframes card-drop`).
//!
//! # Пример
//! ```ignore
//! <CardAnimated class="design-info">
//!     <p>"Контент"</p>
//! </CardAnimated>
//! ```

use leptos::prelude::*;
use thaw::Card;

/// Обёртка над Thaw [`Card`] с анимацией `card-drop`.
///
/// # Props
/// - `delay_ms` задержка анимации в мс (по умолчанию `0`).
/// - `class` дополнительный CSS-класс для позиционирования.
#[component]
pub fn CardAnimated(
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-drop 0.35s ease-out {}ms both;", delay_ms);

    view! {
        <div class=class>
            <Card attr:style=style>
                {children()}
            </Card>
        </div>
    }
}
