use leptos::prelude::window_event_listener;
use leptos::prelude::*;

/// Ширина панели по умолчанию, px
const DEFAULT_WIDTH: f64 = 384.0;
const MIN_WIDTH: f64 = 320.0;

/// Правая выезжающая панель с изменяемой шириной
#[component]
pub fn Right(#[prop(into)] is_open: Signal<bool>, children: Children) -> impl IntoView {
    let width = RwSignal::new(DEFAULT_WIDTH);
    let is_resizing = RwSignal::new(false);
    let start_x = RwSignal::new(0.0f64);
    let start_width = RwSignal::new(DEFAULT_WIDTH);

    // Обработчик начала resize
    let on_resize_start = move |ev: leptos::ev::MouseEvent| {
        if !is_open.get_untracked() {
            return;
        }
        is_resizing.set(true);
        start_x.set(ev.client_x() as f64);
        start_width.set(width.get_untracked());
        ev.prevent_default();
    };

    // Глобальный обработчик mousemove на window
    let _ = window_event_listener(leptos::ev::mousemove, move |ev: leptos::ev::MouseEvent| {
        if !is_resizing.get_untracked() {
            return;
        }

        let window_width = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(DEFAULT_WIDTH * 2.0);

        // Панель не шире половины окна
        let max_width = (window_width * 0.5).max(MIN_WIDTH);
        let dx = start_x.get_untracked() - ev.client_x() as f64;
        let new_width = (start_width.get_untracked() + dx).clamp(MIN_WIDTH, max_width);

        width.set(new_width);
    });

    let _ = window_event_listener(leptos::ev::mouseup, move |_ev: leptos::ev::MouseEvent| {
        if is_resizing.get_untracked() {
            is_resizing.set(false);
        }
    });

    view! {
        <aside
            data-zone="right"
            class="right-panel"
            class:right-panel--hidden=move || !is_open.get()
            class:right-panel--resizing=move || is_resizing.get()
            style:width=move || if is_open.get() { format!("{}px", width.get()) } else { "0px".to_string() }
        >
            <div class="right-panel__resizer" on:mousedown=on_resize_start></div>
            <div class="right-panel__content">
                {children()}
            </div>
        </aside>
    }
}
