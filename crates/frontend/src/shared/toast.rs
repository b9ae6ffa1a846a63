use crate::shared::config::TOAST_TIMEOUT_MS;
use crate::shared::icons::icon;
use contracts::shared::notice::{Notice, NoticeIntent};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq)]
struct ToastEntry {
    id: u64,
    notice: Notice,
}

/// Стек всплывающих уведомлений.
///
/// Каждое уведомление закрывается само через `TOAST_TIMEOUT_MS`
/// или по клику на крестик.
#[derive(Clone, Copy)]
pub struct ToastService {
    stack: RwSignal<Vec<ToastEntry>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            stack: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn push(&self, notice: Notice) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        log::debug!("toast #{}: {}", id, notice.title);
        self.stack.update(|s| s.push(ToastEntry { id, notice }));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
            svc.dismiss(id);
        });

        id
    }

    pub fn dismiss(&self, id: u64) {
        self.stack.update(|s| s.retain(|entry| entry.id != id));
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn toast_class(intent: NoticeIntent) -> &'static str {
    match intent {
        NoticeIntent::Success => "toast toast--success",
        NoticeIntent::Info => "toast toast--info",
        NoticeIntent::Error => "toast toast--destructive",
    }
}

/// Контейнер уведомлений, рисуется один раз в корне приложения
#[component]
pub fn ToastHost() -> impl IntoView {
    let svc = use_context::<ToastService>().expect("ToastService not provided in context");

    view! {
        <div class="toast-host" aria-live="polite">
            <For
                each=move || svc.stack.get()
                key=|entry| entry.id
                children=move |entry| {
                    let id = entry.id;
                    let role = if entry.notice.is_error() { "alert" } else { "status" };
                    view! {
                        <div class=toast_class(entry.notice.intent) role=role>
                            <div class="toast__content">
                                <div class="toast__title">{entry.notice.title}</div>
                                <div class="toast__description">{entry.notice.description}</div>
                            </div>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_class() {
        assert_eq!(toast_class(NoticeIntent::Error), "toast toast--destructive");
        assert_eq!(toast_class(NoticeIntent::Success), "toast toast--success");
    }
}
