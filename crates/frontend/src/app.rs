use crate::pages::home::HomePage;
use crate::shared::toast::{ToastHost, ToastService};
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления доступны всем компонентам через контекст
    provide_context(ToastService::new());

    view! {
        <ConfigProvider>
            <HomePage />
            <ToastHost />
        </ConfigProvider>
    }
}
