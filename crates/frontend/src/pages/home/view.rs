use super::view_model::KitchenViewModel;
use crate::layout::center::preview::KitchenPreview;
use crate::layout::footer::actions::FooterActions;
use crate::layout::right::inquiry_dialog::InquiryDialog;
use crate::layout::right::panel::CustomizationPanel;
use crate::layout::Shell;
use crate::shared::toast::ToastService;
use leptos::prelude::*;

/// Единственная страница конфигуратора
#[component]
pub fn HomePage() -> impl IntoView {
    let toasts = use_context::<ToastService>().expect("ToastService not provided in context");
    let vm = KitchenViewModel::new(toasts);
    let page = vm.page;

    let chrome_visible = Signal::derive(move || page.with(|p| p.chrome_visible()));

    view! {
        <Shell
            chrome_visible=chrome_visible
            sidebar_open=Signal::derive(move || page.with(|p| p.sidebar_visible()))
            center=move || view! { <KitchenPreview vm=vm /> }.into_any()
            right=move || view! { <CustomizationPanel vm=vm /> }.into_any()
        >
            <Show when=move || chrome_visible.get()>
                <FooterActions vm=vm />
            </Show>
            <InquiryDialog vm=vm />
        </Shell>
    }
}
