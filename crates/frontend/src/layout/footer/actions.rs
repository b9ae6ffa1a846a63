use crate::pages::home::KitchenViewModel;
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Кнопки Save / Share в правом нижнем углу
#[component]
pub fn FooterActions(vm: KitchenViewModel) -> impl IntoView {
    view! {
        <div class="footer-actions">
            <Button variant="ghost" on_click=Callback::new(move |_| vm.save_command())>
                {icon("save")}
                <span>"Save"</span>
            </Button>
            <Button on_click=Callback::new(move |_| vm.share_command())>
                {icon("share")}
                <span>"Share"</span>
            </Button>
        </div>
    }
}
