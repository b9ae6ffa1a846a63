use crate::pages::home::KitchenViewModel;
use crate::shared::components::ui::{Button, Input, Textarea};
use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::HtmlInputElement;

/// Модальное окно запроса клиента.
///
/// Поля привязаны к `vm.inquiry`; файлы не загружаются, в запрос
/// попадают только их имена.
#[component]
pub fn InquiryDialog(vm: KitchenViewModel) -> impl IntoView {
    let inquiry = vm.inquiry;
    let is_open = move || vm.page.with(|p| p.show_inquiry_dialog);

    let name = Signal::derive(move || inquiry.with(|r| r.name.clone()));
    let email = Signal::derive(move || inquiry.with(|r| r.email.clone()));
    let message = Signal::derive(move || inquiry.with(|r| r.message.clone()));
    let attachments = move || inquiry.with(|r| r.attachments.clone());

    let on_files = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let Some(files) = input.files() else {
            return;
        };
        for i in 0..files.length() {
            if let Some(file) = files.get(i) {
                let file_name = file.name();
                inquiry.update(|r| {
                    if !r.add_attachment(file_name.clone()) {
                        log::debug!("inquiry attachment '{}' already listed", file_name);
                    }
                });
            }
        }
    };

    view! {
        <Show when=is_open>
            <div class="modal-overlay" on:click=move |_| vm.cancel_inquiry_command()>
                <div class="modal" role="dialog" aria-modal="true" on:click=|ev| ev.stop_propagation()>
                    <div class="modal__header">
                        <h2 class="modal__title">"Send Inquiry"</h2>
                        <button
                            class="customize-panel__icon-button"
                            title="Close"
                            on:click=move |_| vm.cancel_inquiry_command()
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="modal__body">
                        <Input
                            id="inquiry-name"
                            label="Name"
                            value=name
                            on_input=Callback::new(move |v: String| inquiry.update(|r| r.name = v))
                            placeholder="Your name"
                        />
                        <Input
                            id="inquiry-email"
                            label="Email"
                            input_type="email"
                            value=email
                            on_input=Callback::new(move |v: String| inquiry.update(|r| r.email = v))
                            placeholder="you@example.com"
                        />
                        <Textarea
                            id="inquiry-message"
                            label="Message"
                            value=message
                            on_input=Callback::new(move |v: String| inquiry.update(|r| r.message = v))
                            placeholder="Tell us about your project..."
                            rows=4
                        />

                        <label class="upload">
                            {icon("upload")}
                            <span>"Choose Files"</span>
                            <input type="file" multiple=true class="upload__input" on:change=on_files />
                        </label>
                        <ul class="upload__list">
                            <For
                                each=attachments
                                // Имена уникальны, add_attachment не пускает дубликаты
                                key=|file_name| file_name.clone()
                                children=|file_name| view! { <li>{file_name}</li> }
                            />
                        </ul>
                    </div>

                    <div class="modal__footer">
                        <Button variant="outline" on_click=Callback::new(move |_| vm.cancel_inquiry_command())>
                            "Cancel"
                        </Button>
                        <Button on_click=Callback::new(move |_| vm.submit_inquiry_command())>
                            {icon("send")}
                            <span>"Send"</span>
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
