use crate::shared::config::{EXPORT_DELAY_MS, INQUIRY_DELAY_MS};
use crate::shared::export::export_canvas;
use crate::shared::toast::ToastService;
use contracts::dashboards::d400_design_summary::DesignSummary;
use contracts::enums::category::Category;
use contracts::shared::notice::Notice;
use contracts::shared::page_state::PageState;
use contracts::shared::selection::{wall_overlay_opacity, KitchenSelection};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_export_design::{ExportDesign, ExportRequest};
use contracts::usecases::u502_send_inquiry::{InquiryRequest, SendInquiry};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel страницы конфигуратора.
///
/// Владеет выбором пользователя и состоянием оболочки; дочерние
/// компоненты получают его явным параметром, а не через контекст.
#[derive(Clone, Copy)]
pub struct KitchenViewModel {
    pub selection: RwSignal<KitchenSelection>,
    pub page: RwSignal<PageState>,
    pub inquiry: RwSignal<InquiryRequest>,
    toasts: ToastService,
}

impl KitchenViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            selection: RwSignal::new(KitchenSelection::default()),
            page: RwSignal::new(PageState::default()),
            inquiry: RwSignal::new(InquiryRequest::default()),
            toasts,
        }
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn update_wall_color(&self, value: String) {
        log::debug!("wall color -> {}", value);
        self.selection.update(|s| s.set_wall_color(value));
    }

    pub fn update_cabinet(&self, id: String) {
        log::debug!("cabinet -> '{}'", id);
        self.selection.update(|s| s.set_cabinet(id));
    }

    pub fn update_backsplash(&self, id: String) {
        log::debug!("backsplash -> '{}'", id);
        self.selection.update(|s| s.set_backsplash(id));
    }

    pub fn update_flooring(&self, id: String) {
        log::debug!("flooring -> '{}'", id);
        self.selection.update(|s| s.set_flooring(id));
    }

    /// Сигнал текущего значения поля категории
    pub fn selected(&self, category: Category) -> Signal<String> {
        let selection = self.selection;
        Signal::derive(move || selection.with(|s| s.selected(category).to_string()))
    }

    /// Setter поля категории в виде callback для селектора
    pub fn setter(&self, category: Category) -> Callback<String> {
        let vm = *self;
        Callback::new(move |value: String| match category {
            Category::WallColors => vm.update_wall_color(value),
            Category::Cabinets => vm.update_cabinet(value),
            Category::Backsplash => vm.update_backsplash(value),
            Category::Flooring => vm.update_flooring(value),
        })
    }

    pub fn overlay_opacity(&self) -> impl Fn() -> f64 + Copy + Send + Sync + 'static {
        let selection = self.selection;
        move || selection.with(|s| wall_overlay_opacity(&s.wall_color))
    }

    pub fn summary(&self) -> impl Fn() -> DesignSummary + Copy + Send + Sync + 'static {
        let selection = self.selection;
        move || selection.with(DesignSummary::from_selection)
    }

    pub fn search_term(&self) -> Signal<String> {
        let page = self.page;
        Signal::derive(move || page.with(|p| p.search_term.clone()))
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    pub fn save_command(&self) {
        log::info!("save requested");
        self.toasts.push(Notice::design_saved());
    }

    pub fn share_command(&self) {
        self.toasts.push(Notice::share_coming_soon());
    }

    /// Отложенный экспорт: результат сообщается ровно одним уведомлением
    pub fn export_command(&self) {
        let request = ExportRequest::at(js_sys::Date::now() as u64);
        log::info!("{}: {}", ExportDesign::full_name(), request.file_name);

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(EXPORT_DELAY_MS).await;
            match export_canvas(&request) {
                Ok(()) => {
                    toasts.push(Notice::design_exported(&request.file_name));
                }
                Err(e) => {
                    log::error!("{} failed: {}", ExportDesign::full_name(), e);
                    toasts.push(Notice::export_failed(&e));
                }
            }
        });
    }

    /// Отправка запроса клиента. Поля формы не проверяются.
    pub fn submit_inquiry_command(&self) {
        let request = self
            .inquiry
            .get_untracked()
            .with_design(self.selection.get_untracked());

        match serde_json::to_string(&request) {
            Ok(payload) => log::info!("{} payload: {}", SendInquiry::full_name(), payload),
            Err(e) => log::warn!("{}: could not serialize payload: {}", SendInquiry::full_name(), e),
        }

        self.page.update(|p| p.close_inquiry());
        self.inquiry.set(InquiryRequest::default());

        let toasts = self.toasts;
        spawn_local(async move {
            TimeoutFuture::new(INQUIRY_DELAY_MS).await;
            toasts.push(Notice::inquiry_sent());
        });
    }

    pub fn cancel_inquiry_command(&self) {
        self.page.update(|p| p.close_inquiry());
    }
}
