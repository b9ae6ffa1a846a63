/// Экспорт превью в PNG и скачивание через браузер
use contracts::usecases::u501_export_design::ExportRequest;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, HtmlCanvasElement};

/// Рисует холст размера из запроса и скачивает его как PNG.
///
/// Холст пока остаётся пустым: композиция фото и оверлея в картинку
/// не реализована.
pub fn export_canvas(request: &ExportRequest) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| format!("Failed to create canvas: {:?}", e))?
        .dyn_into()
        .map_err(|_| "Created element is not a canvas".to_string())?;
    canvas.set_width(request.width);
    canvas.set_height(request.height);

    // Без 2d-контекста toDataURL вернёт пустую строку
    canvas
        .get_context("2d")
        .map_err(|e| format!("Failed to get 2d context: {:?}", e))?
        .ok_or("2d context is not supported")?;

    let data_url = canvas
        .to_data_url()
        .map_err(|e| format!("Failed to encode PNG: {:?}", e))?;

    download_url(&document, &data_url, &request.file_name)
}

/// Инициирует скачивание по URL через временную ссылку
fn download_url(document: &Document, href: &str, filename: &str) -> Result<(), String> {
    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;

    anchor.set_href(href);
    anchor.set_download(filename);
    anchor.click();

    Ok(())
}
