/// Экспорт табличных данных в CSV и скачивание файла браузером
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Ячейка CSV: как есть или в кавычках
#[derive(Debug, Clone, PartialEq)]
pub enum CsvCell {
    Plain(String),
    Quoted(String),
}

/// Trait для типов, которые могут быть экспортированы в CSV
pub trait CsvExportable {
    /// Возвращает массив заголовков колонок
    fn headers() -> Vec<&'static str>;

    /// Преобразует объект в ячейки строки CSV
    fn to_csv_row(&self) -> Vec<CsvCell>;
}

/// Собирает CSV: UTF-8 BOM, заголовок, по строке на элемент, разделитель `,`.
/// Строки соединяются `\n` без завершающего перевода строки
pub fn build_csv<T: CsvExportable>(data: &[T]) -> String {
    let mut lines = Vec::with_capacity(data.len() + 1);
    lines.push(T::headers().join(","));

    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(render_cell).collect();
        lines.push(row.join(","));
    }

    // UTF-8 BOM для корректного открытия в Excel
    format!("\u{FEFF}{}", lines.join("\n"))
}

fn render_cell(cell: &CsvCell) -> String {
    match cell {
        CsvCell::Plain(value) => value.clone(),
        // Удваиваем кавычки внутри значения
        CsvCell::Quoted(value) => format!("\"{}\"", value.replace('"', "\"\"")),
    }
}

/// Экспортирует список в CSV файл и инициирует скачивание
pub fn export_to_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    let content = build_csv(data);
    let blob = create_csv_blob(&content)?;
    download_blob(&blob, filename)
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
