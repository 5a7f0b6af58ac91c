//! Мелкие помощники для работы с DOM вне реактивной системы
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Плавно прокрутить страницу к элементу с указанным id.
/// Возвращает `false`, если элемент не найден.
pub fn scroll_to_id(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        log::warn!("scroll target #{} not found", id);
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Текущая строка запроса без ведущего `?`
pub fn location_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .map(|s| s.trim_start_matches('?').to_string())
        .unwrap_or_default()
}

/// Заменить строку запроса без перезагрузки и новой записи истории
pub fn replace_search(query_string: &str) {
    // Only update URL if it actually changed
    if location_search() == query_string {
        return;
    }

    let Some(w) = web_sys::window() else {
        return;
    };
    let new_url = if query_string.is_empty() {
        w.location().pathname().unwrap_or_else(|_| "/".to_string())
    } else {
        format!("?{}", query_string)
    };

    if let Ok(history) = w.history() {
        if let Err(e) =
            history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(&new_url))
        {
            log::warn!("history.replaceState failed: {:?}", e);
        }
    }
}
