use contracts::enums::resource_icon::ResourceIcon;
use leptos::prelude::*;

const SVG_OPEN: &str = r#"<svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">"#;

/// Разметка иконки интерфейса; неизвестное имя даёт пустой круг
fn svg_body(name: &str) -> &'static str {
    match name {
        "search" => r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.35-4.35"/>"#,
        "location" => r#"<path d="M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"/><circle cx="12" cy="10" r="3"/>"#,
        "phone" => r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z"/>"#,
        "map" => r#"<path d="M1 6v16l7-4 8 4 7-4V2l-7 4-8-4-7 4z"/><path d="M8 2v16"/><path d="M16 6v16"/>"#,
        "check" => r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
        "plus" => r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#,
        "heart" => r#"<path d="M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78L12 21.23l8.84-8.84a5.5 5.5 0 0 0 0-7.78z"/>"#,
        "fa-utensils" => r#"<path d="M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2"/><path d="M7 2v20"/><path d="M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3zm0 0v7"/>"#,
        "fa-house-chimney" => r#"<path d="M3 10 12 3l9 7v11a1 1 0 0 1-1 1H4a1 1 0 0 1-1-1z"/><path d="M17 6V3h2v4.5"/><path d="M9 22v-7h6v7"/>"#,
        "fa-truck-medical" => r#"<rect x="1" y="6" width="14" height="11" rx="1"/><path d="M15 10h4l3 3v4h-7"/><circle cx="6" cy="18" r="2"/><circle cx="18" cy="18" r="2"/><path d="M8 9v5"/><path d="M5.5 11.5h5"/>"#,
        "fa-book-open" => r#"<path d="M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z"/><path d="M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z"/>"#,
        "fa-briefcase" => r#"<rect x="2" y="7" width="20" height="14" rx="2"/><path d="M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"/>"#,
        "fa-scale-balanced" => r#"<path d="M12 3v18"/><path d="M5 21h14"/><path d="M3 7h18"/><path d="m6 7-3 7a3 3 0 0 0 6 0z"/><path d="m18 7-3 7a3 3 0 0 0 6 0z"/>"#,
        _ => r#"<circle cx="12" cy="12" r="10"/>"#,
    }
}

/// Полная SVG-разметка иконки (для DOM вне Leptos, например всплывающих окон карты)
pub fn icon_markup(name: &str) -> String {
    format!("{}{}</svg>", SVG_OPEN, svg_body(name))
}

pub fn icon(name: &str) -> AnyView {
    let markup = icon_markup(name);
    view! { <span class="icon" inner_html=markup></span> }.into_any()
}

pub fn resource_icon(icon_id: ResourceIcon) -> AnyView {
    icon(icon_id.code())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resource_icon_has_markup() {
        let fallback = svg_body("unknown");
        for icon_id in [
            ResourceIcon::Utensils,
            ResourceIcon::HouseChimney,
            ResourceIcon::TruckMedical,
            ResourceIcon::BookOpen,
            ResourceIcon::Briefcase,
            ResourceIcon::ScaleBalanced,
        ] {
            assert_ne!(svg_body(icon_id.code()), fallback, "{:?}", icon_id);
        }
    }

    #[test]
    fn test_icon_markup_is_closed_svg() {
        let markup = icon_markup("search");
        assert!(markup.starts_with("<svg"));
        assert!(markup.ends_with("</svg>"));
    }
}
