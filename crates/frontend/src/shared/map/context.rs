use super::leaflet::{self, LayerGroup, LeafletMap};
use super::markers::{render_markers, MarkerLayer, MarkerSpec};
use crate::shared::config::MapConfig;
use crate::shared::dom::scroll_to_id;
use crate::shared::icons::icon_markup;
use contracts::domain::a001_resource::Resource;
use contracts::domain::common::GeoPoint;
use leptos::prelude::*;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlElement;

/// id секции, к которой прокручивается страница при фокусе на ресурсе
pub const MAP_SECTION_ID: &str = "map-section";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TileLayerOptions<'a> {
    attribution: &'a str,
    max_zoom: u8,
}

/// Слой маркеров Leaflet
#[derive(Debug, Clone)]
pub struct LeafletMarkerLayer {
    group: LayerGroup,
}

impl MarkerLayer for LeafletMarkerLayer {
    fn clear(&self) {
        self.group.clear_layers();
    }

    fn add_marker(&self, spec: &MarkerSpec) {
        let marker = leaflet::marker(&leaflet::lat_lng(spec.point.lat, spec.point.lng));
        match build_popup(spec) {
            Ok(content) => {
                marker.bind_popup(&content);
            }
            Err(e) => log::warn!("Popup for '{}' not built: {:?}", spec.popup.name, e),
        }
        marker.add_to_layer(&self.group);
    }
}

fn build_popup(spec: &MarkerSpec) -> Result<HtmlElement, JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;

    let root: HtmlElement = document.create_element("div")?.dyn_into()?;
    root.set_class_name("map-popup");

    let title = document.create_element("h3")?;
    title.set_class_name("map-popup__title");
    title.set_text_content(Some(&spec.popup.name));

    let category = document.create_element("p")?;
    category.set_class_name("map-popup__category");
    let glyph = document.create_element("span")?;
    glyph.set_class_name("map-popup__icon");
    glyph.set_inner_html(&icon_markup(spec.popup.icon.code()));
    category.append_child(&glyph)?;
    category.append_child(&document.create_text_node(&format!(" {}", spec.popup.category)))?;

    let address = document.create_element("p")?;
    address.set_class_name("map-popup__address");
    address.set_text_content(Some(&spec.popup.address));

    root.append_child(&title)?;
    root.append_child(&category)?;
    root.append_child(&address)?;
    Ok(root)
}

/// Карта и её слой маркеров; создаётся один раз при монтировании
#[derive(Debug, Clone)]
pub struct LeafletMapContext {
    map: LeafletMap,
    markers: LeafletMarkerLayer,
    focus_zoom: f64,
}

impl LeafletMapContext {
    pub fn init(container: &HtmlElement, config: &MapConfig) -> Result<Self, JsValue> {
        let map = leaflet::create_map(container)?;
        map.set_view(
            &leaflet::lat_lng(config.center.lat, config.center.lng),
            config.initial_zoom,
        );

        let options = serde_wasm_bindgen::to_value(&TileLayerOptions {
            attribution: &config.attribution,
            max_zoom: config.max_zoom,
        })?;
        leaflet::tile_layer(&config.tile_url, &options).add_to_map(&map);

        let group = leaflet::layer_group();
        group.add_to_map(&map);

        Ok(Self {
            map,
            markers: LeafletMarkerLayer { group },
            focus_zoom: config.focus_zoom,
        })
    }

    pub fn render(&self, data: &[Resource]) -> usize {
        render_markers(&self.markers, data)
    }

    /// Центрировать карту на точке и прокрутить страницу к карте
    pub fn focus_on(&self, point: GeoPoint) {
        self.map
            .set_view(&leaflet::lat_lng(point.lat, point.lng), self.focus_zoom);
        scroll_to_id(MAP_SECTION_ID);
    }

    pub fn invalidate_size(&self) {
        self.map.invalidate_size();
    }
}

/// Ссылка на карту для контекста Leptos.
///
/// Объекты Leaflet живут только в потоке браузера, поэтому хранятся
/// в локальном хранилище арены.
#[derive(Clone, Copy)]
pub struct MapHandle(StoredValue<Option<LeafletMapContext>, LocalStorage>);

impl MapHandle {
    pub fn new() -> Self {
        Self(StoredValue::new_local(None))
    }

    pub fn is_ready(&self) -> bool {
        self.0.with_value(|map| map.is_some())
    }

    pub fn install(&self, map: LeafletMapContext) {
        self.0.set_value(Some(map));
    }

    /// Перерисовать маркеры; до инициализации карты ничего не делает
    pub fn render(&self, data: &[Resource]) -> usize {
        self.0
            .with_value(|map| map.as_ref().map(|m| m.render(data)))
            .unwrap_or(0)
    }

    pub fn focus_on(&self, point: GeoPoint) -> bool {
        self.0.with_value(|map| match map {
            Some(m) => {
                m.focus_on(point);
                true
            }
            None => {
                log::warn!("focus_on called before the map was initialized");
                false
            }
        })
    }

    pub fn invalidate_size(&self) {
        self.0.with_value(|map| {
            if let Some(m) = map {
                m.invalidate_size();
            }
        });
    }
}

impl Default for MapHandle {
    fn default() -> Self {
        Self::new()
    }
}
