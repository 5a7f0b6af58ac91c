// ============================================================================
// LEAFLET FFI
// ============================================================================
// Только обёртки над глобальным `L` (leaflet.js подключён в index.html)
// ============================================================================

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

#[wasm_bindgen]
extern "C" {
    /// `L.Map`
    #[derive(Debug, Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    pub fn create_map(container: &HtmlElement) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &LeafletMap, center: &Array, zoom: f64) -> LeafletMap;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &LeafletMap) -> LeafletMap;

    /// `L.TileLayer`
    #[derive(Debug, Clone)]
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    /// `L.LayerGroup` — коллекция маркеров
    #[derive(Debug, Clone)]
    pub type LayerGroup;

    #[wasm_bindgen(js_namespace = L, js_name = layerGroup)]
    pub fn layer_group() -> LayerGroup;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &LayerGroup, map: &LeafletMap) -> LayerGroup;

    #[wasm_bindgen(method, js_name = clearLayers)]
    pub fn clear_layers(this: &LayerGroup) -> LayerGroup;

    /// `L.Marker`
    #[derive(Debug, Clone)]
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, content: &HtmlElement) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_layer(this: &Marker, layer: &LayerGroup) -> Marker;
}

/// Координаты в формате Leaflet: `[lat, lng]`
pub fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}
