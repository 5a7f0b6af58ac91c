//! Карта ресурсов: привязки к Leaflet, отрисовка маркеров и контекст карты

pub mod context;
pub mod leaflet;
pub mod markers;

pub use context::{LeafletMapContext, MapHandle};
pub use markers::{render_markers, MarkerLayer, MarkerPopup, MarkerSpec};
