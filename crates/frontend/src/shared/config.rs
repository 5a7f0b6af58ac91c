use contracts::domain::a001_resource::ResourceQuery;
use contracts::domain::a002_resource_submission::form_state::SUCCESS_MESSAGE_DURATION_MS;
use contracts::domain::common::GeoPoint;
use contracts::enums::resource_category::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Настройки карты
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: GeoPoint,
    pub initial_zoom: f64,
    /// Масштаб при переходе к ресурсу из карточки
    pub focus_zoom: f64,
    pub max_zoom: u8,
    pub tile_url: String,
    pub attribution: String,
    /// Задержка перед `invalidateSize()` после первичной вёрстки
    pub invalidate_delay_ms: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: GeoPoint::new(40.715, -74.000),
            initial_zoom: 13.0,
            focus_zoom: 16.0,
            max_zoom: 19,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
                .to_string(),
            invalidate_delay_ms: 100,
        }
    }
}

/// Настройки страницы справочника
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryConfig {
    pub map: MapConfig,
    pub success_message_ms: u32,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            map: MapConfig::default(),
            success_message_ms: SUCCESS_MESSAGE_DURATION_MS,
        }
    }
}

/// Состояние фильтра в строке запроса: `?category=food&q=meals`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

impl DirectoryQuery {
    pub fn from_search(search: &str) -> Self {
        match serde_qs::from_str(search.trim_start_matches('?')) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("Ignoring malformed query string '{}': {}", search, e);
                Self::default()
            }
        }
    }

    /// Фильтр из URL; неизвестная категория заменяется на "all"
    pub fn to_resource_query(&self) -> ResourceQuery {
        let category = match self.category.as_deref() {
            None => CategoryFilter::All,
            Some(code) => code.parse().unwrap_or_else(|e| {
                log::warn!("{}; falling back to all categories", e);
                CategoryFilter::All
            }),
        };
        ResourceQuery::new(category, self.q.clone().unwrap_or_default())
    }

    pub fn from_resource_query(query: &ResourceQuery) -> Self {
        let term = query.term.trim();
        Self {
            category: match query.category {
                CategoryFilter::All => None,
                other => Some(other.code().to_string()),
            },
            q: (!term.is_empty()).then(|| term.to_string()),
        }
    }

    pub fn to_search(&self) -> String {
        serde_qs::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::resource_category::ResourceCategory;

    #[test]
    fn test_default_map_config() {
        let config = DirectoryConfig::default();
        assert_eq!(config.map.center, GeoPoint::new(40.715, -74.0));
        assert_eq!(config.map.initial_zoom, 13.0);
        assert_eq!(config.map.focus_zoom, 16.0);
        assert_eq!(config.success_message_ms, 8000);
    }

    #[test]
    fn test_query_from_search() {
        let query = DirectoryQuery::from_search("?category=food&q=hot%20meals");
        assert_eq!(query.category.as_deref(), Some("food"));
        assert_eq!(query.q.as_deref(), Some("hot meals"));

        let resource_query = query.to_resource_query();
        assert_eq!(resource_query.category, CategoryFilter::Only(ResourceCategory::Food));
        assert_eq!(resource_query.term, "hot meals");
    }

    #[test]
    fn test_empty_search_is_unfiltered() {
        let query = DirectoryQuery::from_search("");
        assert_eq!(query, DirectoryQuery::default());
        assert!(query.to_resource_query().is_unfiltered());
    }

    #[test]
    fn test_unknown_category_falls_back_to_all() {
        let query = DirectoryQuery::from_search("category=pets");
        assert_eq!(query.to_resource_query().category, CategoryFilter::All);
    }

    #[test]
    fn test_unfiltered_query_serializes_empty() {
        let query = DirectoryQuery::from_resource_query(&ResourceQuery::new(CategoryFilter::All, "  "));
        assert_eq!(query.to_search(), "");
    }

    #[test]
    fn test_to_search_round_trip() {
        let original = ResourceQuery::new(ResourceCategory::Health.into(), " clinic ");
        let search = DirectoryQuery::from_resource_query(&original).to_search();
        let restored = DirectoryQuery::from_search(&search).to_resource_query();
        assert_eq!(restored, ResourceQuery::new(ResourceCategory::Health.into(), "clinic"));
    }
}
