use crate::domain::common::GeoPoint;
use crate::enums::resource_category::ResourceCategory;
use crate::enums::resource_icon::ResourceIcon;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Идентификатор ресурса (положительное целое, задаётся в данных)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(pub u32);

impl ResourceId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Ресурс взаимопомощи (одна организация из справочника)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub name: String,
    pub category: ResourceCategory,
    pub address: String,
    pub phone: Option<String>,
    pub desc: String,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub icon: ResourceIcon,
}

impl Resource {
    /// Координаты ресурса; `None`, если хотя бы одна отсутствует
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }

    /// Совпадение с поисковым термином; `term` уже приведён к нижнему регистру
    pub fn matches_term(&self, term: &str) -> bool {
        [
            self.name.as_str(),
            self.desc.as_str(),
            self.category.code(),
            self.address.as_str(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Resource {
        Resource {
            id: ResourceId::new(7),
            name: "Riverside Legal Aid".into(),
            category: ResourceCategory::Legal,
            address: "9 Court St".into(),
            phone: None,
            desc: "Tenant rights consultations.".into(),
            lat: Some(40.7),
            lng: None,
            icon: ResourceIcon::ScaleBalanced,
        }
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        let mut resource = sample();
        assert_eq!(resource.location(), None);

        resource.lng = Some(-74.0);
        assert_eq!(resource.location(), Some(GeoPoint::new(40.7, -74.0)));
    }

    #[test]
    fn test_matches_term_checks_every_field() {
        let resource = sample();
        assert!(resource.matches_term("riverside"));
        assert!(resource.matches_term("tenant"));
        assert!(resource.matches_term("legal"));
        assert!(resource.matches_term("court st"));
        assert!(!resource.matches_term("clinic"));
    }
}
