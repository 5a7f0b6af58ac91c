use super::resource_icon::ResourceIcon;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Код фильтра "все категории"
pub const ALL_CATEGORIES_CODE: &str = "all";

/// Неизвестный код категории
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource category: '{0}'")]
pub struct UnknownCategory(pub String);

/// Категории ресурсов (закрытый список)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Food,
    Housing,
    Health,
    Education,
    Employment,
    Legal,
}

impl ResourceCategory {
    /// Код категории (значение `<select>` и `data-category`)
    pub fn code(&self) -> &'static str {
        match self {
            ResourceCategory::Food => "food",
            ResourceCategory::Housing => "housing",
            ResourceCategory::Health => "health",
            ResourceCategory::Education => "education",
            ResourceCategory::Employment => "employment",
            ResourceCategory::Legal => "legal",
        }
    }

    /// Человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ResourceCategory::Food => "Food",
            ResourceCategory::Housing => "Housing",
            ResourceCategory::Health => "Health",
            ResourceCategory::Education => "Education",
            ResourceCategory::Employment => "Employment",
            ResourceCategory::Legal => "Legal",
        }
    }

    /// Подпись для карточки-ярлыка на главной
    pub fn tagline(&self) -> &'static str {
        match self {
            ResourceCategory::Food => "Pantries, meals and groceries",
            ResourceCategory::Housing => "Shelters and housing help",
            ResourceCategory::Health => "Clinics and medical care",
            ResourceCategory::Education => "Tutoring and classes",
            ResourceCategory::Employment => "Job training and placement",
            ResourceCategory::Legal => "Free legal aid",
        }
    }

    pub fn default_icon(&self) -> ResourceIcon {
        match self {
            ResourceCategory::Food => ResourceIcon::Utensils,
            ResourceCategory::Housing => ResourceIcon::HouseChimney,
            ResourceCategory::Health => ResourceIcon::TruckMedical,
            ResourceCategory::Education => ResourceIcon::BookOpen,
            ResourceCategory::Employment => ResourceIcon::Briefcase,
            ResourceCategory::Legal => ResourceIcon::ScaleBalanced,
        }
    }

    /// Все категории в порядке выпадающего списка
    pub fn all() -> Vec<ResourceCategory> {
        vec![
            ResourceCategory::Food,
            ResourceCategory::Housing,
            ResourceCategory::Health,
            ResourceCategory::Education,
            ResourceCategory::Employment,
            ResourceCategory::Legal,
        ]
    }

    /// Парсинг из кода (регистр учитывается)
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.code() == code)
    }
}

impl fmt::Display for ResourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ResourceCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Значение фильтра по категории: все либо одна конкретная
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ResourceCategory),
}

impl CategoryFilter {
    pub fn code(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_CODE,
            CategoryFilter::Only(category) => category.code(),
        }
    }

    pub fn matches(&self, category: ResourceCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(expected) => *expected == category,
        }
    }
}

impl From<ResourceCategory> for CategoryFilter {
    fn from(category: ResourceCategory) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL_CATEGORIES_CODE {
            return Ok(CategoryFilter::All);
        }
        s.parse::<ResourceCategory>().map(CategoryFilter::Only)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for category in ResourceCategory::all() {
            assert_eq!(ResourceCategory::from_code(category.code()), Some(category));
        }
    }

    #[test]
    fn test_code_is_case_sensitive() {
        assert_eq!(ResourceCategory::from_code("Food"), None);
        assert_eq!(
            "FOOD".parse::<ResourceCategory>(),
            Err(UnknownCategory("FOOD".to_string()))
        );
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>(), Ok(CategoryFilter::All));
        assert_eq!(
            "housing".parse::<CategoryFilter>(),
            Ok(CategoryFilter::Only(ResourceCategory::Housing))
        );
        assert!("pets".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(ResourceCategory::Legal));
        assert!(CategoryFilter::Only(ResourceCategory::Food).matches(ResourceCategory::Food));
        assert!(!CategoryFilter::Only(ResourceCategory::Food).matches(ResourceCategory::Health));
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&ResourceCategory::Education).unwrap();
        assert_eq!(json, "\"education\"");
    }
}
