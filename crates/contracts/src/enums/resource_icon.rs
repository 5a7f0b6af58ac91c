use serde::{Deserialize, Serialize};

/// Символ, которым ресурс отображается в карточке и во всплывающем окне карты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceIcon {
    #[serde(rename = "fa-utensils")]
    Utensils,
    #[serde(rename = "fa-house-chimney")]
    HouseChimney,
    #[serde(rename = "fa-truck-medical")]
    TruckMedical,
    #[serde(rename = "fa-book-open")]
    BookOpen,
    #[serde(rename = "fa-briefcase")]
    Briefcase,
    #[serde(rename = "fa-scale-balanced")]
    ScaleBalanced,
}

impl ResourceIcon {
    pub fn code(&self) -> &'static str {
        match self {
            ResourceIcon::Utensils => "fa-utensils",
            ResourceIcon::HouseChimney => "fa-house-chimney",
            ResourceIcon::TruckMedical => "fa-truck-medical",
            ResourceIcon::BookOpen => "fa-book-open",
            ResourceIcon::Briefcase => "fa-briefcase",
            ResourceIcon::ScaleBalanced => "fa-scale-balanced",
        }
    }
}
