use contracts::domain::a001_resource::{Resource, ResourceId};
use contracts::domain::common::GeoPoint;
use contracts::enums::resource_icon::ResourceIcon;

pub const EMPTY_RESULTS_MESSAGE: &str = "No resources found matching your criteria.";
pub const PHONE_PLACEHOLDER: &str = "Not provided";

/// Данные одной карточки ресурса
#[derive(Clone, Debug, PartialEq)]
pub struct ResourceCard {
    pub id: ResourceId,
    pub category: String,
    pub icon: ResourceIcon,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub desc: String,
    /// Куда центрировать карту; `None` — кнопка "View on Map" неактивна
    pub focus: Option<GeoPoint>,
}

impl From<&Resource> for ResourceCard {
    fn from(r: &Resource) -> Self {
        Self {
            id: r.id,
            category: r.category.code().to_string(),
            icon: r.icon,
            name: r.name.clone(),
            address: r.address.clone(),
            phone: r
                .phone
                .clone()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| PHONE_PLACEHOLDER.to_string()),
            desc: r.desc.clone(),
            focus: r.location(),
        }
    }
}

/// Содержимое сетки: заглушка либо карточки в порядке выборки
#[derive(Clone, Debug, PartialEq)]
pub enum GridContent {
    Empty(&'static str),
    Cards(Vec<ResourceCard>),
}

impl GridContent {
    pub fn from_resources(data: &[Resource]) -> Self {
        if data.is_empty() {
            return GridContent::Empty(EMPTY_RESULTS_MESSAGE);
        }
        GridContent::Cards(data.iter().map(ResourceCard::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_resource::ResourceStore;

    fn seeded() -> Vec<Resource> {
        ResourceStore::seeded().unwrap().all().to_vec()
    }

    #[test]
    fn test_empty_data_renders_placeholder() {
        assert_eq!(
            GridContent::from_resources(&[]),
            GridContent::Empty("No resources found matching your criteria.")
        );
    }

    #[test]
    fn test_cards_keep_input_order() {
        let mut data = seeded();
        data.reverse();
        let GridContent::Cards(cards) = GridContent::from_resources(&data) else {
            panic!("expected cards");
        };
        let ids: Vec<u32> = cards.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_card_fields() {
        let card = ResourceCard::from(&seeded()[1]);
        assert_eq!(card.category, "housing");
        assert_eq!(card.icon, ResourceIcon::HouseChimney);
        assert_eq!(card.name, "Safe Haven Shelter");
        assert_eq!(card.address, "442 Oak Avenue, Westside");
        assert_eq!(card.phone, "(555) 123-0002");
        assert_eq!(card.focus, Some(GeoPoint::new(40.7200, -74.0100)));
    }

    #[test]
    fn test_missing_phone_uses_placeholder() {
        let mut resource = seeded().remove(0);
        resource.phone = None;
        assert_eq!(ResourceCard::from(&resource).phone, "Not provided");

        resource.phone = Some(String::new());
        assert_eq!(ResourceCard::from(&resource).phone, "Not provided");
    }

    #[test]
    fn test_missing_coordinates_disable_focus() {
        let mut resource = seeded().remove(3);
        resource.lat = None;
        assert_eq!(ResourceCard::from(&resource).focus, None);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let data = seeded();
        assert_eq!(
            GridContent::from_resources(&data),
            GridContent::from_resources(&data)
        );
    }
}
