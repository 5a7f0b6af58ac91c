use super::aggregate::{Resource, ResourceId};
use crate::enums::resource_category::ResourceCategory;
use crate::enums::resource_icon::ResourceIcon;
use once_cell::sync::Lazy;

/// Справочник ресурсов, встроенный в приложение
pub static SEED_RESOURCES: Lazy<Vec<Resource>> = Lazy::new(|| {
    vec![
        seed(
            1,
            "Downtown Food Pantry",
            ResourceCategory::Food,
            "125 Main St, City Center",
            Some("(555) 123-0001"),
            "Provides emergency food boxes and hot meals every weekday from 11 AM to 2 PM.",
            Some((40.7128, -74.0060)),
            ResourceIcon::Utensils,
        ),
        seed(
            2,
            "Safe Haven Shelter",
            ResourceCategory::Housing,
            "442 Oak Avenue, Westside",
            Some("(555) 123-0002"),
            "Emergency overnight shelter for individuals and families. Intake begins at 4 PM daily.",
            Some((40.7200, -74.0100)),
            ResourceIcon::HouseChimney,
        ),
        seed(
            3,
            "Community Health Clinic",
            ResourceCategory::Health,
            "890 Wellness Way, Eastside",
            Some("(555) 123-0003"),
            "Free and low-cost medical and dental care. Walk-ins welcome for urgent needs.",
            Some((40.7150, -73.9950)),
            ResourceIcon::TruckMedical,
        ),
        seed(
            4,
            "Future Builders Tutoring",
            ResourceCategory::Education,
            "200 Learning Blvd, Northside",
            Some("(555) 123-0004"),
            "Free after-school tutoring for K-12 students. Adult literacy classes available on weekends.",
            Some((40.7300, -73.9900)),
            ResourceIcon::BookOpen,
        ),
        seed(
            5,
            "Neighborhood Soup Kitchen",
            ResourceCategory::Food,
            "55 Community Rd, Southside",
            Some("(555) 123-0005"),
            "Hot dinner served daily at 6 PM. Everyone welcome, no questions asked.",
            Some((40.7050, -74.0150)),
            ResourceIcon::Utensils,
        ),
    ]
});

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u32,
    name: &str,
    category: ResourceCategory,
    address: &str,
    phone: Option<&str>,
    desc: &str,
    location: Option<(f64, f64)>,
    icon: ResourceIcon,
) -> Resource {
    Resource {
        id: ResourceId::new(id),
        name: name.to_string(),
        category,
        address: address.to_string(),
        phone: phone.map(str::to_string),
        desc: desc.to_string(),
        lat: location.map(|(lat, _)| lat),
        lng: location.map(|(_, lng)| lng),
        icon,
    }
}
