use contracts::domain::a001_resource::Resource;
use contracts::domain::common::GeoPoint;
use contracts::enums::resource_icon::ResourceIcon;

/// Содержимое всплывающего окна маркера
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPopup {
    pub icon: ResourceIcon,
    /// Название категории с заглавной буквы
    pub category: String,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub point: GeoPoint,
    pub popup: MarkerPopup,
}

impl MarkerSpec {
    /// `None` для ресурсов без координат: такие на карту не попадают
    pub fn from_resource(resource: &Resource) -> Option<Self> {
        let point = resource.location()?;
        Some(Self {
            point,
            popup: MarkerPopup {
                icon: resource.icon,
                category: capitalize(resource.category.code()),
                name: resource.name.clone(),
                address: resource.address.clone(),
            },
        })
    }
}

/// Коллекция маркеров карты
pub trait MarkerLayer {
    fn clear(&self);
    fn add_marker(&self, spec: &MarkerSpec);
}

/// Перерисовать маркеры: очистить слой и добавить по маркеру на каждый
/// ресурс с координатами. Возвращает число добавленных маркеров.
pub fn render_markers<L: MarkerLayer + ?Sized>(layer: &L, data: &[Resource]) -> usize {
    layer.clear();

    let mut placed = 0;
    for spec in data.iter().filter_map(MarkerSpec::from_resource) {
        layer.add_marker(&spec);
        placed += 1;
    }
    placed
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
