use crate::shared::config::{DirectoryConfig, DirectoryQuery};
use crate::shared::dom::{location_search, replace_search, scroll_to_id};
use crate::shared::map::MapHandle;
use contracts::domain::a001_resource::{Resource, ResourceId, ResourceQuery, ResourceStore};
use contracts::enums::resource_category::{CategoryFilter, ResourceCategory};
use leptos::prelude::*;

/// id секции со списком ресурсов
pub const RESOURCES_SECTION_ID: &str = "resources";

/// Контекст справочника: хранилище, значения фильтров, результат
/// последнего применения фильтра и карта.
///
/// Каждое действие пользователя заново фильтрует полное хранилище
/// и заменяет `results`; сетка карточек и маркеры карты следуют за ним.
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    pub store: StoredValue<ResourceStore>,
    pub config: StoredValue<DirectoryConfig>,
    /// Значение выпадающего списка категорий
    pub category: RwSignal<CategoryFilter>,
    /// Текст в строке поиска (применяется только по действию)
    pub search_text: RwSignal<String>,
    /// Последний применённый фильтр
    pub applied: RwSignal<ResourceQuery>,
    pub results: RwSignal<Vec<Resource>>,
    pub map: MapHandle,
}

impl DirectoryContext {
    pub fn new(store: ResourceStore, config: DirectoryConfig) -> Self {
        let results = store.all().to_vec();
        Self {
            store: StoredValue::new(store),
            config: StoredValue::new(config),
            category: RwSignal::new(CategoryFilter::All),
            search_text: RwSignal::new(String::new()),
            applied: RwSignal::new(ResourceQuery::default()),
            results: RwSignal::new(results),
            map: MapHandle::new(),
        }
    }

    /// Восстановить фильтр из строки запроса и синхронизировать её
    /// с каждым применённым фильтром.
    pub fn init_router_integration(&self) {
        let query = DirectoryQuery::from_search(&location_search()).to_resource_query();
        if !query.is_unfiltered() {
            log::debug!("Restoring filter from URL: {:?}", query);
            self.category.set(query.category);
            self.search_text.set(query.term.clone());
            self.apply(query.category, &query.term);
        }

        let applied = self.applied;
        Effect::new(move |_| {
            let query = applied.get();
            replace_search(&DirectoryQuery::from_resource_query(&query).to_search());
        });
    }

    fn apply(&self, category: CategoryFilter, term: &str) {
        let query = ResourceQuery::new(category, term);
        let results = self.store.with_value(|store| query.apply(store));
        log::debug!(
            "Filter applied: category='{}', term='{}', {} result(s)",
            query.category,
            query.term.trim(),
            results.len()
        );
        self.results.set(results);
        self.applied.set(query);
    }

    /// Выпадающий список: новая категория с текущим текстом поиска
    pub fn select_category(&self, code: &str) {
        let category = match code.parse::<CategoryFilter>() {
            Ok(category) => category,
            Err(e) => {
                log::error!("Category select produced {}", e);
                return;
            }
        };
        self.category.set(category);
        self.apply(category, &self.search_text.get_untracked());
    }

    /// Отправка формы поиска: текущая категория и текст
    pub fn submit_search(&self) {
        self.apply(self.category.get_untracked(), &self.search_text.get_untracked());
        scroll_to_id(RESOURCES_SECTION_ID);
    }

    /// Карточка категории: выставляет выпадающий список и фильтрует
    pub fn pick_category(&self, category: ResourceCategory) {
        self.category.set(category.into());
        self.apply(category.into(), &self.search_text.get_untracked());
    }

    /// "View on Map" из карточки ресурса. `true`, если карта сдвинута.
    pub fn focus_resource(&self, id: ResourceId) -> bool {
        let location = self
            .store
            .with_value(|store| store.get(id).and_then(Resource::location));
        match location {
            Some(point) => {
                log::debug!("Focusing map on resource {}", id);
                self.map.focus_on(point)
            }
            None => {
                log::warn!("Resource {} has no coordinates to focus on", id);
                false
            }
        }
    }
}
