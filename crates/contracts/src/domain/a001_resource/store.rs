use super::aggregate::{Resource, ResourceId};
use super::filter::filter_resources;
use super::seed::SEED_RESOURCES;
use crate::enums::resource_category::CategoryFilter;
use std::collections::HashSet;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("resource id must be positive (record '{name}')")]
    InvalidId { name: String },
    #[error("duplicate resource id {0}")]
    DuplicateId(ResourceId),
    #[error("resource {0} has an empty name")]
    EmptyName(ResourceId),
}

/// Неизменяемое хранилище ресурсов на всё время жизни страницы
#[derive(Debug, Clone)]
pub struct ResourceStore {
    records: Arc<[Resource]>,
}

impl ResourceStore {
    /// Создать хранилище с проверкой инвариантов
    pub fn new(records: Vec<Resource>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if record.id.value() == 0 {
                return Err(StoreError::InvalidId {
                    name: record.name.clone(),
                });
            }
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            if record.name.trim().is_empty() {
                return Err(StoreError::EmptyName(record.id));
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Хранилище со встроенным справочником
    pub fn seeded() -> Result<Self, StoreError> {
        Self::new(SEED_RESOURCES.to_vec())
    }

    pub fn all(&self) -> &[Resource] {
        &self.records
    }

    pub fn get(&self, id: ResourceId) -> Option<&Resource> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Выборка по фильтру; всегда по полному списку
    pub fn filter(&self, category: &CategoryFilter, term: &str) -> Vec<Resource> {
        filter_resources(&self.records, category, term)
    }
}

impl Default for ResourceStore {
    fn default() -> Self {
        Self {
            records: Vec::new().into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::resource_category::ResourceCategory;

    #[test]
    fn test_seeded_store() {
        let store = ResourceStore::seeded().unwrap();
        assert_eq!(store.len(), 5);
        assert_eq!(
            store.get(ResourceId::new(2)).map(|r| r.name.as_str()),
            Some("Safe Haven Shelter")
        );
        assert!(store.get(ResourceId::new(99)).is_none());
        assert!(store.all().iter().all(|r| r.location().is_some()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = SEED_RESOURCES.to_vec();
        records[4].id = ResourceId::new(1);
        assert_eq!(
            ResourceStore::new(records).unwrap_err(),
            StoreError::DuplicateId(ResourceId::new(1))
        );
    }

    #[test]
    fn test_zero_id_rejected() {
        let mut records = SEED_RESOURCES.to_vec();
        records[0].id = ResourceId::new(0);
        assert!(matches!(
            ResourceStore::new(records),
            Err(StoreError::InvalidId { .. })
        ));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut records = SEED_RESOURCES.to_vec();
        records[3].name = "   ".into();
        assert_eq!(
            ResourceStore::new(records).unwrap_err(),
            StoreError::EmptyName(ResourceId::new(4))
        );
    }

    #[test]
    fn test_store_filter_uses_full_list() {
        let store = ResourceStore::seeded().unwrap();
        let first = store.filter(&ResourceCategory::Food.into(), "");
        let second = store.filter(&CategoryFilter::All, "tutoring");
        assert_eq!(first.len(), 2);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].id, ResourceId::new(4));
    }
}
