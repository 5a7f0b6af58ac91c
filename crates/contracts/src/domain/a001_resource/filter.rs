use super::aggregate::Resource;
use super::store::ResourceStore;
use crate::enums::resource_category::CategoryFilter;

/// Фильтрует ресурсы по категории и по подстроке (без учёта регистра).
///
/// Всегда применяется к полному списку и возвращает новую
/// последовательность в исходном порядке. Пустой после `trim` термин
/// не ограничивает выборку.
pub fn filter_resources(all: &[Resource], category: &CategoryFilter, term: &str) -> Vec<Resource> {
    let term = term.trim().to_lowercase();

    all.iter()
        .filter(|r| category.matches(r.category))
        .filter(|r| term.is_empty() || r.matches_term(&term))
        .cloned()
        .collect()
}

/// Текущие значения элементов управления фильтром
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResourceQuery {
    pub category: CategoryFilter,
    pub term: String,
}

impl ResourceQuery {
    pub fn new(category: CategoryFilter, term: impl Into<String>) -> Self {
        Self {
            category,
            term: term.into(),
        }
    }

    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.term.trim().is_empty()
    }

    pub fn apply(&self, store: &ResourceStore) -> Vec<Resource> {
        filter_resources(store.all(), &self.category, &self.term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_resource::aggregate::ResourceId;
    use crate::enums::resource_category::ResourceCategory;

    fn store() -> ResourceStore {
        ResourceStore::seeded().expect("seed data is valid")
    }

    fn ids(resources: &[Resource]) -> Vec<u32> {
        resources.iter().map(|r| r.id.value()).collect()
    }

    #[test]
    fn test_no_filters_is_identity() {
        let store = store();
        let result = filter_resources(store.all(), &CategoryFilter::All, "");
        assert_eq!(result.as_slice(), store.all());
    }

    #[test]
    fn test_whitespace_term_is_ignored() {
        let store = store();
        let result = filter_resources(store.all(), &CategoryFilter::All, "   \t");
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_category_food() {
        let store = store();
        let result = filter_resources(store.all(), &ResourceCategory::Food.into(), "");
        assert_eq!(ids(&result), vec![1, 5]);
    }

    #[test]
    fn test_term_emergency_matches_descriptions() {
        let store = store();
        let result = filter_resources(store.all(), &CategoryFilter::All, "emergency");
        assert_eq!(ids(&result), vec![1, 2]);
    }

    #[test]
    fn test_term_is_case_insensitive() {
        let store = store();
        let upper = filter_resources(store.all(), &CategoryFilter::All, "FOOD");
        let lower = filter_resources(store.all(), &CategoryFilter::All, "food");
        assert_eq!(upper, lower);
        assert_eq!(ids(&lower), vec![1, 5]);
    }

    #[test]
    fn test_term_is_trimmed_before_matching() {
        let store = store();
        let result = filter_resources(store.all(), &CategoryFilter::All, "  clinic  ");
        assert_eq!(ids(&result), vec![3]);
    }

    #[test]
    fn test_term_matches_address() {
        let store = store();
        let result = filter_resources(store.all(), &CategoryFilter::All, "westside");
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_category_and_term_must_both_hold() {
        let store = store();
        let result = filter_resources(store.all(), &ResourceCategory::Housing.into(), "clinic");
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_category_yields_empty() {
        let store = store();
        let result = filter_resources(store.all(), &ResourceCategory::Legal.into(), "");
        assert!(result.is_empty());
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let store = store();
        let queries = [
            (CategoryFilter::All, "e"),
            (CategoryFilter::All, "daily"),
            (ResourceCategory::Food.into(), "hot"),
            (ResourceCategory::Education.into(), ""),
            (CategoryFilter::All, "zzz"),
        ];

        for (category, term) in queries {
            let result = filter_resources(store.all(), &category, term);
            let mut cursor = store.all().iter();
            for item in &result {
                assert!(
                    cursor.any(|r| r.id == item.id),
                    "{:?} is out of order for ({}, {:?})",
                    item.id,
                    category,
                    term
                );
            }
        }
    }

    #[test]
    fn test_filter_does_not_mutate_store() {
        let store = store();
        let before = store.all().to_vec();
        let _ = filter_resources(store.all(), &ResourceCategory::Health.into(), "free");
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn test_query_apply_and_unfiltered() {
        let store = store();
        let query = ResourceQuery::new(ResourceCategory::Food.into(), "soup");
        assert!(!query.is_unfiltered());
        assert_eq!(
            query.apply(&store).iter().map(|r| r.id).collect::<Vec<_>>(),
            vec![ResourceId::new(5)]
        );
        assert!(ResourceQuery::new(CategoryFilter::All, "  ").is_unfiltered());
    }
}
