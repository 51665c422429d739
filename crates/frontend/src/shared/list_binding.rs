//! Filterable view over the category collection that drives a table.

use contracts::domain::a001_category::aggregate::Category;
use contracts::shared::filter::{FilterGroup, SearchFilter};
use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListBinding {
    filters: BTreeMap<FilterGroup, Vec<SearchFilter>>,
    items: Vec<Category>,
    length_final: bool,
    generation: u64,
    loading: bool,
}

impl ListBinding {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the filters of one group. Other groups are kept.
    pub fn filter(&mut self, filters: Vec<SearchFilter>, group: FilterGroup) {
        if filters.is_empty() {
            self.filters.remove(&group);
        } else {
            self.filters.insert(group, filters);
        }
    }

    /// All active filters, group by group
    pub fn filters(&self) -> Vec<SearchFilter> {
        self.filters.values().flatten().cloned().collect()
    }

    pub fn items(&self) -> &[Category] {
        &self.items
    }

    pub fn is_length_final(&self) -> bool {
        self.length_final
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Start a fetch; the returned generation identifies it.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Store the rows of fetch `generation`.
    ///
    /// A fetch superseded by a newer one is ignored and `false` is returned.
    /// The length is final when fewer rows than `size_limit` came back.
    pub fn finish_load(&mut self, generation: u64, items: Vec<Category>, size_limit: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.length_final = (items.len() as u64) < size_limit;
        self.items = items;
        self.loading = false;
        true
    }

    /// Mark fetch `generation` as failed, keeping the previous rows.
    pub fn fail_load(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::CategoryId;
    use contracts::shared::filter::ListQuery;

    #[test]
    fn test_filter_replaces_group() {
        let mut binding = ListBinding::new();
        binding.filter(vec![SearchFilter::name_contains("Sea")], FilterGroup::Application);
        binding.filter(vec![SearchFilter::id_equals("8")], FilterGroup::Application);
        assert_eq!(binding.filters(), vec![SearchFilter::id_equals("8")]);

        binding.filter(Vec::new(), FilterGroup::Application);
        assert!(binding.filters().is_empty());
    }

    #[test]
    fn test_filters_fold_into_list_query() {
        let mut binding = ListBinding::new();
        binding.filter(
            vec![SearchFilter::id_equals("8"), SearchFilter::name_contains("Sea")],
            FilterGroup::Application,
        );

        let query = ListQuery::from_filters(&binding.filters(), Some(100));
        assert_eq!(
            query,
            ListQuery {
                top: Some(100),
                id: Some("8".into()),
                name_contains: Some("Sea".into()),
            }
        );
    }

    #[test]
    fn test_stale_load_is_ignored() {
        let mut binding = ListBinding::new();
        let first = binding.begin_load();
        let second = binding.begin_load();

        let rows = vec![Category::new(CategoryId(1), "Beverages")];
        assert!(!binding.finish_load(first, rows.clone(), 100));
        assert!(binding.is_loading());

        assert!(binding.finish_load(second, rows, 100));
        assert_eq!(binding.items().len(), 1);
        assert!(binding.is_length_final());
        assert!(!binding.is_loading());
    }

    #[test]
    fn test_length_not_final_at_size_limit() {
        let mut binding = ListBinding::new();
        let generation = binding.begin_load();
        let rows = vec![
            Category::new(CategoryId(1), "Beverages"),
            Category::new(CategoryId(2), "Condiments"),
        ];
        binding.finish_load(generation, rows, 2);
        assert!(!binding.is_length_final());
    }
}
