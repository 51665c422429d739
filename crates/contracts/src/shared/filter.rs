//! Search filters applied to list bindings, and their wire form.

use serde::{Deserialize, Serialize};

/// Filterable field of a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterField {
    #[serde(rename = "ID")]
    Id,
    Name,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub enum FilterOperator {
    /// Exact match
    EQ,
    /// Substring match
    Contains,
}

/// Filter groups of a list binding.
///
/// Controllers set their search under `Application`; a fetch sends the
/// filters of every group ANDed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FilterGroup {
    Application,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub field: FilterField,
    pub operator: FilterOperator,
    pub value: String,
}

impl SearchFilter {
    pub fn new(field: FilterField, operator: FilterOperator, value: impl Into<String>) -> Self {
        Self {
            field,
            operator,
            value: value.into(),
        }
    }

    pub fn id_equals(value: impl Into<String>) -> Self {
        Self::new(FilterField::Id, FilterOperator::EQ, value)
    }

    pub fn name_contains(value: impl Into<String>) -> Self {
        Self::new(FilterField::Name, FilterOperator::Contains, value)
    }
}

/// Build the worklist search filter from the two search inputs.
///
/// A non-empty ID input wins over the Name input; with both empty there is
/// no filter.
pub fn build_search_filter(id_text: &str, name_text: &str) -> Option<SearchFilter> {
    if !id_text.is_empty() {
        Some(SearchFilter::id_equals(id_text))
    } else if !name_text.is_empty() {
        Some(SearchFilter::name_contains(name_text))
    } else {
        None
    }
}

/// Query string of `GET /api/categories`.
///
/// `id` and `name_contains` are ANDed; `top` caps the number of rows. A
/// filter set carries at most one filter per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_contains: Option<String>,
}

impl ListQuery {
    /// Fold a filter set into a query.
    pub fn from_filters<'a>(
        filters: impl IntoIterator<Item = &'a SearchFilter>,
        top: Option<u64>,
    ) -> Self {
        let mut query = ListQuery {
            top,
            ..Default::default()
        };
        for f in filters {
            match f.field {
                FilterField::Id => query.id = Some(f.value.trim().to_string()),
                FilterField::Name => query.name_contains = Some(f.value.clone()),
            }
        }
        query
    }
}
