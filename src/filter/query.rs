use super::FilterState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_param(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    /// Sort after clicking a column header: same column flips direction,
    /// a new column starts ascending
    pub fn toggled(field: &str, current: Option<&Sort>) -> Sort {
        match current {
            Some(sort) if sort.field == field => Sort {
                field: field.to_string(),
                direction: match sort.direction {
                    SortDirection::Ascending => SortDirection::Descending,
                    SortDirection::Descending => SortDirection::Ascending,
                },
            },
            _ => Sort {
                field: field.to_string(),
                direction: SortDirection::Ascending,
            },
        }
    }
}

/// What actually goes over the wire for one listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingQuery {
    filters: Vec<(String, String)>,
    pub page: u32,
    pub page_size: u32,
    pub sort: Option<Sort>,
}

impl ListingQuery {
    /// First page for the given filters; empty values are left out
    pub fn new(filters: &FilterState, page_size: u32) -> Self {
        Self {
            filters: filters
                .non_empty()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            page: 1,
            page_size: page_size.max(1),
            sort: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn with_sort(mut self, sort: Option<Sort>) -> Self {
        self.sort = sort;
        self
    }

    pub fn filters(&self) -> &[(String, String)] {
        &self.filters
    }

    pub fn filter(&self, name: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether this query was derived from the same filter values
    pub fn matches_filters(&self, filters: &FilterState) -> bool {
        self.filters.len() == filters.non_empty().count()
            && filters
                .non_empty()
                .all(|(name, value)| self.filter(name) == Some(value))
    }

    /// Query string pairs: filters first, then paging, then sorting
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = self.filters.clone();
        params.push(("page".to_string(), self.page.to_string()));
        params.push(("limit".to_string(), self.page_size.to_string()));

        if let Some(sort) = &self.sort {
            params.push(("sort".to_string(), sort.field.clone()));
            params.push(("order".to_string(), sort.direction.as_param().to_string()));
        }

        params
    }
}
