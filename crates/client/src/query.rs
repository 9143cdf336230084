// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// An equality filter on one field.
///
/// Fields of embedded tables use dotted names (`professionals.is_active`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Column name.
    pub field: String,
    /// Value rendered as text.
    pub value: String,
}

/// Sort order for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    /// Column name.
    pub field: String,
    /// Ascending when true.
    pub ascending: bool,
}

/// A read against one table: `query(table, filter, orderBy?)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    select: String,
    filters: Vec<Filter>,
    order_by: Option<OrderBy>,
}

impl TableQuery {
    /// Starts a query selecting every column of `table`.
    #[must_use]
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            select: String::from("*"),
            filters: Vec::new(),
            order_by: None,
        }
    }

    /// Replaces the column list, e.g. `professionals(*)` for an embedded join.
    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        self.select = columns.to_string();
        self
    }

    /// Adds an equality filter.
    #[must_use]
    pub fn eq(mut self, field: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            value: value.to_string(),
        });
        self
    }

    /// Orders results by `field` ascending.
    #[must_use]
    pub fn order_by(mut self, field: &str) -> Self {
        self.order_by = Some(OrderBy {
            field: field.to_string(),
            ascending: true,
        });
        self
    }

    /// The queried table.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table
    }

    /// The column list.
    #[must_use]
    pub fn columns(&self) -> &str {
        &self.select
    }

    /// The equality filters in insertion order.
    #[must_use]
    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// The requested ordering.
    #[must_use]
    pub const fn ordering(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    /// Renders the query string pairs in PostgREST syntax.
    #[must_use]
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = vec![(String::from("select"), self.select.clone())];
        pairs.extend(
            self.filters
                .iter()
                .map(|filter| (filter.field.clone(), format!("eq.{}", filter.value))),
        );
        if let Some(order) = &self.order_by {
            let direction: &str = if order.ascending { "asc" } else { "desc" };
            pairs.push((String::from("order"), format!("{}.{direction}", order.field)));
        }
        pairs
    }
}
