//! Catalogue filtering for the public product grid: category tab plus
//! free-text search, both applied conjunctively, truncated to one page.

use crate::domain::model::{category_name, CatalogItem, ALL_CATEGORY};

pub const PAGE_SIZE: usize = 16;

/// Filter the item list by category slug and free-text query. The query
/// matches case-insensitively against name, description, category slug and
/// display name, and branding-option labels. An empty result is a normal
/// outcome, not an error.
pub fn filter_items<'a>(
    items: &'a [CatalogItem],
    category: &str,
    query: &str,
) -> Vec<&'a CatalogItem> {
    let query = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            let matches_category = category == ALL_CATEGORY || item.category == category;
            let matches_query = query.is_empty() || matches_text(item, &query);
            matches_category && matches_query
        })
        .take(PAGE_SIZE)
        .collect()
}

fn matches_text(item: &CatalogItem, query: &str) -> bool {
    if item.name.to_lowercase().contains(query)
        || item.description.to_lowercase().contains(query)
        || item.category.to_lowercase().contains(query)
    {
        return true;
    }
    if category_name(&item.category)
        .is_some_and(|name| name.to_lowercase().contains(query))
    {
        return true;
    }
    item.branding_options
        .iter()
        .any(|option| option.to_lowercase().contains(query))
}
