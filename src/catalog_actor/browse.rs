//! Menu browsing: search by name, filter by category.

use crate::model::Dish;

/// Filter applied to the global menu.
#[derive(Debug, Clone, Default)]
pub struct MenuQuery {
    /// Case-insensitive substring of the dish name; empty matches everything.
    pub search: String,
    /// Exact category; `None` is "All".
    pub category: Option<String>,
}

impl MenuQuery {
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = text.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, dish: &Dish) -> bool {
        let name_match = dish
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let category_match = self
            .category
            .as_deref()
            .map_or(true, |category| dish.category == category);
        name_match && category_match
    }

    pub fn apply(&self, dishes: Vec<Dish>) -> Vec<Dish> {
        dishes.into_iter().filter(|dish| self.matches(dish)).collect()
    }
}

/// Distinct categories in first-seen order.
pub fn categories(dishes: &[Dish]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for dish in dishes {
        if !seen.contains(&dish.category) {
            seen.push(dish.category.clone());
        }
    }
    seen
}
