use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One entry of the generated grocery list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GroceryItem {
    pub category: String,
    pub name: String,
    pub quantity: String,
}

impl GroceryItem {
    pub fn new(category: &str, name: &str, quantity: &str) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            quantity: quantity.into(),
        }
    }
}
