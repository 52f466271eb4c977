use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    grocery::value_objects::{GroceryListOutput, GroceryProfile},
};

/// Service trait for AI grocery-list generation. Unparseable provider output
/// is substituted with the fixed fallback list; call failures are surfaced.
pub trait GroceryService: Send + Sync {
    fn generate_list(
        &self,
        profile: GroceryProfile,
    ) -> impl Future<Output = Result<GroceryListOutput, CoreError>> + Send;
}
