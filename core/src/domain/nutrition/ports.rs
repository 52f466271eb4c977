use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    nutrition::{
        entities::NutrientSample,
        value_objects::{AnalysisReport, AnalyzeInput},
    },
};

/// Client trait for the per-food nutrient provider. Amounts are reported per
/// 100 g of food. A food with no hits yields an empty list, not an error.
#[cfg_attr(test, mockall::automock)]
pub trait NutrientDataClient: Send + Sync {
    fn fetch_nutrients(
        &self,
        food: &str,
    ) -> impl Future<Output = Result<Vec<NutrientSample>, CoreError>> + Send;
}

/// Service trait for the aggregation pipeline.
pub trait AnalysisService: Send + Sync {
    fn analyze(
        &self,
        input: AnalyzeInput,
    ) -> impl Future<Output = Result<AnalysisReport, CoreError>> + Send;
}
