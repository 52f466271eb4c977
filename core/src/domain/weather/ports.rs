use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, weather::entities::WeatherReport};

/// Client trait for the current-weather provider. One attempt per call; the
/// caller substitutes `WeatherReport::default()` on any failure.
#[cfg_attr(test, mockall::automock)]
pub trait WeatherClient: Send + Sync {
    fn current(&self, city: &str) -> impl Future<Output = Result<WeatherReport, CoreError>> + Send;
}
