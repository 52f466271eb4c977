/// Aggregate service holding one client per external collaborator. The
/// domain service traits (`AnalysisService`, `ChatService`, `GroceryService`)
/// are implemented for this struct generically over the ports, so tests can
/// swap in stub clients.
#[derive(Debug, Clone)]
pub struct Service<W, N, L> {
    pub(crate) weather_client: W,
    pub(crate) nutrient_client: N,
    pub(crate) llm_client: L,
}

impl<W, N, L> Service<W, N, L> {
    pub fn new(weather_client: W, nutrient_client: N, llm_client: L) -> Self {
        Self {
            weather_client,
            nutrient_client,
            llm_client,
        }
    }
}
