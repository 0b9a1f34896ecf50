use ethical_score::config::ScoringServiceConfig;
use ethical_score::scoring::EthicalScoreEngine;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Shared by the scoring handlers. The engine itself carries no state.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScoringState {
    pub(crate) engine: EthicalScoreEngine,
    pub(crate) limits: ScoringServiceConfig,
}

impl ScoringState {
    pub(crate) fn new(limits: ScoringServiceConfig) -> Self {
        Self {
            engine: EthicalScoreEngine::new(),
            limits,
        }
    }
}
