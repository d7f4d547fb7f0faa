use serde::Deserialize;

/// Simulator settings. The matching core itself consumes no configuration;
/// these drive the random order flow that feeds it.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Number of distinct instruments (TICKER1..TICKERn).
    pub instruments: usize,
    /// Total orders to submit.
    pub orders: u64,
    /// RNG seed; identical seeds replay identical order flow.
    pub seed: u64,
    pub min_price: u64,
    pub max_price: u64,
    pub max_quantity: u64,
}

impl Settings {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name(path));
        Ok(builder.build()?.try_deserialize()?)
    }
}
