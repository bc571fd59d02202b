pub mod abilities;
pub mod ai;
pub mod calculators;
pub mod catch;
pub mod engine;
pub mod rng;
pub mod session;
pub mod state;
pub mod stats;
pub mod turn_orchestrator;

#[cfg(test)]
mod tests;
