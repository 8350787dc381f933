//! Traintime Core
//!
//! Compute-time estimation for large language model training runs.
//! Everything here is pure: a `TrainingConfig` goes in, a `TrainingEstimate` comes out.

pub mod config;
pub mod estimator;
pub mod presets;
pub mod references;

pub use config::TrainingConfig;
pub use estimator::{
    compute_tokens_per_gpu_per_second, compute_total_compute_zetta_flops, compute_training_days,
    formula_text, resolve_default_mfu, TrainingEstimate, ADVISORY_THRESHOLD_DAYS,
};
pub use presets::{GpuPreset, GPU_PRESETS};
pub use references::{Reference, REFERENCES};
