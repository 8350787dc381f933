//! Training Configuration
//!
//! The five numeric inputs plus the MoE policy flag. Serializable so the CLI can
//! read partial JSON files; missing fields fall back to the default run, with the
//! utilization following the file's MoE flag.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::estimator::resolve_default_mfu;
use crate::presets::GpuPreset;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(from = "PartialTrainingConfig")]
pub struct TrainingConfig {
    /// Activated parameters, in billions
    pub params_b: f64,
    /// Training tokens, in billions
    pub tokens_b: f64,
    pub gpu_count: u32,
    /// Per-device throughput in TFLOPS
    pub gpu_flops: f64,
    /// Model FLOPs utilization, percent. The UI keeps it in [0, 50]; the formula does not care.
    pub mfu_percent: f64,
    /// Only seeds `mfu_percent` on toggle, see `set_moe`
    pub is_moe: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            params_b: 7.0,  // 7B model
            tokens_b: 20.0, // 20B tokens
            gpu_count: 8,   // 1 node
            gpu_flops: GpuPreset::default_preset().flops,
            mfu_percent: resolve_default_mfu(false),
            is_moe: false,
        }
    }
}

/// On-disk shape: every field optional. A missing `mfu_percent` is seeded from
/// the file's `is_moe`, the same default a toggle would apply.
#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialTrainingConfig {
    params_b: Option<f64>,
    tokens_b: Option<f64>,
    gpu_count: Option<u32>,
    gpu_flops: Option<f64>,
    mfu_percent: Option<f64>,
    is_moe: bool,
}

impl From<PartialTrainingConfig> for TrainingConfig {
    fn from(file: PartialTrainingConfig) -> Self {
        let defaults = TrainingConfig::default();
        Self {
            params_b: file.params_b.unwrap_or(defaults.params_b),
            tokens_b: file.tokens_b.unwrap_or(defaults.tokens_b),
            gpu_count: file.gpu_count.unwrap_or(defaults.gpu_count),
            gpu_flops: file.gpu_flops.unwrap_or(defaults.gpu_flops),
            mfu_percent: file
                .mfu_percent
                .unwrap_or_else(|| resolve_default_mfu(file.is_moe)),
            is_moe: file.is_moe,
        }
    }
}

impl TrainingConfig {
    /// Toggle the MoE flag. On a transition the utilization is re-seeded with the
    /// policy default; setting the flag to its current value changes nothing, so a
    /// manual MFU entered after a toggle is kept.
    ///
    /// Returns true when the flag actually flipped.
    pub fn set_moe(&mut self, enabled: bool) -> bool {
        if self.is_moe == enabled {
            return false;
        }
        self.is_moe = enabled;
        self.mfu_percent = resolve_default_mfu(enabled);
        debug!(is_moe = enabled, mfu = self.mfu_percent, "MFU seeded from MoE toggle");
        true
    }

    pub fn apply_preset(&mut self, preset: &GpuPreset) {
        self.gpu_flops = preset.flops;
    }

    /// True while the utilization still sits at the MoE default
    pub fn is_moe_default_mfu(&self) -> bool {
        self.is_moe && self.mfu_percent == resolve_default_mfu(true)
    }

    /// Preset whose throughput is currently selected, if any
    pub fn active_preset(&self) -> Option<&'static GpuPreset> {
        GpuPreset::matching(self.gpu_flops)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrainingConfig::default();
        assert_eq!(config.params_b, 7.0);
        assert_eq!(config.tokens_b, 20.0);
        assert_eq!(config.gpu_count, 8);
        assert_eq!(config.gpu_flops, 312.0);
        assert_eq!(config.mfu_percent, 20.0);
        assert!(!config.is_moe);
    }

    #[test]
    fn test_moe_toggle_seeds_mfu() {
        let mut config = TrainingConfig::default();
        assert!(config.set_moe(true));
        assert_eq!(config.mfu_percent, 10.0);
        assert!(config.is_moe_default_mfu());

        assert!(config.set_moe(false));
        assert_eq!(config.mfu_percent, 20.0);
        assert!(!config.is_moe_default_mfu());
    }

    #[test]
    fn test_manual_override_survives_reassert() {
        let mut config = TrainingConfig::default();
        config.set_moe(true);
        config.mfu_percent = 35.0;

        // Same value again is not a transition
        assert!(!config.set_moe(true));
        assert_eq!(config.mfu_percent, 35.0);
        assert!(!config.is_moe_default_mfu());
    }

    #[test]
    fn test_apply_preset() {
        let mut config = TrainingConfig::default();
        let h100 = GpuPreset::find("H100").unwrap();
        config.apply_preset(h100);
        assert_eq!(config.gpu_flops, 990.0);
        assert_eq!(config.active_preset().map(|p| p.name), Some("H100"));

        config.gpu_flops = 400.0;
        assert!(config.active_preset().is_none());
    }

    #[test]
    fn test_partial_json_uses_defaults() -> anyhow::Result<()> {
        let config: TrainingConfig =
            serde_json::from_str(r#"{ "params_b": 70, "gpu_count": 256 }"#)?;
        assert_eq!(config.params_b, 70.0);
        assert_eq!(config.gpu_count, 256);
        assert_eq!(config.tokens_b, 20.0);
        assert_eq!(config.mfu_percent, 20.0);
        Ok(())
    }

    #[test]
    fn test_partial_json_moe_seeds_mfu() -> anyhow::Result<()> {
        let config: TrainingConfig = serde_json::from_str(r#"{ "is_moe": true }"#)?;
        assert!(config.is_moe);
        assert_eq!(config.mfu_percent, 10.0);
        assert!(config.is_moe_default_mfu());

        let config: TrainingConfig =
            serde_json::from_str(r#"{ "is_moe": true, "mfu_percent": 35 }"#)?;
        assert_eq!(config.mfu_percent, 35.0);
        Ok(())
    }

    #[test]
    fn test_json_round_trip_keeps_manual_mfu() -> anyhow::Result<()> {
        let mut config = TrainingConfig::default();
        config.set_moe(true);
        config.mfu_percent = 25.0;
        let back: TrainingConfig = serde_json::from_str(&serde_json::to_string(&config)?)?;
        assert_eq!(back, config);
        Ok(())
    }
}
