//! GPU Presets - Quick-select throughput figures for common accelerators
//!
//! Numbers are BF16 tensor-core dense TFLOPS.

use serde::Serialize;

/// A catalog entry. Selecting one only overwrites `TrainingConfig::gpu_flops`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GpuPreset {
    pub name: &'static str,
    /// Sustained dense throughput in TFLOPS
    pub flops: f64,
    pub description: &'static str,
}

pub const GPU_PRESETS: &[GpuPreset] = &[
    GpuPreset {
        name: "A100",
        flops: 312.0,
        description: "NVIDIA A100 SXM 80G",
    },
    GpuPreset {
        name: "H100",
        flops: 990.0,
        description: "NVIDIA H100 SXM 80G",
    },
    GpuPreset {
        name: "910B2",
        flops: 376.0,
        description: "Huawei Ascend 910B2 64G",
    },
];

impl GpuPreset {
    /// All presets for iteration
    pub fn all() -> &'static [GpuPreset] {
        GPU_PRESETS
    }

    /// The preset the default configuration starts from (A100)
    pub fn default_preset() -> &'static GpuPreset {
        &GPU_PRESETS[0]
    }

    /// Case-insensitive lookup by name
    pub fn find(name: &str) -> Option<&'static GpuPreset> {
        let name = name.trim();
        GPU_PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// The preset whose throughput equals `flops` exactly, if any.
    /// Used to highlight the active quick-select button.
    pub fn matching(flops: f64) -> Option<&'static GpuPreset> {
        GPU_PRESETS.iter().find(|p| p.is_active(flops))
    }

    pub fn is_active(&self, flops: f64) -> bool {
        self.flops == flops
    }

    /// Comma-separated preset names, for error messages and help text
    pub fn names() -> String {
        GPU_PRESETS
            .iter()
            .map(|p| p.name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_is_case_insensitive() {
        assert_eq!(GpuPreset::find("h100").map(|p| p.flops), Some(990.0));
        assert_eq!(GpuPreset::find(" 910b2 ").map(|p| p.flops), Some(376.0));
        assert!(GpuPreset::find("V100").is_none());
    }

    #[test]
    fn test_matching_requires_exact_throughput() {
        assert_eq!(GpuPreset::matching(312.0).map(|p| p.name), Some("A100"));
        assert!(GpuPreset::matching(312.5).is_none());
    }

    #[test]
    fn test_default_preset_is_a100() {
        let preset = GpuPreset::default_preset();
        assert_eq!(preset.name, "A100");
        assert_eq!(preset.flops, 312.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(GpuPreset::names(), "A100, H100, 910B2");
    }
}
