//! Internationalization (i18n) - Language support for the calculator
//!
//! Provides EN/ZH translations for all UI text.

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Toggle to the other language
    pub fn toggle(&self) -> Self {
        match self {
            Language::English => Language::Chinese,
            Language::Chinese => Language::English,
        }
    }

    /// Display name for the language
    pub fn display_name(&self) -> &str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }
}

/// Translate a key to the current language
/// Returns an empty string for unknown keys
pub fn t(lang: Language, key: &str) -> &'static str {
    match (lang, key) {
        // === Header ===
        (Language::Chinese, "app_title") => "AI 模型训练耗时计算器",
        (Language::English, "app_title") => "AI Model Training Time Calculator",
        (Language::Chinese, "app_subtitle") => {
            "基于业界标准公式估算大语言模型 (LLM) 训练所需时间"
        }
        (Language::English, "app_subtitle") => {
            "Estimate LLM training time with the industry-standard compute formula"
        }

        // === Model & Data ===
        (Language::Chinese, "model_data") => "⚙ 模型与数据配置",
        (Language::English, "model_data") => "⚙ Model & Data",
        (Language::Chinese, "params") => "模型激活参数量",
        (Language::English, "params") => "Activated Parameters",
        (Language::Chinese, "params_desc") => "输入参与计算的参数量",
        (Language::English, "params_desc") => "Parameters that take part in each token's compute",
        (Language::Chinese, "tokens") => "训练 Tokens 数量",
        (Language::English, "tokens") => "Training Tokens",
        (Language::Chinese, "tokens_desc") => "数据集大小",
        (Language::English, "tokens_desc") => "Dataset size",
        (Language::Chinese, "billions") => "B (十亿)",
        (Language::English, "billions") => "B (billions)",
        (Language::Chinese, "moe_title") => "MoE (混合专家) 模型",
        (Language::English, "moe_title") => "MoE (Mixture of Experts) Model",
        (Language::Chinese, "moe_hint") => "启用后算力利用率 (MFU) 默认设为 10%",
        (Language::English, "moe_hint") => "When enabled, MFU defaults to 10%",

        // === Compute Resources ===
        (Language::Chinese, "compute_resources") => "🖥 算力资源配置",
        (Language::English, "compute_resources") => "🖥 Compute Resources",
        (Language::Chinese, "gpu_count") => "GPU 卡数",
        (Language::English, "gpu_count") => "GPU Count",
        (Language::Chinese, "cards") => "张",
        (Language::English, "cards") => "GPUs",
        (Language::Chinese, "gpu_flops") => "单卡算力 (FP16/BF16)",
        (Language::English, "gpu_flops") => "Per-GPU Throughput (FP16/BF16)",
        (Language::Chinese, "mfu") => "算力利用率 (MFU)",
        (Language::English, "mfu") => "Model FLOPs Utilization (MFU)",
        (Language::Chinese, "moe_default") => "(MoE 默认)",
        (Language::English, "moe_default") => "(MoE default)",
        (Language::Chinese | Language::English, "tick_zero") => "0%",
        (Language::Chinese | Language::English, "tick_moe") => "10% (MoE)",
        (Language::Chinese | Language::English, "tick_dense") => "20% (Dense)",
        (Language::Chinese | Language::English, "tick_max") => "50% (Max)",

        // === Results ===
        (Language::Chinese, "estimated_time") => "⏱ 预估训练时间",
        (Language::English, "estimated_time") => "⏱ ESTIMATED TRAINING TIME",
        (Language::Chinese, "days") => "天 (Days)",
        (Language::English, "days") => "Days",
        (Language::Chinese | Language::English, "tgs") => "TGS (Tokens/GPU/s)",
        (Language::Chinese, "advisory") => "⚠ 训练时间过长，建议增加卡数或减少数据量。",
        (Language::English, "advisory") => {
            "⚠ Training takes too long. Consider adding GPUs or reducing the data volume."
        }
        (Language::Chinese, "formula_ref") => "计算公式参考",
        (Language::English, "formula_ref") => "Formula",
        (Language::Chinese, "total_compute") => "总算力需求",
        (Language::English, "total_compute") => "Total compute",

        // === References ===
        (Language::Chinese, "references_title") => "理论依据与参考",
        (Language::English, "references_title") => "Background & References",
        (Language::Chinese, "references_intro") => {
            "训练耗时估算基于参数规模、语料规模与算力利用率的经验公式，出自 Scaling Laws 和 Chinchilla 论文："
        }
        (Language::English, "references_intro") => {
            "The estimate combines model size, corpus size and utilization using the empirical rule from the Scaling Laws and Chinchilla papers:"
        }
        (Language::Chinese, "references_note") => {
            "训练一个拥有 N 个参数的 Transformer 模型，处理一个 token 所需的 FLOPs 约为 6N，将这个值乘以总训练 token 数量 D，就得到了整个训练过程的总计算量：C = 6ND。其中 6 是一个经验性的常数，近似代表前向和反向传播的 FLOPs 总和与参数量 N 的比例关系。"
        }
        (Language::English, "references_note") => {
            "Processing one token through a Transformer with N parameters costs roughly 6N FLOPs. Multiplying by the number of training tokens D gives the total compute C = 6ND. The 6 is an empirical constant covering the forward and backward passes relative to N."
        }

        // === Fallback ===
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEYS: &[&str] = &[
        "app_title",
        "app_subtitle",
        "model_data",
        "params",
        "params_desc",
        "tokens",
        "tokens_desc",
        "billions",
        "moe_title",
        "moe_hint",
        "compute_resources",
        "gpu_count",
        "cards",
        "gpu_flops",
        "mfu",
        "moe_default",
        "tick_zero",
        "tick_moe",
        "tick_dense",
        "tick_max",
        "estimated_time",
        "days",
        "tgs",
        "advisory",
        "formula_ref",
        "total_compute",
        "references_title",
        "references_intro",
        "references_note",
    ];

    #[test]
    fn test_every_key_translated() {
        for lang in [Language::English, Language::Chinese] {
            for key in KEYS {
                assert!(!t(lang, key).is_empty(), "missing {:?} translation for {}", lang, key);
            }
        }
        assert_eq!(t(Language::English, "no_such_key"), "");
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Language::default(), Language::English);
        assert_eq!(Language::English.toggle(), Language::Chinese);
        assert_eq!(Language::Chinese.toggle().toggle(), Language::Chinese);
    }
}
