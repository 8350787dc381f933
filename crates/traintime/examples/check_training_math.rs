//! Example script to verify the training time math without the GUI
//! Run with: cargo run --example check_training_math

use traintime_core::{formula_text, GpuPreset, TrainingConfig, TrainingEstimate};

fn main() {
    println!("=== Training Time Estimation Verification ===\n");

    // Case 1: Calculator default (7B on 20B tokens, one A100 node)
    let mut config = TrainingConfig::default();
    print_metrics("Default (7B / 20B tokens / 8x A100)", &config);

    // Case 2: Same run on H100
    if let Some(h100) = GpuPreset::find("H100") {
        config.apply_preset(h100);
    }
    print_metrics("7B on 8x H100", &config);

    // Case 3: Llama-2-7B class (2T tokens) on 512 A100
    config = TrainingConfig {
        tokens_b: 2000.0,
        gpu_count: 512,
        mfu_percent: 40.0,
        ..Default::default()
    };
    print_metrics("Llama-7B Class (2T tokens, 512x A100, 40% MFU)", &config);

    // Case 4: MoE with 37B activated params, seeded 10% MFU, too small a fleet
    config = TrainingConfig {
        params_b: 37.0,
        tokens_b: 14800.0,
        gpu_count: 256,
        ..Default::default()
    };
    config.set_moe(true);
    print_metrics("MoE 37B activated (14.8T tokens, 256x A100)", &config);
}

fn print_metrics(label: &str, config: &TrainingConfig) {
    let estimate = TrainingEstimate::from_config(config);

    println!("Scenario: [{}]", label);
    println!("  - Formula  : {}", formula_text(config));
    println!("  - Days     : {:.2}", estimate.training_days);
    println!("  - TGS      : {:.2} tokens/GPU/s", estimate.tokens_per_gpu_per_second);
    println!("  - Compute  : {:.2} ZettaFLOPs", estimate.total_compute_zetta_flops);
    if estimate.exceeds_advisory_threshold() {
        println!("  - Status   : ⚠ longer than a year, add GPUs or cut data");
    } else {
        println!("  - Status   : OK");
    }
    println!("--------------------------------------------------");
}
