//! Literature behind the 6·N·D compute rule, shown under the calculator.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Reference {
    pub title: &'static str,
    pub url: &'static str,
    /// Supporting quote from the paper. The explainer link has none; the
    /// calculator shows its own translated summary above it.
    pub quote: Option<&'static str>,
}

pub const REFERENCES: &[Reference] = &[
    Reference {
        title: "Scaling Laws for Neural Language Models (Kaplan et al., 2020)",
        url: "https://arxiv.org/abs/2001.08361",
        quote: Some(
            "Accounting for the backwards pass (approximately twice the compute as the \
             forwards pass), we then define the estimated non-embedding compute as \
             C ≈ 6N floating point operators per training token.",
        ),
    },
    Reference {
        title: "Training Compute-Optimal Large Language Models (Hoffmann et al., 2022)",
        url: "https://arxiv.org/abs/2203.15556",
        quote: Some(
            "As in Kaplan et al. (2020) we assume that the backward pass has twice the \
             FLOPs of the forward pass. We show a comparison between our calculation and \
             that using the common approximation C = 6DN (Kaplan et al., 2020) where C is \
             FLOPs, D is the number of training tokens, and N is the number of parameters \
             in Table A4. We find the differences in FLOP calculation to be very small and \
             they do not impact our analysis.",
        ),
    },
    Reference {
        title: "大模型计算量C=6×N×D的计算原理解释",
        url: "https://gemini.google.com/share/65cf51d23549",
        quote: None,
    },
];
