//! Traintime front-ends: the desktop calculator and the `estimate` command.
//! Both own a `TrainingConfig` and hand it to `traintime_core` on every change.

pub mod cli;
pub mod estimate;
pub mod gui;
