//! Wizard step sequencing

mod steps;

pub use steps::{PrimaryAction, Step, StepContent, StepController, STEP_COUNT};
