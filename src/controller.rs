use tracing::debug;

use crate::model::WizardStep;

/// Linear step machine: forward one step at a time, or back to the start.
#[derive(Debug, Clone)]
pub struct WizardController {
    step: WizardStep,
}

impl Default for WizardController {
    fn default() -> Self {
        Self {
            step: WizardStep::Intake,
        }
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Moves to the next step. Stays put on the last one.
    pub fn advance(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            debug!(from = self.step.number(), to = next.number(), "Wizard advanced");
            self.step = next;
        }
        self.step
    }

    pub fn reset(&mut self) {
        self.step = WizardStep::Intake;
    }
}
