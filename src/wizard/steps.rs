//! Step controller
//!
//! The wizard is a fixed sequence of six steps. Navigation saturates at both
//! ends: `previous` on the first step and `next` on the last step are no-ops.

use crate::data::{PersonalField, Section};

/// One screen of the wizard, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
    Review,
}

pub const STEP_COUNT: usize = 6;

/// What a step's form edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepContent {
    /// Top-level string fields
    Fields(&'static [PersonalField]),
    /// Every entry of a list section
    List(Section),
    /// The comma-separated skills text
    Skills,
    /// Read-only review with the export action
    Review,
}

/// The main button of the current step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Export,
}

impl Step {
    pub const ALL: [Step; STEP_COUNT] = [
        Step::Personal,
        Step::Summary,
        Step::Experience,
        Step::Education,
        Step::Skills,
        Step::Review,
    ];

    pub fn from_index(index: usize) -> Option<Step> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        match self {
            Step::Personal => 0,
            Step::Summary => 1,
            Step::Experience => 2,
            Step::Education => 3,
            Step::Skills => 4,
            Step::Review => 5,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Information",
            Step::Summary => "Professional Summary",
            Step::Experience => "Work Experience",
            Step::Education => "Education",
            Step::Skills => "Skills",
            Step::Review => "Review & Export",
        }
    }

    /// Heading of the form section shown on this step
    pub fn section_heading(&self) -> &'static str {
        match self {
            Step::Personal => "Personal Details",
            Step::Summary => "Professional Summary",
            Step::Experience => "Work Experience",
            Step::Education => "Education Experience",
            Step::Skills => "Skills",
            Step::Review => "Review Your Resume",
        }
    }

    pub fn content(&self) -> StepContent {
        match self {
            Step::Personal => StepContent::Fields(&[
                PersonalField::Name,
                PersonalField::Email,
                PersonalField::Phone,
            ]),
            Step::Summary => StepContent::Fields(&[PersonalField::Summary]),
            Step::Experience => StepContent::List(Section::Experience),
            Step::Education => StepContent::List(Section::Education),
            Step::Skills => StepContent::Skills,
            Step::Review => StepContent::Review,
        }
    }
}

/// Current position in the wizard. Always `0 <= index < STEP_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepController {
    index: usize,
}

impl StepController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Step {
        Step::ALL[self.index]
    }

    pub fn step_count(&self) -> usize {
        STEP_COUNT
    }

    /// Advance one step, saturating at Review. Returns whether the step changed.
    pub fn next(&mut self) -> bool {
        let next = (self.index + 1).min(STEP_COUNT - 1);
        let moved = next != self.index;
        self.index = next;
        moved
    }

    /// Go back one step, saturating at Personal. Returns whether the step changed.
    pub fn previous(&mut self) -> bool {
        let prev = self.index.saturating_sub(1);
        let moved = prev != self.index;
        self.index = prev;
        moved
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn is_last(&self) -> bool {
        self.index == STEP_COUNT - 1
    }

    pub fn primary_action(&self) -> PrimaryAction {
        if self.is_last() {
            PrimaryAction::Export
        } else {
            PrimaryAction::Next
        }
    }
}
