use std::fmt;

use super::upstream::AnalyzedInstruction;

/// Text used when the source offers no instructions at all
pub const NO_INSTRUCTIONS: &str = "No instructions available";

/// Which derivation rule produced a recipe's instructions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionsRule {
    /// The flat `instructions` string
    Flat,
    /// Steps of the first structured instruction block, space-joined
    AnalyzedSteps,
    /// Neither was available
    Fallback,
}

impl fmt::Display for InstructionsRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InstructionsRule::Flat => "flat",
            InstructionsRule::AnalyzedSteps => "analyzed_steps",
            InstructionsRule::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedInstructions {
    pub text: String,
    pub rule: InstructionsRule,
}

/// Pick the instructions text, trying each rule in order; the first that applies wins
pub fn derive_instructions(
    flat: Option<&str>,
    analyzed: &[AnalyzedInstruction],
) -> DerivedInstructions {
    if let Some(text) = flat.filter(|text| !text.is_empty()) {
        return DerivedInstructions {
            text: text.to_string(),
            rule: InstructionsRule::Flat,
        };
    }

    if let Some(block) = analyzed.first() {
        let text = block
            .steps
            .iter()
            .map(|step| step.step.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        return DerivedInstructions {
            text,
            rule: InstructionsRule::AnalyzedSteps,
        };
    }

    DerivedInstructions {
        text: NO_INSTRUCTIONS.to_string(),
        rule: InstructionsRule::Fallback,
    }
}
