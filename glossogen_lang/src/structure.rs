// Syllable structure templates.
//
// A structure template is a string like "CVC" or "CL?VF?": a sequence of
// category tags, each optionally followed by `?` to mark the step as
// skippable. Parsing validates the template against a specific inventory —
// every tag must name a defined category and the string must decompose into
// `tag('?')?` tokens with nothing left over.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::phonemes::PhonemeInventory;

/// One step of a parsed structure template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureStep {
    /// Category tag to sample from.
    pub tag: char,
    /// Whether the step may be skipped (50% chance during synthesis).
    pub optional: bool,
}

/// A validated, parsed syllable structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyllableStructure {
    template: String,
    steps: Vec<StructureStep>,
}

impl SyllableStructure {
    /// Parse `template` against `inventory`.
    ///
    /// Fails if the template is empty, contains a character that is not a
    /// defined category tag (a `?` with no preceding tag included), or
    /// otherwise does not fully decompose into steps.
    pub fn parse(template: &str, inventory: &PhonemeInventory) -> Result<Self> {
        let mut steps = Vec::new();
        let mut chars = template.chars().peekable();
        while let Some(tag) = chars.next() {
            if !inventory.contains(tag) {
                return Err(Error::InvalidStructure {
                    template: template.to_string(),
                });
            }
            let optional = chars.peek() == Some(&'?');
            if optional {
                chars.next();
            }
            steps.push(StructureStep { tag, optional });
        }
        if steps.is_empty() {
            return Err(Error::InvalidStructure {
                template: template.to_string(),
            });
        }
        Ok(SyllableStructure {
            template: template.to_string(),
            steps,
        })
    }

    /// The original template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// The parsed steps, in template order.
    pub fn steps(&self) -> &[StructureStep] {
        &self.steps
    }
}
