use serde::{Deserialize, Serialize};

use crate::core::Attribute;
use crate::error::{AtlasError, AtlasResult};

pub const PLACEHOLDER_LABEL: &str = "Select Attribute";

/// One dropdown entry; the placeholder has no attribute and is disabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectorOption {
    pub label: String,
    pub attribute: Option<Attribute>,
    pub disabled: bool,
}

/// Attribute dropdown model: a disabled placeholder followed by the eight
/// attributes in fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSelector {
    options: Vec<SelectorOption>,
    chosen: Option<Attribute>,
}

impl Default for AttributeSelector {
    fn default() -> Self {
        let mut options = Vec::with_capacity(Attribute::ALL.len() + 1);
        options.push(SelectorOption {
            label: PLACEHOLDER_LABEL.to_owned(),
            attribute: None,
            disabled: true,
        });
        options.extend(Attribute::ALL.into_iter().map(|attribute| SelectorOption {
            label: attribute.label().to_owned(),
            attribute: Some(attribute),
            disabled: false,
        }));
        Self {
            options,
            chosen: None,
        }
    }
}

impl AttributeSelector {
    #[must_use]
    pub fn options(&self) -> &[SelectorOption] {
        &self.options
    }

    /// Attribute picked by the user, `None` until the first choice.
    #[must_use]
    pub fn chosen(&self) -> Option<Attribute> {
        self.chosen
    }

    /// Label the dropdown shows: the placeholder until something is chosen.
    #[must_use]
    pub fn displayed_label(&self) -> &str {
        self.chosen.map_or(PLACEHOLDER_LABEL, Attribute::label)
    }

    /// Resolves a dropdown label to its attribute and records the choice.
    pub fn select(&mut self, label: &str) -> AtlasResult<Attribute> {
        let option = self
            .options
            .iter()
            .find(|option| option.label == label)
            .ok_or_else(|| AtlasError::UnknownAttribute(label.to_owned()))?;
        let attribute = match (option.disabled, option.attribute) {
            (false, Some(attribute)) => attribute,
            _ => return Err(AtlasError::PlaceholderSelected),
        };
        self.chosen = Some(attribute);
        Ok(attribute)
    }

    /// Records a choice made programmatically.
    pub fn choose(&mut self, attribute: Attribute) {
        self.chosen = Some(attribute);
    }

    /// Index into `options()` of the displayed entry.
    #[must_use]
    pub fn displayed_index(&self) -> usize {
        self.options
            .iter()
            .position(|option| option.attribute == self.chosen)
            .unwrap_or(0)
    }
}
