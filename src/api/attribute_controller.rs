use tracing::info;

use crate::core::{Attribute, format_tooltip_value};
use crate::error::AtlasResult;
use crate::render::Renderer;

use super::AtlasEngine;
use super::state::AtlasState;

impl<R: Renderer> AtlasEngine<R> {
    /// Handles a dropdown change by label.
    ///
    /// The placeholder and unknown labels are rejected and leave the current
    /// selection untouched.
    pub fn select_attribute_label(&mut self, label: &str) -> AtlasResult<()> {
        let attribute = self.core.selector.select(label)?;
        self.apply_attribute(attribute)
    }

    /// Switches the expressed attribute and animates both surfaces to it.
    pub fn set_attribute(&mut self, attribute: Attribute) -> AtlasResult<()> {
        self.core.selector.choose(attribute);
        self.apply_attribute(attribute)
    }

    fn apply_attribute(&mut self, attribute: Attribute) -> AtlasResult<()> {
        let core = &mut self.core;
        let state = AtlasState::compute(
            &core.observations,
            attribute,
            &core.config.palette,
            core.metrics,
        )?;
        let previous = std::mem::replace(&mut core.state, state);
        info!(
            from = %previous.attribute,
            to = %attribute,
            breakpoints = ?core.state.color_scale.breakpoints(),
            domain = ?core.state.vertical_scale.domain(),
            "attribute changed"
        );

        core.sync_scenes(true);
        if let Some(key) = core.highlight.highlighted_key().map(str::to_owned) {
            let title = format_tooltip_value(core.value_for_key(&key, attribute));
            core.highlight
                .update_label_text(title, attribute.label().to_owned());
        }
        self.render()
    }
}
