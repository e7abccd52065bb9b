use tracing::trace;

use crate::error::AtlasResult;
use crate::render::Renderer;

use super::AtlasEngine;

impl<R: Renderer> AtlasEngine<R> {
    /// Advances the transition clock by `delta_ms` and redraws when anything
    /// was animating.
    ///
    /// Returns whether transitions are still running afterwards.
    pub fn advance_transitions(&mut self, delta_ms: f64) -> AtlasResult<bool> {
        if self.core.timeline.is_idle() {
            return Ok(false);
        }
        let finished = self.core.timeline.advance(delta_ms);
        trace!(
            now_ms = self.core.timeline.now_ms(),
            finished,
            running = self.core.timeline.active_count(),
            "advanced transitions"
        );
        self.render()?;
        Ok(!self.core.timeline.is_idle())
    }

    /// Jumps every running transition to its end state.
    pub fn finish_transitions(&mut self) -> AtlasResult<()> {
        while self.advance_transitions(f64::from(u16::MAX))? {}
        Ok(())
    }
}
