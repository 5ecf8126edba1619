#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderState {
    Inert,       // No slides: every operation is a no-op
    AutoPlaying, // A recurring advance timer is scheduled
    Paused,      // Pointer is over the slider, no timer scheduled
    Disposed,    // Torn down: timer cancelled, bindings removed
}

impl SliderState {
    /// True while the controller still reacts to navigation.
    pub fn is_live(self) -> bool {
        matches!(self, SliderState::AutoPlaying | SliderState::Paused)
    }
}
