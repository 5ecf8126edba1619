use clap::ValueEnum;

/// Input the slider understands, already translated from raw window input.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SliderEvent {
    PreviousClicked,
    NextClicked,
    IndicatorClicked(usize),
    PointerEnter,
    PointerLeave,
    Key(Key),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

/// Where arrow keys are listened to.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum KeyScope {
    /// Anywhere on the page
    #[default]
    Page,
    /// Only while the pointer is over the slider
    Slider,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Binding {
    Buttons,
    Indicators,
    Hover,
    Keys(KeyScope),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct SubscriptionId(u64);

/// Event-subscription capability handed to the slider at construction.
pub trait EventSubscriptions {
    fn subscribe(&mut self, binding: Binding) -> SubscriptionId;
    fn unsubscribe(&mut self, id: SubscriptionId);
}

/// Forwards events to the slider only for bindings it subscribed to.
#[derive(Default)]
pub struct EventRouter {
    subscriptions: Vec<(SubscriptionId, Binding)>,
    next_id: u64,
    pointer_inside: bool,
}

impl EventRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn route(&mut self, event: SliderEvent) -> Option<SliderEvent> {
        // Hover is tracked even without a subscriber, slider-scoped keys depend on it
        match event {
            SliderEvent::PointerEnter => self.pointer_inside = true,
            SliderEvent::PointerLeave => self.pointer_inside = false,
            _ => {}
        }

        let accepted = self.subscriptions.iter().any(|(_, binding)| match (binding, event) {
            (Binding::Buttons, SliderEvent::PreviousClicked | SliderEvent::NextClicked) => true,
            (Binding::Indicators, SliderEvent::IndicatorClicked(_)) => true,
            (Binding::Hover, SliderEvent::PointerEnter | SliderEvent::PointerLeave) => true,
            (Binding::Keys(KeyScope::Page), SliderEvent::Key(_)) => true,
            (Binding::Keys(KeyScope::Slider), SliderEvent::Key(_)) => self.pointer_inside,
            _ => false,
        });

        accepted.then_some(event)
    }
}

impl EventSubscriptions for EventRouter {
    fn subscribe(&mut self, binding: Binding) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscriptions.push((id, binding));
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.retain(|(sub, _)| *sub != id);
    }
}
