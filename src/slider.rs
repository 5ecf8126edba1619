use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{ConfigError, check_counts};
use crate::events::{Binding, EventSubscriptions, Key, KeyScope, SliderEvent, SubscriptionId};
use crate::slide::{Indicator, Slide};
use crate::state::SliderState;
use crate::timer::{Scheduler, TimerId};

/// Rotates a fixed set of slides, advancing on a recurring timer.
///
/// Manual navigation (buttons, dots, arrow keys) restarts the timer so an
/// automatic advance never lands right after a click. Hovering the slider
/// pauses auto-play and leaving it resumes. Exactly one slide and one
/// indicator are active while the controller is live, and at most one
/// timer is ever pending.
pub struct SliderController<T, S> {
    slides: Vec<T>,
    indicators: Vec<Indicator>,
    interval: Duration,

    current_index: usize,
    timer: Option<TimerId>,
    scheduler: S,
    state: SliderState,

    subscriptions: Vec<SubscriptionId>,
}

impl<T: Slide, S: Scheduler> SliderController<T, S> {
    /// Wires the slider, shows the first slide and starts auto-play.
    ///
    /// An empty slide set leaves the controller [`SliderState::Inert`]; a
    /// slide/indicator count mismatch is logged and tolerated.
    pub fn initialize(
        slides: Vec<T>,
        indicators: Vec<Indicator>,
        interval: Duration,
        scheduler: S,
        events: &mut impl EventSubscriptions,
        key_scope: KeyScope,
    ) -> Self {
        let mut slider = Self {
            slides,
            indicators,
            interval,
            current_index: 0,
            timer: None,
            scheduler,
            state: SliderState::Inert,
            subscriptions: Vec::new(),
        };

        match check_counts(slider.slides.len(), slider.indicators.len()) {
            Err(error @ ConfigError::EmptySlideSet) => {
                warn!(%error, "hero slider left inert");
                return slider;
            }
            Err(error) => warn!(%error, "indicators paired with slides by index"),
            Ok(()) => {}
        }

        for binding in [Binding::Buttons, Binding::Indicators, Binding::Hover, Binding::Keys(key_scope)] {
            slider.subscriptions.push(events.subscribe(binding));
        }

        slider.state = SliderState::AutoPlaying;
        slider.show_slide(0);
        slider.start_auto_play();
        info!(
            slides = slider.slides.len(),
            interval_ms = slider.interval.as_millis() as u64,
            ?key_scope,
            "hero slider initialized"
        );
        slider
    }

    pub fn state(&self) -> SliderState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn slides(&self) -> &[T] {
        &self.slides
    }

    pub fn slides_mut(&mut self) -> &mut [T] {
        &mut self.slides
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn timer_active(&self) -> bool {
        self.timer.is_some()
    }

    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    /// Shows slide `index`, wrapping out-of-range values around the ends.
    /// Leaves the timer untouched.
    pub fn show_slide(&mut self, index: isize) {
        if !self.state.is_live() {
            return;
        }
        let len = self.slides.len() as isize;
        self.current_index = index.rem_euclid(len) as usize;

        for (i, slide) in self.slides.iter_mut().enumerate() {
            slide.set_active(i == self.current_index);
        }
        for (i, indicator) in self.indicators.iter_mut().enumerate() {
            indicator.active = i == self.current_index;
            indicator.selected = indicator.active;
        }
        debug!(index = self.current_index, "slide shown");
    }

    pub fn next(&mut self) {
        self.show_slide(self.current_index as isize + 1);
        self.reset_auto_play();
    }

    pub fn previous(&mut self) {
        self.show_slide(self.current_index as isize - 1);
        self.reset_auto_play();
    }

    pub fn go_to(&mut self, index: isize) {
        self.show_slide(index);
        self.reset_auto_play();
    }

    /// Schedules the recurring advance. Any outstanding timer is cancelled
    /// first so two schedules can never overlap.
    pub fn start_auto_play(&mut self) {
        if !self.state.is_live() {
            return;
        }
        self.cancel_timer();
        self.timer = Some(self.scheduler.schedule_repeating(self.interval));
        self.state = SliderState::AutoPlaying;
    }

    /// Restarts the interval after manual navigation. Navigating while
    /// paused therefore resumes auto-play.
    pub fn reset_auto_play(&mut self) {
        if !self.state.is_live() {
            return;
        }
        self.cancel_timer();
        self.start_auto_play();
    }

    pub fn pause(&mut self) {
        if !self.state.is_live() {
            return;
        }
        self.cancel_timer();
        self.state = SliderState::Paused;
        debug!("auto-play paused");
    }

    pub fn resume(&mut self) {
        if !self.state.is_live() {
            return;
        }
        self.start_auto_play();
        debug!("auto-play resumed");
    }

    fn cancel_timer(&mut self) {
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
    }

    /// Advances the scheduler by one frame and applies the auto-advance.
    pub fn tick(&mut self, elapsed: Duration) {
        if !self.state.is_live() {
            return;
        }
        for id in self.scheduler.advance(elapsed) {
            // Firings of a timer cancelled earlier in the frame are stale
            if self.timer == Some(id) {
                self.show_slide(self.current_index as isize + 1);
            }
        }
    }

    pub fn handle(&mut self, event: SliderEvent) {
        match event {
            SliderEvent::PreviousClicked | SliderEvent::Key(Key::ArrowLeft) => self.previous(),
            SliderEvent::NextClicked | SliderEvent::Key(Key::ArrowRight) => self.next(),
            SliderEvent::IndicatorClicked(index) => self.go_to(index as isize),
            SliderEvent::PointerEnter => self.pause(),
            SliderEvent::PointerLeave => self.resume(),
        }
    }

    /// Cancels the timer and drops every event binding. Safe to call again.
    pub fn dispose(&mut self, events: &mut impl EventSubscriptions) {
        if self.state == SliderState::Disposed {
            return;
        }
        self.cancel_timer();
        for id in self.subscriptions.drain(..) {
            events.unsubscribe(id);
        }
        self.state = SliderState::Disposed;
        info!("hero slider disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventRouter;
    use crate::timer::FrameScheduler;

    #[derive(Default)]
    struct TestSlide {
        active: bool,
    }

    impl Slide for TestSlide {
        fn set_active(&mut self, active: bool) {
            self.active = active;
        }

        fn is_active(&self) -> bool {
            self.active
        }
    }

    /// Fails the test if a timer is scheduled while another is pending.
    #[derive(Default)]
    struct StrictScheduler {
        inner: FrameScheduler,
        scheduled: usize,
        cancelled: usize,
    }

    impl Scheduler for StrictScheduler {
        fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
            assert_eq!(self.inner.pending(), 0, "timer scheduled on top of a pending one");
            self.scheduled += 1;
            self.inner.schedule_repeating(interval)
        }

        fn cancel(&mut self, id: TimerId) {
            self.cancelled += 1;
            self.inner.cancel(id);
        }

        fn pending(&self) -> usize {
            self.inner.pending()
        }

        fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
            self.inner.advance(elapsed)
        }
    }

    /// Keeps reporting every timer it was asked to cancel, as if its
    /// firing had already been queued for this frame.
    #[derive(Default)]
    struct ReplayingScheduler {
        inner: FrameScheduler,
        cancelled: Vec<TimerId>,
    }

    impl Scheduler for ReplayingScheduler {
        fn schedule_repeating(&mut self, interval: Duration) -> TimerId {
            self.inner.schedule_repeating(interval)
        }

        fn cancel(&mut self, id: TimerId) {
            self.cancelled.push(id);
            self.inner.cancel(id);
        }

        fn pending(&self) -> usize {
            self.inner.pending()
        }

        fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
            let mut fired = self.cancelled.clone();
            fired.extend(self.inner.advance(elapsed));
            fired
        }
    }

    const INTERVAL: Duration = Duration::from_millis(5000);

    fn slider(n: usize) -> (SliderController<TestSlide, StrictScheduler>, EventRouter) {
        let mut router = EventRouter::new();
        let slides = (0..n).map(|_| TestSlide::default()).collect();
        let indicators = vec![Indicator::default(); n];
        let slider = SliderController::initialize(
            slides,
            indicators,
            INTERVAL,
            StrictScheduler::default(),
            &mut router,
            KeyScope::Page,
        );
        (slider, router)
    }

    fn assert_single_active<S: Scheduler>(slider: &SliderController<TestSlide, S>) {
        let index = slider.current_index();
        let active: Vec<usize> = slider
            .slides()
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_active())
            .map(|(i, _)| i)
            .collect();
        assert_eq!(active, vec![index]);

        for (i, indicator) in slider.indicators().iter().enumerate() {
            assert_eq!(indicator.active, i == index);
            assert_eq!(indicator.selected, i == index);
        }
    }

    #[test]
    fn initialize_shows_first_slide_and_starts_timer() {
        let (slider, router) = slider(3);
        assert_eq!(slider.state(), SliderState::AutoPlaying);
        assert_eq!(slider.current_index(), 0);
        assert!(slider.timer_active());
        assert_eq!(slider.pending_timers(), 1);
        assert_eq!(router.subscription_count(), 4);
        assert_single_active(&slider);
    }

    #[test]
    fn show_slide_wraps_any_index() {
        for n in 1..=5usize {
            let (mut slider, _) = slider(n);
            for i in -12isize..=12 {
                slider.show_slide(i);
                let expected = ((i % n as isize) + n as isize) % n as isize;
                assert_eq!(slider.current_index() as isize, expected, "n={n} i={i}");
                assert_single_active(&slider);
            }
        }
    }

    #[test]
    fn show_slide_leaves_timer_alone() {
        let (mut slider, _) = slider(3);
        let scheduled = slider.scheduler.scheduled;
        slider.show_slide(2);
        assert_eq!(slider.scheduler.scheduled, scheduled);
        assert_eq!(slider.pending_timers(), 1);
    }

    #[test]
    fn next_cycles_back_to_start() {
        let (mut slider, _) = slider(4);
        for _ in 0..4 {
            slider.next();
        }
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn navigation_keeps_a_single_timer() {
        let (mut slider, _) = slider(3);
        slider.next();
        slider.previous();
        slider.go_to(2);
        slider.go_to(-1);
        assert_eq!(slider.pending_timers(), 1);
        // initialize + four navigations, each cancelling the previous one
        assert_eq!(slider.scheduler.scheduled, 5);
        assert_eq!(slider.scheduler.cancelled, 4);
    }

    #[test]
    fn manual_navigation_restarts_interval() {
        let (mut slider, _) = slider(3);
        slider.tick(Duration::from_millis(4000));
        slider.next();
        assert_eq!(slider.current_index(), 1);

        // The old schedule would have fired here
        slider.tick(Duration::from_millis(1500));
        assert_eq!(slider.current_index(), 1);

        slider.tick(Duration::from_millis(3500));
        assert_eq!(slider.current_index(), 2);
    }

    #[test]
    fn timer_advances_without_rescheduling() {
        let (mut slider, _) = slider(2);
        let scheduled = slider.scheduler.scheduled;

        slider.tick(INTERVAL);
        assert_eq!(slider.current_index(), 1);
        slider.tick(INTERVAL);
        assert_eq!(slider.current_index(), 0);

        assert_eq!(slider.scheduler.scheduled, scheduled);
        assert_single_active(&slider);
    }

    #[test]
    fn pause_and_resume() {
        let (mut slider, _) = slider(3);
        slider.pause();
        assert_eq!(slider.state(), SliderState::Paused);
        assert_eq!(slider.pending_timers(), 0);
        assert!(!slider.timer_active());

        slider.tick(INTERVAL * 3);
        assert_eq!(slider.current_index(), 0);

        slider.resume();
        assert_eq!(slider.state(), SliderState::AutoPlaying);
        assert_eq!(slider.pending_timers(), 1);

        // Resuming twice does not stack schedules
        slider.resume();
        assert_eq!(slider.pending_timers(), 1);
    }

    #[test]
    fn navigating_while_paused_resumes_auto_play() {
        let (mut slider, _) = slider(3);
        slider.pause();
        slider.next();
        assert_eq!(slider.state(), SliderState::AutoPlaying);
        assert_eq!(slider.pending_timers(), 1);
    }

    #[test]
    fn three_slide_walkthrough() {
        let (mut slider, _) = slider(3);
        assert_eq!(slider.current_index(), 0);

        slider.next();
        assert_eq!(slider.current_index(), 1);

        slider.previous();
        assert_eq!(slider.current_index(), 0);
        slider.previous();
        assert_eq!(slider.current_index(), 2);

        slider.pause();
        assert_eq!(slider.pending_timers(), 0);

        slider.resume();
        assert_eq!(slider.pending_timers(), 1);
        slider.tick(Duration::from_millis(4999));
        assert_eq!(slider.current_index(), 2);
        slider.tick(Duration::from_millis(1));
        assert_eq!(slider.current_index(), 0);
    }

    #[test]
    fn empty_slider_is_inert() {
        let (mut slider, router) = slider(0);
        assert_eq!(slider.state(), SliderState::Inert);
        assert_eq!(slider.pending_timers(), 0);
        assert_eq!(router.subscription_count(), 0);

        slider.next();
        slider.previous();
        slider.go_to(3);
        slider.show_slide(-1);
        slider.pause();
        slider.resume();
        slider.tick(INTERVAL);
        slider.handle(SliderEvent::Key(Key::ArrowRight));

        assert_eq!(slider.state(), SliderState::Inert);
        assert_eq!(slider.current_index(), 0);
        assert_eq!(slider.pending_timers(), 0);
    }

    #[test]
    fn mismatched_indicators_are_paired_by_index() {
        let mut router = EventRouter::new();
        let slides = (0..3).map(|_| TestSlide::default()).collect();
        let mut slider = SliderController::initialize(
            slides,
            vec![Indicator::default(); 5],
            INTERVAL,
            FrameScheduler::new(),
            &mut router,
            KeyScope::Page,
        );
        assert_eq!(slider.state(), SliderState::AutoPlaying);

        slider.go_to(2);
        let active: Vec<bool> = slider.indicators().iter().map(|i| i.active).collect();
        assert_eq!(active, vec![false, false, true, false, false]);
    }

    #[test]
    fn events_map_to_operations() {
        let (mut slider, _) = slider(4);
        slider.handle(SliderEvent::NextClicked);
        assert_eq!(slider.current_index(), 1);
        slider.handle(SliderEvent::Key(Key::ArrowRight));
        assert_eq!(slider.current_index(), 2);
        slider.handle(SliderEvent::Key(Key::ArrowLeft));
        assert_eq!(slider.current_index(), 1);
        slider.handle(SliderEvent::PreviousClicked);
        assert_eq!(slider.current_index(), 0);
        slider.handle(SliderEvent::IndicatorClicked(3));
        assert_eq!(slider.current_index(), 3);

        slider.handle(SliderEvent::PointerEnter);
        assert_eq!(slider.state(), SliderState::Paused);
        slider.handle(SliderEvent::PointerLeave);
        assert_eq!(slider.state(), SliderState::AutoPlaying);
    }

    #[test]
    fn dispose_cancels_timer_and_unsubscribes() {
        let (mut slider, mut router) = slider(3);
        slider.dispose(&mut router);

        assert_eq!(slider.state(), SliderState::Disposed);
        assert_eq!(slider.pending_timers(), 0);
        assert_eq!(router.subscription_count(), 0);
        assert_eq!(router.route(SliderEvent::NextClicked), None);

        // Nothing revives a disposed slider
        slider.resume();
        slider.next();
        assert_eq!(slider.pending_timers(), 0);
        assert_eq!(slider.current_index(), 0);

        slider.dispose(&mut router);
        assert_eq!(slider.state(), SliderState::Disposed);
    }

    #[test]
    fn cancelled_timer_firings_are_ignored() {
        let mut router = EventRouter::new();
        let slides = (0..3).map(|_| TestSlide::default()).collect();
        let mut slider = SliderController::initialize(
            slides,
            vec![Indicator::default(); 3],
            INTERVAL,
            ReplayingScheduler::default(),
            &mut router,
            KeyScope::Page,
        );

        slider.go_to(1);
        slider.pause();
        assert_eq!(slider.scheduler.cancelled.len(), 2);

        // Both replayed ids belong to cancelled timers
        slider.tick(Duration::from_millis(1));
        assert_eq!(slider.current_index(), 1);

        slider.resume();
        slider.tick(Duration::from_millis(1));
        assert_eq!(slider.current_index(), 1);

        // Only the live timer advances the slide
        slider.tick(INTERVAL);
        assert_eq!(slider.current_index(), 2);
        assert_single_active(&slider);
    }
}
