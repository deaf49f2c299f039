use contact_form::adapters::{ScriptedEvents, TokioScheduler};
use contact_form::domain::model::{Field, FormEvent, FormSubmission, ScrollTarget};
use contact_form::domain::ports::{EventSource, FormSurface, SubmissionSink};
use contact_form::utils::error::Result;
use contact_form::FormEngine;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Timestamps every visibility transition against tokio's paused clock, so
/// the banner schedule can be asserted to the millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    FormVisible(bool),
    BannerVisible(bool),
}

#[derive(Clone, Default)]
struct TimelineSurface {
    transitions: Arc<Mutex<Vec<(Instant, Transition)>>>,
}

impl TimelineSurface {
    fn timestamps_of(&self, wanted: Transition) -> Vec<Instant> {
        self.transitions
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, t)| *t == wanted)
            .map(|(at, _)| *at)
            .collect()
    }

    fn single_timestamp_of(&self, wanted: Transition) -> Instant {
        let stamps = self.timestamps_of(wanted);
        assert_eq!(stamps.len(), 1, "expected exactly one {:?}", wanted);
        stamps[0]
    }
}

impl FormSurface for TimelineSurface {
    fn set_error(&mut self, _field: Field, _message: &str) {}

    fn clear_error(&mut self, _field: Field) {}

    fn set_form_visible(&mut self, visible: bool) {
        self.transitions
            .lock()
            .unwrap()
            .push((Instant::now(), Transition::FormVisible(visible)));
    }

    fn set_banner_visible(&mut self, visible: bool) {
        self.transitions
            .lock()
            .unwrap()
            .push((Instant::now(), Transition::BannerVisible(visible)));
    }

    fn scroll_to(&mut self, _target: ScrollTarget) {}
}

#[derive(Clone, Copy, Default)]
struct NullSink;

impl SubmissionSink for NullSink {
    async fn deliver(&self, _submission: &FormSubmission) -> Result<()> {
        Ok(())
    }
}

fn valid_form_events() -> ScriptedEvents {
    ScriptedEvents::filled_form("Al", "a@b.co", "Hi there", "This is long enough")
}

#[tokio::test(start_paused = true)]
async fn test_banner_hides_after_5000ms_and_form_returns_500ms_later() {
    let surface = TimelineSurface::default();
    let mut engine = FormEngine::new(
        valid_form_events(),
        surface.clone(),
        NullSink,
        TokioScheduler,
    );

    engine.run().await.unwrap();

    let shown = surface.single_timestamp_of(Transition::BannerVisible(true));
    let hidden = surface.single_timestamp_of(Transition::BannerVisible(false));
    let form_down = surface.single_timestamp_of(Transition::FormVisible(false));
    let form_back = surface.single_timestamp_of(Transition::FormVisible(true));

    // No time passes while the submit itself is handled.
    assert_eq!(form_down, shown);

    assert_eq!(hidden - shown, Duration::from_millis(5000));
    assert_eq!(form_back - hidden, Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_whole_session_takes_exactly_one_banner_cycle() {
    let surface = TimelineSurface::default();
    let mut engine = FormEngine::new(
        valid_form_events(),
        surface.clone(),
        NullSink,
        TokioScheduler,
    );

    let started = Instant::now();
    engine.run().await.unwrap();

    assert_eq!(started.elapsed(), Duration::from_millis(5500));
}

#[tokio::test(start_paused = true)]
async fn test_second_submission_is_possible_after_the_form_returns() {
    let surface = TimelineSurface::default();

    let mut events: Vec<FormEvent> = Vec::new();
    for _ in 0..2 {
        let mut round = valid_form_events();
        while let Some(event) = round.next_event().await {
            events.push(event);
        }
    }

    let mut engine = FormEngine::new(
        ScriptedEvents::new(events),
        surface.clone(),
        NullSink,
        TokioScheduler,
    );

    let started = Instant::now();
    let report = engine.run().await.unwrap();

    assert_eq!(report.accepted, 2);
    // Two full banner cycles, back to back.
    assert_eq!(surface.timestamps_of(Transition::BannerVisible(true)).len(), 2);
    assert_eq!(surface.timestamps_of(Transition::FormVisible(true)).len(), 2);
    assert_eq!(started.elapsed(), Duration::from_millis(11_000));
}
