use crate::domain::model::{Field, FormEvent, FormSubmission, ScrollTarget};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where form events come from. The CLI scripts them; a real rendering
/// surface would forward its own blur/input/submit notifications.
#[async_trait]
pub trait EventSource: Send {
    /// `None` ends the session.
    async fn next_event(&mut self) -> Option<FormEvent>;
}

/// Presentation-side effects the validator drives. Implementations only
/// render state; they never validate.
pub trait FormSurface: Send {
    fn set_error(&mut self, field: Field, message: &str);
    fn clear_error(&mut self, field: Field);
    fn set_form_visible(&mut self, visible: bool);
    fn set_banner_visible(&mut self, visible: bool);
    fn scroll_to(&mut self, target: ScrollTarget);
}

/// The external collaborator a validated submission is handed to.
pub trait SubmissionSink: Send + Sync {
    fn deliver(
        &self,
        submission: &FormSubmission,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Timer capability for the delayed banner transitions. Injectable so tests
/// run against tokio's paused clock instead of wall time.
pub trait Scheduler: Send + Sync {
    fn after(&self, delay: Duration) -> impl std::future::Future<Output = ()> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn banner_visible(&self) -> Duration;
    fn restore_delay(&self) -> Duration;
    fn output_path(&self) -> Option<&str>;
}
