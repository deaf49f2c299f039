use crate::core::validator::FormValidator;
use crate::domain::model::{FormEvent, SubmitOutcome};
use crate::domain::ports::{ConfigProvider, EventSource, FormSurface, Scheduler, SubmissionSink};
use crate::utils::error::Result;
use std::time::Duration;

/// How long the success banner stays up after an accepted submission.
pub const BANNER_VISIBLE: Duration = Duration::from_millis(5000);
/// Extra delay before the reset form becomes visible again.
pub const FORM_RESTORE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineReport {
    pub accepted: usize,
    pub rejected: usize,
    /// Invalid-field count of the most recent rejected submit, 0 if none.
    pub invalid_fields: usize,
}

/// 表單事件迴圈:從事件來源逐一取出事件交給驗證器,
/// 成功送出時交付給 sink 並驅動橫幅的顯示週期。
pub struct FormEngine<E, U, K, S>
where
    E: EventSource,
    U: FormSurface,
    K: SubmissionSink,
    S: Scheduler,
{
    events: E,
    validator: FormValidator<U>,
    sink: K,
    scheduler: S,
    banner_visible: Duration,
    restore_delay: Duration,
}

impl<E, U, K, S> FormEngine<E, U, K, S>
where
    E: EventSource,
    U: FormSurface,
    K: SubmissionSink,
    S: Scheduler,
{
    pub fn new(events: E, surface: U, sink: K, scheduler: S) -> Self {
        Self {
            events,
            validator: FormValidator::new(surface),
            sink,
            scheduler,
            banner_visible: BANNER_VISIBLE,
            restore_delay: FORM_RESTORE_DELAY,
        }
    }

    /// 以配置中的時間參數建立引擎
    pub fn with_config(
        events: E,
        surface: U,
        sink: K,
        scheduler: S,
        config: &impl ConfigProvider,
    ) -> Self {
        let mut engine = Self::new(events, surface, sink, scheduler);
        engine.banner_visible = config.banner_visible();
        engine.restore_delay = config.restore_delay();
        engine
    }

    pub fn validator(&self) -> &FormValidator<U> {
        &self.validator
    }

    /// Drains the event source. Runs until the source is exhausted; each
    /// accepted submission is delivered to the sink before the banner cycle
    /// plays out.
    pub async fn run(&mut self) -> Result<EngineReport> {
        tracing::debug!("Form session started");
        let mut report = EngineReport::default();

        while let Some(event) = self.events.next_event().await {
            match event {
                FormEvent::Input { field, value } => {
                    self.validator.handle_input(field, value);
                }
                FormEvent::Blur { field } => {
                    self.validator.handle_blur(field);
                }
                FormEvent::Submit => match self.validator.handle_submit() {
                    SubmitOutcome::Accepted(submission) => {
                        self.sink.deliver(&submission).await?;
                        report.accepted += 1;
                        self.banner_cycle().await;
                    }
                    SubmitOutcome::Rejected {
                        first_invalid,
                        invalid_count,
                    } => {
                        tracing::info!(
                            "Submission rejected: {} field(s) invalid, first: {}",
                            invalid_count,
                            first_invalid
                        );
                        report.rejected += 1;
                        report.invalid_fields = invalid_count;
                    }
                },
            }
        }

        tracing::debug!(
            "Form session ended: {} accepted, {} rejected",
            report.accepted,
            report.rejected
        );
        Ok(report)
    }

    // 橫幅週期:顯示固定時間後隱藏,再延遲一段時間讓表單重新出現。
    // 週期進行中不取下一個事件,因此不需要取消機制。
    async fn banner_cycle(&mut self) {
        self.scheduler.after(self.banner_visible).await;
        self.validator.dismiss_banner();
        self.scheduler.after(self.restore_delay).await;
        self.validator.restore_form();
    }
}
