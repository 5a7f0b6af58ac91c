use contracts::domain::a002_resource_submission::{ResourceSubmission, SubmissionForm};
use leptos::prelude::*;

/// ViewModel формы "Submit a Resource"
#[derive(Clone, Copy)]
pub struct SubmissionFormViewModel {
    pub form: RwSignal<ResourceSubmission>,
    pub machine: RwSignal<SubmissionForm>,
    reset_after_ms: u32,
}

impl SubmissionFormViewModel {
    pub fn new(reset_after_ms: u32) -> Self {
        Self {
            form: RwSignal::new(ResourceSubmission::default()),
            machine: RwSignal::new(SubmissionForm::new()),
            reset_after_ms,
        }
    }

    pub fn is_submitted(&self) -> impl Fn() -> bool + Send + Sync + 'static {
        let machine = self.machine;
        move || machine.with(|m| m.is_submitted())
    }

    /// Отправка: данные только логируются, поля очищаются,
    /// через `reset_after_ms` форма возвращается.
    pub fn submit_command(&self) {
        let mut ticket = None;
        self.machine.update(|m| ticket = m.submit());
        let Some(ticket) = ticket else {
            log::debug!("Submission ignored: success message is still shown");
            return;
        };

        let submission = self.form.get_untracked().normalized();
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("Resource submission received (not persisted): {}", json),
            Err(e) => log::warn!("Resource submission could not be serialized: {}", e),
        }
        self.form.set(ResourceSubmission::default());

        let machine = self.machine;
        let delay = self.reset_after_ms;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(delay).await;
            machine.update(|m| {
                if m.reset_elapsed(ticket) {
                    log::debug!("Submission form is editable again");
                }
            });
        });
    }
}
