/// Задержка, после которой сообщение об успехе снова сменяется формой
pub const SUCCESS_MESSAGE_DURATION_MS: u32 = 8000;

/// Состояние формы предложения ресурса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionFormState {
    /// Форма видна и доступна для ввода
    #[default]
    Editable,
    /// Форма скрыта, показано сообщение об успехе
    Submitted,
}

/// Квиток отправки: связывает таймер возврата с конкретной отправкой
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTicket {
    generation: u64,
}

/// Машина состояний формы: Editable -> Submitted по отправке,
/// Submitted -> Editable только по истечении таймера.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    state: SubmissionFormState,
    generation: u64,
}

impl SubmissionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionFormState {
        self.state
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionFormState::Submitted
    }

    /// Отправка формы. Повторная отправка, пока показано сообщение
    /// об успехе, игнорируется и не перезапускает таймер.
    pub fn submit(&mut self) -> Option<SubmissionTicket> {
        match self.state {
            SubmissionFormState::Editable => {
                self.generation += 1;
                self.state = SubmissionFormState::Submitted;
                Some(SubmissionTicket {
                    generation: self.generation,
                })
            }
            SubmissionFormState::Submitted => None,
        }
    }

    /// Таймер истёк. Возвращает `true`, если форма вернулась в Editable;
    /// устаревший квиток ничего не меняет.
    pub fn reset_elapsed(&mut self, ticket: SubmissionTicket) -> bool {
        if self.state == SubmissionFormState::Submitted && ticket.generation == self.generation {
            self.state = SubmissionFormState::Editable;
            true
        } else {
            false
        }
    }
}
