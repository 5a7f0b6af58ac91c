pub mod aggregate;
pub mod form_state;

pub use aggregate::ResourceSubmission;
pub use form_state::{SubmissionForm, SubmissionFormState, SubmissionTicket};
