pub mod submission;

pub use submission::{Field, NewSubmission, Submission, SubmissionFields, SubmissionId};
