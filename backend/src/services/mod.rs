//! Module for core business logic services.
//!
//! The services sit between the HTTP handlers and the store contracts:
//! reads in [`query`], create/delete in [`mutation`], and next-question
//! selection in [`quiz`].

pub mod mutation;
pub mod query;
pub mod quiz;

pub use mutation::{DeleteError, MutationService};
pub use query::{QueryService, QuestionPage};
pub use quiz::QuizSelector;
