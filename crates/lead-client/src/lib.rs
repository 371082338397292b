pub mod config;
pub mod google_forms;
pub mod submit;

pub use google_forms::LeadClient;
pub use submit::{run_submit, SubmitTarget};
