//! Interactive driver for the application wizard.

mod driver;
mod prompter;
mod review;

pub use driver::run_wizard;
pub use prompter::{DialoguerPrompter, StepChoice, WizardPrompter};
pub use review::render_review;
