pub mod console_events;

pub use console_events::ConsoleWizardEvents;
