//! Terminal UI for the Aino content-adaptation client.
//!
//! The TUI plays the role the browser played for the original tool: it
//! renders the option sets the state machine says are legal, highlights
//! the fields a failed submit flagged, and displays the generated
//! headings, descriptions, and asset URLs.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod app;
mod events;
mod i18n;
mod runner;
mod ui;

pub use app::{App, InputTarget, Section};
pub use events::{Event, EventHandler};
pub use i18n::{field_label, label, missing_fields_message, Label, Language};
pub use runner::{run_tui, BackendEvent};
