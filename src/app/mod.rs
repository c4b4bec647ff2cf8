// Presentation layer: prompts, menu and the interactive session.

pub mod console;
pub mod menu;
pub mod messages;
pub mod session;
