//! Service layer
//!
//! Services hold the per-cycle logic of the bot: checking the API payload,
//! turning a homework record into a message, and delivering that message.
//! They receive their collaborators at construction time and keep no
//! mutable state.

mod notifier;
mod parser;
mod validator;

pub use notifier::Notifier;
pub use parser::StatusParser;
pub use validator::ResponseValidator;
