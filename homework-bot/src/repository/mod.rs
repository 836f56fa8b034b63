//! Repository layer
//!
//! Repositories abstract the two remote services the bot depends on: the
//! status API it reads from and the messenger it writes to. The poller only
//! sees these traits, so tests can swap in scripted fakes.

mod messages;
mod statuses;

pub use messages::MessageRepository;
pub use statuses::StatusRepository;
