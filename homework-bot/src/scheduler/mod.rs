//! Scheduler layer for the bot
//!
//! This layer owns the polling loop: it drives one fetch, validate, parse
//! and notify cycle per tick and keeps a failed cycle from ending the loop.

pub mod poller;

pub use poller::StatusPoller;
