//! Data Transfer Objects for the external APIs
//!
//! DTOs mirror the JSON exchanged with the Practicum status API and the
//! Telegram Bot API. They carry no behaviour beyond (de)serialization.

pub mod status;
pub mod telegram;
