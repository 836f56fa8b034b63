//! Homework Core
//!
//! Core types shared by the homework status bot crates.
//!
//! This crate contains:
//! - Domain types: homework records, review statuses, the verdict catalog and
//!   the polling cursor
//! - DTOs: wire shapes for the Practicum status API and the Telegram Bot API

pub mod domain;
pub mod dto;
