//! Core domain types
//!
//! This module contains the structures the bot reasons about: what a
//! homework record looks like, which review statuses exist, what each of
//! them means to a human, and where the next status query starts.

pub mod cursor;
pub mod homework;
pub mod verdict;
