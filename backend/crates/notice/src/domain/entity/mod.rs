//! Entities

pub mod notice;
