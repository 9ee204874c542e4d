//! Value Object Module

pub mod notice_category;
pub mod notice_filter;
pub mod notice_text;
