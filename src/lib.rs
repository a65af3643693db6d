//! Intake Form - Financial advice contact and goals intake
//!
//! This crate implements a single intake session: contact details, contact
//! preferences, up to ten financial goals and a submission pipeline that
//! either accepts the form or lists the fields needing correction.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
