//! Core building blocks for the student housing portal: environment-backed
//! configuration, telemetry wiring, and the room/application domain under
//! [`portal`].

pub mod config;
pub mod error;
pub mod portal;
pub mod telemetry;
