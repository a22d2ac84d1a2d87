//! Domain rules: input presence checks and write-time stamps.

pub mod form;
pub mod stamp;
