// src/core/mod.rs

pub mod bearing;
pub mod coerce;
pub mod html;
pub mod net;
pub mod sanitize;
pub mod table;
pub mod vischars;

pub use vischars::VisChars;
