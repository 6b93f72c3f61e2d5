//! JAKIM e-solat adapter
//!
//! This module provides the HTTP client for the e-solat `takwimsolat`
//! endpoint and the response models it parses.

pub mod client;
pub mod models;

pub use client::EsolatClient;
pub use models::{parse_envelope, PrayerTimeEnvelope};
