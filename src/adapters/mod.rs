//! External integrations
//!
//! - [`esolat`] - JAKIM e-solat prayer time API

pub mod esolat;
