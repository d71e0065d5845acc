pub mod activation;
pub mod config;
pub mod consts;
pub mod error;
pub mod launcher;
pub mod logging;
pub mod preflight;
