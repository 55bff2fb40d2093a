//! Fixed settings and request/response data shapes

pub mod config;
pub mod models;
