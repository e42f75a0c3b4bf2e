//! HTTP Client Adapter - reqwest 实现

mod reqwest_client;

pub use reqwest_client::*;
