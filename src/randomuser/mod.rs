mod client;
mod fetch_error;
pub mod models;

pub use client::{RandomUserClient, UserSource};
pub use fetch_error::FetchError;
