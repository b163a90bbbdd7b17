pub mod client;
pub mod publisher;

pub use client::{CmsClient, CmsResponse};
pub use publisher::BatchPublisher;
