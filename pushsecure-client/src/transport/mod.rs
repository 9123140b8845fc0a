//! Thin HTTP layer over `reqwest`.

mod client;
mod request;
mod response;

pub use client::HttpTransport;
pub use request::RequestBuilder;
pub use response::Response;
