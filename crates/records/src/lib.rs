//! Client for a paginated, color-filterable records API
//!
//! This crate is the Imperative Shell around [`records_core`]: it owns the
//! HTTP transport and runs the two-request retrieve protocol (the requested
//! page, then a probe of the following page to decide `nextPage`).
//!
//! ```rust,ignore
//! use records::{RecordsClient, RecordsConfig};
//! use records_core::query::RetrieveOptions;
//!
//! let client = RecordsClient::http(RecordsConfig::from_env())?;
//! let options = RetrieveOptions::page(2).with_colors(["red", "brown"]);
//!
//! match client.retrieve(Some(options)).await {
//!     Some(response) => println!("{:?}", response.ids),
//!     None => eprintln!("could not retrieve records"),
//! }
//! ```

pub mod config;
pub mod error;
pub mod retrieve;
pub mod transport;

pub use config::RecordsConfig;
pub use error::Error;
pub use retrieve::RecordsClient;
pub use transport::{HttpTransport, RawResponse, Transport, TransportError};
