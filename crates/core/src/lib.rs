//! Core library for the records client
//!
//! This crate implements the **Functional Core** of the records client,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`records_core`** (this crate): Pure transformation functions with zero I/O
//! - **`records`**: HTTP transport, orchestration and the CLI (the Imperative Shell)
//!
//! Everything here can be tested with fixture data. The shell fetches pages,
//! hands the raw bytes and status codes to this crate, and assembles the result.
//!
//! # Module Organization
//!
//! - [`colors`]: The static color table and record dispositions
//! - [`query`]: Page/color options to wire query parameters
//! - [`response`]: HTTP status gate and record decoding
//! - [`aggregate`]: Filtering and classification of a fetched page
//! - [`pagination`]: Previous/next page arithmetic
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use records_core::aggregate::aggregate;
//! use records_core::query::RetrieveOptions;
//!
//! let records = records_core::response::decode_records(body)?;
//! let summary = aggregate(records, &RetrieveOptions::default());
//!
//! assert_eq!(summary.ids.len(), 10);
//! ```

pub mod aggregate;
pub mod colors;
pub mod pagination;
pub mod query;
pub mod response;
