//! # callsupport
//!
//! Request assembly helpers shared by generated API clients.
//!
//! This crate builds the two pieces of an outgoing call that do not depend on
//! the transport: the encoded URL query string and the request header set.
//!
//! ## Modules
//!
//! - [`params`] - Ordered multi-valued query parameter accumulation and encoding
//! - [`options`] - Caller-supplied call options that contribute query parameters
//! - [`headers`] - Request header construction
//! - [`config`] - Client identification settings used in request headers
//! - [`error`] - Error types

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod headers;
pub mod options;
pub mod params;

// Re-export commonly used types
pub use config::ClientIdentity;
pub use error::{Error, Result};
pub use headers::request_headers;
pub use options::{apply_options, CallOption, OptionValue};
pub use params::ParameterSet;
