//! # Migadu Client
//! Asynchronous wrapper around the Migadu hosted email REST API, providing typed methods to list, read, create, update, and delete the mailboxes, aliases, and identities of a domain, and to read its rewrite rules, using [`Client`] and [`ClientBuilder`].
//!
//! ## Audience and uses
//! For Rust developers managing Migadu domains from code: infrastructure-as-code providers, provisioning scripts, or admin tooling. Configure with [`ClientBuilder`] (or [`ClientBuilder::from_env`]), then call one method per API operation; each returns the record the server answered with.
//!
//! ## Domain names
//! Domains may be given in Unicode. Every method converts them to their ASCII-compatible encoding (`hoß.de` becomes `xn--ho-hia.de`) before building the request URL. The [`domain`] module exposes the same conversion, plus helpers that convert the domain part of email address lists for display or comparison.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Each method issues exactly one request; dropping the returned future cancels it.
//!
//! ## Out of scope
//! No retries, caching, diffing, or state. The client is a typed translation of the REST API and inherits its semantics; requests that create resources are not idempotent.
//!
//! ## Errors
//! HTTP 404 surfaces as [`Error::NotFound`], any other non-2xx status as [`Error::RequestFailed`], network failures as [`Error::Transport`], malformed bodies as [`Error::Decode`], and invalid domains as [`Error::Encoding`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests and responses are reported as `tracing` events at `debug` level, rejected requests at `warn`. Install a subscriber in your application to see them.
//!
//! ## Example
//! ```no_run
//! use migadu_client::{Alias, Client};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), migadu_client::Error> {
//!     let client = Client::new("admin@example.com", "api-key")?;
//!
//!     let alias = Alias {
//!         local_part: "info".into(),
//!         destinations: vec!["team@example.com".into()],
//!         ..Default::default()
//!     };
//!     let created = client.create_alias("example.com", &alias).await?;
//!     println!("Created: {}", created.address);
//!
//!     for mailbox in client.get_mailboxes("example.com").await? {
//!         println!("Mailbox: {}", mailbox.address);
//!     }
//!
//!     client.delete_alias("example.com", "info").await?;
//!     Ok(())
//! }
//! ```

mod aliases;
mod client;
pub mod domain;
mod error;
mod identities;
mod mailboxes;
mod models;
mod rewrites;

pub use client::{Client, ClientBuilder};
pub use error::Error;
pub use models::{Alias, Aliases, Identities, Identity, Mailbox, Mailboxes, Rewrite, Rewrites};

/// Result type alias for Migadu operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
