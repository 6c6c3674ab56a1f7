//! # nikeplus - Nike+ API client for Rust
//!
//! A Rust client for the Nike+ fitness-tracking service. This library
//! handles the developer-portal login handshake, exchanges the session for
//! an access token, and fetches activity records, normalizing the API's
//! inconsistent error responses into a single error type.
//!
//! ## Features
//!
//! - Session login with email and password (cookie-based handshake)
//! - Access token exchange, returned as an explicit [`AccessToken`] value
//! - Activity detail, activity list, and list-by-type endpoints with typed
//!   results
//! - Unified decoding of the API's three response shapes: success payload,
//!   structured error envelope, and generic `{"error": ...}` object
//!
//! ## Basic Usage
//!
//! ```no_run
//! use nikeplus::{Client, Params};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new();
//!
//!     // Establish the session and obtain a token
//!     client.login("runner@example.com", "password")?;
//!     let token = client.ask_access_token()?;
//!
//!     // Fetch the most recent runs
//!     let params = Params::new().set("count", 5);
//!     let runs = client.get_activities_by_type(&token, "RUN", Some(&params))?;
//!     for activity in &runs.data {
//!         println!(
//!             "{} {} ({} steps)",
//!             activity.start_time, activity.activity_type, activity.metric_summary.steps
//!         );
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Authentication
//!
//! Calls are authenticated by an `access_token` query parameter, never a
//! header. The token comes from [`Client::ask_access_token`], which relies
//! on the session cookie stored by [`Client::login`]; the client keeps the
//! cookie store for its lifetime but never holds the token itself, so
//! activity calls take `&AccessToken` explicitly:
//!
//! ```no_run
//! use nikeplus::{AccessToken, Client};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new();
//! let token = AccessToken::new("dee6ce5e936434ca7275d678d4104f30");
//!
//! let activity = client.get_activity_details(&token, "c8f65c19-6fe6-43fe-9393-90f52246e111")?;
//! println!("{:?}", activity.metric_summary);
//! # Ok(())
//! # }
//! ```

mod activities;
mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod params;
mod response;
pub mod token;

// Re-export main types for convenience
pub use client::{Client, Config};
pub use error::{Error, Result};
pub use models::{Activities, Activity, MetricSeries, MetricSummary, Paging, Tag};
pub use params::{ParamValue, Params};
pub use token::AccessToken;
