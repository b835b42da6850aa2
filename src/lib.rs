//! # twitrest - blocking Twitter REST client
//!
//! A small client for the Twitter v1.1 REST API. It authenticates with the
//! OAuth2 client-credentials grant, walks paginated search results and maps
//! the raw JSON into typed records.
//!
//! ## Features
//!
//! - Basic-Auth credential encoding and bearer token acquisition
//! - Cursor-based search pagination with an optional result cap
//! - Typed [`Post`], [`Author`] and [`AuthorProfile`] records; unknown
//!   fields are dropped
//! - Optional progress callback for long searches
//!
//! ## Basic Usage
//!
//! ```no_run
//! use twitrest::RestClient;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = RestClient::new("consumer_key", "consumer_secret")?;
//!     client.bind(Box::new(|line: &str| eprintln!("{}", line)));
//!
//!     for post in client.search("rustlang", Some(50))? {
//!         println!("{:?}: {:?}", post.id, post.text);
//!     }
//!
//!     let profile = client.lookup(783214)?;
//!     println!("avatar: {:?}", profile.profile_image_url);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! ```no_run
//! use twitrest::{Config, Credential, RestClient};
//! use std::time::Duration;
//!
//! let config = Config::new("http://localhost:8080").with_timeout(Duration::from_secs(30));
//! let client = RestClient::with_config(config, Credential::encode("key", "secret"))?;
//! # Ok::<(), twitrest::RestError>(())
//! ```

pub mod author;
pub mod client;
pub mod credential;
pub mod error;
pub mod post;
pub mod response;
pub mod rest;
pub mod time;
pub mod token;

// Re-export main types for convenience
pub use author::{Author, AuthorProfile};
pub use client::Config;
pub use credential::Credential;
pub use error::{ResponseInfo, RestError, Result};
pub use post::Post;
pub use response::{SearchMetadata, SearchPage};
pub use rest::{ProgressFn, RestClient};
pub use time::Timestamp;
pub use token::{BearerToken, TokenProvider};
