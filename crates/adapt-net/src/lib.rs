//! Adapt Networking
//!
//! Persistence collaborator for accessibility profiles:
//!
//! | Operation | Request                 | Response          |
//! |-----------|-------------------------|-------------------|
//! | list      | `GET profiles`          | `[Profile]`       |
//! | create    | `POST profile`          | `Profile`         |
//! | update    | `PUT profile/{id}`      | `Profile`         |
//! | delete    | `DELETE profile/{id}`   | empty             |

mod backend;
mod http;
mod memory;

pub use backend::ProfileBackend;
pub use http::HttpProfileBackend;
pub use memory::MemoryProfileBackend;

use adapt_a11y::ProfileId;

/// Network error
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Malformed body: {0}")]
    Body(#[from] serde_json::Error),

    #[error("Profile {0} not found")]
    NotFound(ProfileId),
}
