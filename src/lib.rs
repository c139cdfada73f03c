pub mod clock;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod search;
pub mod spotify;
pub mod state;
pub mod token_cache;
pub mod validation;

// Re-export commonly used items
pub use config::{ClientCredentials, Config};
pub use error::{ApiError, AuthError, ConfigError, SearchError, TokenError};
pub use models::ArtistRecord;
pub use router::build_router;
pub use search::{SearchQuery, search_artists};
pub use spotify::SearchClient;
pub use state::AppState;
pub use token_cache::{Credential, TokenCache};
pub use validation::{CollaborationVerdict, MockValidationProvider, ValidationProvider};
