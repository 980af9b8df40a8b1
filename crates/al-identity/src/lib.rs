//! Identity service capability: create and verify email/password
//! credentials and track the locally signed-in identity.

pub mod current_session;
pub mod error;
pub mod identity_service;
pub mod in_memory_identity_service;
pub mod rest_identity_service;


pub use current_session::CurrentSession;
pub use error::{IdentityError, Result};
pub use identity_service::IdentityService;
pub use in_memory_identity_service::InMemoryIdentityService;
pub use rest_identity_service::RestIdentityService;
