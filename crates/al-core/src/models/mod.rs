pub mod credential;
pub mod document_path;
pub mod identity;
pub mod profile_view;
pub mod session_token;
pub mod uid;
pub mod user_profile;
