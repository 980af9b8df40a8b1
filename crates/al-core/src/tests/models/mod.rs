mod credential;
mod document_path;
mod user_profile;
