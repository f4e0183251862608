//! # API Module
//!
//! This module provides [`ApiClient`] and its operations against the
//! document-processing REST API, organized by domain:
//!
//! - `client`: Core client, request execution and response decoding
//! - `projects`: Current user and project management
//! - `files`: Multipart file upload and file listing
//! - `sessions`: Chat sessions and session messages
//! - `legacy_chat`: Deprecated flat project-level chat
//! - `analysis`: Analysis runs

pub mod analysis;
pub mod client;
pub mod files;
pub mod legacy_chat;
pub mod projects;
pub mod sessions;

pub use client::ApiClient;
pub use files::UPLOAD_FIELD;
