//! docproc-client - typed async client for the document-processing API
//!
//! This library maps the API's operations (projects, file upload, chat
//! sessions, analysis runs) onto single HTTP requests and returns the typed
//! response bodies.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `api`: [`ApiClient`] and its operations
//! - `types`: Request and response shapes
//! - `transport`: HTTP transport abstraction and the reqwest implementation
//! - `config`: Client configuration and validation
//! - `error`: Error types and result aliases
//!
//! # Example
//!
//! ```no_run
//! use docproc_client::types::{NewChatSession, NewMessage, SessionType};
//! use docproc_client::{ApiClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> docproc_client::Result<()> {
//!     let config = ClientConfig::load("docproc.yaml")?;
//!     let client = ApiClient::new(&config)?;
//!
//!     let projects = client.list_projects().await?;
//!     if let Some(project) = projects.first() {
//!         let files = client.list_files(project.id).await?;
//!         let file_ids = files.iter().map(|f| f.id).collect();
//!         let session = client
//!             .create_chat_session(project.id, &NewChatSession::new(SessionType::Document, file_ids))
//!             .await?;
//!         let reply = client
//!             .send_message(project.id, session.id, &NewMessage::text("Summarise these files"))
//!             .await?;
//!         println!("{}", reply.content);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use transport::Transport;
