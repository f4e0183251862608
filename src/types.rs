//! Request and response shapes exchanged with the document-processing API
//!
//! Every type here is a plain data-transfer object. Response types are
//! deserialized as-is; request types skip optional fields that are unset so
//! they are absent from the JSON body rather than sent as `null`.
//!
//! Timestamps are read as naive datetimes. Values carrying an offset (`Z`,
//! `+02:00`) are accepted too and normalized to UTC.

use std::path::Path;

use base64::Engine;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ApiError, Result};

/// Open key-value mapping with no client-side schema
pub type JsonMap = Map<String, Value>;

/// Lenient timestamp deserialization for server-generated datetimes.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime};
    use serde::{Deserialize, Deserializer};

    pub(super) fn parse(value: &str) -> Option<NaiveDateTime> {
        value
            .parse::<NaiveDateTime>()
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(value)
                    .ok()
                    .map(|dt| dt.naive_utc())
            })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid timestamp: {raw}"))
        })
    }

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => parse(&raw).map(Some).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid timestamp: {raw}"))
            }),
            None => Ok(None),
        }
    }
}

/// The authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub role: String,
}

/// Top-level container grouping files, chat sessions and analysis runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,
}

/// Body of a project creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl NewProject {
    /// Create a project request with no description.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// A file stored in a project, with its extracted text content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileResponse {
    pub id: i64,
    pub file_name: String,
    pub content: String,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,
}

/// Per-file acknowledgement returned by an upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: i64,
    pub file_name: String,
    pub content: String,
    pub status: String,
}

/// Body returned by a file upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadFilesResponse {
    pub message: String,
    #[serde(default)]
    pub files: Vec<UploadedFile>,
}

/// A file blob to upload as one `files` part of a multipart body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    /// File name reported in the part's `Content-Disposition`
    pub file_name: String,
    /// MIME type of the part; `application/octet-stream` when unset
    pub mime_type: Option<String>,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl UploadFile {
    /// Wrap in-memory contents as an upload.
    ///
    /// # Arguments
    ///
    /// * `file_name` - Name sent as the part's `filename`
    /// * `bytes` - Raw file contents
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: None,
            bytes: bytes.into(),
        }
    }

    /// Set the part's content type. It is validated when the request is
    /// built; an unparseable value fails the upload with a config error.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Read a file from disk, using its final path component as the name.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Io`] if the file cannot be read and
    /// [`ApiError::Config`] if the path has no file name.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                ApiError::Config(format!("Upload path has no file name: {}", path.display()))
            })?;
        let bytes = tokio::fs::read(path).await?;
        tracing::debug!("Read {} bytes for upload from {}", bytes.len(), path.display());
        Ok(Self::new(file_name, bytes))
    }
}

/// Kind of chat session: document Q&A or image Q&A
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Document,
    Image,
}

impl SessionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionType::Document => "document",
            SessionType::Image => "image",
        }
    }
}

/// A named, typed conversation thread scoped to a subset of project files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub file_ids: Vec<i64>,
    pub session_type: SessionType,
}

/// Body of a chat session creation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChatSession {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub file_ids: Vec<i64>,
    pub session_type: SessionType,
}

impl NewChatSession {
    /// Create an unnamed session request.
    ///
    /// # Arguments
    ///
    /// * `session_type` - Whether the session chats over documents or images
    /// * `file_ids` - Project files the session is scoped to
    pub fn new(session_type: SessionType, file_ids: Vec<i64>) -> Self {
        Self {
            name: None,
            file_ids,
            session_type,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// Body of a chat session rename request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUpdate {
    pub name: String,
}

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Payload kind of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Text,
    Image,
}

/// A message within a chat session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<MessageRole>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<JsonMap>,
    #[serde(
        default,
        deserialize_with = "timestamp::deserialize_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<NaiveDateTime>,
}

/// Body of a session-scoped send-message request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub content: String,
    pub message_type: MessageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<JsonMap>,
}

impl NewMessage {
    /// Plain text message.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_type: MessageType::Text,
            additional_data: None,
        }
    }

    pub fn image(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            message_type: MessageType::Image,
            additional_data: None,
        }
    }

    pub fn with_additional_data(mut self, data: JsonMap) -> Self {
        self.additional_data = Some(data);
        self
    }
}

/// One turn of a session: the user message and the assistant reply, either
/// of which may be missing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageExchange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<ChatMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assistant: Option<ChatMessage>,
}

/// Body returned when listing a session's messages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessagesResponse {
    #[serde(default)]
    pub messages: Vec<MessageExchange>,
}

/// Target of a flat project-level chat prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatType {
    Document,
    Image,
}

impl ChatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatType::Document => "document",
            ChatType::Image => "image",
        }
    }
}

/// Body of a flat project-level chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatPrompt {
    pub prompt: String,
    pub chat_type: ChatType,
    /// Base64-encoded image, required by the server for image chats
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_data: Option<String>,
}

impl ChatPrompt {
    /// Prompt answered against the project's documents.
    pub fn document(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            chat_type: ChatType::Document,
            image_data: None,
        }
    }

    /// Prompt answered against an image; the raw bytes are base64-encoded.
    pub fn image(prompt: impl Into<String>, image: &[u8]) -> Self {
        Self {
            prompt: prompt.into(),
            chat_type: ChatType::Image,
            image_data: Some(base64::engine::general_purpose::STANDARD.encode(image)),
        }
    }
}

/// Body returned by a flat project-level chat request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// One prompt/response pair of the flat project chat
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatHistoryEntry {
    pub prompt: String,
    pub response: String,
    #[serde(rename = "type")]
    pub chat_type: ChatType,
    #[serde(default, deserialize_with = "timestamp::deserialize_option")]
    pub timestamp: Option<NaiveDateTime>,
}

/// Body returned when listing the flat project chat history
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatHistory {
    #[serde(default)]
    pub history: Vec<ChatHistoryEntry>,
}

fn default_data_type() -> String {
    "text".to_string()
}

/// A user-specified extraction directive submitted in a batch analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisInstruction {
    pub title: String,
    pub description: String,
    #[serde(default = "default_data_type")]
    pub data_type: String,
}

impl AnalysisInstruction {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            data_type: data_type.into(),
        }
    }
}

/// Body of an analysis run request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRequest<'a> {
    pub instructions: &'a [AnalysisInstruction],
}

/// Result of an analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub id: i64,
    pub instructions: Vec<AnalysisInstruction>,
    #[serde(default)]
    pub results: JsonMap,
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,
}
