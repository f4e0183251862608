//! Flat project-level chat.
//!
//! Older backends expose a single chat thread per project instead of chat
//! sessions. These operations remain for those deployments; new code should
//! use the session operations in [`crate::api::sessions`].

use crate::api::client::{json_body, project_path, ApiClient};
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::types::{ChatHistory, ChatPrompt, ChatReply, ChatType};

impl ApiClient {
    /// Send a prompt to the project-level chat.
    ///
    /// `POST /projects/{id}/chat` with `{prompt, chat_type, image_data?}`
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project whose documents answer the prompt
    /// * `prompt` - Prompt text, chat type and image data for image chats
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response (400 for an image chat without image data), and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    #[deprecated(note = "use chat sessions (`send_message`) instead")]
    pub async fn send_chat_prompt(
        &self,
        project_id: i64,
        prompt: &ChatPrompt,
    ) -> Result<ChatReply> {
        self.send(ApiRequest::post_json(
            project_path(project_id, "/chat"),
            json_body(prompt)?,
        ))
        .await
    }

    /// Get the project-level chat history, optionally filtered by type.
    ///
    /// `GET /projects/{id}/chat-history[?chat_type=...]`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    #[deprecated(note = "use chat sessions (`list_chat_messages`) instead")]
    pub async fn chat_history(
        &self,
        project_id: i64,
        chat_type: Option<ChatType>,
    ) -> Result<ChatHistory> {
        let request = ApiRequest::get(project_path(project_id, "/chat-history"))
            .with_optional_query("chat_type", chat_type.as_ref().map(ChatType::as_str));
        self.send(request).await
    }
}
