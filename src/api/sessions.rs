//! Chat sessions and their messages.
//!
//! This is the canonical chat contract: named, typed sessions scoped to a
//! subset of a project's files, each holding its own message thread.

use crate::api::client::{json_body, project_path, session_path, ApiClient};
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::types::{
    ChatMessage, ChatMessagesResponse, ChatSession, NewChatSession, NewMessage, SessionType,
    SessionUpdate,
};

impl ApiClient {
    /// Create a chat session.
    ///
    /// `POST /projects/{id}/chat-sessions` with `{name?, file_ids, session_type}`
    ///
    /// # Arguments
    ///
    /// * `project_id` - Owning project
    /// * `session` - Session type, scoped file ids and optional name
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn create_chat_session(
        &self,
        project_id: i64,
        session: &NewChatSession,
    ) -> Result<ChatSession> {
        self.send(ApiRequest::post_json(
            project_path(project_id, "/chat-sessions"),
            json_body(session)?,
        ))
        .await
    }

    /// List a project's chat sessions, optionally filtered by type.
    ///
    /// `GET /projects/{id}/chat-sessions[?session_type=...]`; the query
    /// parameter is only sent when `session_type` is `Some`.
    ///
    /// # Arguments
    ///
    /// * `project_id` - Owning project
    /// * `session_type` - Optional filter; `None` lists every session
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn list_chat_sessions(
        &self,
        project_id: i64,
        session_type: Option<SessionType>,
    ) -> Result<Vec<ChatSession>> {
        let request = ApiRequest::get(project_path(project_id, "/chat-sessions"))
            .with_optional_query("session_type", session_type.as_ref().map(SessionType::as_str));
        self.send(request).await
    }

    /// Rename a chat session.
    ///
    /// `POST /projects/{id}/chat-sessions/{sid}/update` with `{name}`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response (404 for an unknown session), and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn update_chat_session(
        &self,
        project_id: i64,
        session_id: i64,
        name: impl Into<String>,
    ) -> Result<ChatSession> {
        let update = SessionUpdate { name: name.into() };
        self.send(ApiRequest::post_json(
            session_path(project_id, session_id, "/update"),
            json_body(&update)?,
        ))
        .await
    }

    /// Post a message to a chat session and return the stored message.
    ///
    /// `POST /projects/{id}/chat-sessions/{sid}/messages` with
    /// `{content, message_type, additional_data?}`
    ///
    /// # Arguments
    ///
    /// * `project_id` - Owning project
    /// * `session_id` - Session the message is posted to
    /// * `message` - Message content, type and optional extra data
    ///
    /// # Returns
    ///
    /// The assistant message the server stored in reply
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response (404 for an unknown session), and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn send_message(
        &self,
        project_id: i64,
        session_id: i64,
        message: &NewMessage,
    ) -> Result<ChatMessage> {
        self.send(ApiRequest::post_json(
            session_path(project_id, session_id, "/messages"),
            json_body(message)?,
        ))
        .await
    }

    /// List a session's messages as user/assistant exchanges, oldest first.
    ///
    /// `GET /projects/{id}/chat-sessions/{sid}/messages`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn list_chat_messages(
        &self,
        project_id: i64,
        session_id: i64,
    ) -> Result<ChatMessagesResponse> {
        self.send(ApiRequest::get(session_path(
            project_id,
            session_id,
            "/messages",
        )))
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::test_support::fake_client;
    use crate::transport::RequestBody;
    use crate::types::{MessageRole, MessageType, NewChatSession, NewMessage, SessionType};
    use reqwest::Method;
    use serde_json::json;

    fn session_json(id: i64, session_type: &str) -> serde_json::Value {
        json!({"id": id, "name": "Receipts", "file_ids": [1, 2], "session_type": session_type})
    }

    #[tokio::test]
    async fn test_create_chat_session() {
        let (client, transport, mut handle) = fake_client();
        transport.inject_response(200, session_json(5, "document"));

        let session = client
            .create_chat_session(
                3,
                &NewChatSession::new(SessionType::Document, vec![1, 2]).with_name("Receipts"),
            )
            .await
            .unwrap();
        assert_eq!(session.id, 5);
        assert_eq!(session.session_type, SessionType::Document);

        let sent = handle.drain();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, "/projects/3/chat-sessions");
        assert_eq!(
            sent[0].body,
            RequestBody::Json(
                json!({"name": "Receipts", "file_ids": [1, 2], "session_type": "document"})
            )
        );
    }

    #[tokio::test]
    async fn test_list_chat_sessions_without_type_omits_query() {
        let (client, transport, mut handle) = fake_client();
        transport.inject_response(200, json!([session_json(5, "document")]));

        let sessions = client.list_chat_sessions(3, None).await.unwrap();
        assert_eq!(sessions.len(), 1);

        let sent = handle.drain();
        assert_eq!(sent[0].path, "/projects/3/chat-sessions");
        assert!(sent[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_list_chat_sessions_with_type() {
        let (client, transport, mut handle) = fake_client();
        transport.inject_response(200, json!([session_json(6, "image")]));

        let sessions = client
            .list_chat_sessions(3, Some(SessionType::Image))
            .await
            .unwrap();
        assert_eq!(sessions[0].session_type, SessionType::Image);

        let sent = handle.drain();
        assert_eq!(
            sent[0].query,
            vec![("session_type".to_string(), "image".to_string())]
        );
    }

    #[tokio::test]
    async fn test_update_chat_session() {
        let (client, transport, mut handle) = fake_client();
        transport.inject_response(
            200,
            json!({"id": 5, "name": "Renamed", "file_ids": [], "session_type": "image"}),
        );

        let session = client.update_chat_session(3, 5, "Renamed").await.unwrap();
        assert_eq!(session.name.as_deref(), Some("Renamed"));

        let sent = handle.drain();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].path, "/projects/3/chat-sessions/5/update");
        assert_eq!(sent[0].body, RequestBody::Json(json!({"name": "Renamed"})));
    }

    #[tokio::test]
    async fn test_send_message() {
        let (client, transport, mut handle) = fake_client();
        transport.inject_response(
            200,
            json!({"role": "assistant", "content": "Total is 1200 EUR", "message_type": "text"}),
        );

        let reply = client
            .send_message(3, 5, &NewMessage::text("What is the total?"))
            .await
            .unwrap();
        assert_eq!(reply.role, Some(MessageRole::Assistant));
        assert_eq!(reply.message_type, Some(MessageType::Text));

        let sent = handle.drain();
        assert_eq!(sent[0].path, "/projects/3/chat-sessions/5/messages");
        assert_eq!(
            sent[0].body,
            RequestBody::Json(json!({"content": "What is the total?", "message_type": "text"}))
        );
    }

    #[tokio::test]
    async fn test_list_chat_messages_keeps_order() {
        let (client, transport, mut handle) = fake_client();
        transport.inject_response(
            200,
            json!({"messages": [
                {"user": {"role": "user", "content": "first"}, "assistant": {"role": "assistant", "content": "one"}},
                {"user": {"role": "user", "content": "second"}}
            ]}),
        );

        let response = client.list_chat_messages(3, 5).await.unwrap();
        let prompts: Vec<_> = response
            .messages
            .iter()
            .filter_map(|m| m.user.as_ref().map(|u| u.content.as_str()))
            .collect();
        assert_eq!(prompts, vec!["first", "second"]);
        assert!(response.messages[1].assistant.is_none());

        let sent = handle.drain();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].path, "/projects/3/chat-sessions/5/messages");
    }

    #[tokio::test]
    async fn test_send_message_rejects_unknown_session() {
        let (client, transport, _handle) = fake_client();
        transport.inject_response(404, json!({"detail": "Chat session not found"}));

        let err = client
            .send_message(3, 404, &NewMessage::text("hello"))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(404));
    }
}
