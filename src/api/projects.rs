//! User and project operations.

use crate::api::client::{json_body, ApiClient};
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::types::{NewProject, Project, User};

impl ApiClient {
    /// Get the user the backend associates with this client.
    ///
    /// `GET /users/me`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn current_user(&self) -> Result<User> {
        self.send(ApiRequest::get("/users/me")).await
    }

    /// Create a project.
    ///
    /// `POST /projects` with `{name, description?}`; the description key is
    /// omitted when unset.
    ///
    /// # Arguments
    ///
    /// * `project` - Name and optional description of the new project
    ///
    /// # Returns
    ///
    /// The project as stored by the server, with its id and creation time
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response (422 for a missing name), and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn create_project(&self, project: &NewProject) -> Result<Project> {
        self.send(ApiRequest::post_json("/projects", json_body(project)?))
            .await
    }

    /// List the projects visible to the current user.
    ///
    /// `GET /projects`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        self.send(ApiRequest::get("/projects")).await
    }
}
