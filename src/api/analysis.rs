//! Analysis runs over a project's documents.

use crate::api::client::{json_body, project_path, ApiClient};
use crate::error::Result;
use crate::transport::ApiRequest;
use crate::types::{AnalysisInstruction, AnalysisRequest, AnalysisResponse};

impl ApiClient {
    /// Run a batch of extraction instructions against the project's files.
    ///
    /// `POST /projects/{id}/analyze` with `{instructions: [...]}`. An empty
    /// slice is sent as `{"instructions": []}`; whatever the server answers
    /// is returned unmodified.
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project whose files are analyzed
    /// * `instructions` - Extraction directives, sent in order
    ///
    /// # Returns
    ///
    /// The stored analysis run with its open `results` mapping
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn run_analysis(
        &self,
        project_id: i64,
        instructions: &[AnalysisInstruction],
    ) -> Result<AnalysisResponse> {
        let body = json_body(&AnalysisRequest { instructions })?;
        tracing::debug!(
            "Running analysis on project {} with {} instruction(s)",
            project_id,
            instructions.len()
        );
        self.send(ApiRequest::post_json(project_path(project_id, "/analyze"), body))
            .await
    }

    /// List previous analysis runs of a project.
    ///
    /// `GET /projects/{id}/analyses`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response, and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn list_analyses(&self, project_id: i64) -> Result<Vec<AnalysisResponse>> {
        self.send(ApiRequest::get(project_path(project_id, "/analyses")))
            .await
    }
}
