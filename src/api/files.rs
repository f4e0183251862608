//! File upload and listing.

use crate::api::client::{project_path, ApiClient};
use crate::error::Result;
use crate::transport::{ApiRequest, MultipartPart};
use crate::types::{FileResponse, UploadFile, UploadFilesResponse};

/// Multipart field name every uploaded file is sent under
pub const UPLOAD_FIELD: &str = "files";

impl ApiClient {
    /// Upload files to a project.
    ///
    /// `POST /projects/{id}/files` as `multipart/form-data`, one part named
    /// `files` per entry, in the order given. An empty slice sends a valid
    /// multipart body with no parts.
    ///
    /// # Arguments
    ///
    /// * `project_id` - Project receiving the files
    /// * `files` - Files to upload; each becomes one `files` part
    ///
    /// # Returns
    ///
    /// The server's acknowledgement, one [`crate::types::UploadedFile`] per
    /// processed file
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Config`](crate::error::ApiError::Config) if a file
    /// carries an invalid MIME type. Otherwise fails like every other
    /// operation: transport error, non-2xx status (404 for an unknown
    /// project) or undecodable body.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use docproc_client::types::UploadFile;
    /// use docproc_client::{ApiClient, ApiError, ClientConfig};
    ///
    /// # async fn run() -> docproc_client::Result<()> {
    /// let client = ApiClient::new(&ClientConfig::default())?;
    /// let file = UploadFile::new("notes.txt", "hello").with_mime_type("text/plain");
    /// match client.upload_files(1, &[file]).await {
    ///     Ok(ack) => println!("{} file(s) stored", ack.files.len()),
    ///     Err(ApiError::Status { status: 404, .. }) => println!("no such project"),
    ///     Err(e) => return Err(e),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn upload_files(
        &self,
        project_id: i64,
        files: &[UploadFile],
    ) -> Result<UploadFilesResponse> {
        let parts = files
            .iter()
            .cloned()
            .map(|file| MultipartPart {
                name: UPLOAD_FIELD.to_string(),
                file,
            })
            .collect();
        tracing::debug!("Uploading {} file(s) to project {}", files.len(), project_id);

        self.send(ApiRequest::post_multipart(
            project_path(project_id, "/files"),
            parts,
        ))
        .await
    }

    /// List the files stored in a project.
    ///
    /// `GET /projects/{id}/files`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`](crate::error::ApiError::Transport) if
    /// the request fails, [`ApiError::Status`](crate::error::ApiError::Status)
    /// with the raw body on a non-2xx response (404 for an unknown project), and
    /// [`ApiError::Decode`](crate::error::ApiError::Decode) if the body does
    /// not match the expected shape.
    pub async fn list_files(&self, project_id: i64) -> Result<Vec<FileResponse>> {
        self.send(ApiRequest::get(project_path(project_id, "/files")))
            .await
    }
}
