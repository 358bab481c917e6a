//! Typed REST client over the association backend.
//!
//! Thin by design: no caching, no retries, no request de-duplication. Every
//! mutating call carries the admin bearer token; read endpoints are public.

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::config;
use crate::editor::{Draft, Editor, ImageMode};
use crate::error::{ApiError, SubmitError};
use crate::models::{Doctor, EntityKind, Event, ImageSource};

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    /// Backend-relative path, e.g. `/uploads/abc.png`.
    url: String,
}

/// A file picked in the browser, read into memory for upload.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Debug)]
pub struct RestClient {
    base_url: String,
    http: Client,
}

impl Default for RestClient {
    fn default() -> Self {
        Self::new(config::backend_url())
    }
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Absolute URL for a backend-relative path, as returned by the upload
    /// endpoint.
    pub fn absolute_url(&self, path: &str) -> String {
        config::join_origin(&self.base_url, path)
    }

    /// List doctors, optionally filtered by a city substring.
    pub async fn list_doctors(&self, city: Option<&str>) -> Result<Vec<Doctor>, ApiError> {
        let mut request = self.http.get(self.url(EntityKind::Doctors.api_path()));
        if let Some(city) = city.filter(|c| !c.is_empty()) {
            request = request.query(&[("city", city)]);
        }
        let response = check(request.send().await?).await?;
        Ok(response.json().await?)
    }

    /// List all events.
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let response = check(
            self.http
                .get(self.url(EntityKind::Events.api_path()))
                .send()
                .await?,
        )
        .await?;
        Ok(response.json().await?)
    }

    /// Create a record; the endpoint follows the draft's discriminant.
    pub async fn create_record(&self, draft: &Draft, token: &str) -> Result<(), ApiError> {
        let request = self
            .http
            .post(self.url(draft.kind().api_path()))
            .bearer_auth(token);
        let response = match draft {
            Draft::Doctor(fields) => request.json(fields).send().await?,
            Draft::Event(fields) => request.json(fields).send().await?,
        };
        check(response).await?;
        Ok(())
    }

    /// Update an existing record in place.
    pub async fn update_record(
        &self,
        id: &str,
        draft: &Draft,
        token: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.url(draft.kind().api_path()));
        let request = self.http.put(url).bearer_auth(token);
        let response = match draft {
            Draft::Doctor(fields) => request.json(fields).send().await?,
            Draft::Event(fields) => request.json(fields).send().await?,
        };
        check(response).await?;
        Ok(())
    }

    /// Delete one record by id.
    pub async fn delete_record(
        &self,
        kind: EntityKind,
        id: &str,
        token: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{id}", self.url(kind.api_path()));
        check(self.http.delete(url).bearer_auth(token).send().await?).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token. Sent form-encoded, the way
    /// the backend's OAuth2 password form expects.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let response = check(
            self.http
                .post(self.url("/api/auth/login"))
                .form(&[("username", username), ("password", password)])
                .send()
                .await?,
        )
        .await?;
        let token: TokenResponse = response.json().await?;
        Ok(token.access_token)
    }

    /// Upload an image; returns the backend-relative path of the stored file.
    pub async fn upload_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        token: &str,
    ) -> Result<String, ApiError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        let response = check(
            self.http
                .post(self.url("/api/upload"))
                .bearer_auth(token)
                .multipart(form)
                .send()
                .await?,
        )
        .await?;
        let upload: UploadResponse = response.json().await?;
        Ok(upload.url)
    }

    /// Submit transition of the record editor.
    ///
    /// In upload mode with a selected file, the file goes to the upload
    /// endpoint first and the returned location replaces the draft's image
    /// before the entity payload is sent. An upload failure aborts the whole
    /// submit; the caller keeps the dialog open with the entered data.
    ///
    /// The two steps are sequenced but not atomic: a record failure after a
    /// successful upload leaves the uploaded file orphaned on the backend.
    pub async fn submit(
        &self,
        editor: &Editor,
        file: Option<&SelectedFile>,
        token: &str,
    ) -> Result<(), SubmitError> {
        let (id, draft, image_mode) = match editor {
            Editor::Closed => return Ok(()),
            Editor::Creating { draft, image_mode } => (None, draft, *image_mode),
            Editor::Editing {
                id,
                draft,
                image_mode,
            } => (Some(id.as_str()), draft, *image_mode),
        };

        let mut draft = draft.clone();
        if image_mode == ImageMode::Upload {
            if let Some(file) = file {
                let path = self
                    .upload_image(&file.name, file.bytes.clone(), token)
                    .await
                    .map_err(SubmitError::Upload)?;
                tracing::debug!("uploaded {} to {path}", file.name);
                draft.set_image(self.absolute_url(&path), ImageSource::Upload);
            }
        }

        match id {
            Some(id) => self.update_record(id, &draft, token).await?,
            None => self.create_record(&draft, token).await?,
        }
        Ok(())
    }
}

/// Map non-success statuses into the error taxonomy.
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    let message = response.text().await.unwrap_or_default();
    tracing::warn!("backend responded {status}: {message}");
    Err(ApiError::Backend {
        status: status.as_u16(),
        message,
    })
}
