use thiserror::Error;

/// Errors surfaced by the REST client.
///
/// Call sites convert these into a generic user-facing toast; nothing is
/// retried or escalated past the page that issued the request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or transport level failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend rejected the bearer token, or none was sent.
    #[error("not authorized")]
    Unauthorized,

    /// Any other non-success response, including backend-side validation.
    #[error("backend returned {status}: {message}")]
    Backend { status: u16, message: String },
}

/// Error of the two-step submit flow (upload, then create/update).
///
/// The phases are distinguished so the admin panel can show a specific
/// message when the image upload is what failed.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The image upload step failed; the record payload was never sent.
    #[error("image upload failed: {0}")]
    Upload(#[source] ApiError),

    /// The create/update call itself failed.
    #[error(transparent)]
    Save(#[from] ApiError),
}
