//! Backend origin resolution.

/// Resolve the backend origin the client talks to.
///
/// Priority: the compile-time `BACKEND_URL` environment variable, then the
/// page's own origin (same-host deployments), then a localhost default for
/// development.
pub fn backend_url() -> String {
    if let Some(url) = option_env!("BACKEND_URL") {
        return url.trim_end_matches('/').to_string();
    }

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(origin) = window.location().origin() {
                return origin;
            }
        }
    }

    "http://localhost:8000".to_string()
}

/// Join a backend-relative path (e.g. `/uploads/x.png`) with an origin.
pub fn join_origin(origin: &str, path: &str) -> String {
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_relative_upload_path_with_origin() {
        assert_eq!(
            join_origin("http://localhost:8000", "/uploads/a.png"),
            "http://localhost:8000/uploads/a.png"
        );
    }

    #[test]
    fn joins_regardless_of_slashes() {
        assert_eq!(
            join_origin("http://localhost:8000/", "uploads/a.png"),
            "http://localhost:8000/uploads/a.png"
        );
    }
}
