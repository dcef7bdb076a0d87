//! Static file serving module
//!
//! Loads showcase artifacts from disk and builds their responses. All
//! lookups driven by request paths are confined to their base directory:
//! both the base and the candidate are canonicalized and the candidate must
//! stay inside the base, so `..` segments and symlinks cannot escape.

use crate::config::AppState;
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Serve the HTML entry document for `/`
pub async fn serve_index(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match load_file(&state.index_path).await {
        Some((content, content_type)) => http::build_file_response(content, content_type, ctx.is_head),
        None => http::build_404_response(),
    }
}

/// Serve the phone manifest as an attachment download
pub async fn serve_manifest(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match load_file(&state.manifest_path).await {
        Some((content, content_type)) => http::build_attachment_response(
            content,
            content_type,
            &state.config.site.manifest_file,
            ctx.is_head,
        ),
        None => http::build_404_response(),
    }
}

/// Serve a binary model by name, confined to the models sub-root
///
/// A same-named file elsewhere under the document root is not reachable
/// through this route.
pub async fn serve_model(
    ctx: &RequestContext<'_>,
    state: &AppState,
    name: &str,
) -> Response<Full<Bytes>> {
    match load_confined(&state.models_root, name).await {
        Some((content, content_type)) => http::build_file_response(content, content_type, ctx.is_head),
        None => http::build_404_response(),
    }
}

/// Serve any other asset from the document root
pub async fn serve_asset(
    ctx: &RequestContext<'_>,
    state: &AppState,
    path: &str,
) -> Response<Full<Bytes>> {
    match load_confined(&state.root, path).await {
        Some((content, content_type)) => http::build_file_response(content, content_type, ctx.is_head),
        None => http::build_404_response(),
    }
}

/// Load a file addressed by a request path, confined to `base`
pub async fn load_confined(base: &Path, relative: &str) -> Option<(Vec<u8>, &'static str)> {
    let relative = relative.trim_start_matches('/');
    if relative.is_empty() {
        return None;
    }

    let base_canonical = match fs::canonicalize(base).await {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset directory not found or inaccessible '{}': {e}",
                base.display()
            ));
            return None;
        }
    };

    // Missing files are the common 404 case, not worth a log line
    let resolved = fs::canonicalize(base.join(relative)).await.ok()?;
    if !resolved.starts_with(&base_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {relative} -> {}",
            resolved.display()
        ));
        return None;
    }

    read_file(&resolved).await
}

/// Load a fixed file whose path carries no request-controlled segments
pub async fn load_file(path: &Path) -> Option<(Vec<u8>, &'static str)> {
    read_file(path).await
}

async fn read_file(path: &Path) -> Option<(Vec<u8>, &'static str)> {
    let metadata = fs::metadata(path).await.ok()?;
    if !metadata.is_file() {
        return None;
    }

    let content = match fs::read(path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!("Failed to read file '{}': {e}", path.display()));
            return None;
        }
    };

    let content_type = mime::content_type_for(path.extension().and_then(|e| e.to_str()));
    Some((content, content_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn serves_exact_bytes_with_content_type() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("app.js"), b"console.log('hi');").expect("write");

        let (content, content_type) = load_confined(dir.path(), "app.js").await.expect("found");
        assert_eq!(content, b"console.log('hi');");
        assert_eq!(content_type, "application/javascript");
    }

    #[tokio::test]
    async fn nested_paths_resolve() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("css")).expect("mkdir");
        std::fs::write(dir.path().join("css/style.css"), b"body{}").expect("write");

        let (content, content_type) = load_confined(dir.path(), "css/style.css")
            .await
            .expect("found");
        assert_eq!(content, b"body{}");
        assert_eq!(content_type, "text/css");
    }

    #[tokio::test]
    async fn missing_file_is_none() {
        let dir = tempdir().expect("tempdir");
        assert!(load_confined(dir.path(), "nope.png").await.is_none());
    }

    #[tokio::test]
    async fn empty_path_is_none() {
        let dir = tempdir().expect("tempdir");
        assert!(load_confined(dir.path(), "").await.is_none());
        assert!(load_confined(dir.path(), "/").await.is_none());
    }

    #[tokio::test]
    async fn traversal_cannot_escape_base() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("secret.txt"), b"top secret").expect("write");
        let root = dir.path().join("site");
        std::fs::create_dir(&root).expect("mkdir");

        assert!(load_confined(&root, "../secret.txt").await.is_none());
        assert!(load_confined(&root, "a/../../secret.txt").await.is_none());
    }

    #[tokio::test]
    async fn models_base_does_not_reach_sibling_files() {
        let dir = tempdir().expect("tempdir");
        std::fs::write(dir.path().join("phones.json"), b"{}").expect("write");
        let models = dir.path().join("models");
        std::fs::create_dir(&models).expect("mkdir");
        std::fs::write(models.join("flip3.glb"), b"glTF\x02").expect("write");

        // The model route only sees the sub-root
        assert!(load_confined(&models, "phones.json").await.is_none());
        let (content, content_type) = load_confined(&models, "flip3.glb").await.expect("found");
        assert_eq!(content, b"glTF\x02");
        assert_eq!(content_type, "model/gltf-binary");
    }

    #[tokio::test]
    async fn directories_are_not_served() {
        let dir = tempdir().expect("tempdir");
        std::fs::create_dir(dir.path().join("images")).expect("mkdir");

        assert!(load_confined(dir.path(), "images").await.is_none());
        assert!(load_confined(dir.path(), "images/").await.is_none());
    }

    #[tokio::test]
    async fn fixed_file_load_round_trips() {
        let dir = tempdir().expect("tempdir");
        let manifest = dir.path().join("phones.json");
        std::fs::write(&manifest, br#"{"phones":[]}"#).expect("write");

        let (content, content_type) = load_file(&manifest).await.expect("found");
        assert_eq!(content, br#"{"phones":[]}"#);
        assert_eq!(content_type, "application/json");
    }

    #[tokio::test]
    async fn fixed_file_missing_is_none() {
        let dir = tempdir().expect("tempdir");
        assert!(load_file(&dir.path().join("index.html")).await.is_none());
    }
}
