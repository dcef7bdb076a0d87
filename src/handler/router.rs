//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! classification, dispatch to the static file resolver, and access logging.

use crate::config::AppState;
use crate::handler::static_files;
use crate::http;
use crate::logger::{self, AccessLogEntry};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response, Version};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;

/// Request context shared by the serve functions
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// The routes the showcase site exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route<'a> {
    /// `/`: the HTML entry document
    Index,
    /// `/api/phones.json`: the manifest, delivered as an attachment
    Manifest,
    /// `/models/<name>`: a binary model from the models sub-root
    Model(&'a str),
    /// `/<path>`: any other asset under the document root
    Asset(&'a str),
}

/// Classify a request path into one of the showcase routes
///
/// The manifest and model routes take precedence over the generic asset
/// lookup, mirroring most-specific-first route matching.
pub fn classify(path: &str) -> Route<'_> {
    match path {
        "/" => Route::Index,
        "/api/phones.json" => Route::Manifest,
        _ => match path.strip_prefix("/models/") {
            Some(name) => Route::Model(name),
            None => Route::Asset(path),
        },
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let started = Instant::now();

    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();
    let referer = header_value(&req, "referer");
    let user_agent = header_value(&req, "user-agent");

    let response = match check_http_method(&method) {
        Some(early) => early,
        None => {
            let ctx = RequestContext {
                path: uri.path(),
                is_head: method == Method::HEAD,
            };
            dispatch(&ctx, &state).await
        }
    };

    if state.config.logging.access_log {
        let mut entry = AccessLogEntry::new(
            peer_addr.ip().to_string(),
            method.to_string(),
            uri.path().to_string(),
        );
        entry.query = uri.query().map(ToString::to_string);
        entry.http_version = http_version_label(version).to_string();
        entry.status = response.status().as_u16();
        entry.body_bytes = content_length_of(&response);
        entry.referer = referer;
        entry.user_agent = user_agent;
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);

        logger::log_access(&entry, &state.config.logging.access_log_format);
    }

    Ok(response)
}

/// Check HTTP method and return an early response for non-GET/HEAD methods
fn check_http_method(method: &Method) -> Option<Response<Full<Bytes>>> {
    match method {
        &Method::GET | &Method::HEAD => None,
        &Method::OPTIONS => Some(http::build_options_response()),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Dispatch a GET/HEAD request to the matching serve function
async fn dispatch(ctx: &RequestContext<'_>, state: &AppState) -> Response<Full<Bytes>> {
    match classify(ctx.path) {
        Route::Index => static_files::serve_index(ctx, state).await,
        Route::Manifest => static_files::serve_manifest(ctx, state).await,
        Route::Model(name) => static_files::serve_model(ctx, state, name).await,
        Route::Asset(path) => static_files::serve_asset(ctx, state, path).await,
    }
}

fn header_value(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

fn http_version_label(version: Version) -> &'static str {
    if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2"
    } else {
        "1.1"
    }
}

fn content_length_of(response: &Response<Full<Bytes>>) -> usize {
    response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_index() {
        assert_eq!(classify("/"), Route::Index);
    }

    #[test]
    fn manifest_route_is_exact() {
        assert_eq!(classify("/api/phones.json"), Route::Manifest);
        // Anything else under /api is just an asset lookup
        assert_eq!(classify("/api/phones.json.bak"), Route::Asset("/api/phones.json.bak"));
    }

    #[test]
    fn models_prefix_strips_to_name() {
        assert_eq!(
            classify("/models/iphone_16_pro_max.glb"),
            Route::Model("iphone_16_pro_max.glb")
        );
        assert_eq!(classify("/models/a/b.glb"), Route::Model("a/b.glb"));
    }

    #[test]
    fn bare_models_path_is_an_asset() {
        // Without the trailing slash there is no model name to resolve
        assert_eq!(classify("/models"), Route::Asset("/models"));
    }

    #[test]
    fn everything_else_is_an_asset() {
        assert_eq!(classify("/main.js"), Route::Asset("/main.js"));
        assert_eq!(classify("/css/style.css"), Route::Asset("/css/style.css"));
    }
}
