//! MIME type detection module
//!
//! Maps file extensions to Content-Type values for the asset kinds a
//! showcase site actually ships: markup, scripts, styles, images, fonts,
//! and glTF model payloads.

/// Get MIME Content-Type based on file extension
///
/// # Examples
/// ```
/// use showcase_server::http::mime::content_type_for;
/// assert_eq!(content_type_for(Some("glb")), "model/gltf-binary");
/// assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
/// assert_eq!(content_type_for(None), "application/octet-stream");
/// ```
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        // Markup and text
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain; charset=utf-8",

        // Scripts and data
        Some("js" | "mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("wasm") => "application/wasm",

        // 3D models
        Some("glb") => "model/gltf-binary",
        Some("gltf") => "model/gltf+json",

        // Images (including environment/texture formats used by model viewers)
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",
        Some("ktx2") => "image/ktx2",
        Some("hdr") => "image/vnd.radiance",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Default: opaque bytes (covers .bin buffers next to .gltf files)
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_types() {
        assert_eq!(content_type_for(Some("html")), "text/html; charset=utf-8");
        assert_eq!(content_type_for(Some("js")), "application/javascript");
        assert_eq!(content_type_for(Some("css")), "text/css");
        assert_eq!(content_type_for(Some("json")), "application/json");
        assert_eq!(content_type_for(Some("png")), "image/png");
    }

    #[test]
    fn test_model_types() {
        assert_eq!(content_type_for(Some("glb")), "model/gltf-binary");
        assert_eq!(content_type_for(Some("gltf")), "model/gltf+json");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(content_type_for(Some("xyz")), "application/octet-stream");
        assert_eq!(content_type_for(Some("bin")), "application/octet-stream");
        assert_eq!(content_type_for(None), "application/octet-stream");
    }
}
