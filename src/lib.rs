//! Static-asset web server for the 3D phone showcase site.
//!
//! Serves the HTML entry page, static resources, the `phones.json`
//! manifest (as an attachment download), and binary `.glb` model files
//! from a `models/` sub-root. All file lookups are confined to the
//! configured document root.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
