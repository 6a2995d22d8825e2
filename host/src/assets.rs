//! The frontend bundle compiled into the binary.

use actix_web::http::header::{self, CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::debug;
use std::path::Path;

static BUNDLE: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

const INDEX: &str = "index.html";

/// What a request path maps to inside the bundle.
#[derive(Debug, PartialEq)]
enum Lookup {
    Asset(&'static File<'static>),
    /// Client-side route: answered with `index.html`.
    Shell(&'static File<'static>),
    Missing,
}

/// Paths with a file extension must exist in the bundle; anything else is
/// treated as an app route.
fn lookup(path: &str) -> Lookup {
    let path = path.trim_start_matches('/');
    let path = if path.is_empty() { INDEX } else { path };

    if let Some(file) = BUNDLE.get_file(path) {
        return if path == INDEX {
            Lookup::Shell(file)
        } else {
            Lookup::Asset(file)
        };
    }
    if Path::new(path).extension().is_some() {
        return Lookup::Missing;
    }
    match BUNDLE.get_file(INDEX) {
        Some(index) => Lookup::Shell(index),
        None => Lookup::Missing,
    }
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match lookup(req.path()) {
        Lookup::Asset(file) => {
            let mime = mime_guess::from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .insert_header(CacheControl(vec![
                    CacheDirective::Public,
                    CacheDirective::MaxAge(3600),
                ]))
                .body(file.contents())
        }
        Lookup::Shell(index) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header((header::CACHE_CONTROL, "no-cache"))
            .body(index.contents()),
        Lookup::Missing => {
            debug!("no embedded asset for {}", req.path());
            HttpResponse::NotFound().body("Not Found")
        }
    }
}
