//! Request handling
//!
//! Entry point for HTTP request processing: method validation, static file
//! resolution, and the no-cache post-processing applied to every response.

pub mod listing;
pub mod static_files;

use crate::config::AppState;
use crate::http::{self, no_cache};
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

use static_files::Resolved;

/// Information extracted from a request before dispatch.
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling.
///
/// Never fails: every outcome, including 404 and 405, is an ordinary
/// response carrying the no-cache header set.
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let mut response = match method {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext {
                path: &path,
                is_head: method == Method::HEAD,
            };
            route_request(&ctx, &state).await
        }
        Method::OPTIONS => http::build_options_response(),
        _ => http::build_405_response(),
    };

    no_cache::apply_no_cache(&mut response);

    if state.config.logging.access_log {
        let body_bytes = response.body().size_hint().exact().unwrap_or(0);
        logger::log_access(
            &method,
            &path,
            response.status().as_u16(),
            usize::try_from(body_bytes).unwrap_or(usize::MAX),
        );
    }

    Ok(response)
}

/// Resolve a GET/HEAD request against the serving root and build a response.
pub(crate) async fn route_request(
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Response<Full<Bytes>> {
    let serving = &state.config.serving;

    match static_files::resolve(&state.root, ctx.path, &serving.index_files).await {
        Resolved::File(file_path) => match static_files::load_file(&file_path).await {
            Some((content, content_type)) => {
                http::build_file_response(content, content_type, ctx.is_head)
            }
            None => http::build_404_response(),
        },
        Resolved::Redirect(target) => http::build_redirect_response(&target),
        Resolved::Directory(dir_path) => {
            if serving.directory_listing {
                match listing::render(&dir_path, ctx.path).await {
                    Some(html) => http::build_html_response(html, ctx.is_head),
                    None => http::build_404_response(),
                }
            } else {
                http::build_404_response()
            }
        }
        Resolved::NotFound => http::build_404_response(),
    }
}
