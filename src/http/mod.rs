// HTTP building blocks: MIME inference, response builders, and the
// no-cache header policy applied to every outgoing response.

pub mod mime;
pub mod no_cache;
pub mod response;

pub use response::{
    build_404_response, build_405_response, build_file_response, build_html_response,
    build_options_response, build_redirect_response,
};
