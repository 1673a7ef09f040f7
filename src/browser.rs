// Browser launch
// Opens the default browser at the served URL on startup. Failure here is
// only a warning; the server keeps running either way.

use crate::logger;

pub fn open_in_browser(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        logger::log_warning(&format!("Could not open browser at {url}: {e}"));
    }
}
