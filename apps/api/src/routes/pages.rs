//! Static support / privacy / terms pages.

use std::path::Path;

use axum::Router;
use tower_http::services::{ServeDir, ServeFile};

use crate::state::AppState;

/// Short paths and the file each one serves. `/` goes to the support page.
pub const PAGE_ALIASES: [(&str, &str); 4] = [
    ("/", "support.html"),
    ("/support", "support.html"),
    ("/privacy", "privacy.html"),
    ("/terms", "terms.html"),
];

/// Mounts the aliases and serves any other file in `dir` as a fallback.
pub fn pages_router(dir: &Path) -> Router<AppState> {
    let router = PAGE_ALIASES
        .iter()
        .fold(Router::<AppState>::new(), |router, (route, file)| {
            router.route_service(route, ServeFile::new(dir.join(file)))
        });

    router.fallback_service(ServeDir::new(dir))
}
