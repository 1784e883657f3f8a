//! Askama templates for the web frontend.

use askama::Template;

/// Page shell hosting the map widget.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;
