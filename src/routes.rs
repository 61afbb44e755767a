//! Resource routing
//!
//! Maps a resource name given on the command line (`--get products`) to the
//! API path it is served from. Route templates may reference the resource
//! name as `{{ resource }}`.
//!
//! Built-in routes:
//!
//! | resource    | path                          |
//! |-------------|-------------------------------|
//! | `installer` | `/repositories/installer`     |
//! | anything    | `/organizations/{{ resource }}` |

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;

/// Regex for matching template variables: {{ variable }}
static TEMPLATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("template regex is valid")
});

/// Path template used for resources without an explicit route
pub const DEFAULT_ROUTE: &str = "/organizations/{{ resource }}";

/// Resource name to path template table
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: HashMap<String, String>,
    fallback: String,
}

impl Default for RouteTable {
    fn default() -> Self {
        let mut routes = HashMap::new();
        routes.insert(
            "installer".to_string(),
            "/repositories/installer".to_string(),
        );
        Self {
            routes,
            fallback: DEFAULT_ROUTE.to_string(),
        }
    }
}

impl RouteTable {
    /// Create the built-in table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a route
    #[must_use]
    pub fn with_route(mut self, resource: impl AsRef<str>, template: impl Into<String>) -> Self {
        self.routes
            .insert(normalize(resource.as_ref()), template.into());
        self
    }

    /// Add or replace several routes
    #[must_use]
    pub fn with_routes<I, K, V>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (resource, template) in routes {
            self = self.with_route(resource, template);
        }
        self
    }

    /// Replace the template used for unknown resources
    #[must_use]
    pub fn with_fallback(mut self, template: impl Into<String>) -> Self {
        self.fallback = template.into();
        self
    }

    /// Resolve a resource name to an API path
    ///
    /// The name is trimmed and lower-cased before lookup.
    pub fn resolve(&self, resource: &str) -> Result<String> {
        let resource = normalize(resource);
        if resource.is_empty() {
            return Err(Error::missing_field("--get"));
        }

        let template = self.routes.get(&resource).unwrap_or(&self.fallback);
        let path = render(template, &resource)?;
        debug!("Resource '{resource}' routed to {path}");
        Ok(path)
    }

    /// Names with an explicit route, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.routes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn normalize(resource: &str) -> String {
    resource.trim().to_lowercase()
}

/// Interpolate `{{ resource }}` into a path template
fn render(template: &str, resource: &str) -> Result<String> {
    let mut undefined = Vec::new();

    let rendered = TEMPLATE_REGEX.replace_all(template, |caps: &regex::Captures<'_>| {
        match &caps[1] {
            "resource" => resource.to_string(),
            other => {
                undefined.push(other.to_string());
                String::new()
            }
        }
    });

    if !undefined.is_empty() {
        return Err(Error::config(format!(
            "Route template '{}' references undefined variable(s): {}",
            template,
            undefined.join(", ")
        )));
    }

    Ok(rendered.into_owned())
}
