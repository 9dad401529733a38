//! Path-based routing for the single-page shell.

use crate::utils::dom;

/// Pages reachable through the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
}

/// Static route table: path → page.
pub const ROUTES: &[(&str, Page)] = &[("/", Page::Home)];

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppRoute {
    /// Root page: `/`
    Home,
    /// Any path missing from [`ROUTES`].
    NotFound { path: String },
}

impl AppRoute {
    /// Resolve a URL path (no query or fragment) through [`ROUTES`].
    pub fn from_path(path: &str) -> Self {
        let normalized = if path.is_empty() { "/" } else { path };
        ROUTES
            .iter()
            .find(|(route_path, _)| *route_path == normalized)
            .map(|(_, page)| match page {
                Page::Home => Self::Home,
            })
            .unwrap_or_else(|| Self::NotFound {
                path: normalized.to_string(),
            })
    }

    /// URL path of this route.
    pub fn path(&self) -> &str {
        match self {
            Self::Home => "/",
            Self::NotFound { path } => path,
        }
    }

    /// Get current route from the browser location.
    pub fn current() -> Self {
        Self::from_path(&dom::pathname())
    }

    /// Add a history entry for this route without reloading.
    pub fn push(&self) {
        dom::push_path(self.path());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Home);
        assert_eq!(AppRoute::from_path(""), AppRoute::Home);
        assert_eq!(
            AppRoute::from_path("/rooms"),
            AppRoute::NotFound {
                path: "/rooms".to_string()
            }
        );
        assert_eq!(
            AppRoute::from_path("//"),
            AppRoute::NotFound {
                path: "//".to_string()
            }
        );
    }

    #[test]
    fn test_route_path() {
        assert_eq!(AppRoute::Home.path(), "/");
        assert_eq!(AppRoute::from_path("/a/b").path(), "/a/b");
    }

    #[test]
    fn test_table_has_single_root_entry() {
        assert_eq!(ROUTES.len(), 1);
        assert_eq!(ROUTES[0], ("/", Page::Home));
    }
}
