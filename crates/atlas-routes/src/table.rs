//! The declarative path → page table.

use std::collections::HashSet;
use std::sync::LazyLock;

use atlas_core::PageId;
use atlas_core::responses::RouteView;

use crate::error::RouteError;
use crate::location;

/// Path every table must alias to a concrete route.
pub const ROOT_PATH: &str = "/";

/// One navigable page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub page: PageId,
}

impl RouteEntry {
    #[must_use]
    pub fn to_view(&self) -> RouteView {
        RouteView {
            path: self.path.clone(),
            name: Some(self.name.clone()),
            page: Some(self.page),
            redirect: None,
        }
    }
}

/// An alias from one path to a concrete route's path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub from: String,
    pub to: String,
}

impl Redirect {
    #[must_use]
    pub fn to_view(&self) -> RouteView {
        RouteView {
            path: self.from.clone(),
            name: None,
            page: None,
            redirect: Some(self.to.clone()),
        }
    }
}

/// Immutable route table.
///
/// Invariants checked by [`RouteTableBuilder::build`]:
/// - every path starts with `/` and is unique across routes and redirects
/// - every route name is unique
/// - `/` is a redirect, and every redirect targets a concrete route
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteEntry>,
    redirects: Vec<Redirect>,
    root: usize,
}

static CANONICAL: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::builder()
        .redirect(ROOT_PATH, "/foreign-llm")
        .page("/foreign-llm", PageId::ForeignLlm)
        .page("/domestic-llm", PageId::DomesticLlm)
        .page("/multimodal-llm", PageId::MultimodalLlm)
        .page("/ai-drawing", PageId::AiDrawing)
        .page("/video-creation", PageId::VideoCreation)
        .page("/audio-processing", PageId::AudioProcessing)
        .page("/design-tools", PageId::DesignTools)
        .page("/dev-tools", PageId::DevTools)
        .page("/prompts", PageId::Prompts)
        .page("/favorites", PageId::Favorites)
        .page("/preferences", PageId::Preferences)
        .page("/about", PageId::About)
        .build()
        .unwrap_or_else(|error| unreachable!("canonical route table is invalid: {error}"))
});

impl RouteTable {
    /// The single table every navigation entry point uses.
    #[must_use]
    pub fn canonical() -> &'static Self {
        &CANONICAL
    }

    #[must_use]
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::default()
    }

    /// Exact, case-sensitive lookup. A redirect is followed once.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry, RouteError> {
        let target = self
            .redirects
            .iter()
            .find(|redirect| redirect.from == path)
            .map_or(path, |redirect| redirect.to.as_str());

        let resolved = self
            .routes
            .iter()
            .find(|route| route.path == target)
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_string(),
            });
        match &resolved {
            Ok(route) => tracing::debug!(path, name = %route.name, "resolved route"),
            Err(_) => tracing::debug!(path, "no route for path"),
        }
        resolved
    }

    /// Resolve a full location: a bare path, a URL, or a hash-history
    /// location such as `index.html#/preferences`.
    pub fn resolve_location(&self, location: &str) -> Result<&RouteEntry, RouteError> {
        self.resolve(location::route_path(location))
    }

    /// The route `/` aliases to; where navigation starts.
    #[must_use]
    pub fn root_target(&self) -> &RouteEntry {
        &self.routes[self.root]
    }

    #[must_use]
    pub fn path_for(&self, page: PageId) -> Option<&str> {
        self.routes
            .iter()
            .find(|route| route.page == page)
            .map(|route| route.path.as_str())
    }

    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteEntry> {
        self.routes.iter().find(|route| route.name == name)
    }

    #[must_use]
    pub fn routes(&self) -> &[RouteEntry] {
        &self.routes
    }

    #[must_use]
    pub fn redirects(&self) -> &[Redirect] {
        &self.redirects
    }

    /// Redirects then routes, in declaration order.
    #[must_use]
    pub fn views(&self) -> Vec<RouteView> {
        self.redirects
            .iter()
            .map(Redirect::to_view)
            .chain(self.routes.iter().map(RouteEntry::to_view))
            .collect()
    }
}

/// Collects routes and redirects, then validates them into a [`RouteTable`].
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    routes: Vec<RouteEntry>,
    redirects: Vec<Redirect>,
}

impl RouteTableBuilder {
    /// Add a route named after its page.
    #[must_use]
    pub fn page(self, path: &str, page: PageId) -> Self {
        self.route(path, page.as_str(), page)
    }

    #[must_use]
    pub fn route(mut self, path: &str, name: &str, page: PageId) -> Self {
        self.routes.push(RouteEntry {
            path: path.to_string(),
            name: name.to_string(),
            page,
        });
        self
    }

    #[must_use]
    pub fn redirect(mut self, from: &str, to: &str) -> Self {
        self.redirects.push(Redirect {
            from: from.to_string(),
            to: to.to_string(),
        });
        self
    }

    pub fn build(self) -> Result<RouteTable, RouteError> {
        let mut paths = HashSet::new();
        let declared = self
            .redirects
            .iter()
            .map(|redirect| &redirect.from)
            .chain(self.routes.iter().map(|route| &route.path));
        for path in declared {
            if !path.starts_with('/') {
                return Err(RouteError::InvalidPath(path.clone()));
            }
            if !paths.insert(path.as_str()) {
                return Err(RouteError::DuplicatePath(path.clone()));
            }
        }

        let mut names = HashSet::new();
        for route in &self.routes {
            if !names.insert(route.name.as_str()) {
                return Err(RouteError::DuplicateName(route.name.clone()));
            }
        }

        for redirect in &self.redirects {
            if !self.routes.iter().any(|route| route.path == redirect.to) {
                return Err(RouteError::DanglingRedirect {
                    from: redirect.from.clone(),
                    to: redirect.to.clone(),
                });
            }
        }

        let root = self
            .redirects
            .iter()
            .find(|redirect| redirect.from == ROOT_PATH)
            .and_then(|redirect| self.routes.iter().position(|route| route.path == redirect.to))
            .ok_or(RouteError::RootNotRedirect)?;

        Ok(RouteTable {
            routes: self.routes,
            redirects: self.redirects,
            root,
        })
    }
}
