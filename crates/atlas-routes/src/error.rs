use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// No route or redirect matches the path. Callers choose how to present it.
    #[error("no route matches '{path}'")]
    NotFound { path: String },

    #[error("route path '{0}' must start with '/'")]
    InvalidPath(String),

    #[error("duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("redirect '{from}' points at '{to}', which is not a concrete route")]
    DanglingRedirect { from: String, to: String },

    #[error("the root path '/' must be declared exactly once, as a redirect")]
    RootNotRedirect,

    #[error("menu command '{0}' is not configured")]
    MenuNotConfigured(String),

    #[error("unknown menu command '{0}'")]
    UnknownMenuCommand(String),
}
