//! Desktop shell menu commands that lead to pages.
//!
//! Preferences and About open in their own windows at a hash-history
//! location; Documentation leaves the app for an external URL. Edit and view
//! commands (copy, reload, ...) act on the webview and never touch routing,
//! so they are not modelled here.

use std::fmt;
use std::str::FromStr;

use atlas_core::PageId;
use serde::Serialize;

use crate::error::RouteError;
use crate::location::APP_DOCUMENT;
use crate::table::RouteTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Preferences,
    About,
    Documentation,
}

/// A request to the shell to open (or focus) a window on a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowRequest {
    pub label: &'static str,
    pub title: &'static str,
    pub page: PageId,
    pub url: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
    pub centered: bool,
    /// Show and focus an open window with this label instead of creating one.
    pub reuse_existing: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MenuEffect {
    OpenWindow(WindowRequest),
    OpenExternal { url: String },
}

impl MenuCommand {
    pub const ALL: [Self; 3] = [Self::Preferences, Self::About, Self::Documentation];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Preferences => "preferences",
            Self::About => "about",
            Self::Documentation => "documentation",
        }
    }

    /// What the shell should do for this command.
    ///
    /// Window URLs come from `table`, so a page moved in the table moves its
    /// window too. `documentation_url` is only read by `Documentation`.
    pub fn effect(self, table: &RouteTable, documentation_url: &str) -> Result<MenuEffect, RouteError> {
        let window = match self {
            Self::Documentation => {
                if documentation_url.is_empty() {
                    return Err(RouteError::MenuNotConfigured(self.as_str().into()));
                }
                return Ok(MenuEffect::OpenExternal {
                    url: documentation_url.to_string(),
                });
            }
            Self::Preferences => WindowRequest {
                label: "preferences",
                title: "Preferences",
                page: PageId::Preferences,
                url: String::new(),
                width: 800.0,
                height: 600.0,
                resizable: true,
                centered: true,
                reuse_existing: true,
            },
            Self::About => WindowRequest {
                label: "about",
                title: "About",
                page: PageId::About,
                url: String::new(),
                width: 400.0,
                height: 300.0,
                resizable: false,
                centered: false,
                reuse_existing: false,
            },
        };

        let path = table
            .path_for(window.page)
            .ok_or_else(|| RouteError::NotFound {
                path: window.page.as_str().to_string(),
            })?;
        Ok(MenuEffect::OpenWindow(WindowRequest {
            url: format!("{APP_DOCUMENT}#{path}"),
            ..window
        }))
    }
}

impl fmt::Display for MenuCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MenuCommand {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| RouteError::UnknownMenuCommand(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn window(command: MenuCommand) -> WindowRequest {
        match command.effect(RouteTable::canonical(), "").unwrap() {
            MenuEffect::OpenWindow(request) => request,
            MenuEffect::OpenExternal { url } => panic!("unexpected external url {url}"),
        }
    }

    #[test]
    fn preferences_window_reuses_and_centers() {
        let request = window(MenuCommand::Preferences);
        assert_eq!(request.url, "index.html#/preferences");
        assert_eq!((request.width, request.height), (800.0, 600.0));
        assert!(request.reuse_existing);
        assert!(request.centered);
    }

    #[test]
    fn about_window_is_fixed_size() {
        let request = window(MenuCommand::About);
        assert_eq!(request.url, "index.html#/about");
        assert!(!request.resizable);
        assert!(!request.reuse_existing);
    }

    #[test]
    fn window_urls_resolve_back_to_their_page() {
        for command in [MenuCommand::Preferences, MenuCommand::About] {
            let request = window(command);
            let route = RouteTable::canonical()
                .resolve_location(&request.url)
                .unwrap();
            assert_eq!(route.page, request.page);
        }
    }

    #[test]
    fn documentation_needs_a_url() {
        let table = RouteTable::canonical();
        assert_eq!(
            MenuCommand::Documentation.effect(table, "").unwrap_err(),
            RouteError::MenuNotConfigured("documentation".into())
        );
        assert_eq!(
            MenuCommand::Documentation
                .effect(table, "https://docs.example.org")
                .unwrap(),
            MenuEffect::OpenExternal {
                url: "https://docs.example.org".into()
            }
        );
    }

    #[test]
    fn window_for_page_missing_from_table_fails() {
        let table = RouteTable::builder()
            .redirect("/", "/a")
            .page("/a", PageId::ForeignLlm)
            .build()
            .unwrap();
        assert!(MenuCommand::About.effect(&table, "").is_err());
    }

    #[test]
    fn parses_command_names() {
        assert_eq!("about".parse::<MenuCommand>().unwrap(), MenuCommand::About);
        assert!("quit".parse::<MenuCommand>().is_err());
    }

    #[test]
    fn effect_serializes_with_kind_tag() {
        let value = serde_json::to_value(
            MenuCommand::About
                .effect(RouteTable::canonical(), "")
                .unwrap(),
        )
        .unwrap();
        assert_eq!(value["kind"], "open_window");
        assert_eq!(value["label"], "about");
    }
}
