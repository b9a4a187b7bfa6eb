//! Catalog page identities.
//!
//! A page identity is what a navigation shell hands to its renderer. The
//! symbolic name (`as_str`) is also the route name and the serialized form.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// One of the fixed catalog pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum PageId {
    #[serde(rename = "ForeignLLM")]
    ForeignLlm,
    #[serde(rename = "DomesticLLM")]
    DomesticLlm,
    #[serde(rename = "MultimodalLLM")]
    MultimodalLlm,
    #[serde(rename = "AIDrawing")]
    AiDrawing,
    VideoCreation,
    AudioProcessing,
    DesignTools,
    DevTools,
    Prompts,
    Favorites,
    Preferences,
    About,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [Self; 12] = [
        Self::ForeignLlm,
        Self::DomesticLlm,
        Self::MultimodalLlm,
        Self::AiDrawing,
        Self::VideoCreation,
        Self::AudioProcessing,
        Self::DesignTools,
        Self::DevTools,
        Self::Prompts,
        Self::Favorites,
        Self::Preferences,
        Self::About,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ForeignLlm => "ForeignLLM",
            Self::DomesticLlm => "DomesticLLM",
            Self::MultimodalLlm => "MultimodalLLM",
            Self::AiDrawing => "AIDrawing",
            Self::VideoCreation => "VideoCreation",
            Self::AudioProcessing => "AudioProcessing",
            Self::DesignTools => "DesignTools",
            Self::DevTools => "DevTools",
            Self::Prompts => "Prompts",
            Self::Favorites => "Favorites",
            Self::Preferences => "Preferences",
            Self::About => "About",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageId {
    type Err = CoreError;

    /// Exact, case-sensitive match on the symbolic name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| CoreError::UnknownPage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = PageId::ALL.iter().map(|page| page.as_str()).collect();
        assert_eq!(names.len(), PageId::ALL.len());
    }

    #[rstest]
    #[case(PageId::ForeignLlm, "\"ForeignLLM\"")]
    #[case(PageId::AiDrawing, "\"AIDrawing\"")]
    #[case(PageId::DevTools, "\"DevTools\"")]
    fn serde_uses_symbolic_name(#[case] page: PageId, #[case] expected: &str) {
        assert_eq!(serde_json::to_string(&page).unwrap(), expected);
        assert_eq!(serde_json::from_str::<PageId>(expected).unwrap(), page);
    }

    #[test]
    fn from_str_roundtrips_every_page() {
        for page in PageId::ALL {
            assert_eq!(page.as_str().parse::<PageId>().unwrap(), page);
        }
    }

    #[test]
    fn from_str_is_case_sensitive() {
        assert!("foreignllm".parse::<PageId>().is_err());
        assert!("PromptPage".parse::<PageId>().is_err());
    }
}
