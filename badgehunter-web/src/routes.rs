use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Gallery,
    #[at("/badge/:id")]
    Badge { id: String },
    #[at("/checker")]
    Checker,
    #[at("/assistant")]
    Assistant,
    #[at("/help")]
    Help,
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// Top-level sections shown in the navbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Gallery,
    Checker,
    Assistant,
    Help,
}

impl Tab {
    pub const ALL: [Self; 4] = [Self::Gallery, Self::Checker, Self::Assistant, Self::Help];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gallery => "Gallery",
            Self::Checker => "Checker",
            Self::Assistant => "Assistant",
            Self::Help => "Help",
        }
    }

    #[must_use]
    pub const fn dom_id(self) -> &'static str {
        match self {
            Self::Gallery => "tab-gallery",
            Self::Checker => "tab-checker",
            Self::Assistant => "tab-assistant",
            Self::Help => "tab-help",
        }
    }
}

impl Route {
    #[must_use]
    pub const fn from_tab(tab: Tab) -> Self {
        match tab {
            Tab::Gallery => Self::Gallery,
            Tab::Checker => Self::Checker,
            Tab::Assistant => Self::Assistant,
            Tab::Help => Self::Help,
        }
    }

    /// Tab highlighted for this route. Badge details belong to the gallery.
    #[must_use]
    pub const fn tab(&self) -> Option<Tab> {
        match self {
            Self::Gallery | Self::Badge { .. } => Some(Tab::Gallery),
            Self::Checker => Some(Tab::Checker),
            Self::Assistant => Some(Tab::Assistant),
            Self::Help => Some(Tab::Help),
            Self::NotFound => None,
        }
    }
}
