//! Lifecycle of a remotely loaded pane fragment.

/// Replacement text for a pane whose fragment request failed.
pub const LOAD_ERROR_TEXT: &str =
    "Couldn't load this resource. There's probably something wrong with the server. ";

/// State of one tab pane's fragment. A pane starts `NotLoaded`, fetches once
/// on first activation and never re-fetches after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentState {
    NotLoaded,
    Loading,
    Ready(String),
    Failed,
}

impl FragmentState {
    /// HTML rendered into the pane for this state.
    pub fn pane_html(&self) -> &str {
        match self {
            FragmentState::NotLoaded => "",
            FragmentState::Loading => "<p><i>Loading...</i></p>",
            FragmentState::Ready(html) => html,
            FragmentState::Failed => LOAD_ERROR_TEXT,
        }
    }

    /// Whether activating the pane should start a fetch.
    pub fn needs_fetch(&self) -> bool {
        matches!(self, FragmentState::NotLoaded)
    }
}
