//! Tab management module
//!
//! Contains:
//! - `TabKey` - the fixed tab set served by the backup service
//! - `tab_bar` - the clickable tab strip
//! - `pane` - lazily loaded pane content
//! - `api` - fragment requests

pub mod api;
pub mod pane;
pub mod tab_bar;

/// Keys of the fixed tab set. Each maps to one `ajax/<key>` fragment on the
/// service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Main,
    Backups,
    Settings,
    Controls,
    Stats,
    Logs,
}

impl TabKey {
    pub const ALL: [TabKey; 6] = [
        TabKey::Main,
        TabKey::Backups,
        TabKey::Settings,
        TabKey::Controls,
        TabKey::Stats,
        TabKey::Logs,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            TabKey::Main => "main",
            TabKey::Backups => "backups",
            TabKey::Settings => "settings",
            TabKey::Controls => "controls",
            TabKey::Stats => "stats",
            TabKey::Logs => "logs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabKey::Main => "Main",
            TabKey::Backups => "Backups",
            TabKey::Settings => "Settings",
            TabKey::Controls => "Controls",
            TabKey::Stats => "Statistics",
            TabKey::Logs => "Logs",
        }
    }

    /// Address of the pane fragment on the service.
    pub fn fragment_path(&self) -> String {
        format!("/ajax/{}", self.key())
    }

    pub fn from_key(key: &str) -> Option<TabKey> {
        TabKey::ALL.iter().copied().find(|t| t.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for tab in TabKey::ALL {
            assert_eq!(TabKey::from_key(tab.key()), Some(tab));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(TabKey::from_key("nonsense"), None);
        assert_eq!(TabKey::from_key(""), None);
    }

    #[test]
    fn test_fragment_path() {
        assert_eq!(TabKey::Main.fragment_path(), "/ajax/main");
        assert_eq!(TabKey::Logs.fragment_path(), "/ajax/logs");
    }
}
