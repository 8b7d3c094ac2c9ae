use crate::layout::tabs::TabKey;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct ConsoleContext {
    /// Currently visible tab.
    pub active: RwSignal<TabKey>,
    /// Startup indicator. Cleared exactly once, when the main fragment
    /// request completes (success or failure).
    pub startup_loading: RwSignal<bool>,
}

impl ConsoleContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(TabKey::Main),
            startup_loading: RwSignal::new(true),
        }
    }

    pub fn activate_tab(&self, key: TabKey) {
        leptos::logging::log!("activate_tab: key='{}'", key.key());
        self.active.set(key);
    }

    pub fn finish_startup(&self) {
        if self.startup_loading.get_untracked() {
            self.startup_loading.set(false);
        }
    }

    /// Restore the active tab from the `?tab=` query parameter and mirror
    /// later activations back into the URL.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get("tab").and_then(|v| TabKey::from_key(v)) {
            self.active.set(key);
        }

        let this = *self;
        Effect::new(move |_| {
            let active = this.active.get();
            let query_string = serde_qs::to_string(&HashMap::from([(
                "tab".to_string(),
                active.key().to_string(),
            )]))
            .unwrap_or_default();

            let new_url = format!("?{}", query_string);

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    #[test]
    fn test_startup_indicator_visible_until_finished() {
        with_owner(|| {
            let ctx = ConsoleContext::new();
            assert!(ctx.startup_loading.get_untracked());

            ctx.finish_startup();
            assert!(!ctx.startup_loading.get_untracked());
        });
    }

    #[test]
    fn test_finish_startup_is_idempotent() {
        with_owner(|| {
            let ctx = ConsoleContext::new();
            ctx.finish_startup();
            ctx.finish_startup();
            assert!(!ctx.startup_loading.get_untracked());
        });
    }

    #[test]
    fn test_activate_tab() {
        with_owner(|| {
            let ctx = ConsoleContext::new();
            assert_eq!(ctx.active.get_untracked(), TabKey::Main);

            ctx.activate_tab(TabKey::Logs);
            assert_eq!(ctx.active.get_untracked(), TabKey::Logs);
        });
    }
}
