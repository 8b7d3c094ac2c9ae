use super::api;
use crate::layout::dialog::ConfirmService;
use contracts::system::debug::concat_languages;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Debug controls hosted in the Logs pane.
///
/// The enable action is gated behind the confirmation dialog; confirming
/// issues one GET to the enable-debug address. Rapid repeated confirms can
/// overlap requests, nothing de-duplicates them.
#[component]
pub fn DebugControls() -> impl IntoView {
    let dialogs = use_context::<ConfirmService>().expect("ConfirmService not provided in context");
    let (status_text, set_status_text) = signal(String::new());

    let run_enable = move || {
        spawn_local(async move {
            match api::enable_debug().await {
                Ok(entries) => {
                    set_status_text.set(concat_languages(&entries));
                }
                Err(msg) => {
                    leptos::logging::log!("⚠️ enable_debug failed: {}", msg);
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message(&msg);
                    }
                }
            }
        });
    };

    let on_click = move |_| {
        dialogs.request(
            "Enable debug mode on the server?",
            Callback::new(move |_| run_enable()),
        );
    };

    view! {
        <div class="debug-controls">
            <Button appearance=ButtonAppearance::Primary on_click=on_click>
                "Enable Debug"
            </Button>
            <span class="debug-controls__status">{move || status_text.get()}</span>
        </div>
    }
}
