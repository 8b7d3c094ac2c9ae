pub mod context;
pub mod dialog;
pub mod tabs;

use crate::layout::context::ConsoleContext;
use crate::layout::dialog::ConfirmDialog;
use crate::layout::tabs::pane::TabPane;
use crate::layout::tabs::tab_bar::TabBar;
use crate::layout::tabs::TabKey;
use leptos::prelude::*;

/// Console shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |   Header (title + startup indicator)      |
/// +------------------------------------------+
/// |   Tab bar                                 |
/// +------------------------------------------+
/// |   Panes (one visible, others hidden)      |
/// +------------------------------------------+
/// ```
///
/// The confirmation dialog host sits outside the pane area so it overlays
/// whatever tab is active.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<ConsoleContext>().expect("ConsoleContext context not found");

    // Initialize URL integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-header__title">"Backup Console"</h1>
                <Show when=move || ctx.startup_loading.get()>
                    <span id="loading" class="app-header__loading">"Loading..."</span>
                </Show>
            </header>

            <div class="app-body">
                <div class="app-tabs">
                    <TabBar />
                    <div class="tabs__content">
                        {TabKey::ALL
                            .iter()
                            .map(|tab| view! { <TabPane tab=*tab /> })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <ConfirmDialog />
        </div>
    }
}
