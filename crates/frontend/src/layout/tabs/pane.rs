use super::{api, TabKey};
use crate::layout::context::ConsoleContext;
use crate::shared::fragment::FragmentState;
use crate::system::debug::DebugControls;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One tab pane.
///
/// The fragment is requested the first time the pane becomes active and is
/// never re-fetched after that. The main pane loads immediately on mount and
/// clears the startup indicator when its request completes, whatever the
/// outcome. A failed request replaces the pane content with the fixed error
/// text.
#[component]
pub fn TabPane(tab: TabKey) -> impl IntoView {
    let ctx = use_context::<ConsoleContext>().expect("ConsoleContext context not found");
    let (state, set_state) = signal(FragmentState::NotLoaded);

    let load = move || {
        set_state.set(FragmentState::Loading);
        spawn_local(async move {
            match api::fetch_fragment(tab).await {
                Ok(html) => {
                    log!("Fragment '{}' loaded ({} bytes)", tab.key(), html.len());
                    set_state.set(FragmentState::Ready(html));
                }
                Err(e) => {
                    log!("⚠️ Fragment '{}' failed: {}", tab.key(), e);
                    set_state.set(FragmentState::Failed);
                }
            }
            if tab == TabKey::Main {
                ctx.finish_startup();
            }
        });
    };

    // The main pane fetches on mount; the others wait for their first
    // activation.
    Effect::new(move |_| {
        let wanted = tab == TabKey::Main || ctx.active.get() == tab;
        if wanted && state.with(|s| s.needs_fetch()) {
            load();
        }
    });

    let is_active = move || ctx.active.get() == tab;

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key()
        >
            <div
                class="tabs__fragment"
                inner_html=move || state.with(|s| s.pane_html().to_string())
            ></div>
            {(tab == TabKey::Logs).then(|| view! { <DebugControls /> })}
        </div>
    }
}
