use super::TabKey;
use crate::layout::context::ConsoleContext;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    view! {
        <div class="tabs__bar">
            {TabKey::ALL
                .iter()
                .map(|tab| view! { <TabLabel tab=*tab /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabLabel(tab: TabKey) -> impl IntoView {
    let ctx = use_context::<ConsoleContext>().expect("ConsoleContext context not found");

    let is_active = Memo::new(move |_| ctx.active.get() == tab);
    let on_click = move |_| ctx.activate_tab(tab);

    view! {
        <button class="tab" class:active=is_active on:click=on_click>
            {tab.label()}
        </button>
    }
}
