use crate::layout::context::ConsoleContext;
use crate::layout::dialog::ConfirmService;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the console context to the whole app via context.
    provide_context(ConsoleContext::new());

    // Provide ConfirmService for the single confirmation dialog
    provide_context(ConfirmService::new());

    view! {
        <Shell />
    }
}
