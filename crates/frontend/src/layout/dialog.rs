use leptos::ev;
use leptos::prelude::*;
use thaw::*;

/// A pending confirmation: prompt text plus the action to run on "Yes".
#[derive(Clone)]
pub struct ConfirmRequest {
    pub message: String,
    pub on_confirm: Callback<()>,
}

/// Service for the confirmation dialog.
///
/// Requesting a new prompt replaces any dialog already on screen, so at most
/// one is visible. The pending request is dropped when the dialog closes.
#[derive(Clone, Copy)]
pub struct ConfirmService {
    current: RwSignal<Option<ConfirmRequest>>,
}

impl ConfirmService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
        }
    }

    /// Show the dialog with the given prompt.
    pub fn request(&self, message: impl Into<String>, on_confirm: Callback<()>) {
        self.current.set(Some(ConfirmRequest {
            message: message.into(),
            on_confirm,
        }));
    }

    /// Close the dialog, then run the confirmed action.
    pub fn confirm(&self) {
        let request = self.current.get_untracked();
        self.current.set(None);
        if let Some(request) = request {
            request.on_confirm.run(());
        }
    }

    /// Close the dialog without running anything.
    pub fn cancel(&self) {
        self.current.set(None);
    }
}

/// Modal confirmation dialog with "Yes"/"Cancel" actions.
#[component]
pub fn ConfirmDialog() -> impl IntoView {
    let dialogs = use_context::<ConfirmService>().expect("ConfirmService not provided in context");

    // Prevent click propagation from dialog content
    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    view! {
        {move || {
            dialogs.current.get().map(|request| {
                let message = request.message;
                view! {
                    <div class="modal-overlay" on:click=move |_| dialogs.cancel()>
                        <div class="modal" on:click=stop_propagation>
                            <div class="modal-body">
                                <p class="modal-message">{message}</p>
                            </div>
                            <div class="modal-actions">
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| dialogs.confirm()
                                >
                                    "Yes"
                                </Button>
                                <Button on_click=move |_| dialogs.cancel()>
                                    "Cancel"
                                </Button>
                            </div>
                        </div>
                    </div>
                }
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn with_owner<T>(f: impl FnOnce() -> T) -> T {
        let owner = Owner::new();
        owner.set();
        f()
    }

    fn counting_callback() -> (Arc<AtomicUsize>, Callback<()>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_for_cb = runs.clone();
        let callback = Callback::new(move |_| {
            runs_for_cb.fetch_add(1, Ordering::SeqCst);
        });
        (runs, callback)
    }

    #[test]
    fn test_confirm_runs_callback_exactly_once() {
        with_owner(|| {
            let service = ConfirmService::new();
            let (runs, callback) = counting_callback();

            service.request("Enable debug mode on the server?", callback);
            service.confirm();
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            // The request is consumed on close; a second confirm has nothing
            // left to run.
            service.confirm();
            assert_eq!(runs.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_cancel_runs_nothing() {
        with_owner(|| {
            let service = ConfirmService::new();
            let (runs, callback) = counting_callback();

            service.request("Enable debug mode on the server?", callback);
            service.cancel();
            assert_eq!(runs.load(Ordering::SeqCst), 0);
            assert!(service.current.with_untracked(|c| c.is_none()));

            // The cancelled request is gone, confirm cannot revive it.
            service.confirm();
            assert_eq!(runs.load(Ordering::SeqCst), 0);
        });
    }

    #[test]
    fn test_new_request_replaces_pending_one() {
        with_owner(|| {
            let service = ConfirmService::new();
            let (first_runs, first_callback) = counting_callback();
            let (second_runs, second_callback) = counting_callback();

            service.request("first?", first_callback);
            service.request("second?", second_callback);
            assert_eq!(
                service
                    .current
                    .with_untracked(|c| c.as_ref().map(|r| r.message.clone())),
                Some("second?".to_string())
            );

            service.confirm();
            assert_eq!(first_runs.load(Ordering::SeqCst), 0);
            assert_eq!(second_runs.load(Ordering::SeqCst), 1);
        });
    }
}
