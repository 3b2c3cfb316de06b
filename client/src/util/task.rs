//! Fire-and-forget tasks on the UI thread.

use std::future::Future;

/// Run `fut` on the page's local executor. Native builds have no executor,
/// so the future is dropped unpolled.
pub fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(fut);
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(fut);
    }
}
