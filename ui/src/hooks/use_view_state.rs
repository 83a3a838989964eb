use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::view_state::ViewState;

/// Runs `fetch` as a resource owned by the calling component and exposes
/// its outcome as a [`ViewState`].
///
/// The task is dropped with the component, so a response arriving after
/// the view is gone is discarded. Failures are logged and replaced by
/// `failure_message`.
pub fn use_view_state<T, F>(
    mut fetch: impl FnMut() -> F + 'static,
    failure_message: &'static str,
) -> Memo<ViewState<T>>
where
    T: Clone + PartialEq + 'static,
    F: Future<Output = Result<T, ApiError>> + 'static,
{
    let resource = use_resource(move || {
        let request = fetch();
        async move {
            let result = request.await;
            if let Err(e) = &result {
                tracing::error!("{}: {}", failure_message, e);
            }
            result
        }
    });

    use_memo(move || ViewState::from_outcome(resource.read().as_ref(), failure_message))
}
