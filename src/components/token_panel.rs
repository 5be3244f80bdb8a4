//! Decoded token shown in the authenticated view.

use leptos::prelude::*;

use crate::presenter::SignalPresenter;

#[component]
pub fn TokenPanel(presenter: SignalPresenter) -> impl IntoView {
    let headline = move || {
        presenter.token.with(|token| token.as_ref().and_then(|t| t.summary.headline()).unwrap_or_default())
    };
    let payload = move || {
        presenter.token.with(|token| token.as_ref().map(|t| t.payload_pretty.clone()).unwrap_or_default())
    };

    view! {
        <div class="token-panel">
            <p class="token-panel__summary">{headline}</p>
            <pre id="tokenData" class="token-panel__data">{payload}</pre>
        </div>
    }
}
