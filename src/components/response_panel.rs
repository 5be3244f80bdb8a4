//! Last probe response.

use leptos::prelude::*;

use crate::presenter::SignalPresenter;

#[component]
pub fn ResponsePanel(presenter: SignalPresenter) -> impl IntoView {
    view! {
        <div class="response-panel">
            <h3>"Response"</h3>
            <pre id="response" class="response-panel__text">{move || presenter.response.get()}</pre>
        </div>
    }
}
