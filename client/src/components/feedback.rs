//! Success / error line rendered under public forms.

use leptos::prelude::*;

use crate::state::inquiry::Feedback;

#[component]
pub fn FormFeedback(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|f| {
            let class = if f.is_error() { "form-feedback form-feedback--error" } else { "form-feedback" };
            view! { <p class=class role="status">{f.message().to_owned()}</p> }
        })
    }
}
