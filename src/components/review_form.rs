use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::review::RATING_OPTIONS;

/// Rating + comment form. The draft lives in the caller's signals so the
/// caller can reset it after a successful submission.
#[component]
pub fn ReviewForm(
    rating: RwSignal<u8>,
    comment: RwSignal<String>,
    #[prop(into)] disabled: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit_review = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form on:submit=submit_review>
            <div class="mb-3">
                <label for="rating" class="form-label">{ "Rating" }</label>
                <select
                    id="rating"
                    class="form-select"
                    prop:value=move || match rating.get() {
                        0 => String::new(),
                        r => r.to_string(),
                    }
                    on:change=move |e| rating.set(event_target_value(&e).parse::<u8>().unwrap_or(0))
                >
                    <option value="">{ "Select..." }</option>
                    {RATING_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=value.to_string()>{ format!("{} - {}", value, label) }</option>
                    }).collect_view()}
                </select>
            </div>
            <div class="mb-3">
                <label for="comment" class="form-label">{ "Review" }</label>
                <textarea
                    id="comment"
                    class="form-control"
                    rows="5"
                    prop:value=move || comment.get()
                    on:input=move |e| comment.set(event_target_value(&e))
                />
            </div>
            <button type="submit" class="btn btn-primary" disabled=move || disabled.get()>
                { "Submit" }
            </button>
        </form>
    }
}
