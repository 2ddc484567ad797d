use leptos::*;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div
            class="spinner-border m-auto d-block"
            role="status"
            style="height: 100px; width: 100px"
        >
            <span class="visually-hidden">{ "Loading..." }</span>
        </div>
    }
}
