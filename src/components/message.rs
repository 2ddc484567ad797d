use leptos::*;

/// Bootstrap alert. `variant` is one of the alert colours (`info`, `danger`, `success`, ...).
#[component]
pub fn Message(#[prop(default = "info")] variant: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class=format!("alert alert-{}", variant) role="alert">
            {children()}
        </div>
    }
}
