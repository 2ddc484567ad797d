use leptos::*;

pub const STAR_COLOR: &str = "#f8e825";

/// Icon classes of the five stars for `value`, in half-star steps.
pub fn star_classes(value: f64) -> [&'static str; 5] {
    let mut stars = ["far fa-star"; 5];
    for (i, star) in stars.iter_mut().enumerate() {
        let position = (i + 1) as f64;
        *star = if value >= position {
            "fas fa-star"
        } else if value >= position - 0.5 {
            "fas fa-star-half-alt"
        } else {
            "far fa-star"
        };
    }
    stars
}

#[component]
pub fn Rating(
    value: f64,
    #[prop(optional, into)] text: Option<String>,
    #[prop(default = STAR_COLOR)] color: &'static str,
) -> impl IntoView {
    view! {
        <div class="rating">
            {star_classes(value)
                .into_iter()
                .map(|class| view! {
                    <span><i style=format!("color: {}", color) class=class></i></span>
                })
                .collect_view()}
            <span>{text.unwrap_or_default()}</span>
        </div>
    }
}
