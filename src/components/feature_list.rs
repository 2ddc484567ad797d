//! Feature board of a product: one row per feature with its type and status
//! badges, the vote count and a Vote button.
use std::collections::HashSet;

use leptos::*;
use crate::components::message::Message;
use crate::models::product::{Feature, FeatureLookup, FeatureTag};

pub const UNKNOWN_TAG_COLOR: &str = "#6c757d";

/// Name and colour of a badge. Dangling references render as "Unknown".
pub fn badge_parts(tag: Option<&FeatureTag>) -> (String, String) {
    match tag {
        Some(tag) => (tag.name.clone(), tag.color.clone()),
        None => ("Unknown".to_string(), UNKNOWN_TAG_COLOR.to_string()),
    }
}

#[component]
fn Badge(tag: Option<FeatureTag>) -> impl IntoView {
    let (name, color) = badge_parts(tag.as_ref());
    view! {
        <span class="badge p-2 rounded-pill text-white" style=format!("background: {}", color)>
            {name}
        </span>
    }
}

#[component]
pub fn FeatureList(
    features: Vec<Feature>,
    lookup: FeatureLookup,
    /// Ids of the features whose vote is in flight.
    #[prop(into)]
    voting: Signal<HashSet<String>>,
    on_vote: Callback<String>,
) -> impl IntoView {
    if features.is_empty() {
        return view! { <Message variant="info">{ "No Features" }</Message> }.into_view();
    }

    view! {
        <ul class="list-group list-group-flush">
            {features.into_iter().map(|feature| {
                let feature_type = lookup.feature_type(&feature).cloned();
                let feature_status = lookup.feature_status(&feature).cloned();
                let id = feature.id.clone();
                let busy_id = id.clone();
                let is_busy = move || voting.with(|v| v.contains(&busy_id));
                view! {
                    <li class="list-group-item" data-feature-id=feature.id.clone()>
                        <div class="row border border-dark rounded py-5">
                            <div class="col-sm-6 col-md-10 col-lg-10">
                                <strong class="fw-bold">{feature.name}</strong>
                                <hr />
                                <p>
                                    <Badge tag=feature_type />
                                    { " · " }
                                    <Badge tag=feature_status />
                                </p>
                            </div>
                            <div class="col text-center">
                                <span class="text-center border border-dark border-1 rounded p-3 w-100 vote-count">
                                    {feature.votes}
                                </span>
                                <br />
                                <button
                                    type="button"
                                    class="btn btn-primary position-relative mt-3"
                                    disabled=is_busy
                                    on:click=move |_| on_vote.call(id.clone())
                                >
                                    { "Vote" }
                                </button>
                            </div>
                        </div>
                    </li>
                }
            }).collect_view()}
        </ul>
    }
    .into_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_tag_keeps_name_and_colour() {
        let tag = FeatureTag { id: 1, name: "Bug".into(), color: "#dc3545".into() };
        assert_eq!(badge_parts(Some(&tag)), ("Bug".to_string(), "#dc3545".to_string()));
    }

    #[test]
    fn missing_tag_is_unknown() {
        assert_eq!(badge_parts(None), ("Unknown".to_string(), UNKNOWN_TAG_COLOR.to_string()));
    }
}
