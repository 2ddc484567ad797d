use leptos::*;
use crate::components::{message::Message, rating::Rating};
use crate::models::review::Review;

#[component]
pub fn ReviewsList(reviews: Vec<Review>) -> impl IntoView {
    let empty = reviews.is_empty();
    view! {
        <div>
            <Show when=move || empty>
                <Message variant="info">{ "No Reviews" }</Message>
            </Show>
            <ul class="list-group list-group-flush">
                {
                    reviews.into_iter().map(|review| {
                        let date = review.date();
                        let stars = review.rating as f64;
                        view! {
                            <li class="list-group-item" data-review-id=review.id>
                                <strong>{ review.name.unwrap_or_default() }</strong>
                                <Rating value=stars />
                                <p>{ date }</p>
                                <p>{ review.comment.unwrap_or_default() }</p>
                            </li>
                        }
                    }).collect_view()
                }
            </ul>
        </div>
    }
}
