use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPencil, FaStar, FaTrash};
use dioxus_free_icons::Icon;

use crate::model::review::ReviewDto;

#[component]
pub fn ReviewTable(
    reviews: Vec<ReviewDto>,
    on_edit: EventHandler<ReviewDto>,
    on_delete: EventHandler<String>,
) -> Element {
    rsx!(
        div { class: "card overflow-x-auto",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Item" }
                        th { "Reviewer" }
                        th { "Rating" }
                        th { "Comment" }
                        th { "Date" }
                        th { "Actions" }
                    }
                }
                tbody {
                    if reviews.is_empty() {
                        tr {
                            td { colspan: 6, class: "text-center opacity-70", "No reviews found" }
                        }
                    }
                    for review in reviews.iter() {
                        ReviewRow {
                            key: "{review.id}",
                            review: review.clone(),
                            on_edit,
                            on_delete,
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn ReviewRow(
    review: ReviewDto,
    on_edit: EventHandler<ReviewDto>,
    on_delete: EventHandler<String>,
) -> Element {
    let edit_review = review.clone();
    let delete_id = review.id.clone();
    let comment = review.comment.clone().unwrap_or_default();
    let date = review.created_at.format("%b %e, %Y").to_string();

    rsx!(
        tr {
            td { "{review.item_title}" }
            td { "{review.user_name}" }
            td {
                div { class: "flex items-center gap-1",
                    Icon { width: 14, height: 14, icon: FaStar }
                    p { "{review.rating}/5" }
                }
            }
            td { class: "max-w-md truncate", "{comment}" }
            td { "{date}" }
            td {
                div { class: "flex gap-2",
                    button {
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| on_edit.call(edit_review.clone()),
                        Icon { width: 16, height: 16, icon: FaPencil }
                    }
                    button {
                        class: "btn btn-ghost btn-sm text-error",
                        onclick: move |_| on_delete.call(delete_id.clone()),
                        Icon { width: 16, height: 16, icon: FaTrash }
                    }
                }
            }
        }
    )
}
