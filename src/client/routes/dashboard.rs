use dioxus::document::Title;
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBoxOpen, FaComments, FaUsers};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::components::{ErrorBanner, Page};
use crate::client::controller::stats::DashboardStats;
use crate::client::data::DataHandle;
use crate::client::router::Route;
use crate::error::FetchError;
use crate::model::{item::ItemDto, review::ReviewDto, user::UserDto};

#[component]
pub fn Dashboard() -> Element {
    let data = use_context::<DataHandle>();
    let mut stats = use_signal(DashboardStats::default);
    let mut error = use_signal(|| None::<String>);
    let mut loading = use_signal(|| true);

    // Aggregates are derived from the fetched collections instead of a
    // cached stats endpoint.
    use_future(move || {
        let data = data.clone();
        async move {
            let users = data.fetch_users().await;
            let items = data.fetch_items().await;
            let reviews = data.fetch_reviews().await;
            match combine_collections(users, items, reviews) {
                Ok(computed) => stats.set(computed),
                Err(err) => {
                    tracing::error!("failed to load dashboard stats: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            loading.set(false);
        }
    });

    let current = *stats.read();
    let average = format!("{:.1}", current.average_rating);
    let load_error = error.read().clone();

    rsx!(
        Title { "Dashboard | Rently Admin" }
        Page {
            h1 { class: "text-2xl font-bold mb-6", "Dashboard" }
            if loading() {
                div { class: "flex justify-center p-12",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else if let Some(message) = load_error {
                ErrorBanner { message }
            } else {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    StatCard {
                        title: "Total Users",
                        value: current.total_users.to_string(),
                        details: vec![
                            ("Active".to_string(), current.active_users.to_string()),
                            ("Inactive".to_string(), current.inactive_users.to_string()),
                        ],
                        link: Route::Users {},
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaUsers }),
                    }
                    StatCard {
                        title: "Total Items",
                        value: current.total_items.to_string(),
                        details: vec![
                            ("Available".to_string(), current.available_items.to_string()),
                            ("Unavailable".to_string(), current.unavailable_items.to_string()),
                        ],
                        link: Route::Items {},
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaBoxOpen }),
                    }
                    StatCard {
                        title: "Total Reviews",
                        value: current.total_reviews.to_string(),
                        details: vec![("Avg Rating".to_string(), average)],
                        link: Route::Reviews {},
                        icon: rsx!(Icon { width: 24, height: 24, icon: FaComments }),
                    }
                }
            }
        }
    )
}

/// Folds the three collection fetches into the dashboard aggregates.
///
/// Any failed fetch fails the whole load; aggregates derived from a
/// partial fetch would render as confidently wrong numbers.
fn combine_collections(
    users: Result<Vec<UserDto>, FetchError>,
    items: Result<Vec<ItemDto>, FetchError>,
    reviews: Result<Vec<ReviewDto>, FetchError>,
) -> Result<DashboardStats, FetchError> {
    let users = users?;
    let items = items?;
    let reviews = reviews?;
    Ok(DashboardStats::from_collections(&users, &items, &reviews))
}

#[component]
fn StatCard(
    title: String,
    value: String,
    details: Vec<(String, String)>,
    link: Route,
    icon: Element,
) -> Element {
    rsx!(
        Link { to: link,
            div { class: "card bg-base-100 shadow hover:shadow-lg transition-shadow p-6",
                div { class: "flex justify-between items-start",
                    div {
                        h2 { class: "text-lg font-semibold opacity-80", "{title}" }
                        p { class: "text-3xl font-bold mt-2", "{value}" }
                    }
                    div { class: "p-3 rounded-full bg-primary/10 text-primary",
                        {icon}
                    }
                }
                div { class: "flex gap-4 mt-4",
                    for (label, detail) in details.iter() {
                        div {
                            p { class: "text-sm opacity-70", "{label}" }
                            p { class: "font-semibold", "{detail}" }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use super::combine_collections;
    use crate::error::FetchError;

    /// Tests that empty collections still compute real aggregates.
    #[test]
    fn all_successful_fetches_yield_stats() {
        let stats = combine_collections(Ok(Vec::new()), Ok(Vec::new()), Ok(Vec::new())).unwrap();

        assert_eq!(stats.total_users, 0);
        assert_eq!(stats.average_rating, 0.0);
    }

    /// Tests the failure path behind the dashboard banner.
    ///
    /// Verifies that a single failed fetch fails the whole load instead of
    /// producing aggregates from only the collections that did arrive.
    #[test]
    fn any_failed_fetch_fails_the_load() {
        let err = FetchError::Status {
            status: 500,
            message: "boom".to_string(),
        };

        let result = combine_collections(Ok(Vec::new()), Err(err.clone()), Ok(Vec::new()));

        assert_eq!(result, Err(err));
    }
}
