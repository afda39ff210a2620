use crate::handlers;
use crate::remote::RemoteAnalytics;
use crate::state::AppState;
use crate::trackers::{
    Anxiety, Dysautonomia, FoodAllergens, MentalHealth, Pain, SelfCare, Tracker,
};
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/trackers", get(handlers::list_trackers))
        .route("/api/data/range", get(handlers::data_range))
        .route("/api/data/search", get(handlers::data_search))
        .route("/api/data/tags", get(handlers::data_tags))
        .route("/api/data/:date", get(handlers::data_for_date))
        .merge(tracker_routes::<Anxiety>())
        .merge(tracker_routes::<MentalHealth>())
        .merge(tracker_routes::<Pain>())
        .merge(tracker_routes::<Dysautonomia>())
        .merge(tracker_routes::<SelfCare>())
        .merge(tracker_routes::<FoodAllergens>())
        .merge(remote_routes::<Pain>())
        .merge(remote_routes::<Dysautonomia>())
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Page, form bridge and JSON API of one tracker, mounted under its slug.
fn tracker_routes<T: Tracker>() -> Router<AppState> {
    let page = format!("/trackers/{}", T::SLUG);
    let api = format!("/api/trackers/{}", T::SLUG);

    Router::new()
        .route(&page, get(handlers::tracker_page::<T>))
        .route(&format!("{page}/entries"), post(handlers::submit_form::<T>))
        .route(
            &format!("{page}/entries/:date/:id/delete"),
            post(handlers::delete_form::<T>),
        )
        .route(&format!("{api}/catalog"), get(handlers::catalog::<T>))
        .route(&format!("{api}/entries"), get(handlers::list_entries::<T>))
        .route(
            &format!("{api}/days/:date"),
            get(handlers::day_entries::<T>).post(handlers::create_entry::<T>),
        )
        .route(
            &format!("{api}/days/:date/:id"),
            get(handlers::get_entry::<T>)
                .put(handlers::update_entry::<T>)
                .delete(handlers::delete_entry::<T>),
        )
        .route(&format!("{api}/analytics"), get(handlers::analytics::<T>))
}

fn remote_routes<T: RemoteAnalytics>() -> Router<AppState> {
    Router::new()
        .route(
            &format!("/api/trackers/{}/analytics/remote", T::SLUG),
            post(handlers::remote_analytics::<T>),
        )
        .route(
            &format!("/trackers/{}/remote", T::SLUG),
            post(handlers::remote_page::<T>),
        )
}
