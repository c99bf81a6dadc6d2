//! User projection HTTP handlers.
//!
//! This module implements the read-only user endpoints:
//! - GET /name - Names of all users
//! - GET /location - Locations of all users
//! - GET /occupation - Full occupation history of each user
//! - GET /occupation/latest - Most recent occupation of each user
//! - GET /hobbies - One hobby per user, chosen by position
//! - GET /hobbies/{type} - Names of all hobbies with the given type
//!
//! Every endpoint answers 200 with a JSON array, even when it is empty.

use crate::{
    directory::UserDirectory,
    models::user::HobbyRecord,
    services::projection,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;

/// List user names.
///
/// # Response (200 OK)
///
/// ```json
/// ["Donald Duck", "Mickey Mouse"]
/// ```
pub async fn list_names(State(directory): State<UserDirectory>) -> Json<Vec<String>> {
    let names: Vec<String> = projection::names(directory.records())
        .into_iter()
        .map(str::to_owned)
        .collect();
    tracing::debug!(?names, "projected names");

    Json(names)
}

/// List user locations.
///
/// # Response (200 OK)
///
/// ```json
/// ["NYC", "Orlando"]
/// ```
pub async fn list_locations(State(directory): State<UserDirectory>) -> Json<Vec<String>> {
    let locations: Vec<String> = projection::locations(directory.records())
        .into_iter()
        .map(str::to_owned)
        .collect();
    tracing::debug!(?locations, "projected locations");

    Json(locations)
}

/// List each user's full occupation history.
///
/// # Response (200 OK)
///
/// ```json
/// [["dipping", "diving", "dodging"], ["hosting", "smiling", "dancing"]]
/// ```
pub async fn list_occupations(State(directory): State<UserDirectory>) -> Json<Vec<Vec<String>>> {
    let occupations: Vec<Vec<String>> = projection::occupations(directory.records())
        .into_iter()
        .map(<[String]>::to_vec)
        .collect();

    Json(occupations)
}

/// List each user's most recent occupation.
///
/// Users without any occupation show up as `null` so the array stays
/// aligned with the user order.
///
/// # Response (200 OK)
///
/// ```json
/// ["dodging", "dancing"]
/// ```
pub async fn list_latest_occupations(
    State(directory): State<UserDirectory>,
) -> Json<Vec<Option<String>>> {
    let latest: Vec<Option<String>> = projection::latest_occupations(directory.records())
        .into_iter()
        .map(|occupation| occupation.map(str::to_owned))
        .collect();
    tracing::debug!(?latest, "projected latest occupations");

    Json(latest)
}

/// Query parameters for `GET /hobbies`.
#[derive(Debug, Default, Deserialize)]
pub struct HobbyQuery {
    /// Hobby position to take from every user
    ///
    /// When absent, each user's hobby is taken at that user's own position.
    pub index: Option<usize>,
}

/// List one hobby per user.
///
/// # Selection
///
/// Without a query, the user at position `i` contributes `hobbies[i]`.
/// This is the endpoint's historical behavior and clients depend on it.
/// `?index=N` takes `hobbies[N]` from every user instead.
///
/// Positions past the end of a user's hobbies give `null`.
///
/// # Response (200 OK)
///
/// ```json
/// [
///   { "name": "Chilling", "type": "current" },
///   { "name": "Billiards", "type": "past" }
/// ]
/// ```
///
/// # Errors
///
/// A non-numeric `index` is rejected by the `Query` extractor with 400.
pub async fn list_hobbies(
    State(directory): State<UserDirectory>,
    Query(query): Query<HobbyQuery>,
) -> Json<Vec<Option<HobbyRecord>>> {
    let hobbies: Vec<Option<HobbyRecord>> =
        projection::hobbies_at(directory.records(), query.index)
            .into_iter()
            .map(|hobby| hobby.cloned())
            .collect();

    Json(hobbies)
}

/// List the names of all hobbies with the given type.
///
/// # URL Parameters
///
/// - `type` - Type tag to match, compared exactly (case-sensitive)
///
/// # Response (200 OK)
///
/// `GET /hobbies/past`:
///
/// ```json
/// ["swimming", "Billiards"]
/// ```
///
/// An unknown type yields `[]`, not 404.
pub async fn list_hobbies_by_type(
    State(directory): State<UserDirectory>,
    Path(kind): Path<String>,
) -> Json<Vec<String>> {
    let names: Vec<String> = projection::hobby_names_of_type(directory.records(), &kind)
        .into_iter()
        .map(str::to_owned)
        .collect();
    tracing::debug!(kind = %kind, ?names, "projected hobbies by type");

    Json(names)
}
