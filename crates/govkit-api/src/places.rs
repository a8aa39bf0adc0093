//! Places ("imminence") API client for location-based service lookups.
//!
//! The wire payload is looser than the [`Place`] type consumers get: the
//! `location` field has shipped as a `[lat, lng]` pair, a
//! `{"latitude", "longitude"}` object, an empty array and null, and address
//! lines may be missing or blank. Normalization smooths all of that out and
//! never rejects a place over a malformed location.

use serde::Deserialize;

use crate::error::ApiError;
use crate::json_client::JsonClient;

/// Default number of places requested per search.
const DEFAULT_LIMIT: u32 = 5;

/// A place offering a service, normalized from the wire payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Place {
    pub name: Option<String>,
    /// Address lines joined with ", ", blank components dropped.
    pub address: String,
    pub town: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Place as the API returns it, before normalization.
#[derive(Debug, Clone, Deserialize)]
struct RawPlace {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    address1: Option<String>,
    #[serde(default)]
    address2: Option<String>,
    #[serde(default)]
    town: Option<String>,
    #[serde(default)]
    postcode: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    location: Option<Location>,
}

/// Wire formats observed for the `location` field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Location {
    Named { latitude: f64, longitude: f64 },
    Pair(Vec<f64>),
}

/// Extract coordinates from whichever shape the API sent, degrading to
/// `None` rather than failing the place.
fn coordinates(location: Option<Location>) -> (Option<f64>, Option<f64>) {
    match location {
        Some(Location::Named {
            latitude,
            longitude,
        }) => (Some(latitude), Some(longitude)),
        Some(Location::Pair(pair)) => match pair.as_slice() {
            [latitude, longitude, ..] => (Some(*latitude), Some(*longitude)),
            _ => (None, None),
        },
        None => (None, None),
    }
}

impl From<RawPlace> for Place {
    fn from(raw: RawPlace) -> Self {
        let address = [raw.address1.as_deref(), raw.address2.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        let (latitude, longitude) = coordinates(raw.location);

        Self {
            name: raw.name,
            address,
            town: raw.town,
            postcode: raw.postcode,
            phone: raw.phone,
            url: raw.url,
            latitude,
            longitude,
        }
    }
}

/// Client for the places search API.
pub struct PlacesClient {
    client: JsonClient,
}

impl PlacesClient {
    /// Create a new client with the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: JsonClient::new(base_url),
        }
    }

    /// Create a client over a pre-configured [`JsonClient`].
    #[must_use]
    pub const fn with_client(client: JsonClient) -> Self {
        Self { client }
    }

    /// Search for places of `place_type` near a coordinate.
    ///
    /// # Errors
    /// Returns an error if the request fails or the API responds with a
    /// non-2xx status.
    pub async fn places(
        &self,
        place_type: &str,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<Place>, ApiError> {
        self.places_with_limit(place_type, lat, lng, DEFAULT_LIMIT)
            .await
    }

    /// Search for places of `place_type` near a coordinate, capping results.
    ///
    /// # Errors
    /// Returns an error if the request fails or the API responds with a
    /// non-2xx status.
    pub async fn places_with_limit(
        &self,
        place_type: &str,
        lat: f64,
        lng: f64,
        limit: u32,
    ) -> Result<Vec<Place>, ApiError> {
        let path = format!("/places/{}.json", urlencoding::encode(place_type));
        let raw: Vec<RawPlace> = self
            .client
            .get_json_with_query(
                &path,
                &[
                    ("limit", limit.to_string()),
                    ("lat", lat.to_string()),
                    ("lng", lng.to_string()),
                ],
            )
            .await?;

        Ok(raw.into_iter().map(Place::from).collect())
    }
}
