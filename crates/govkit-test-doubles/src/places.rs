//! Stub rules and fixture payloads for the places API.

use serde_json::{json, Value};

use crate::http::MockHttpServer;

/// Location shapes the places API has returned in the wild.
#[derive(Debug, Clone, Default)]
pub enum LocationFixture {
    /// `[latitude, longitude]` pair.
    Pair(f64, f64),
    /// `{"latitude": .., "longitude": ..}` object.
    Named(f64, f64),
    /// Empty array, seen on places that failed geocoding.
    Empty,
    /// Field set to null.
    #[default]
    Missing,
}

/// Builder for place payloads with the full wire shape.
///
/// Unset fields render as null, matching the API's habit of sending every
/// key whether or not it holds data.
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct PlaceFixture {
    name: Option<String>,
    address1: Option<String>,
    address2: Option<String>,
    town: Option<String>,
    postcode: Option<String>,
    url: Option<String>,
    location: LocationFixture,
}

impl PlaceFixture {
    /// Create a fixture for a place called `name`.
    pub fn new(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// Set the first address line.
    pub fn with_address1(mut self, address1: &str) -> Self {
        self.address1 = Some(address1.to_string());
        self
    }

    /// Set the second address line.
    pub fn with_address2(mut self, address2: &str) -> Self {
        self.address2 = Some(address2.to_string());
        self
    }

    /// Set the town.
    pub fn with_town(mut self, town: &str) -> Self {
        self.town = Some(town.to_string());
        self
    }

    /// Set the postcode.
    pub fn with_postcode(mut self, postcode: &str) -> Self {
        self.postcode = Some(postcode.to_string());
        self
    }

    /// Set the public URL.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Set the location as a `[lat, lng]` pair.
    pub fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = LocationFixture::Pair(latitude, longitude);
        self
    }

    /// Set the location as a `{"latitude", "longitude"}` object.
    pub fn with_named_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = LocationFixture::Named(latitude, longitude);
        self
    }

    /// Set the location to an empty array.
    pub fn with_empty_location(mut self) -> Self {
        self.location = LocationFixture::Empty;
        self
    }

    /// Build the wire payload.
    #[must_use]
    pub fn build(&self) -> Value {
        let location = match self.location {
            LocationFixture::Pair(latitude, longitude) => json!([latitude, longitude]),
            LocationFixture::Named(latitude, longitude) => {
                json!({ "latitude": latitude, "longitude": longitude })
            }
            LocationFixture::Empty => json!([]),
            LocationFixture::Missing => Value::Null,
        };

        json!({
            "access_notes": null,
            "address1": self.address1,
            "address2": self.address2,
            "fax": null,
            "general_notes": null,
            "geocode_error": null,
            "location": location,
            "name": self.name,
            "phone": null,
            "postcode": self.postcode,
            "source_address": null,
            "text_phone": null,
            "town": self.town,
            "url": self.url
        })
    }
}

/// Stub helpers for the places API, bound to a mock server.
pub struct PlacesApiStubs<'a> {
    server: &'a MockHttpServer,
}

impl<'a> PlacesApiStubs<'a> {
    /// Bind the helpers to `server`.
    #[must_use]
    pub const fn new(server: &'a MockHttpServer) -> Self {
        Self { server }
    }

    /// Stub a search for `place_type` near a coordinate to return `places`.
    pub async fn has_places(&self, place_type: &str, lat: f64, lng: f64, places: Vec<Value>) {
        self.server
            .expect_get(&format!("/places/{place_type}.json"))
            .with_query_param("lat", &lat.to_string())
            .with_query_param("lng", &lng.to_string())
            .respond_with_json(Value::Array(places))
            .mount()
            .await;
    }

    /// Stub every search for `place_type` to return no places.
    pub async fn has_no_places(&self, place_type: &str) {
        self.server
            .expect_get(&format!("/places/{place_type}.json"))
            .respond_with_json(json!([]))
            .mount()
            .await;
    }

    /// Stub every search for `place_type` to fail with `status`.
    pub async fn returns_error(&self, place_type: &str, status: u16) {
        self.server
            .expect_get(&format!("/places/{place_type}.json"))
            .respond_with_status(status)
            .mount()
            .await;
    }
}
