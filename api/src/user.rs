//! The user record as served by the users REST endpoint.

use serde::Deserialize;
use serde::Serialize;

/// A single user, deserialized verbatim from the API.
///
/// Only the fields the views render are required. The rest default to empty
/// so that slimmer payloads still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub username: String,
    pub email: String,
    pub address: Address,
    pub phone: String,
    pub website: String,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub suite: String,
    pub city: String,
    #[serde(default)]
    pub zipcode: String,
    #[serde(default)]
    pub geo: Geo,
}

/// Coordinates are strings in the upstream JSON.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub lat: String,
    #[serde(default)]
    pub lng: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(default, rename = "catchPhrase")]
    pub catch_phrase: String,
    #[serde(default)]
    pub bs: String,
}

impl User {
    /// The external link for the user's website.
    ///
    /// The API stores bare host names such as `hildegard.org`.
    pub fn website_url(&self) -> String {
        if self.website.starts_with("http://") || self.website.starts_with("https://") {
            self.website.clone()
        } else {
            format!("https://{}", self.website)
        }
    }
}
