//! Taproom domain model.
//!
//! Records decoded from the Kask API. Everything here is built once per run
//! and read-only afterwards. Decoding is lenient: missing fields and JSON
//! `null` take the field type's default value.

use std::fmt;
use std::sync::Arc;

use image::DynamicImage;
use serde::{Deserialize, Deserializer};

/// Identifier type shared by every Kask record.
pub type RecordId = i64;

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A decoded image attached to a beer or brewery.
///
/// Cloning shares the underlying pixels.
#[derive(Clone)]
pub struct Artwork(Arc<DynamicImage>);

impl Artwork {
    /// Wrap an already decoded image.
    pub fn new(image: DynamicImage) -> Self {
        Self(Arc::new(image))
    }

    /// Decode an image from raw bytes, guessing the format from its header.
    pub fn from_bytes(bytes: &[u8]) -> std::result::Result<Self, image::ImageError> {
        image::load_from_memory(bytes).map(Self::new)
    }

    /// Borrow the decoded image.
    pub fn image(&self) -> &DynamicImage {
        &self.0
    }

    /// Pixel dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.0.width(), self.0.height())
    }
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (width, height) = self.dimensions();
        f.debug_struct("Artwork")
            .field("width", &width)
            .field("height", &height)
            .finish()
    }
}

/// A physical dispensing point.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tap {
    #[serde(rename = "TapId", deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(rename = "TapName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "Description", deserialize_with = "null_as_default")]
    pub description: String,
}

/// Beer style metadata.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Style {
    #[serde(rename = "StyleId", deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(rename = "StyleName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "StyleDescription", deserialize_with = "null_as_default")]
    pub description: String,
}

/// The brewery that made a beer.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Brewery {
    #[serde(rename = "BreweryId", deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(rename = "BreweryName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "BreweryDescription", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Image", deserialize_with = "null_as_default")]
    pub image_url: String,
    #[serde(rename = "Website", deserialize_with = "null_as_default")]
    pub website: String,
    /// Brewery logo, fetched best-effort after decoding.
    #[serde(skip)]
    pub image: Option<Artwork>,
}

/// A beer, owning its brewery and style.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Beer {
    #[serde(rename = "BeerId", deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(rename = "BeerName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "BeerDescription", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "ABV", deserialize_with = "null_as_default")]
    pub abv: f64,
    #[serde(rename = "LabelUrl", deserialize_with = "null_as_default")]
    pub label_url: String,
    #[serde(rename = "Brewery", deserialize_with = "null_as_default")]
    pub brewery: Brewery,
    #[serde(rename = "Style", deserialize_with = "null_as_default")]
    pub style: Style,
    /// Label artwork, fetched best-effort after decoding.
    #[serde(skip)]
    pub image: Option<Artwork>,
}

/// A keg of beer connected to a tap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Keg {
    #[serde(rename = "KegId", deserialize_with = "null_as_default")]
    pub id: RecordId,
    #[serde(rename = "Size", deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(rename = "InitialVolume", deserialize_with = "null_as_default")]
    pub initial_volume: f64,
    #[serde(rename = "RemovedVolume", deserialize_with = "null_as_default")]
    pub removed_volume: f64,
    #[serde(rename = "TapId", deserialize_with = "null_as_default")]
    pub tap_id: RecordId,
    #[serde(rename = "Beer", deserialize_with = "null_as_default")]
    pub beer: Beer,
    /// The tap this keg was fetched for. Not part of the API payload.
    #[serde(skip)]
    pub tap: Tap,
}

impl Keg {
    /// Fraction of the keg already poured.
    ///
    /// Not clamped: a keg reporting more removed than initial volume yields a
    /// value above 1. A keg with no initial volume counts as fully poured.
    pub fn removed_fraction(&self) -> f64 {
        if self.initial_volume <= 0.0 {
            return 1.0;
        }
        self.removed_volume / self.initial_volume
    }

    /// Fraction of the keg still left, `1 - removed_fraction()`.
    pub fn remaining_fraction(&self) -> f64 {
        1.0 - self.removed_fraction()
    }
}

/// The keg-contents response for one tap.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KegOnTap {
    #[serde(rename = "Active", deserialize_with = "null_as_default")]
    pub active: i64,
    #[serde(rename = "NetVote", deserialize_with = "null_as_default")]
    pub net_vote: i64,
    #[serde(rename = "UserVote", deserialize_with = "null_as_default")]
    pub user_vote: i64,
    #[serde(rename = "Keg", deserialize_with = "null_as_default")]
    pub keg: Keg,
}

impl KegOnTap {
    /// Returns true if the keg is currently pouring and should be displayed.
    pub fn is_active(&self) -> bool {
        self.active != 0
    }

    /// Net vote with an explicit `+` for positive ratings.
    pub fn rating_label(&self) -> String {
        if self.net_vote > 0 {
            format!("+{}", self.net_vote)
        } else {
            self.net_vote.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEG_JSON: &str = r#"{
        "Active": 1,
        "NetVote": 4,
        "UserVote": 0,
        "Keg": {
            "KegId": 42,
            "Size": "1/2",
            "InitialVolume": 15.5,
            "RemovedVolume": 3.1,
            "TapId": 2,
            "Beer": {
                "BeerId": 7,
                "BeerName": "Boulevard Wheat",
                "BeerDescription": "Unfiltered wheat beer",
                "ABV": 4.4,
                "LabelUrl": "http://example.com/label.png",
                "Brewery": {
                    "BreweryId": 3,
                    "BreweryName": "Boulevard",
                    "BreweryDescription": "Kansas City",
                    "Image": "http://example.com/brewery.png",
                    "Website": "https://www.boulevard.com"
                },
                "Style": {
                    "StyleId": 9,
                    "StyleName": "American Wheat",
                    "StyleDescription": null
                }
            }
        }
    }"#;

    #[test]
    fn test_decode_keg_on_tap() {
        let k: KegOnTap = serde_json::from_str(KEG_JSON).unwrap();
        assert!(k.is_active());
        assert_eq!(k.keg.id, 42);
        assert_eq!(k.keg.beer.name, "Boulevard Wheat");
        assert_eq!(k.keg.beer.abv, 4.4);
        assert_eq!(k.keg.beer.brewery.image_url, "http://example.com/brewery.png");
        assert_eq!(k.keg.beer.style.name, "American Wheat");
        assert_eq!(k.keg.beer.style.description, "");
        assert!(k.keg.beer.image.is_none());
        assert_eq!(k.keg.tap, Tap::default());
    }

    #[test]
    fn test_decode_tolerates_missing_fields() {
        let k: KegOnTap = serde_json::from_str(r#"{"Active": 0, "Keg": null}"#).unwrap();
        assert!(!k.is_active());
        assert_eq!(k.keg.id, 0);
        assert_eq!(k.keg.beer.name, "");
    }

    #[test]
    fn test_decode_taps() {
        let taps: Vec<Tap> = serde_json::from_str(
            r#"[{"TapId": 1, "TapName": "Left", "Description": "By the window"},
                {"TapId": 2, "TapName": "Right"}]"#,
        )
        .unwrap();
        assert_eq!(taps.len(), 2);
        assert_eq!(taps[0].description, "By the window");
        assert_eq!(taps[1].id, 2);
        assert_eq!(taps[1].description, "");
    }

    #[test]
    fn test_fill_fractions() {
        let keg = Keg {
            initial_volume: 10.0,
            removed_volume: 2.5,
            ..Default::default()
        };
        assert_eq!(keg.removed_fraction(), 0.25);
        assert_eq!(keg.remaining_fraction(), 0.75);

        let empty = Keg::default();
        assert_eq!(empty.remaining_fraction(), 0.0);
    }

    #[test]
    fn test_rating_label() {
        let mut k = KegOnTap {
            net_vote: 3,
            ..Default::default()
        };
        assert_eq!(k.rating_label(), "+3");
        k.net_vote = 0;
        assert_eq!(k.rating_label(), "0");
        k.net_vote = -2;
        assert_eq!(k.rating_label(), "-2");
    }

    #[test]
    fn test_artwork_debug_shows_dimensions() {
        let art = Artwork::new(DynamicImage::new_rgb8(4, 3));
        assert_eq!(art.dimensions(), (4, 3));
        assert_eq!(format!("{art:?}"), "Artwork { width: 4, height: 3 }");
        assert!(Artwork::from_bytes(b"not an image").is_err());
    }
}
