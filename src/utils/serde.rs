use serde::{Deserialize, Deserializer};

/// Distinguishes a missing key from an explicit `null`.
///
/// With `#[serde(default, deserialize_with = "deserialize_present")]` a
/// missing key stays `None` while `"field": null` becomes `Some(None)`.
/// Question creation validates key presence, not value nullness.
pub fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// An `i32` that also accepts a numeric JSON string.
///
/// The trivia frontend historically sent the category reference as either
/// a number or a string, so conversion to a plain integer happens once
/// here at the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LenientI32(pub i32);

impl<'de> Deserialize<'de> for LenientI32 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum NumberOrString {
            Number(i32),
            String(String),
        }

        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(LenientI32(n)),
            NumberOrString::String(s) => s
                .parse::<i32>()
                .map(LenientI32)
                .map_err(serde::de::Error::custom),
        }
    }
}
