//! Comic data types.
//!
//! [`ComicResponse`] is the JSON document served by the archive,
//! [`Comic`] is the normalized record handed to callers.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifies which comic to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComicId {
    /// The most recent comic.
    Latest,

    /// A specific comic number. Used verbatim in the request path.
    Number(i64),
}

impl From<i64> for ComicId {
    /// `0` is the archive's number for the latest comic.
    fn from(n: i64) -> Self {
        if n == 0 {
            ComicId::Latest
        } else {
            ComicId::Number(n)
        }
    }
}

impl fmt::Display for ComicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComicId::Latest => f.write_str("latest"),
            ComicId::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Comic metadata as served by `info.0.json`.
///
/// Fields like `link`, `news`, `transcript` and `safe_title` are ignored.
/// Missing or `null` fields decode as zero values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ComicResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub num: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub img: String,
    #[serde(deserialize_with = "null_as_default")]
    pub alt: String,
    #[serde(deserialize_with = "null_as_default")]
    pub year: String,
    #[serde(deserialize_with = "null_as_default")]
    pub month: String,
    #[serde(deserialize_with = "null_as_default")]
    pub day: String,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ComicResponse {
    /// Converts the wire shape into a [`Comic`].
    pub fn into_comic(self) -> Comic {
        // day-month-year, exactly as the parts arrive
        let date = format!("{}-{}-{}", self.day, self.month, self.year);

        Comic {
            number: self.num,
            title: self.title,
            description: self.alt,
            image: self.img,
            date,
        }
    }
}

impl From<ComicResponse> for Comic {
    fn from(response: ComicResponse) -> Self {
        response.into_comic()
    }
}

/// A single comic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Comic {
    /// Comic number.
    pub number: i64,

    /// Comic title.
    pub title: String,

    /// Alt text.
    pub description: String,

    /// URL of the comic image.
    pub image: String,

    /// Publication date as `day-month-year`.
    pub date: String,
}
