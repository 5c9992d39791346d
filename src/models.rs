use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a film in the remote store. Stores keep ids either as JSON
/// numbers or strings, so both are accepted and normalized to text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FilmId(String);

impl FilmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for FilmId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for FilmId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(u64),
            Text(String),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Number(n) => Self(n.to_string()),
            Raw::Text(s) => Self(s),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Film {
    pub id: FilmId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub runtime: u32,
    #[serde(deserialize_with = "lenient_u32")]
    pub capacity: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub tickets_sold: u32,
    #[serde(default)]
    pub showtime: String,
    #[serde(default)]
    pub poster: String,
}

impl Film {
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.tickets_sold)
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining() == 0
    }
}

/// Body of the read endpoint: a bare list or `{ "films": [...] }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FilmsPayload {
    List(Vec<Film>),
    Wrapped { films: Vec<Film> },
}

impl FilmsPayload {
    pub fn into_films(self) -> Vec<Film> {
        match self {
            FilmsPayload::List(films) | FilmsPayload::Wrapped { films } => films,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketsSoldPatch {
    pub tickets_sold: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DetailView {
    pub id: FilmId,
    pub title: String,
    pub runtime: String,
    pub description: String,
    pub showtime: String,
    pub tickets: String,
    pub poster: String,
    pub remaining: u32,
    pub button_label: &'static str,
    pub button_disabled: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MenuRow {
    pub id: FilmId,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub detail: Option<DetailView>,
    pub menu: Vec<MenuRow>,
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got {s:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_accepts_bare_list() {
        let body = r#"[{"id":1,"title":"Alpha","capacity":10,"tickets_sold":3,"runtime":90}]"#;
        let films = serde_json::from_str::<FilmsPayload>(body).unwrap().into_films();
        assert_eq!(films.len(), 1);
        assert_eq!(films[0].id, FilmId::from(1));
        assert_eq!(films[0].remaining(), 7);
    }

    #[test]
    fn payload_accepts_wrapped_list_with_string_fields() {
        let body = r#"{"films":[{"id":"1","title":"The Giant Gila Monster","runtime":"108",
            "capacity":30,"showtime":"04:00PM","tickets_sold":27,
            "description":"A giant lizard terrorizes a rural Texas community.",
            "poster":"https://example.com/gila.jpg"}]}"#;
        let films = serde_json::from_str::<FilmsPayload>(body).unwrap().into_films();
        assert_eq!(films[0].id.as_str(), "1");
        assert_eq!(films[0].runtime, 108);
        assert_eq!(films[0].showtime, "04:00PM");
    }

    #[test]
    fn payload_rejects_non_numeric_capacity() {
        let body = r#"[{"id":1,"capacity":"lots","tickets_sold":0}]"#;
        assert!(serde_json::from_str::<FilmsPayload>(body).is_err());
    }

    #[test]
    fn oversold_film_saturates_to_sold_out() {
        let body = r#"[{"id":9,"capacity":2,"tickets_sold":5}]"#;
        let films = serde_json::from_str::<FilmsPayload>(body).unwrap().into_films();
        assert_eq!(films[0].remaining(), 0);
        assert!(films[0].is_sold_out());
    }
}
