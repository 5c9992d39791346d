use crate::config::Endpoint;
use crate::errors::LoadError;
use crate::models::{Film, FilmsPayload};
use tokio::fs;
use tracing::{info, warn};

/// Issues the one read of the session and parses the film list. No retry.
pub async fn load_films(client: &reqwest::Client, endpoint: &Endpoint) -> Result<Vec<Film>, LoadError> {
    let bytes = match endpoint {
        Endpoint::Http(url) => {
            let response = client
                .get(url.clone())
                .send()
                .await
                .map_err(|source| LoadError::Request {
                    url: url.to_string(),
                    source,
                })?;
            if !response.status().is_success() {
                return Err(LoadError::Status {
                    url: url.to_string(),
                    status: response.status(),
                });
            }
            let body = response.bytes().await.map_err(|source| LoadError::Request {
                url: url.to_string(),
                source,
            })?;
            body.to_vec()
        }
        Endpoint::File(path) => fs::read(path).await.map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?,
    };

    let films = parse_films(&bytes)?;
    info!(count = films.len(), "loaded films");
    Ok(films)
}

pub fn parse_films(bytes: &[u8]) -> Result<Vec<Film>, LoadError> {
    let films = serde_json::from_slice::<FilmsPayload>(bytes)?.into_films();
    for film in films.iter().filter(|film| film.tickets_sold > film.capacity) {
        warn!(
            film_id = %film.id,
            capacity = film.capacity,
            tickets_sold = film.tickets_sold,
            "film is oversold, treating as sold out"
        );
    }
    Ok(films)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("film_tickets_{}_{name}", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn loads_wrapped_list_from_static_file() {
        let path = temp_file(
            "wrapped.json",
            r#"{"films":[{"id":1,"title":"A","capacity":3,"tickets_sold":1},
                          {"id":2,"title":"B","capacity":4,"tickets_sold":4}]}"#,
        );
        let films = load_films(&reqwest::Client::new(), &Endpoint::File(path.clone()))
            .await
            .unwrap();
        let _ = std::fs::remove_file(path);
        assert_eq!(films.len(), 2);
        assert_eq!(films[1].title, "B");
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let endpoint = Endpoint::File(PathBuf::from("/definitely/not/here/db.json"));
        let err = load_films(&reqwest::Client::new(), &endpoint).await.unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn unparsable_body_is_parse_error() {
        assert!(matches!(parse_films(b"<html>"), Err(LoadError::Parse(_))));
        assert!(matches!(parse_films(br#"{"movies":[]}"#), Err(LoadError::Parse(_))));
    }
}
