use crate::models::{Film, FilmId};

/// In-memory owner of the film collection loaded at startup.
#[derive(Debug, Default, Clone)]
pub struct FilmRepository {
    films: Vec<Film>,
}

impl FilmRepository {
    pub fn new(films: Vec<Film>) -> Self {
        Self { films }
    }

    pub fn all(&self) -> &[Film] {
        &self.films
    }

    pub fn first(&self) -> Option<&Film> {
        self.films.first()
    }

    pub fn get(&self, id: &FilmId) -> Option<&Film> {
        self.films.iter().find(|film| &film.id == id)
    }

    /// Sells one seat. Returns the updated record, or `None` when the film is
    /// unknown or has no seats left.
    pub fn record_purchase(&mut self, id: &FilmId) -> Option<Film> {
        let film = self.films.iter_mut().find(|film| &film.id == id)?;
        if film.is_sold_out() {
            return None;
        }
        film.tickets_sold += 1;
        Some(film.clone())
    }

    pub fn remove(&mut self, id: &FilmId) -> Option<Film> {
        let index = self.films.iter().position(|film| &film.id == id)?;
        Some(self.films.remove(index))
    }
}
