use crate::models::{DetailView, Film, FilmId, MenuRow, ViewSnapshot};
use crate::remote::{RemoteWriter, WriteRequest};
use crate::repository::FilmRepository;
use std::sync::Arc;
use tracing::{debug, info};

pub const BUY_LABEL: &str = "Buy Ticket";
pub const SOLD_OUT_LABEL: &str = "Sold Out";

/// Drives the widget: the repository owns the films, the controller only
/// tracks which film is shown and which menu rows are still on screen.
pub struct ViewController {
    films: FilmRepository,
    writer: Arc<dyn RemoteWriter>,
    selected: Option<FilmId>,
    menu: Vec<FilmId>,
}

impl ViewController {
    pub fn new(writer: Arc<dyn RemoteWriter>) -> Self {
        Self {
            films: FilmRepository::default(),
            writer,
            selected: None,
            menu: Vec::new(),
        }
    }

    /// Initial render after the loader succeeds: first film in the detail
    /// panel, every film in the menu.
    pub fn load(&mut self, films: Vec<Film>) {
        self.films = FilmRepository::new(films);
        self.selected = self.films.first().map(|film| film.id.clone());
        self.menu = self.films.all().iter().map(|film| film.id.clone()).collect();
        info!(films = self.menu.len(), "rendered initial view");
    }

    #[cfg(test)]
    pub fn films(&self) -> &FilmRepository {
        &self.films
    }

    pub fn detail(&self) -> Option<DetailView> {
        let film = self.films.get(self.selected.as_ref()?)?;
        Some(render_detail(film))
    }

    pub fn menu(&self) -> Vec<MenuRow> {
        self.menu
            .iter()
            .filter_map(|id| self.films.get(id))
            .map(|film| MenuRow {
                id: film.id.clone(),
                title: film.title.clone(),
            })
            .collect()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            detail: self.detail(),
            menu: self.menu(),
        }
    }

    /// Shows a film in the detail panel. Films whose row was deleted can
    /// still be selected; the collection is never pruned.
    pub fn select(&mut self, id: &FilmId) -> Option<DetailView> {
        let view = render_detail(self.films.get(id)?);
        self.selected = Some(id.clone());
        debug!(film_id = %id, "selected film");
        Some(view)
    }

    /// Sells one ticket for the film in the detail panel. Returns whether a
    /// ticket was sold; a sold-out film or an empty panel is a no-op.
    pub fn purchase(&mut self) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        let Some(film) = self.films.record_purchase(&id) else {
            debug!(film_id = %id, "purchase ignored, sold out");
            return false;
        };

        info!(film_id = %id, tickets_sold = film.tickets_sold, "ticket purchased");
        self.writer.submit(WriteRequest::PatchTicketsSold {
            id: id.clone(),
            tickets_sold: film.tickets_sold,
        });
        self.writer.submit(WriteRequest::Purchase { id });
        true
    }

    /// Drops the film's menu row and asks the store to delete it. Returns
    /// false when no such row is displayed.
    pub fn delete(&mut self, id: &FilmId) -> bool {
        let Some(index) = self.menu.iter().position(|row| row == id) else {
            return false;
        };
        self.menu.remove(index);
        info!(film_id = %id, "removed film from menu");
        self.writer.submit(WriteRequest::Delete { id: id.clone() });
        true
    }
}

pub fn render_detail(film: &Film) -> DetailView {
    let remaining = film.remaining();
    let sold_out = remaining == 0;
    DetailView {
        id: film.id.clone(),
        title: film.title.clone(),
        runtime: format!("{} minutes", film.runtime),
        description: film.description.clone(),
        showtime: film.showtime.clone(),
        tickets: format!("{remaining} remaining tickets"),
        poster: film.poster.clone(),
        remaining,
        button_label: if sold_out { SOLD_OUT_LABEL } else { BUY_LABEL },
        button_disabled: sold_out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::recording::RecordingWriter;

    fn film(id: u64, capacity: u32, tickets_sold: u32) -> Film {
        Film {
            id: FilmId::from(id),
            title: format!("Film {id}"),
            description: format!("About film {id}"),
            runtime: 95,
            capacity,
            tickets_sold,
            showtime: "04:00PM".into(),
            poster: format!("https://example.com/{id}.jpg"),
        }
    }

    fn controller(films: Vec<Film>) -> (ViewController, RecordingWriter) {
        let writer = RecordingWriter::default();
        let mut controller = ViewController::new(Arc::new(writer.clone()));
        controller.load(films);
        (controller, writer)
    }

    #[test]
    fn sold_out_film_renders_disabled_control() {
        let (controller, _) = controller(vec![film(1, 10, 10)]);
        let detail = controller.detail().unwrap();
        assert_eq!(detail.button_label, "Sold Out");
        assert!(detail.button_disabled);
        assert_eq!(detail.tickets, "0 remaining tickets");
    }

    #[test]
    fn last_ticket_purchase_sells_out_and_issues_both_writes() {
        let (mut controller, writer) = controller(vec![film(2, 5, 4)]);
        let before = controller.detail().unwrap();
        assert_eq!(before.tickets, "1 remaining tickets");
        assert_eq!(before.button_label, "Buy Ticket");
        assert!(!before.button_disabled);

        assert!(controller.purchase());

        let after = controller.detail().unwrap();
        assert_eq!(after.tickets, "0 remaining tickets");
        assert!(after.button_disabled);
        assert_eq!(
            writer.taken(),
            vec![
                WriteRequest::PatchTicketsSold { id: FilmId::from(2), tickets_sold: 5 },
                WriteRequest::Purchase { id: FilmId::from(2) },
            ]
        );
    }

    #[test]
    fn purchase_when_sold_out_is_a_no_op() {
        let (mut controller, writer) = controller(vec![film(1, 3, 3)]);
        assert!(!controller.purchase());
        assert_eq!(controller.films().get(&FilmId::from(1)).unwrap().tickets_sold, 3);
        assert!(writer.taken().is_empty());
    }

    #[test]
    fn purchase_increments_by_exactly_one() {
        let (mut controller, writer) = controller(vec![film(1, 10, 2)]);
        assert!(controller.purchase());
        assert_eq!(controller.detail().unwrap().remaining, 7);
        assert_eq!(controller.films().get(&FilmId::from(1)).unwrap().tickets_sold, 3);
        assert_eq!(writer.taken().len(), 2);
    }

    #[test]
    fn purchase_without_loaded_films_does_nothing() {
        let (mut controller, writer) = controller(Vec::new());
        assert!(controller.detail().is_none());
        assert!(!controller.purchase());
        assert!(writer.taken().is_empty());
    }

    #[test]
    fn select_rerenders_detail_without_writes() {
        let (mut controller, writer) = controller(vec![film(1, 10, 0), film(2, 4, 4)]);
        assert_eq!(controller.detail().unwrap().id, FilmId::from(1));

        let view = controller.select(&FilmId::from(2)).unwrap();
        assert_eq!(view.title, "Film 2");
        assert_eq!(controller.detail().unwrap(), view);
        assert!(controller.select(&FilmId::from(99)).is_none());
        assert!(writer.taken().is_empty());
    }

    #[test]
    fn purchase_applies_to_selected_film() {
        let (mut controller, writer) = controller(vec![film(1, 10, 0), film(2, 4, 1)]);
        controller.select(&FilmId::from(2));
        assert!(controller.purchase());
        assert_eq!(controller.films().get(&FilmId::from(1)).unwrap().tickets_sold, 0);
        assert_eq!(controller.films().get(&FilmId::from(2)).unwrap().tickets_sold, 2);
        assert_eq!(writer.taken()[0].film_id(), &FilmId::from(2));
    }

    #[test]
    fn delete_removes_row_and_issues_one_delete() {
        let (mut controller, writer) = controller(vec![film(1, 1, 0), film(2, 1, 0)]);
        assert!(controller.delete(&FilmId::from(1)));
        assert!(!controller.delete(&FilmId::from(1)));

        let ids: Vec<_> = controller.menu().into_iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![FilmId::from(2)]);
        assert_eq!(writer.taken(), vec![WriteRequest::Delete { id: FilmId::from(1) }]);
    }

    #[test]
    fn deleted_film_stays_in_collection_and_selectable() {
        let (mut controller, _) = controller(vec![film(1, 5, 0), film(2, 5, 0)]);
        controller.delete(&FilmId::from(1));

        // Still shown in the detail panel since it was selected.
        assert_eq!(controller.detail().unwrap().id, FilmId::from(1));
        assert_eq!(controller.films().all().len(), 2);
        controller.select(&FilmId::from(2));
        assert!(controller.select(&FilmId::from(1)).is_some());
    }
}
