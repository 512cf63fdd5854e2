// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Event routing for the search view.
//!
//! While the query input has focus every key is fed to it, apart from
//! `Enter` (submit) and `Esc` (leave the input). Otherwise keys navigate the
//! results table or act on the selected result.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{SearchAction, SearchView},
    model::search::Search,
};

impl SearchView {
    pub(crate) fn process_event(&mut self, event: &Event, search: &Search) -> Option<SearchAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if self.editing {
            return match key_event.code {
                KeyCode::Esc => {
                    self.editing = false;
                    None
                }

                KeyCode::Enter => {
                    let query = self.input.value().trim().to_string();
                    if !query.is_empty() {
                        self.editing = false;
                    }
                    Some(SearchAction::Submit(query))
                }

                _ => {
                    self.input.handle_event(event);
                    None
                }
            };
        }

        let len = search.results().len();
        if self.album_table.process_navigation(event, len) {
            return None;
        }

        match key_event.code {
            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.editing = true;
                None
            }

            KeyCode::Char('n') if search.has_more() => Some(SearchAction::LoadMore),

            KeyCode::Char('a') => self.album_table.selected(len).map(SearchAction::AddToLibrary),

            KeyCode::Enter => self.album_table.selected(len).map(SearchAction::ShowDetails),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::{AlbumRecord, search::SearchPage};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(view: &mut SearchView, search: &Search, text: &str) {
        for c in text.chars() {
            assert_eq!(view.process_event(&key(KeyCode::Char(c)), search), None);
        }
    }

    fn search_with_results(count: usize, has_more: bool) -> Search {
        let mut search = Search::new();
        search.start("low");
        search.append_page(SearchPage {
            albums: (0..count)
                .map(|i| AlbumRecord {
                    id: i.to_string(),
                    ..AlbumRecord::default()
                })
                .collect(),
            total: 20,
            has_more,
            next_offset: count as u32,
        });
        search
    }

    #[test]
    fn typing_then_enter_submits_trimmed_query() {
        let mut view = SearchView::new();
        let search = Search::new();

        type_text(&mut view, &search, " low ");
        let action = view.process_event(&key(KeyCode::Enter), &search);

        assert_eq!(action, Some(SearchAction::Submit("low".to_string())));
        assert!(!view.is_editing());
    }

    #[test]
    fn empty_query_keeps_editing() {
        let mut view = SearchView::new();
        let search = Search::new();

        let action = view.process_event(&key(KeyCode::Enter), &search);

        assert_eq!(action, Some(SearchAction::Submit(String::new())));
        assert!(view.is_editing());
    }

    #[test]
    fn keys_act_on_selected_result() {
        let mut view = SearchView::new();
        let search = search_with_results(3, true);
        view.process_event(&key(KeyCode::Esc), &search);

        // Nothing selected yet
        assert_eq!(view.process_event(&key(KeyCode::Char('a')), &search), None);

        view.process_event(&key(KeyCode::Char('j')), &search);
        view.process_event(&key(KeyCode::Char('j')), &search);

        assert_eq!(
            view.process_event(&key(KeyCode::Char('a')), &search),
            Some(SearchAction::AddToLibrary(1))
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Enter), &search),
            Some(SearchAction::ShowDetails(1))
        );
        assert_eq!(
            view.process_event(&key(KeyCode::Char('n')), &search),
            Some(SearchAction::LoadMore)
        );
    }

    #[test]
    fn load_more_needs_more_results() {
        let mut view = SearchView::new();
        let search = search_with_results(3, false);
        view.process_event(&key(KeyCode::Esc), &search);

        assert_eq!(view.process_event(&key(KeyCode::Char('n')), &search), None);
    }

    #[test]
    fn slash_returns_to_the_input() {
        let mut view = SearchView::new();
        let search = Search::new();
        view.process_event(&key(KeyCode::Esc), &search);
        assert!(!view.is_editing());

        view.process_event(&key(KeyCode::Char('/')), &search);

        assert!(view.is_editing());
    }
}
