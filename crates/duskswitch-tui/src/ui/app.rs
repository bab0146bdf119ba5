use super::view::{hit, render_view};
use crate::events::{AppEvent, EventHandler};
use anyhow::Result;
use duskswitch_core::{presentation, Subscription, Theme, ThemeStore};
use ratatui::prelude::{Backend, Rect, Terminal};
use std::cell::Cell;
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Running,
    Quitting,
}

pub struct App {
    state: AppState,
    store: ThemeStore,
    /// Set by the store observer, cleared after each draw
    dirty: Rc<Cell<bool>>,
    _redraw: Subscription,
    button_area: Option<Rect>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        let mut store = ThemeStore::new();
        let dirty = Rc::new(Cell::new(true));

        let flag = Rc::clone(&dirty);
        let redraw = store.subscribe(move |theme| {
            debug!(%theme, "view invalidated");
            flag.set(true);
        });

        Self {
            state: AppState::Running,
            store,
            dirty,
            _redraw: redraw,
            button_area: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.store.current()
    }

    pub fn should_quit(&self) -> bool {
        self.state == AppState::Quitting
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &EventHandler,
    ) -> Result<()> {
        info!(theme = %self.theme(), "duskswitch started");
        while !self.should_quit() {
            if self.needs_redraw() {
                self.draw(terminal)?;
            }
            let event = events.next_event()?;
            self.handle_event(event);
        }
        info!(theme = %self.theme(), "duskswitch stopped");
        Ok(())
    }

    /// Re-derive the presentation from the store and draw it
    pub fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let presentation = presentation::render(self.store.current());
        let mut button_area = None;
        terminal.draw(|frame| {
            let area = frame.size();
            button_area = Some(render_view(frame, area, &presentation));
        })?;
        self.button_area = button_area;
        self.dirty.set(false);
        Ok(())
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit | AppEvent::ForceQuit => self.state = AppState::Quitting,
            AppEvent::Activate => self.activate(),
            AppEvent::Click { column, row } => {
                if self.button_area.is_some_and(|area| hit(area, column, row)) {
                    self.activate();
                }
            }
            AppEvent::Resize(width, height) => {
                debug!(width, height, "terminal resized");
                self.dirty.set(true);
            }
            AppEvent::None => {}
        }
    }

    fn activate(&mut self) {
        self.store.toggle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, style::Color};

    fn terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(40, 12)).unwrap()
    }

    fn screen(buffer: &Buffer) -> String {
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_starts_light_and_dirty() {
        let app = App::new();
        assert_eq!(app.theme(), Theme::Light);
        assert!(app.needs_redraw());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_initial_screen() {
        let mut app = App::new();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        let buffer = terminal.backend().buffer();
        let text = screen(buffer);
        assert!(text.contains("Light Mode"));
        assert!(text.contains("Switch to Dark Mode"));
        assert_eq!(buffer.get(0, 0).bg, Color::Rgb(0xff, 0xff, 0xff));
        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_activation_switches_to_dark() {
        let mut app = App::new();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        app.handle_event(AppEvent::Activate);
        assert_eq!(app.theme(), Theme::Dark);
        assert!(app.needs_redraw());

        app.draw(&mut terminal).unwrap();
        let buffer = terminal.backend().buffer();
        let text = screen(buffer);
        assert!(text.contains("Dark Mode"));
        assert!(text.contains("Switch to Light Mode"));
        assert_eq!(buffer.get(0, 0).bg, Color::Rgb(0x33, 0x33, 0x33));
        assert_eq!(buffer.get(0, 0).fg, Color::Rgb(0xff, 0xff, 0xff));
    }

    #[test]
    fn test_two_activations_restore_screen() {
        let mut app = App::new();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();
        let original = terminal.backend().buffer().clone();

        app.handle_event(AppEvent::Activate);
        app.draw(&mut terminal).unwrap();
        assert_ne!(*terminal.backend().buffer(), original);

        app.handle_event(AppEvent::Activate);
        app.draw(&mut terminal).unwrap();
        assert_eq!(app.theme(), Theme::Light);
        assert_eq!(*terminal.backend().buffer(), original);
    }

    #[test]
    fn test_click_on_button_toggles() {
        let mut app = App::new();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        let button = app.button_area.expect("button drawn");
        app.handle_event(AppEvent::Click {
            column: button.x + button.width / 2,
            row: button.y + 1,
        });
        assert_eq!(app.theme(), Theme::Dark);
    }

    #[test]
    fn test_click_outside_button_ignored() {
        let mut app = App::new();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        app.handle_event(AppEvent::Click { column: 0, row: 0 });
        assert_eq!(app.theme(), Theme::Light);
        assert!(!app.needs_redraw());
    }

    #[test]
    fn test_click_before_first_draw_ignored() {
        let mut app = App::new();
        app.handle_event(AppEvent::Click { column: 20, row: 6 });
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_resize_requests_redraw() {
        let mut app = App::new();
        let mut terminal = terminal();
        app.draw(&mut terminal).unwrap();

        app.handle_event(AppEvent::Resize(80, 24));
        assert!(app.needs_redraw());
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn test_quit_events() {
        for event in [AppEvent::Quit, AppEvent::ForceQuit] {
            let mut app = App::new();
            app.handle_event(event);
            assert!(app.should_quit());
        }
    }
}
