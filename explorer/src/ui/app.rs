//! The root UI type.

use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;

use tui::backend::Backend;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::widgets::Widget;
use tui::Frame;

use crate::dex::Dex;
use crate::ui::catalog::CatalogView;
use crate::ui::component::Command;
use crate::ui::component::CommandBuffer;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;
use crate::ui::detail::DetailView;

/// The root app type: a history of views, the catalog at the bottom.
pub struct App {
  history: Vec<Box<dyn Component>>,
  style_sheet: StyleSheet,
  frame_number: usize,
  done: bool,
}

impl App {
  /// Creates a new app showing the catalog.
  pub fn new() -> Self {
    Self {
      history: vec![Box::new(CatalogView::new())],
      style_sheet: StyleSheet::default(),
      frame_number: 0,
      done: false,
    }
  }

  /// Returns whether the user asked to exit.
  pub fn is_done(&self) -> bool {
    self.done
  }

  /// Propagates a terminal event down to the topmost view.
  ///
  /// Ctrl-C is intercepted and ends the app no matter what is showing.
  pub fn process_event(&mut self, e: crossterm::event::Event, dex: &Dex) {
    let key = match e {
      crossterm::event::Event::Key(k) => k,
      _ => return,
    };
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL
    {
      self.done = true;
      return;
    }

    let view = match self.history.last_mut() {
      Some(view) => view,
      None => return,
    };
    let mut commands = CommandBuffer::new();
    view.process_event(&mut EventArgs {
      event: &Event::Key(key),
      dex,
      commands: &mut commands,
    });

    match commands.take_command() {
      Some(Command::Open(entry)) => {
        log::debug!("opening {}", entry.name);
        self.history.push(Box::new(DetailView::new(entry)));
      }
      Some(Command::Back) => {
        if self.history.len() > 1 {
          self.history.pop();
        }
      }
      Some(Command::Quit) => self.done = true,
      None => {}
    }
  }

  /// Renders the topmost view into `buf`.
  pub fn render_to(&mut self, dex: &Dex, rect: Rect, buf: &mut Buffer) {
    if let Some(view) = self.history.last_mut() {
      view.render(&mut RenderArgs {
        dex,
        rect,
        output: buf,
        frame_number: self.frame_number,
        style_sheet: &self.style_sheet,
      });
    }
    self.frame_number = self.frame_number.wrapping_add(1);
  }

  /// Renders the UI onto a `Frame`.
  pub fn render<B: Backend>(&mut self, dex: &Dex, f: &mut Frame<B>) {
    struct AppAsWidget<'a> {
      app: &'a mut App,
      dex: &'a Dex,
    }
    impl Widget for AppAsWidget<'_> {
      fn render(self, rect: Rect, buf: &mut Buffer) {
        self.app.render_to(self.dex, rect, buf)
      }
    }

    let size = f.size();
    f.render_widget(AppAsWidget { app: self, dex }, size);
  }
}

#[cfg(test)]
mod tests {
  use crossterm::event::KeyEvent;

  use crate::dex::testing::*;
  use crate::ui::testing::shows;

  use super::*;

  fn send(app: &mut App, dex: &Dex, code: KeyCode, modifiers: KeyModifiers) {
    app.process_event(
      crossterm::event::Event::Key(KeyEvent { code, modifiers }),
      dex,
    );
  }

  fn press(app: &mut App, dex: &Dex, code: KeyCode) {
    send(app, dex, code, KeyModifiers::NONE)
  }

  fn draw(app: &mut App, dex: &Dex) -> Vec<String> {
    let rect = Rect::new(0, 0, 80, 30);
    let mut buf = Buffer::empty(rect);
    app.render_to(dex, rect, &mut buf);
    (0..rect.height)
      .map(|y| {
        (0..rect.width)
          .map(|x| buf.get(x, y).symbol.as_str())
          .collect::<String>()
      })
      .collect()
  }

  #[test]
  fn ctrl_c_quits_anywhere() {
    let dex = dex();
    settle(|| dex.entries());

    let mut app = App::new();
    press(&mut app, &dex, KeyCode::Enter);
    assert_eq!(app.history.len(), 2);
    send(&mut app, &dex, KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert!(app.is_done());
  }

  #[test]
  fn open_and_go_back() {
    let dex = dex();
    settle(|| dex.entries());

    let mut app = App::new();
    for c in "char".chars() {
      press(&mut app, &dex, KeyCode::Char(c));
    }
    press(&mut app, &dex, KeyCode::Enter);
    assert_eq!(app.history.len(), 2);
    assert!(shows(&draw(&mut app, &dex), "Charmander #0004"));

    press(&mut app, &dex, KeyCode::Backspace);
    assert_eq!(app.history.len(), 1);

    // The catalog keeps its query.
    let lines = draw(&mut app, &dex);
    assert!(shows(&lines, "Search: char"), "{:#?}", lines);
    assert!(!app.is_done());
  }

  #[test]
  fn escape_at_root_quits() {
    let dex = dex();
    let mut app = App::new();
    press(&mut app, &dex, KeyCode::Esc);
    assert!(app.is_done());
  }
}
