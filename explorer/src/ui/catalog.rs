//! The searchable catalog list.

use crossterm::event::KeyCode;
use crossterm::event::KeyModifiers;

use pkcat::catalog;
use pkcat::catalog::CatalogEntry;
use pkcat::display;

use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::dex::Fetch;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::widgets::Chrome;
use crate::ui::widgets::ScrollBar;
use crate::ui::widgets::Spinner;

const NAME_WIDTH: usize = 14;

/// The root view: a search box over the list of loaded entries.
#[derive(Clone, Debug, Default)]
pub struct CatalogView {
  query: String,
  index: usize,
  offset: usize,
  page_height: usize,
}

impl CatalogView {
  pub fn new() -> Self {
    Self::default()
  }

  fn set_query(&mut self, query: String) {
    self.query = query;
    self.index = 0;
    self.offset = 0;
  }
}

impl Component for CatalogView {
  fn process_event(&mut self, args: &mut EventArgs) {
    let Event::Key(key) = args.event;

    let entries = args.dex.entries();
    let all = entries.ready().map(|e| e.as_slice()).unwrap_or_default();
    let shown = catalog::filter(all, &self.query);
    let page = self.page_height.max(1) as isize;

    let delta = match key.code {
      KeyCode::Up => -1,
      KeyCode::Down => 1,
      KeyCode::PageUp => -page,
      KeyCode::PageDown => page,
      KeyCode::Enter => {
        if let Some(&entry) = shown.get(self.index) {
          args.commands.open(entry.clone());
          args.commands.claim();
        }
        return;
      }
      KeyCode::Esc => {
        if self.query.is_empty() {
          args.commands.quit();
        } else {
          self.set_query(String::new());
        }
        args.commands.claim();
        return;
      }
      KeyCode::Backspace => {
        let mut query = self.query.clone();
        if query.pop().is_some() {
          self.set_query(query);
        }
        args.commands.claim();
        return;
      }
      KeyCode::Char(c)
        if key.modifiers == KeyModifiers::NONE
          || key.modifiers == KeyModifiers::SHIFT =>
      {
        let mut query = self.query.clone();
        query.push(c);
        self.set_query(query);
        args.commands.claim();
        return;
      }
      _ => return,
    };

    let new_index = ((self.index as isize).saturating_add(delta).max(0)
      as usize)
      .min(shown.len().saturating_sub(1));
    if new_index != self.index {
      self.index = new_index;
      args.commands.claim();
    }
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let style = args.style_sheet.focused;
    let chrome = Chrome::new()
      .title("Pokemon Catalog")
      .footer("type to search | Enter: open | Esc: clear / quit")
      .style(args.style_sheet.unfocused);
    let inner = chrome.inner(args.rect);
    chrome.render(args.rect, args.output);
    if inner.width == 0 || inner.height == 0 {
      return;
    }

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints(vec![
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
      ])
      .split(inner);

    let search = Spans::from(vec![
      Span::styled("Search: ", style.add_modifier(Modifier::BOLD)),
      Span::styled(self.query.clone(), style),
      Span::styled("_", style.add_modifier(Modifier::SLOW_BLINK)),
    ]);
    Paragraph::new(search).render(layout[0], args.output);

    let list_rect = layout[2];
    if list_rect.height == 0 {
      return;
    }

    let entries = match args.dex.entries() {
      Fetch::Ready(entries) => entries,
      Fetch::Pending => {
        Spinner::new(args.frame_number)
          .style(style)
          .label("Loading...")
          .render(list_rect, args.output);
        return;
      }
      Fetch::Failed(_) => {
        Paragraph::new(Spans::from(Span::styled(
          "Failed to fetch Pokemon data",
          args.style_sheet.error,
        )))
        .render(list_rect, args.output);
        return;
      }
    };

    let shown = catalog::filter(&entries, &self.query);
    if shown.is_empty() {
      Paragraph::new(Spans::from(Span::styled("No Pokemon found", style)))
        .render(list_rect, args.output);
      return;
    }

    let height = list_rect.height as usize;
    self.page_height = height;
    self.index = self.index.min(shown.len() - 1);
    if self.index < self.offset {
      self.offset = self.index;
    } else if self.index >= self.offset + height {
      self.offset = self.index + 1 - height;
    }

    let rows = Rect::new(
      list_rect.x,
      list_rect.y,
      list_rect.width.saturating_sub(2),
      list_rect.height,
    );
    for (row, (i, entry)) in shown
      .iter()
      .enumerate()
      .skip(self.offset)
      .take(height)
      .enumerate()
    {
      let spans = format_entry(entry, i == self.index, args);
      args
        .output
        .set_spans(rows.x, rows.y + row as u16, &spans, rows.width);
    }

    if shown.len() > height {
      let ratio = self.index as f64 / (shown.len() - 1) as f64;
      ScrollBar::new(ratio).style(style).render(list_rect, args.output);
    }
  }
}

fn format_entry<'a>(
  entry: &CatalogEntry,
  is_selected: bool,
  args: &RenderArgs,
) -> Spans<'a> {
  let style = if is_selected {
    args.style_sheet.focused.patch(args.style_sheet.selected)
  } else {
    args.style_sheet.unfocused
  };
  let symbol = if is_selected { "➤ " } else { "  " };

  let mut spans = vec![
    Span::styled(symbol, style),
    Span::styled(format!("{} ", display::dex_number(entry.id)), style),
    Span::styled(
      format!(
        "{:width$} ",
        display::capitalize(&entry.name),
        width = NAME_WIDTH
      ),
      style,
    ),
  ];
  for ty in &entry.types {
    spans.push(Span::styled(
      format!(" {} ", ty),
      args.style_sheet.type_style(ty),
    ));
    spans.push(Span::raw(" "));
  }
  Spans::from(spans)
}
