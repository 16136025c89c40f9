//! The tab strip on the detail view.

use std::iter;

use crossterm::event::KeyCode;

use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::util::SelectedVec;

/// A section of the detail view.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tab {
  About,
  Stats,
  Evolution,
  Moves,
}

impl Tab {
  pub const ALL: [Tab; 4] =
    [Tab::About, Tab::Stats, Tab::Evolution, Tab::Moves];

  pub fn label(self) -> &'static str {
    match self {
      Tab::About => "About",
      Tab::Stats => "Base Stats",
      Tab::Evolution => "Evolution",
      Tab::Moves => "Moves",
    }
  }
}

#[derive(Clone, Debug)]
pub struct Tabs {
  tabs: SelectedVec<Tab>,
}

impl Tabs {
  pub fn new() -> Self {
    Self {
      tabs: Tab::ALL.iter().copied().collect(),
    }
  }

  /// Returns the tab currently shown.
  pub fn current(&self) -> Tab {
    self.tabs.selected().copied().unwrap_or(Tab::About)
  }
}

impl Component for Tabs {
  fn process_event(&mut self, args: &mut EventArgs) {
    let Event::Key(k) = args.event;
    // Claimed even at the edges, so Left on the first tab goes nowhere.
    match k.code {
      KeyCode::Left => {
        self.tabs.shift(-1);
      }
      KeyCode::Right => {
        self.tabs.shift(1);
      }
      KeyCode::Tab => {
        self.tabs.cycle(true);
      }
      KeyCode::BackTab => {
        self.tabs.cycle(false);
      }
      KeyCode::Char(c @ '1'..='4') => {
        self.tabs.select(c as usize - '1' as usize);
      }
      _ => return,
    }
    args.commands.claim();
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let style = args.style_sheet.focused;
    let selected = style.patch(args.style_sheet.selected);

    // What we're going for:
    //    ▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁▁
    //   ╱  Bonk ╱  Foo  ╲ Bar  ╲ Baz  ╲
    // ▔▔▔▔▔▔▔▔▔▔         ▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔▔

    let mut top = vec![Span::styled("  ", style)];
    let mut middle = vec![Span::styled("  ", style)];
    let mut bottom = vec![Span::styled("▔▔", style)];
    let last = self.tabs.len().saturating_sub(1);
    for (i, tab) in self.tabs.iter().enumerate() {
      let label = tab.label();
      let (span, underline) = if i < self.tabs.selection() {
        (Span::styled(format!("╱  {} ", label), style), '▔')
      } else if i > self.tabs.selection() {
        (Span::styled(format!(" {}  ╲", label), style), '▔')
      } else {
        (Span::styled(format!("╱  {}  ╲", label), selected), ' ')
      };
      let width = span.width();

      let mut top_bar = String::new();
      for j in 0..width {
        let open_left = j == 0 && i == 0 && i <= self.tabs.selection();
        let open_right =
          j + 1 == width && i == last && i >= self.tabs.selection();
        top_bar.push(if open_left || open_right { ' ' } else { '▁' });
      }

      top.push(Span::styled(top_bar, span.style));
      bottom.push(Span::styled(
        iter::repeat(underline).take(width).collect::<String>(),
        span.style,
      ));
      middle.push(span);
    }

    let rest_len = (args.rect.width as usize)
      .saturating_sub(bottom.iter().map(|s| s.width()).sum());
    bottom.push(Span::styled(
      iter::repeat('▔').take(rest_len).collect::<String>(),
      style,
    ));

    Paragraph::new(Text::from(vec![
      Spans::from(top),
      Spans::from(middle),
      Spans::from(bottom),
    ]))
    .render(args.rect, args.output);
  }
}
