//! The per-entry detail view.

use crossterm::event::KeyCode;

use pkcat::catalog::CatalogEntry;
use pkcat::chain;
use pkcat::chain::Row;
use pkcat::display;
use pkcat::species::SpeciesInfo;

use tui::layout::Constraint;
use tui::layout::Direction;
use tui::layout::Layout;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::style::Style;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget;
use tui::widgets::Wrap;

use crate::dex::Fetch;
use crate::ui::component::Component;
use crate::ui::component::Event;
use crate::ui::component::EventArgs;
use crate::ui::component::RenderArgs;
use crate::ui::component::StyleSheet;
use crate::ui::image::Png;
use crate::ui::tabs::Tab;
use crate::ui::tabs::Tabs;
use crate::ui::widgets::Chrome;
use crate::ui::widgets::Spinner;
use crate::ui::widgets::StatBar;

const LABEL_WIDTH: usize = 16;
const HEADER_HEIGHT: u16 = 8;
const SPRITE_WIDTH: u16 = 24;

/// What a tab has to show.
enum Body {
  Lines(Vec<Spans<'static>>),
  Loading,
  Message(&'static str),
}

/// A single entry, with a header and a tab per section.
#[derive(Clone, Debug)]
pub struct DetailView {
  entry: CatalogEntry,
  sprite: Png,
  tabs: Tabs,
  scroll: u16,
}

impl DetailView {
  pub fn new(entry: CatalogEntry) -> Self {
    Self {
      sprite: Png::new(entry.image.clone()),
      entry,
      tabs: Tabs::new(),
      scroll: 0,
    }
  }

  fn render_header(&mut self, args: &mut RenderArgs) {
    let layout = Layout::default()
      .direction(Direction::Horizontal)
      .constraints(vec![Constraint::Length(SPRITE_WIDTH), Constraint::Min(0)])
      .split(args.rect);

    self.sprite.render(&mut args.with_rect(layout[0]));

    let style = args.style_sheet.focused;
    let mut lines = vec![
      Spans::from(vec![
        Span::styled(
          display::capitalize(&self.entry.name),
          style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ", style),
        Span::styled(
          display::dex_number(self.entry.id),
          args.style_sheet.unfocused,
        ),
      ]),
      Spans::default(),
      Spans::from(type_badges(&self.entry.types, args.style_sheet)),
    ];
    if let Fetch::Ready(info) = args.dex.species(self.entry.id) {
      if let Some(genus) = &info.genus {
        lines.push(Spans::default());
        lines.push(Spans::from(Span::styled(
          genus.clone(),
          args.style_sheet.unfocused,
        )));
      }
    }

    let text_rect = Rect::new(
      layout[1].x.saturating_add(1),
      layout[1].y.saturating_add(1),
      layout[1].width.saturating_sub(1),
      layout[1].height.saturating_sub(1),
    );
    Paragraph::new(Text::from(lines)).render(text_rect, args.output);
  }

  fn render_stats(&self, args: &mut RenderArgs) {
    let style = args.style_sheet.focused;
    let bar_style = self
      .entry
      .primary_type()
      .map(|ty| Style::default().fg(args.style_sheet.type_colors.get(ty)))
      .unwrap_or_default();

    let rows = self
      .entry
      .stats
      .iter()
      .skip(self.scroll as usize)
      .take(args.rect.height as usize);
    for (y, stat) in rows.enumerate() {
      let label = display::title(&stat.name);
      StatBar::new(&label, stat.value, display::stat_ratio(stat.value))
        .label_width(LABEL_WIDTH as u16)
        .style(style)
        .bar_style(bar_style)
        .render(
          Rect::new(args.rect.x, args.rect.y + y as u16, args.rect.width, 1),
          args.output,
        );
    }

    let total_y = self.entry.stats.len().saturating_sub(self.scroll as usize);
    if total_y < args.rect.height as usize {
      let total = self
        .entry
        .stats
        .iter()
        .map(|s| s.value as u32)
        .sum::<u32>();
      args.output.set_stringn(
        args.rect.x,
        args.rect.y + total_y as u16,
        &format!("{:width$} {:>3}", "Total", total, width = LABEL_WIDTH),
        args.rect.width as usize,
        style.add_modifier(Modifier::BOLD),
      );
    }
  }

  fn about(&self, args: &RenderArgs) -> Body {
    let style = args.style_sheet.focused;
    let field = |label: &str, value: String| {
      Spans::from(vec![
        Span::styled(
          format!("{:width$}", label, width = LABEL_WIDTH),
          style.add_modifier(Modifier::BOLD),
        ),
        Span::styled(value, style),
      ])
    };

    let mut types = vec![Span::styled(
      format!("{:width$}", "Types", width = LABEL_WIDTH),
      style.add_modifier(Modifier::BOLD),
    )];
    types.extend(type_badges(&self.entry.types, args.style_sheet));

    let mut lines = vec![
      Spans::from(types),
      field(
        "Height",
        format!("{} m", display::decimal_tenths(self.entry.height)),
      ),
      field(
        "Weight",
        format!("{} kg", display::decimal_tenths(self.entry.weight)),
      ),
      field("Abilities", title_list(&self.entry.abilities)),
      Spans::default(),
    ];

    match args.dex.species(self.entry.id) {
      Fetch::Ready(info) => lines.extend(species_lines(&info, field)),
      Fetch::Pending => lines.push(
        Spinner::new(args.frame_number)
          .style(style)
          .label("Loading...")
          .into_spans(),
      ),
      // Species details are optional; the rest of the page stands alone.
      Fetch::Failed(_) => {}
    }

    Body::Lines(lines)
  }

  fn evolution(&self, args: &RenderArgs) -> Body {
    let root = match args.dex.evolution(self.entry.id) {
      Fetch::Pending => return Body::Loading,
      Fetch::Failed(_) => return Body::Message("No evolution data available"),
      Fetch::Ready(root) => root,
    };

    let rows = match chain::render((*root).as_ref()) {
      Ok(rows) if !rows.is_empty() => rows,
      Ok(_) => return Body::Message("No evolution data available"),
      Err(e) => {
        log::warn!("cannot show evolutions of {}: {}", self.entry.name, e);
        return Body::Message("No evolution data available");
      }
    };

    let style = args.style_sheet.focused;
    let lines = rows
      .iter()
      .map(|row| {
        let indent = " ".repeat(row.depth() * 4);
        match row {
          Row::Species { rank, name, .. } => {
            let is_current = *name == self.entry.name;
            let style = if is_current {
              style.patch(args.style_sheet.selected)
            } else {
              style
            };
            Spans::from(vec![
              Span::raw(indent),
              Span::styled(
                format!("{}. {}", rank, display::capitalize(name)),
                style,
              ),
            ])
          }
          Row::Transition { .. } => Spans::from(vec![
            Span::raw(indent),
            Span::styled(
              format!("↓ {}", display::capitalize(&row.to_string())),
              args.style_sheet.unfocused,
            ),
          ]),
        }
      })
      .collect();
    Body::Lines(lines)
  }

  fn moves(&self, args: &RenderArgs) -> Body {
    let moves = match args.dex.moves(self.entry.id) {
      Fetch::Pending => return Body::Loading,
      Fetch::Failed(_) => return Body::Message("No moves data available"),
      Fetch::Ready(moves) => moves,
    };
    if moves.is_empty() {
      return Body::Message("No moves data available");
    }

    let style = args.style_sheet.focused;
    let lines = moves
      .iter()
      .map(|m| {
        Spans::from(vec![
          Span::styled(
            format!("Lv. {:>3}  ", m.level),
            args.style_sheet.unfocused,
          ),
          Span::styled(display::title(&m.name), style),
        ])
      })
      .collect();
    Body::Lines(lines)
  }
}

impl Component for DetailView {
  fn process_event(&mut self, args: &mut EventArgs) {
    self.tabs.process_event(args);
    if args.commands.is_claimed() {
      self.scroll = 0;
      return;
    }

    let Event::Key(key) = args.event;
    match key.code {
      KeyCode::Up => self.scroll = self.scroll.saturating_sub(1),
      KeyCode::Down => self.scroll = self.scroll.saturating_add(1),
      KeyCode::Esc | KeyCode::Backspace => args.commands.back(),
      _ => return,
    }
    args.commands.claim();
  }

  fn render(&mut self, args: &mut RenderArgs) {
    let title = format!(
      "{} {}",
      display::capitalize(&self.entry.name),
      display::dex_number(self.entry.id)
    );
    let chrome = Chrome::new()
      .title(title)
      .footer("←/→: switch tab | ↑/↓: scroll | Esc: back")
      .style(args.style_sheet.unfocused);
    let inner = chrome.inner(args.rect);
    chrome.render(args.rect, args.output);
    if inner.width == 0 || inner.height == 0 {
      return;
    }

    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints(vec![
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(3),
        Constraint::Min(0),
      ])
      .split(inner);

    self.render_header(&mut args.with_rect(layout[0]));
    self.tabs.render(&mut args.with_rect(layout[1]));

    let body_rect = layout[2];
    if body_rect.height == 0 {
      return;
    }

    let body = match self.tabs.current() {
      Tab::About => self.about(args),
      Tab::Stats => {
        let max = self.entry.stats.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.min(max);
        self.render_stats(&mut args.with_rect(body_rect));
        return;
      }
      Tab::Evolution => self.evolution(args),
      Tab::Moves => self.moves(args),
    };

    let style = args.style_sheet.focused;
    match body {
      Body::Lines(lines) => {
        let max = lines.len().saturating_sub(1) as u16;
        self.scroll = self.scroll.min(max);
        Paragraph::new(Text::from(lines))
          .wrap(Wrap { trim: false })
          .scroll((self.scroll, 0))
          .render(body_rect, args.output);
      }
      Body::Loading => Spinner::new(args.frame_number)
        .style(style)
        .label("Loading...")
        .render(body_rect, args.output),
      Body::Message(msg) => {
        Paragraph::new(Spans::from(Span::styled(msg, style)))
          .render(body_rect, args.output)
      }
    }
  }
}

fn type_badges(
  types: &[String],
  style_sheet: &StyleSheet,
) -> Vec<Span<'static>> {
  let mut spans = Vec::new();
  for ty in types {
    spans.push(Span::styled(
      format!(" {} ", ty.to_uppercase()),
      style_sheet.type_style(ty),
    ));
    spans.push(Span::raw(" "));
  }
  spans
}

fn title_list(slugs: &[String]) -> String {
  slugs
    .iter()
    .map(|s| display::title(s))
    .collect::<Vec<_>>()
    .join(", ")
}

fn species_lines(
  info: &SpeciesInfo,
  field: impl Fn(&str, String) -> Spans<'static>,
) -> Vec<Spans<'static>> {
  let unknown = || "Unknown".to_string();
  let mut lines = vec![
    field("Genus", info.genus.clone().unwrap_or_else(unknown)),
    field("Generation", display::title(&info.generation)),
    field(
      "Habitat",
      info.habitat.as_deref().map(display::title).unwrap_or_else(unknown),
    ),
    field("Egg Groups", title_list(&info.egg_groups)),
    field("Growth Rate", display::title(&info.growth_rate)),
    field("Capture Rate", info.capture_rate.to_string()),
    field(
      "Base Happiness",
      info
        .base_happiness
        .map(|h| h.to_string())
        .unwrap_or_else(unknown),
    ),
  ];
  if let Some(description) = &info.description {
    lines.push(Spans::default());
    lines.push(Spans::from(description.clone()));
  }
  lines
}

#[cfg(test)]
mod tests {
  use crate::dex::testing::*;
  use crate::dex::Dex;
  use crate::ui::component::Command;
  use crate::ui::testing::*;

  use super::*;

  fn open(id: u32, name: &str) -> DetailView {
    DetailView::new(entry(id, name, &["grass", "poison"]))
  }

  fn show_tab(view: &mut DetailView, dex: &Dex, digit: char) -> Vec<String> {
    press(view, dex, KeyCode::Char(digit));
    render(view, dex, 80, 32)
  }

  #[test]
  fn header_and_about() {
    let dex = dex();
    let mut view = open(1, "bulbasaur");
    let lines = render(&mut view, &dex, 80, 32);
    assert!(shows(&lines, "Bulbasaur #0001"), "{:#?}", lines);
    assert!(shows(&lines, "GRASS"), "{:#?}", lines);
    assert!(shows(&lines, "0.7 m"), "{:#?}", lines);
    assert!(shows(&lines, "6.9 kg"), "{:#?}", lines);
    assert!(shows(&lines, "Overgrow, Chlorophyll"), "{:#?}", lines);

    settle(|| dex.species(1));
    let lines = render(&mut view, &dex, 80, 32);
    assert!(shows(&lines, "Seed Pokémon"), "{:#?}", lines);
    assert!(shows(&lines, "Generation I"), "{:#?}", lines);
    assert!(shows(&lines, "Medium Slow"), "{:#?}", lines);
    assert!(!shows(&lines, "Loading..."), "{:#?}", lines);
  }

  #[test]
  fn failed_species_is_omitted() {
    let dex = dex();
    let mut view = open(2000, "missingno");
    render(&mut view, &dex, 80, 32);
    settle(|| dex.species(2000));

    let lines = render(&mut view, &dex, 80, 32);
    assert!(shows(&lines, "Abilities"), "{:#?}", lines);
    assert!(!shows(&lines, "Genus"), "{:#?}", lines);
    assert!(!shows(&lines, "Loading..."), "{:#?}", lines);
  }

  #[test]
  fn stats_tab() {
    let dex = dex();
    let mut view = open(1, "bulbasaur");
    let lines = show_tab(&mut view, &dex, '2');
    assert!(shows(&lines, "Base Stats"));
    assert!(shows(&lines, "Hp                45"), "{:#?}", lines);
    assert!(shows(&lines, "Special Attack    65"), "{:#?}", lines);
    assert!(shows(&lines, "Total            110"), "{:#?}", lines);
  }

  #[test]
  fn evolution_tab() {
    let dex = dex();
    let mut view = open(1, "bulbasaur");
    let lines = show_tab(&mut view, &dex, '3');
    assert!(shows(&lines, "Loading..."), "{:#?}", lines);

    settle(|| dex.evolution(1));
    let lines = render(&mut view, &dex, 80, 32);
    assert!(shows(&lines, "1. Bulbasaur"), "{:#?}", lines);
    assert!(shows(&lines, "    ↓ Level Up (Level 16)"), "{:#?}", lines);
    assert!(shows(&lines, "    2. Ivysaur"), "{:#?}", lines);
  }

  #[test]
  fn missing_evolutions() {
    let dex = dex();
    for &id in &[25, 7] {
      let mut view = open(id, "someone");
      show_tab(&mut view, &dex, '3');
      settle(|| dex.evolution(id));
      let lines = render(&mut view, &dex, 80, 32);
      assert!(shows(&lines, "No evolution data available"), "{:#?}", lines);
    }
  }

  #[test]
  fn moves_tab() {
    let dex = dex();
    let mut view = open(1, "bulbasaur");
    show_tab(&mut view, &dex, '4');
    settle(|| dex.moves(1));
    let lines = render(&mut view, &dex, 80, 32);
    assert!(shows(&lines, "Lv.   1  Tackle"), "{:#?}", lines);
    assert!(shows(&lines, "Lv.   3  Vine Whip"), "{:#?}", lines);
  }

  #[test]
  fn missing_moves() {
    let dex = dex();
    for &id in &[25, 7] {
      let mut view = open(id, "someone");
      show_tab(&mut view, &dex, '4');
      settle(|| dex.moves(id));
      let lines = render(&mut view, &dex, 80, 32);
      assert!(shows(&lines, "No moves data available"), "{:#?}", lines);
    }
  }

  #[test]
  fn scrolling_resets_on_tab_switch() {
    let dex = dex();
    let mut view = open(1, "bulbasaur");
    press(&mut view, &dex, KeyCode::Down);
    press(&mut view, &dex, KeyCode::Down);
    assert_eq!(view.scroll, 2);
    press(&mut view, &dex, KeyCode::Up);
    assert_eq!(view.scroll, 1);

    press(&mut view, &dex, KeyCode::Right);
    assert_eq!(view.scroll, 0);
  }

  #[test]
  fn escape_and_backspace_go_back() {
    let dex = dex();
    let mut view = open(1, "bulbasaur");
    for &code in &[KeyCode::Esc, KeyCode::Backspace] {
      let mut commands = press(&mut view, &dex, code);
      assert!(commands.is_claimed());
      assert_eq!(commands.take_command(), Some(Command::Back));
    }
  }
}
