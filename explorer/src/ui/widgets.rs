//! `tui` widgets that are not complex enough to be `Component`s.

use std::iter;

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Modifier;
use tui::style::Style;
use tui::symbols;
use tui::text::Span;
use tui::text::Spans;
use tui::widgets::Widget;

/// A spinner for indicating that something is doing... something.
#[derive(Clone, Debug)]
pub struct Spinner<'a> {
  frame_number: usize,
  label: Option<Spans<'a>>,
  style: Style,
  frequency: usize,
}

impl<'a> Spinner<'a> {
  pub fn new(frame_number: usize) -> Self {
    Self {
      frame_number,
      label: None,
      style: Style::default(),
      frequency: 5,
    }
  }

  pub fn label(mut self, label: impl Into<Spans<'a>>) -> Self {
    self.label = Some(label.into());
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn into_spans(self) -> Spans<'a> {
    let icon = match self.frame_number / self.frequency % 4 {
      0 => "-",
      1 => "/",
      2 => "|",
      _ => "\\",
    };

    let mut spans = self.label.unwrap_or_default();
    for span in &mut spans.0 {
      span.style = self.style.patch(span.style);
    }

    if !spans.0.iter().all(|s| s.content.is_empty()) {
      spans.0.push(Span::styled(" ", self.style));
    }
    spans.0.push(Span::styled(icon, self.style));

    spans
  }
}

impl Widget for Spinner<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.width == 0 || rect.height == 0 {
      return;
    }
    buf.set_spans(rect.x, rect.y, &self.into_spans(), rect.width);
  }
}

/// A frame that wraps around a rectangle with an `explorer`-specific style.
///
/// A `Chrome` can include a title and a footer.
#[derive(Clone, Debug)]
pub struct Chrome<'a> {
  title: Option<Spans<'a>>,
  footer: Option<Spans<'a>>,
  style: Style,
  pipe: &'a str,
}

impl<'a> Chrome<'a> {
  pub fn new() -> Self {
    Self {
      title: None,
      footer: None,
      style: Style::default(),
      pipe: symbols::block::ONE_QUARTER,
    }
  }

  pub fn title(mut self, title: impl Into<Spans<'a>>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn footer(mut self, footer: impl Into<Spans<'a>>) -> Self {
    self.footer = Some(footer.into());
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn inner(&self, rect: Rect) -> Rect {
    Rect::new(
      rect.x + 1,
      rect.y + 1,
      rect.width.saturating_sub(2),
      rect.height.saturating_sub(2),
    )
  }
}

impl<'a> Widget for Chrome<'a> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.height < 2 || rect.width == 0 {
      return;
    }

    let Chrome {
      title,
      footer,
      style,
      pipe,
    } = self;

    let make_bar = |spans: Option<Spans<'a>>| {
      let mut bar = Spans::default();
      bar.0.push(Span::styled(pipe, style));
      bar.0.push(Span::styled(pipe, style));

      if let Some(Spans(spans)) = spans {
        bar.0.push(Span::styled(" ", style.add_modifier(Modifier::REVERSED)));
        for mut span in spans {
          span.style = style.patch(span.style).add_modifier(Modifier::REVERSED);
          bar.0.push(span);
        }
        bar.0.push(Span::styled(" ", style.add_modifier(Modifier::REVERSED)));
      }

      let rest_len = (rect.width as usize).saturating_sub(bar.width());
      bar.0.push(Span::styled(
        iter::repeat(pipe).take(rest_len).collect::<String>(),
        style,
      ));

      bar
    };

    buf.set_spans(rect.x, rect.y, &make_bar(title), rect.width);
    buf.set_spans(
      rect.x,
      rect.y + rect.height - 1,
      &make_bar(footer),
      rect.width,
    );
  }
}

/// A scrollbar indicating how far down a list the user has scrolled.
#[derive(Clone, Debug)]
pub struct ScrollBar {
  ratio: f64,
  style: Style,
  pip_style: Style,
}

impl ScrollBar {
  pub fn new(ratio: f64) -> Self {
    Self {
      ratio,
      style: Style::default(),
      pip_style: Style::default(),
    }
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }
}

impl Widget for ScrollBar {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    let ratio = if self.ratio < 0.0 || self.ratio.is_nan() {
      0.0
    } else if self.ratio > 1.0 {
      1.0
    } else {
      self.ratio
    };
    let height = rect.height;
    if height == 0 || rect.width == 0 {
      return;
    }

    let selected = ((height - 1) as f64 * ratio) as u16;
    let x = rect.x + rect.width - 1;
    for i in 0..height {
      let cell = buf.get_mut(x, rect.y + i);
      if i == selected {
        let syn = if i == 0 {
          "▄"
        } else if i == height - 1 {
          "▀"
        } else {
          "█"
        };
        cell.set_symbol(syn);
        cell.set_style(self.style.patch(self.pip_style));
      } else {
        let syn = if i == 0 {
          "┬"
        } else if i == height - 1 {
          "┴"
        } else {
          "│"
        };
        cell.set_symbol(syn);
        cell.set_style(self.style);
      }
    }
  }
}

/// A horizontal bar showing a value as a fraction of its maximum.
///
/// Renders as `label  value ████████░░░░`, all on one line.
#[derive(Clone, Debug)]
pub struct StatBar<'a> {
  label: &'a str,
  value: String,
  ratio: f64,
  label_width: u16,
  style: Style,
  bar_style: Style,
}

impl<'a> StatBar<'a> {
  pub fn new(label: &'a str, value: impl ToString, ratio: f64) -> Self {
    Self {
      label,
      value: value.to_string(),
      ratio,
      label_width: 16,
      style: Style::default(),
      bar_style: Style::default(),
    }
  }

  pub fn label_width(mut self, width: u16) -> Self {
    self.label_width = width;
    self
  }

  pub fn style(mut self, style: Style) -> Self {
    self.style = style;
    self
  }

  pub fn bar_style(mut self, style: Style) -> Self {
    self.bar_style = style;
    self
  }
}

impl Widget for StatBar<'_> {
  fn render(self, rect: Rect, buf: &mut Buffer) {
    if rect.width == 0 || rect.height == 0 {
      return;
    }

    let ratio = if self.ratio.is_nan() {
      0.0
    } else {
      self.ratio.max(0.0).min(1.0)
    };

    let head = format!(
      "{:label$} {:>3} ",
      self.label,
      self.value,
      label = self.label_width as usize
    );
    let (x, _) = buf.set_stringn(
      rect.x,
      rect.y,
      &head,
      rect.width as usize,
      self.style,
    );

    let bar_width = (rect.x + rect.width).saturating_sub(x) as usize;
    let filled = (bar_width as f64 * ratio).round() as usize;
    let bar = iter::repeat(symbols::block::FULL)
      .take(filled)
      .chain(iter::repeat(symbols::line::HORIZONTAL).take(bar_width - filled))
      .collect::<String>();
    buf.set_stringn(
      x,
      rect.y,
      &bar,
      bar_width,
      self.style.patch(self.bar_style),
    );
  }
}
