//! Components for displaying images rendered as text.

use image::RgbaImage;

use tui::layout::Alignment;
use tui::layout::Rect;
use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;
use tui::text::Span;
use tui::text::Spans;
use tui::text::Text;
use tui::widgets::Paragraph;
use tui::widgets::Widget;

use crate::dex::Fetch;
use crate::ui::component::Component;
use crate::ui::component::RenderArgs;
use crate::ui::widgets::Spinner;

/// A sprite, downloaded through the [`Dex`](crate::dex::Dex) and drawn with
/// colored characters.
#[derive(Clone, Debug)]
pub struct Png {
  url: Option<String>,
  cache: Option<(Rect, Text<'static>)>,
}

impl Png {
  pub fn new(url: Option<String>) -> Self {
    Self { url, cache: None }
  }
}

impl Component for Png {
  fn render(&mut self, args: &mut RenderArgs) {
    if args.rect.height == 0 || args.rect.width == 0 {
      return;
    }

    let url = match &self.url {
      Some(url) => url,
      None => return,
    };

    let stale = match &self.cache {
      Some((rect, _)) => {
        rect.height != args.rect.height || rect.width != args.rect.width
      }
      None => true,
    };
    if stale {
      match args.dex.sprite(url) {
        Fetch::Ready(image) => {
          let text = rasterize(&image, args.rect, args.style_sheet.font_height);
          self.cache = Some((args.rect, text));
        }
        Fetch::Pending => {
          Spinner::new(args.frame_number)
            .style(args.style_sheet.unfocused)
            .render(args.rect, args.output);
          return;
        }
        // A missing sprite is not worth a message.
        Fetch::Failed(_) => return,
      }
    }

    let text = match &self.cache {
      Some((_, text)) => text,
      None => return,
    };

    let dy = args.rect.height.saturating_sub(text.lines.len() as u16) / 2;
    let rect = Rect::new(
      args.rect.x,
      args.rect.y + dy,
      args.rect.width,
      (text.lines.len() as u16).min(args.rect.height),
    );
    Paragraph::new(text.clone())
      .alignment(Alignment::Center)
      .render(rect, args.output);
  }
}

/// Scales `image` to fit in `rect` and turns each pixel into a character.
fn rasterize(image: &RgbaImage, rect: Rect, font_height: f64) -> Text<'static> {
  if image.width() == 0 || image.height() == 0 {
    return Text::default();
  }

  // NOTE: Wider rectangles have a smaller aspect ratio, while taller
  // rectangles have a greater one.
  let rect_aspect = rect.height as f64 / rect.width as f64;
  let image_aspect = image.height() as f64 / image.width() as f64;

  // If the draw rectangle is wider or shorter than the image, we scale
  // according to the height ratio; otherwise, we use the width.
  let (width, height) = if rect_aspect * font_height < image_aspect {
    let scale_factor = rect.height as f64 / image.height() as f64;
    (
      (image.width() as f64 * scale_factor * font_height) as u32,
      (image.height() as f64 * scale_factor) as u32,
    )
  } else {
    let scale_factor = rect.width as f64 / image.width() as f64;
    (
      (image.width() as f64 * scale_factor) as u32,
      (image.height() as f64 * scale_factor / font_height) as u32,
    )
  };
  let (width, height) = (width.max(1), height.max(1));

  // Transparent pixels are blackened so they don't bleed white into the
  // edges when interpolating.
  let mut image = image.clone();
  for image::Rgba([r, g, b, a]) in image.pixels_mut() {
    if *a == 0 {
      *r = 0;
      *g = 0;
      *b = 0;
    }
  }

  // The nearest-neighbor copy is only used as an alpha mask.
  let mask = image::imageops::resize(
    &image,
    width,
    height,
    image::imageops::FilterType::Nearest,
  );
  let mut resized = image::imageops::resize(
    &image,
    width,
    height,
    image::imageops::FilterType::Triangle,
  );
  for (image::Rgba([_, _, _, a]), image::Rgba([_, _, _, out])) in
    mask.pixels().zip(resized.pixels_mut())
  {
    *out = *a;
  }

  let mut text = Text::default();
  for row in resized.rows() {
    let spans = row
      .map(|&image::Rgba([r, g, b, a])| {
        let s = if a != 0 { "@" } else { " " };
        Span::styled(
          s,
          Style::default()
            .fg(Color::Rgb(r, g, b))
            .add_modifier(Modifier::BOLD),
        )
      })
      .collect::<Vec<_>>();
    text.lines.push(Spans::from(spans));
  }
  text
}
