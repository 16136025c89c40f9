//! The component model shared by every view.

use std::fmt::Debug;

use crossterm::event::KeyEvent;

use pkcat::catalog::CatalogEntry;

use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Color;
use tui::style::Modifier;
use tui::style::Style;

use crate::dex::Dex;

/// An input event delivered to a [`Component`].
#[derive(Clone, Debug)]
pub enum Event {
  Key(KeyEvent),
}

/// A request from a component to the [`App`](crate::ui::app::App).
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
  /// Open the detail view for an entry.
  Open(CatalogEntry),
  /// Return to the previous view.
  Back,
  /// Exit the application.
  Quit,
}

/// A buffer for issuing commands to the app in response to an event.
///
/// Buffered commands will not take effect until event processing completes.
#[derive(Debug, Default)]
pub struct CommandBuffer {
  command: Option<Command>,
  claimed: bool,
}

impl CommandBuffer {
  /// Creates an empty buffer.
  pub fn new() -> Self {
    Self::default()
  }

  /// Requests that the app open the detail view for `entry`.
  pub fn open(&mut self, entry: CatalogEntry) {
    self.command = Some(Command::Open(entry))
  }

  /// Requests that the app go back one view.
  pub fn back(&mut self) {
    self.command = Some(Command::Back)
  }

  /// Requests that the app exit.
  pub fn quit(&mut self) {
    self.command = Some(Command::Quit)
  }

  /// Takes the most recently issued command, if any.
  pub fn take_command(&mut self) -> Option<Command> {
    self.command.take()
  }

  /// Claims the event being processed, so it will not be further propagated to
  /// other components.
  pub fn claim(&mut self) {
    self.claimed = true
  }

  /// Returns whether a callee has already claimed the event associated with
  /// this buffer.
  pub fn is_claimed(&self) -> bool {
    self.claimed
  }
}

#[derive(Copy, Clone, Debug)]
pub struct StyleSheet {
  pub focused: Style,
  pub unfocused: Style,
  pub selected: Style,
  pub error: Style,
  pub type_colors: TypeColors,

  /// The height of a terminal cell relative to its width.
  pub font_height: f64,
}

impl Default for StyleSheet {
  fn default() -> Self {
    StyleSheet {
      focused: Style::default().fg(Color::White),
      unfocused: Style::default().fg(Color::Gray),
      selected: Style::default().add_modifier(Modifier::BOLD),
      error: Style::default()
        .fg(Color::LightRed)
        .add_modifier(Modifier::BOLD),
      type_colors: TypeColors::default(),
      font_height: 2.0,
    }
  }
}

impl StyleSheet {
  /// Returns a style for text themed by the type named `ty`.
  pub fn type_style(&self, ty: &str) -> Style {
    Style::default()
      .fg(Color::Black)
      .bg(self.type_colors.get(ty))
      .add_modifier(Modifier::BOLD)
  }
}

#[derive(Copy, Clone, Debug)]
pub struct TypeColors {
  pub normal: Color,
  pub fighting: Color,
  pub flying: Color,
  pub poison: Color,
  pub ground: Color,
  pub rock: Color,
  pub bug: Color,
  pub ghost: Color,
  pub steel: Color,
  pub fire: Color,
  pub water: Color,
  pub grass: Color,
  pub electric: Color,
  pub psychic: Color,
  pub ice: Color,
  pub dragon: Color,
  pub dark: Color,
  pub fairy: Color,

  pub unknown: Color,
}

impl Default for TypeColors {
  fn default() -> Self {
    // Colors pulled from Bulbapedia.
    Self {
      normal: Color::Rgb(0xa8, 0xa8, 0x78),
      fighting: Color::Rgb(0xc0, 0x30, 0x28),
      flying: Color::Rgb(0xa9, 0x90, 0xf0),
      poison: Color::Rgb(0xa0, 0x40, 0xa0),
      ground: Color::Rgb(0xe0, 0xc0, 0x68),
      rock: Color::Rgb(0xb8, 0xa0, 0x38),
      bug: Color::Rgb(0xa8, 0xb8, 0x20),
      ghost: Color::Rgb(0x70, 0x58, 0x98),
      steel: Color::Rgb(0xb8, 0xb8, 0xd0),
      fire: Color::Rgb(0xf0, 0x80, 0x30),
      water: Color::Rgb(0x68, 0x90, 0xf0),
      grass: Color::Rgb(0x78, 0xc8, 0x50),
      electric: Color::Rgb(0xf8, 0xd0, 0x30),
      psychic: Color::Rgb(0xf8, 0x58, 0x88),
      ice: Color::Rgb(0x98, 0xd8, 0xd8),
      dragon: Color::Rgb(0x70, 0x38, 0xf8),
      dark: Color::Rgb(0x70, 0x58, 0x48),
      fairy: Color::Rgb(0xee, 0x99, 0xac),

      unknown: Color::Rgb(0x68, 0xa0, 0x90),
    }
  }
}

impl TypeColors {
  /// Looks up the color for the type with API name `ty`.
  pub fn get(self, ty: &str) -> Color {
    match ty {
      "normal" => self.normal,
      "fighting" => self.fighting,
      "flying" => self.flying,
      "poison" => self.poison,
      "ground" => self.ground,
      "rock" => self.rock,
      "bug" => self.bug,
      "ghost" => self.ghost,
      "steel" => self.steel,
      "fire" => self.fire,
      "water" => self.water,
      "grass" => self.grass,
      "electric" => self.electric,
      "psychic" => self.psychic,
      "ice" => self.ice,
      "dragon" => self.dragon,
      "dark" => self.dark,
      "fairy" => self.fairy,
      _ => self.unknown,
    }
  }
}

/// Arguments for [`Component::process_event()`].
pub struct EventArgs<'app> {
  pub event: &'app Event,
  pub dex: &'app Dex,
  pub commands: &'app mut CommandBuffer,
}

/// Arguments for [`Component::render()`].
pub struct RenderArgs<'app> {
  pub dex: &'app Dex,
  pub rect: Rect,
  pub output: &'app mut Buffer,
  pub frame_number: usize,
  pub style_sheet: &'app StyleSheet,
}

impl RenderArgs<'_> {
  /// Returns a copy of these arguments pointed at a different rectangle.
  pub fn with_rect(&mut self, rect: Rect) -> RenderArgs<'_> {
    RenderArgs {
      dex: self.dex,
      rect,
      output: &mut *self.output,
      frame_number: self.frame_number,
      style_sheet: self.style_sheet,
    }
  }
}

/// A component, which is like a [`Widget`](tui::widgets::Widget) but which
/// can process input and access the [`Dex`].
pub trait Component: Debug {
  /// Processes an event, either mutating own state or issuing a command to
  /// the app.
  fn process_event(&mut self, args: &mut EventArgs) {
    let _ = args;
  }

  /// Renders this component.
  fn render(&mut self, args: &mut RenderArgs);
}
