//! Localized text entries.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Resource;

/// A language that text can be localized for.
///
/// Only ever referenced through a [`Resource`]; the language's API name
/// (such as `"en"`) is the resource name.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Language;

/// The API name of the English language.
pub const ENGLISH: &str = "en";

/// A genus ("Seed Pokemon") in some language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Genus {
  /// The localized genus.
  pub genus: String,
  /// The language this localization is for.
  pub language: Resource<Language>,
}

/// Pokedex flavor text in some language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FlavorText {
  /// The localized flavor text, with the game's original line breaks.
  pub flavor_text: String,
  /// The language this localization is for.
  pub language: Resource<Language>,
}

/// Types carrying a language tag.
pub trait Localized {
  /// Returns the API name of this text's language.
  fn language(&self) -> Option<&str>;
}

impl Localized for Genus {
  fn language(&self) -> Option<&str> {
    self.language.name()
  }
}

impl Localized for FlavorText {
  fn language(&self) -> Option<&str> {
    self.language.name()
  }
}

/// Returns the first entry of `texts` in the language named `lang`.
pub fn first_in<'a, T: Localized>(texts: &'a [T], lang: &str) -> Option<&'a T> {
  texts.iter().find(|t| t.language() == Some(lang))
}
