//! Summaries of a species for an "about" page.

use crate::display;
use crate::model::text;
use crate::model::Species;

/// Descriptive information about a species.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpeciesInfo {
  /// The English genus, such as "Seed Pokémon".
  pub genus: Option<String>,
  /// The API name of the generation the species was introduced in.
  pub generation: String,
  /// The API name of the species' habitat, if it has one.
  pub habitat: Option<String>,
  /// API names of the species' egg groups.
  pub egg_groups: Vec<String>,
  /// The API name of the species' growth rate.
  pub growth_rate: String,
  /// The species' capture rate.
  pub capture_rate: u32,
  /// The species' base happiness, if the service knows it.
  pub base_happiness: Option<u32>,
  /// The first English Pokedex entry, with line breaks flattened.
  pub description: Option<String>,
}

impl From<&Species> for SpeciesInfo {
  fn from(species: &Species) -> Self {
    Self {
      genus: text::first_in(&species.genus, text::ENGLISH)
        .map(|g| g.genus.clone()),
      generation: species.generation.name().unwrap_or_default().to_string(),
      habitat: species
        .habitat
        .as_ref()
        .and_then(|h| h.name())
        .map(String::from),
      egg_groups: species
        .egg_groups
        .iter()
        .filter_map(|g| g.name())
        .map(String::from)
        .collect(),
      growth_rate: species.growth_rate.name().unwrap_or_default().to_string(),
      capture_rate: species.capture_rate,
      base_happiness: species.base_happiness,
      description: text::first_in(&species.flavor_text, text::ENGLISH)
        .map(|t| display::clean_flavor_text(&t.flavor_text)),
    }
  }
}
