//! Pokemon species, the root structures for Pokemon information.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::evolution::Family;
use crate::model::text::FlavorText;
use crate::model::text::Genus;
use crate::model::Resource;

/// An egg group, which two species must share in order to breed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EggGroup;

/// A generation of games.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Generation;

/// The rate at which a species gains levels.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GrowthRate;

/// A habitat, according to the Pokedex.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Habitat;

/// A Pokemon species.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Species {
  /// This species' numeric ID.
  pub id: u32,
  /// This species' API name.
  pub name: String,

  /// The generation this species was introduced in.
  pub generation: Resource<Generation>,
  /// Egg groups this species belongs to.
  pub egg_groups: Vec<Resource<EggGroup>>,
  /// The rate at which this species gains levels.
  pub growth_rate: Resource<GrowthRate>,
  /// This species' habitat according to the Pokedex, if it has one.
  pub habitat: Option<Resource<Habitat>>,

  /// This species' capture rate.
  pub capture_rate: u32,
  /// This species' base happiness value when first captured.
  ///
  /// Newer species report this as `null`.
  pub base_happiness: Option<u32>,

  /// This species' genus in different languages.
  ///
  /// For example, Bulbasaur is the "Seed Pokemon".
  #[serde(rename = "genera", default)]
  pub genus: Vec<Genus>,
  /// Flavor text for this species in different languages.
  #[serde(rename = "flavor_text_entries", default)]
  pub flavor_text: Vec<FlavorText>,

  /// The evolution chain this species is part of.
  pub evolution_chain: Option<ChainLink>,
}

impl Endpoint for Species {
  const NAME: &'static str = "pokemon-species";
}

/// An unnamed link to an evolution [`Family`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChainLink {
  /// The URL of the family.
  pub url: String,
}

impl ChainLink {
  /// Returns a lazy handle to the linked [`Family`].
  pub fn family(&self) -> crate::api::Lazy<Family> {
    crate::api::Lazy::new(self.url.clone())
  }
}

#[cfg(test)]
pub(crate) mod fixtures {
  /// A trimmed-down `pokemon-species/1` response.
  pub const BULBASAUR: &str = r#"{
    "id": 1,
    "name": "bulbasaur",
    "base_happiness": 50,
    "capture_rate": 45,
    "egg_groups": [
      {"name": "monster", "url": "https://pokeapi.co/api/v2/egg-group/1/"},
      {"name": "plant", "url": "https://pokeapi.co/api/v2/egg-group/7/"}
    ],
    "evolution_chain": {"url": "https://pokeapi.co/api/v2/evolution-chain/1/"},
    "flavor_text_entries": [
      {"flavor_text": "Une graine étrange", "language": {"name": "fr", "url": "https://pokeapi.co/api/v2/language/5/"}, "version": {"name": "x", "url": "https://pokeapi.co/api/v2/version/23/"}},
      {"flavor_text": "A strange seed was\nplanted on its\nback at birth.\u000cThe plant sprouts\nand grows with\nthis POKéMON.", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}, "version": {"name": "red", "url": "https://pokeapi.co/api/v2/version/1/"}},
      {"flavor_text": "It can go for days\nwithout eating.", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}, "version": {"name": "yellow", "url": "https://pokeapi.co/api/v2/version/3/"}}
    ],
    "genera": [
      {"genus": "Pokémon Graine", "language": {"name": "fr", "url": "https://pokeapi.co/api/v2/language/5/"}},
      {"genus": "Seed Pokémon", "language": {"name": "en", "url": "https://pokeapi.co/api/v2/language/9/"}}
    ],
    "generation": {"name": "generation-i", "url": "https://pokeapi.co/api/v2/generation/1/"},
    "growth_rate": {"name": "medium-slow", "url": "https://pokeapi.co/api/v2/growth-rate/4/"},
    "habitat": {"name": "grassland", "url": "https://pokeapi.co/api/v2/pokemon-habitat/3/"},
    "is_legendary": false
  }"#;
}
