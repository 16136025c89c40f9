//! Pokemon, the concrete battle-ready forms of a species.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::species::Species;
use crate::model::Resource;

/// A Pokemon ability.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ability;

/// A Pokemon battle statistic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stat;

/// A Pokemon type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Type;

/// A Pokemon move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Move;

/// A method by which a Pokemon learns a move.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LearnMethod;

/// A version group, such as "red-blue".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VersionGroup;

/// A Pokemon: one concrete variety of a [`Species`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Pokemon {
  /// This Pokemon's numeric ID.
  pub id: u32,
  /// This Pokemon's API name.
  pub name: String,
  /// The species this Pokemon belongs to.
  pub species: Resource<Species>,

  /// Height, in decimetres.
  pub height: u32,
  /// Weight, in hectograms.
  pub weight: u32,

  /// Sprites for this Pokemon.
  pub sprites: Sprites,
  /// This Pokemon's types, in slot order.
  pub types: Vec<TypeSlot>,
  /// This Pokemon's possible abilities.
  pub abilities: Vec<AbilitySlot>,
  /// This Pokemon's base stats.
  pub stats: Vec<BaseStat>,
  /// Moves this Pokemon can learn.
  #[serde(default)]
  pub moves: Vec<MoveEntry>,
}

impl Endpoint for Pokemon {
  const NAME: &'static str = "pokemon";
}

/// Sprite URLs for a [`Pokemon`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Sprites {
  /// The default front-facing sprite.
  pub front_default: Option<String>,
}

/// A type in one of a Pokemon's type slots.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TypeSlot {
  /// The slot, starting at 1 for the primary type.
  pub slot: u8,
  /// The type in this slot.
  #[serde(rename = "type")]
  pub ty: Resource<Type>,
}

/// An ability a Pokemon may have.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AbilitySlot {
  /// The ability.
  pub ability: Resource<Ability>,
  /// Whether this is a hidden ability.
  #[serde(default)]
  pub is_hidden: bool,
  /// The slot this ability occupies.
  pub slot: u8,
}

/// A base stat value.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BaseStat {
  /// The stat.
  pub stat: Resource<Stat>,
  /// The base value, in `0..=255`.
  pub base_stat: u8,
  /// The effort points gained by defeating this Pokemon.
  #[serde(default)]
  pub effort: u8,
}

/// A move a Pokemon can learn, and the ways it learns it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveEntry {
  /// The move.
  #[serde(rename = "move")]
  pub mov: Resource<Move>,
  /// How the move is learned in each version group.
  #[serde(rename = "version_group_details")]
  pub details: Vec<MoveLearnDetail>,
}

/// How a move is learned within one version group.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveLearnDetail {
  /// The level the move is learned at; zero for non-level methods.
  #[serde(rename = "level_learned_at")]
  pub level: u32,
  /// The learn method, such as `"level-up"` or `"machine"`.
  #[serde(rename = "move_learn_method")]
  pub method: Resource<LearnMethod>,
  /// The version group this applies to.
  pub version_group: Resource<VersionGroup>,
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_pokemon() {
    let pikachu: Pokemon = serde_json::from_str(fixtures::PIKACHU).unwrap();
    assert_eq!(pikachu.id, 25);
    assert_eq!(pikachu.name, "pikachu");
    assert_eq!(pikachu.height, 4);
    assert_eq!(pikachu.weight, 60);
    assert_eq!(pikachu.types[0].ty.name(), Some("electric"));
    assert!(pikachu.abilities[1].is_hidden);
    assert_eq!(pikachu.stats[2].base_stat, 90);
    assert_eq!(pikachu.stats[2].stat.name(), Some("speed"));
    assert_eq!(pikachu.moves.len(), 4);
    assert_eq!(pikachu.moves[2].details[1].level, 10);
    assert_eq!(pikachu.moves[0].details[0].method.name(), Some("machine"));
  }

  #[test]
  fn missing_sprite_and_moves_are_tolerated() {
    let json = r#"{
      "id": 10001,
      "name": "deoxys-attack",
      "height": 17,
      "weight": 608,
      "species": {"name": "deoxys", "url": "https://pokeapi.co/api/v2/pokemon-species/386/"},
      "sprites": {"front_default": null},
      "types": [],
      "abilities": [],
      "stats": []
    }"#;
    let pokemon: Pokemon = serde_json::from_str(json).unwrap();
    assert!(pokemon.sprites.front_default.is_none());
    assert!(pokemon.moves.is_empty());
  }
}
