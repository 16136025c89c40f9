//! Evolution, ways that different Pokemon within an evolution family are
//! related.

use serde::Deserialize;
use serde::Serialize;

use crate::api::Endpoint;
use crate::model::species::Species;
use crate::model::Resource;

/// An item, such as an evolution stone.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item;

/// An event that can trigger evolution.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trigger;

/// A family of Pokemon related by evolution.
///
/// This structure forms a tree rooted at the "base" stage for this Pokemon.
/// For example, Pikachu's family is rooted at Pichu.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Family {
  /// This family's numeric ID.
  pub id: u32,
  /// The base stage for this family.
  #[serde(rename = "chain")]
  pub base_stage: Stage,
}

impl Endpoint for Family {
  const NAME: &'static str = "evolution-chain";
}

/// A stage within an evolution [`Family`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stage {
  /// Whether this is a baby Pokemon stage.
  #[serde(default)]
  pub is_baby: bool,
  /// The species at this stage.
  pub species: Resource<Species>,
  /// Conditions that can move the previous stage to this one.
  ///
  /// There may be more than one condition; for example, Milotic can evolve from
  /// Feebas either by holding a Prism Scale, or by having maxed-out Beauty.
  #[serde(rename = "evolution_details", default)]
  pub conditions: Vec<Condition>,
  /// Stages that this species can evolve into.
  #[serde(default)]
  pub evolves_to: Vec<Stage>,
}

/// A set of conditions that must all hold for a particular [`Stage`] to be
/// reached.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Condition {
  /// The event that triggers the evolution (such as a level-up).
  pub trigger: Resource<Trigger>,
  /// The minimum level during the trigger.
  pub min_level: Option<u32>,
  /// An item that can be used to directly trigger evolution.
  pub item: Option<Resource<Item>>,
  /// An item that must be held during the trigger.
  pub held_item: Option<Resource<Item>>,
  /// The minimum happiness level during the trigger.
  pub min_happiness: Option<u32>,
  /// The time of day it must be during the trigger; empty when any.
  #[serde(default)]
  pub time_of_day: String,
}

#[cfg(test)]
pub(crate) mod fixtures {
  /// A trimmed-down `evolution-chain/1` response.
  pub const BULBASAUR_FAMILY: &str = r#"{
    "id": 1,
    "baby_trigger_item": null,
    "chain": {
      "is_baby": false,
      "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
      "evolution_details": [],
      "evolves_to": [
        {
          "is_baby": false,
          "species": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"},
          "evolution_details": [
            {"min_level": 16, "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"}, "item": null, "held_item": null, "min_happiness": null, "time_of_day": "", "gender": null}
          ],
          "evolves_to": [
            {
              "is_baby": false,
              "species": {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon-species/3/"},
              "evolution_details": [
                {"min_level": 32, "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"}, "item": null, "held_item": null, "min_happiness": null, "time_of_day": ""}
              ],
              "evolves_to": []
            }
          ]
        }
      ]
    }
  }"#;

  /// A trimmed-down `evolution-chain/67` response, with branching children.
  pub const EEVEE_FAMILY: &str = r#"{
    "id": 67,
    "chain": {
      "is_baby": false,
      "species": {"name": "eevee", "url": "https://pokeapi.co/api/v2/pokemon-species/133/"},
      "evolution_details": [],
      "evolves_to": [
        {
          "species": {"name": "vaporeon", "url": "https://pokeapi.co/api/v2/pokemon-species/134/"},
          "evolution_details": [
            {"min_level": null, "trigger": {"name": "use-item", "url": "https://pokeapi.co/api/v2/evolution-trigger/3/"}, "item": {"name": "water-stone", "url": "https://pokeapi.co/api/v2/item/84/"}, "held_item": null, "min_happiness": null, "time_of_day": ""}
          ],
          "evolves_to": []
        },
        {
          "species": {"name": "espeon", "url": "https://pokeapi.co/api/v2/pokemon-species/196/"},
          "evolution_details": [
            {"min_level": null, "trigger": {"name": "level-up", "url": "https://pokeapi.co/api/v2/evolution-trigger/1/"}, "item": null, "held_item": null, "min_happiness": 160, "time_of_day": "day"}
          ],
          "evolves_to": []
        }
      ]
    }
  }"#;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn decodes_family() {
    let family: Family =
      serde_json::from_str(fixtures::BULBASAUR_FAMILY).unwrap();
    assert_eq!(family.id, 1);

    let base = &family.base_stage;
    assert_eq!(base.species.name(), Some("bulbasaur"));
    assert!(base.conditions.is_empty());

    let ivysaur = &base.evolves_to[0];
    assert_eq!(ivysaur.conditions[0].trigger.name(), Some("level-up"));
    assert_eq!(ivysaur.conditions[0].min_level, Some(16));
    assert_eq!(ivysaur.evolves_to[0].species.name(), Some("venusaur"));
  }

  #[test]
  fn decodes_item_conditions() {
    let family: Family = serde_json::from_str(fixtures::EEVEE_FAMILY).unwrap();
    let vaporeon = &family.base_stage.evolves_to[0].conditions[0];
    assert_eq!(vaporeon.item.as_ref().and_then(|i| i.name()), Some("water-stone"));
    assert!(vaporeon.min_level.is_none());

    let espeon = &family.base_stage.evolves_to[1].conditions[0];
    assert_eq!(espeon.min_happiness, Some(160));
    assert_eq!(espeon.time_of_day, "day");
  }
}
