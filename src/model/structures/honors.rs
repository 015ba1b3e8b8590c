use super::{scoring::event_key, special::Special};
use crate::model::aliases::AliasTable;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One declared honor: this player earned these specials at this event.
/// Honors are declared explicitly in configuration; absence means none.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HonorDeclaration {
    pub event: String,
    pub player: String,
    #[serde(default)]
    pub specials: Vec<Special>
}

#[derive(Debug, Clone)]
pub struct DeclaredHonor {
    /// The player's name as declared, before identity resolution
    pub player: String,
    pub specials: Vec<Special>
}

/// Declared specials indexed by event and canonical player key.
#[derive(Debug, Clone, Default)]
pub struct HonorsTable {
    by_event: HashMap<String, IndexMap<String, DeclaredHonor>>
}

impl HonorsTable {
    pub fn build(declarations: Vec<HonorDeclaration>, aliases: &AliasTable) -> HonorsTable {
        let mut by_event: HashMap<String, IndexMap<String, DeclaredHonor>> = HashMap::new();

        for declaration in declarations {
            let event = event_key(&declaration.event);
            let player_key = aliases.key(&declaration.player);

            let entry = by_event
                .entry(event)
                .or_default()
                .entry(player_key)
                .or_insert_with(|| DeclaredHonor {
                    player: declaration.player.clone(),
                    specials: Vec::new()
                });

            for special in declaration.specials {
                if !entry.specials.contains(&special) {
                    entry.specials.push(special);
                }
            }
        }

        HonorsTable { by_event }
    }

    /// Specials declared for a player at an event; empty when none.
    pub fn specials_for(&self, event: &str, player_key: &str) -> &[Special] {
        self.by_event
            .get(&event_key(event))
            .and_then(|players| players.get(player_key))
            .map(|honor| honor.specials.as_slice())
            .unwrap_or(&[])
    }

    /// All declarations for one event, in declaration order.
    pub fn declarations_for<'a>(&'a self, event: &str) -> impl Iterator<Item = (&'a String, &'a DeclaredHonor)> + 'a {
        self.by_event.get(&event_key(event)).into_iter().flatten()
    }
}
