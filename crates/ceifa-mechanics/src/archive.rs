//! Named battle snapshots.
//!
//! Persistence is explicit: the caller decides when to archive and when
//! to restore. Loading fully replaces the live state; saving and
//! deleting are plain list operations over the archive.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::encounter::CombatState;
use crate::error::CombatResult;

/// A named, timestamped snapshot of an encounter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedBattle {
    /// Creation timestamp in milliseconds, used as the snapshot id.
    pub id: i64,
    /// Free-text name.
    pub name: String,
    /// The archived state.
    pub state: CombatState,
}

/// An ordered list of saved battles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BattleArchive {
    battles: Vec<SavedBattle>,
}

impl BattleArchive {
    /// Create an empty archive.
    pub fn new() -> Self {
        Self::default()
    }

    /// All saved battles, oldest first.
    pub fn battles(&self) -> &[SavedBattle] {
        &self.battles
    }

    /// Number of saved battles.
    pub fn len(&self) -> usize {
        self.battles.len()
    }

    /// Whether the archive is empty.
    pub fn is_empty(&self) -> bool {
        self.battles.is_empty()
    }

    /// Archive a deep copy of the state under a name. Returns the new
    /// snapshot's id; ids are strictly increasing even within one
    /// millisecond.
    pub fn save(&mut self, name: impl Into<String>, state: &CombatState) -> i64 {
        let mut id = Utc::now().timestamp_millis();
        if let Some(last) = self.battles.last()
            && id <= last.id
        {
            id = last.id + 1;
        }
        self.battles.push(SavedBattle {
            id,
            name: name.into(),
            state: state.clone(),
        });
        id
    }

    /// Look up a snapshot by id.
    pub fn get(&self, id: i64) -> Option<&SavedBattle> {
        self.battles.iter().find(|b| b.id == id)
    }

    /// Delete a snapshot by id.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.battles.len();
        self.battles.retain(|b| b.id != id);
        self.battles.len() != before
    }

    /// Serialize the whole archive to JSON.
    pub fn to_json(&self) -> CombatResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode an archive from JSON. Malformed input is rejected whole;
    /// nothing is partially applied.
    pub fn from_json(json: &str) -> CombatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
