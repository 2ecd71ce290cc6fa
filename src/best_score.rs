//! Best score tracking
//!
//! Persisted as a single JSON integer under `HIGH_SCORE_KEY`. Lower is
//! better; a tie never overwrites the stored value.

use crate::consts::HIGH_SCORE_KEY;
use crate::platform::Storage;

/// Fewest guesses any finished session has needed
#[derive(Debug)]
pub struct BestScore<T: Storage> {
    storage: T,
    best: Option<u32>,
}

impl<T: Storage> BestScore<T> {
    /// Read the stored best score (corrupt data counts as none)
    pub fn load(storage: T) -> Self {
        let best = match storage.get_item(HIGH_SCORE_KEY) {
            Some(json) => match serde_json::from_str::<u32>(&json) {
                Ok(score) => {
                    log::info!("Loaded best score: {}", score);
                    Some(score)
                }
                Err(e) => {
                    log::warn!("Ignoring unreadable best score {:?}: {}", json, e);
                    None
                }
            },
            None => {
                log::info!("No best score found, starting fresh");
                None
            }
        };

        Self { storage, best }
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Store `count` if it beats the current best, returning the best after
    /// the update
    pub fn record_if_better(&mut self, count: u32) -> u32 {
        match self.best {
            Some(best) if count >= best => best,
            _ => {
                self.best = Some(count);
                self.save(count);
                count
            }
        }
    }

    /// Storage failures are logged and otherwise ignored
    fn save(&mut self, count: u32) {
        let json = match serde_json::to_string(&count) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Failed to encode best score: {}", e);
                return;
            }
        };

        match self.storage.set_item(HIGH_SCORE_KEY, &json) {
            Ok(()) => log::info!("Best score saved ({})", count),
            Err(e) => log::warn!("Best score not saved: {}", e),
        }
    }

    pub fn storage(&self) -> &T {
        &self.storage
    }
}
