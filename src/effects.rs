//! Effect runner
//!
//! Executes the effect descriptors produced by [`Game::guess`] outside the
//! pure transition. A game-over effect fans out into independent
//! fire-and-forget jobs: a dictionary lookup at every terminal, plus a
//! persistence upsert for won games only. Each runs on its own thread,
//! none can touch game state, and a failure in any is logged and swallowed.
//!
//! Lookup results come back over a channel tagged with the word they were
//! fetched for, so a shell that has already moved on to a new game can
//! recognize and discard stale responses.

use crate::core::{Effect, GameResult};
use crate::dictionary::{Dictionary, DictionaryEntry};
use crate::persistence::WordStore;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread;

/// An asynchronous result delivered back to the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EffectEvent {
    /// Dictionary entries for `word`. Shells must check that `word` is
    /// still the current game's word before displaying anything.
    Definitions {
        word: String,
        entries: Vec<DictionaryEntry>,
    },
}

/// Runs effects on background threads and collects their results
pub struct EffectRunner {
    dictionary: Option<Arc<dyn Dictionary + Send + Sync>>,
    store: Option<Arc<dyn WordStore + Send + Sync>>,
    tx: Sender<EffectEvent>,
    rx: Receiver<EffectEvent>,
}

impl EffectRunner {
    /// Build a runner over the available collaborators
    ///
    /// Either collaborator may be absent (offline mode, unconfigured
    /// store); the corresponding job is then skipped entirely.
    #[must_use]
    pub fn new(
        dictionary: Option<Arc<dyn Dictionary + Send + Sync>>,
        store: Option<Arc<dyn WordStore + Send + Sync>>,
    ) -> Self {
        let (tx, rx) = channel();
        Self {
            dictionary,
            store,
            tx,
            rx,
        }
    }

    /// Execute a batch of effects from one transition
    ///
    /// The dictionary is consulted for every finished game; only winning
    /// words join the remote collection. Returns immediately; results, if
    /// any, arrive via [`Self::poll`].
    pub fn dispatch(&self, effects: &[Effect]) {
        for effect in effects {
            match effect {
                Effect::GameOver { word, result } => {
                    self.lookup(word.clone());
                    if *result == GameResult::Won {
                        self.persist(word.clone());
                    }
                }
            }
        }
    }

    /// Take the next pending event, if one has arrived
    pub fn poll(&self) -> Option<EffectEvent> {
        self.rx.try_recv().ok()
    }

    fn lookup(&self, word: String) {
        let Some(dictionary) = self.dictionary.clone() else {
            return;
        };
        let tx = self.tx.clone();
        thread::spawn(move || match dictionary.define(&word) {
            Ok(entries) => {
                // Receiver may be gone if the shell already shut down
                let _ = tx.send(EffectEvent::Definitions { word, entries });
            }
            Err(err) => log::warn!("dictionary lookup for {word:?} failed: {err:#}"),
        });
    }

    fn persist(&self, word: String) {
        let Some(store) = self.store.clone() else {
            return;
        };
        thread::spawn(move || {
            if let Err(err) = store.save(&word) {
                log::warn!("failed to persist {word:?}: {err:#}");
            }
        });
    }
}
