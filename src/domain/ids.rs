//! DOM identifier synthesis for fragments rendered without an explicit id.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Random hex characters mixed into load-container ids.
const FRAGMENT_ID_RANDOM_LEN: usize = 6;

/// Identifier shared between a trigger element and the markup it targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DomId(String);

impl DomId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generator behind the uniqueness guarantee for synthesized ids.
///
/// The counter is monotonic and never reset for the lifetime of the
/// generator; every identifier-less render consumes one slot, so two
/// concurrent renders can never collide.
#[derive(Debug)]
pub struct DomIdGenerator {
    prefix: String,
    counter: AtomicU64,
}

impl DomIdGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            counter: AtomicU64::new(1),
        }
    }

    /// Next dialog id: `<prefix><n>`, with `n` starting at 1.
    pub fn next_dialog_id(&self) -> DomId {
        let sequence = self.next_sequence();
        DomId::new(format!("{}{sequence}", self.prefix))
    }

    /// Next load-container id: `n` + random hex + sequence. The random
    /// component disperses ids across worker processes; the sequence
    /// carries the in-process uniqueness invariant.
    pub fn next_fragment_id(&self) -> DomId {
        let sequence = self.next_sequence();
        let entropy = Uuid::new_v4().simple().to_string();
        DomId::new(format!("n{}{sequence}", &entropy[..FRAGMENT_ID_RANDOM_LEN]))
    }

    fn next_sequence(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn dialog_ids_are_prefixed_and_sequential() {
        let generator = DomIdGenerator::new("popup-modal");
        assert_eq!(generator.next_dialog_id().as_str(), "popup-modal1");
        assert_eq!(generator.next_dialog_id().as_str(), "popup-modal2");
    }

    #[test]
    fn fragment_ids_never_repeat() {
        let generator = DomIdGenerator::new("popup-modal");
        let first = generator.next_fragment_id();
        let second = generator.next_fragment_id();
        assert!(first.as_str().starts_with('n'));
        assert_ne!(first, second);
    }

    #[test]
    fn concurrent_synthesis_stays_unique() {
        let generator = Arc::new(DomIdGenerator::new("popup-modal"));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let generator = Arc::clone(&generator);
                thread::spawn(move || {
                    (0..64)
                        .map(|_| generator.next_dialog_id().as_str().to_string())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for id in handle.join().expect("worker thread panicked") {
                assert!(seen.insert(id), "duplicate synthesized id");
            }
        }
        assert_eq!(seen.len(), 8 * 64);
    }
}
