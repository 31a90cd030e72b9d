//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use super::format::{Cassette, Interaction};

/// Replays a cassette as independent queues, one per `(port, method)` pair.
///
/// A generator that draws `below` and `random_bytes` in a different
/// interleaving than the recording still receives the right values, as long
/// as each method is called the same number of times.
#[derive(Debug, Default)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
}

impl CassetteReplayer {
    /// Build a replayer holding every interaction of `cassette`.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        Self::filtered(cassette, |_| true)
    }

    /// Build a replayer holding only the interactions recorded for `port`.
    #[must_use]
    pub fn for_port(cassette: &Cassette, port: &str) -> Self {
        Self::filtered(cassette, |i| i.port == port)
    }

    fn filtered(cassette: &Cassette, keep: impl Fn(&Interaction) -> bool) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in cassette.interactions.iter().filter(|i| keep(i)) {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues }
    }

    /// Pop the next interaction recorded for `port`/`method`.
    ///
    /// # Panics
    ///
    /// Panics when the cassette has no (more) interactions for the pair. A
    /// replay that asks for more than was recorded cannot reproduce the run.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Interaction {
        let key = (port.to_string(), method.to_string());
        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            panic!(
                "Cassette exhausted: no interactions recorded for {port}::{method}. \
                 Available: [{}]",
                available.join(", ")
            );
        };
        queue.pop_front().unwrap_or_else(|| {
            panic!("Cassette exhausted: every {port}::{method} interaction has been consumed")
        })
    }
}
