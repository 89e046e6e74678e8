//! Keyword-driven reply engine.
//!
//! A message is lower-cased and tested against an ordered rule table; the
//! first rule whose keywords appear in the message produces the reply. When
//! no rule matches, one of a fixed set of filler replies is picked through an
//! injected [`Chooser`]. Time is read only through an injected [`Clock`], so a
//! reply depends on nothing but its inputs and those two collaborators.

pub mod chooser;
pub mod config;
pub mod rules;
pub mod templates;

pub use chooser::{Chooser, FixedChooser, RandomChooser};
pub use config::ResponderConfig;
pub use rules::{default_rules, Intent, Rule, RuleContext};

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::metrics::MetricsSnapshot;
use crate::models::MoodLog;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_debug;

pub struct IntentResponder {
    rules: Vec<Rule>,
    config: ResponderConfig,
    clock: Arc<dyn Clock>,
    chooser: Arc<dyn Chooser>,
}

impl IntentResponder {
    /// Built-in rules, wall clock and a randomly seeded chooser.
    pub fn new(config: ResponderConfig) -> Self {
        Self {
            rules: default_rules(),
            config,
            clock: Arc::new(SystemClock),
            chooser: Arc::new(RandomChooser::new()),
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_chooser(mut self, chooser: Arc<dyn Chooser>) -> Self {
        self.chooser = chooser;
        self
    }

    /// Append a rule after the existing ones. It only fires when no earlier
    /// rule matches.
    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// The intent of the first matching rule, or `Fallback`.
    pub fn classify(&self, message: &str) -> Intent {
        let normalized = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&normalized))
            .map(Rule::intent)
            .unwrap_or(Intent::Fallback)
    }

    pub fn respond(&self, message: &str, metrics: &MetricsSnapshot, mood_log: &MoodLog) -> String {
        self.respond_with_intent(message, metrics, mood_log).1
    }

    /// Like [`respond`](Self::respond) but also reports which intent answered.
    pub fn respond_with_intent(
        &self,
        message: &str,
        metrics: &MetricsSnapshot,
        mood_log: &MoodLog,
    ) -> (Intent, String) {
        let normalized = message.to_lowercase();
        let ctx = RuleContext {
            metrics,
            mood_log,
            config: &self.config,
            clock: self.clock.as_ref(),
        };

        for rule in self.rules.iter().filter(|rule| rule.matches(&normalized)) {
            let reply = rule.apply(&ctx);
            if reply.is_empty() {
                // An empty reply is treated as a non-match.
                log_debug!("rule {:?} produced an empty reply; skipping", rule.intent());
                continue;
            }
            log_debug!("message matched intent {:?}", rule.intent());
            return (rule.intent(), reply);
        }

        log_debug!("no intent matched; using filler");
        (Intent::Fallback, self.filler())
    }

    fn filler(&self) -> String {
        let fillers = &templates::FILLERS;
        let index = self.chooser.choose(fillers.len()) % fillers.len();
        fillers[index].to_string()
    }
}

impl Default for IntentResponder {
    fn default() -> Self {
        Self::new(ResponderConfig::default())
    }
}
