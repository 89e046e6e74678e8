use chrono::{DateTime, Utc};

use crate::clock::Clock;
use crate::metrics::{AddictionLevel, MetricsSnapshot};
use crate::models::MoodLog;
use crate::responder::config::ResponderConfig;
use crate::responder::templates;

/// What a message is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    ScreenTime,
    Addiction,
    Unlocks,
    Tips,
    Mood,
    /// A rule added by the embedding application.
    Custom(&'static str),
    /// Nothing matched; a filler reply is used.
    Fallback,
}

/// Everything a rule handler may read while building its reply.
pub struct RuleContext<'a> {
    pub metrics: &'a MetricsSnapshot,
    pub mood_log: &'a MoodLog,
    pub config: &'a ResponderConfig,
    pub clock: &'a dyn Clock,
}

pub type Handler = Box<dyn Fn(&RuleContext<'_>) -> String + Send + Sync>;

/// A keyword predicate paired with the handler that answers it.
pub struct Rule {
    intent: Intent,
    keywords: Vec<String>,
    handler: Handler,
}

impl Rule {
    pub fn new<F>(intent: Intent, keywords: &[&str], handler: F) -> Self
    where
        F: Fn(&RuleContext<'_>) -> String + Send + Sync + 'static,
    {
        Self {
            intent,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            handler: Box::new(handler),
        }
    }

    pub fn intent(&self) -> Intent {
        self.intent
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// `message` must already be lower-cased.
    pub fn matches(&self, message: &str) -> bool {
        self.keywords.iter().any(|k| message.contains(k.as_str()))
    }

    pub fn apply(&self, ctx: &RuleContext<'_>) -> String {
        (self.handler)(ctx)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("intent", &self.intent)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

/// Built-in rules in priority order. The first match wins.
pub fn default_rules() -> Vec<Rule> {
    vec![
        Rule::new(Intent::ScreenTime, &["screen time", "usage"], screen_time),
        Rule::new(Intent::Addiction, &["addiction", "addicted"], addiction),
        Rule::new(Intent::Unlocks, &["unlock", "check"], unlocks),
        Rule::new(Intent::Tips, &["help", "tip", "advice"], |_| {
            templates::TIPS.to_string()
        }),
        Rule::new(Intent::Mood, &["feel", "mood"], mood),
    ]
}

fn screen_time(ctx: &RuleContext<'_>) -> String {
    let label = ctx.metrics.screen_time_label();
    if ctx.metrics.screen_time_minutes > ctx.config.healthy_screen_time_minutes {
        templates::screen_time_high(&label)
    } else {
        templates::screen_time_healthy(&label)
    }
}

fn addiction(ctx: &RuleContext<'_>) -> String {
    match ctx.metrics.addiction_level {
        AddictionLevel::High => templates::ADDICTION_HIGH,
        AddictionLevel::Medium => templates::ADDICTION_MEDIUM,
        AddictionLevel::Low => templates::ADDICTION_LOW,
    }
    .to_string()
}

fn unlocks(ctx: &RuleContext<'_>) -> String {
    let count = ctx.metrics.unlock_count;
    if count > ctx.config.unlock_threshold {
        templates::unlocks_frequent(count)
    } else {
        templates::unlocks_reasonable(count)
    }
}

fn mood(ctx: &RuleContext<'_>) -> String {
    match ctx.mood_log.last() {
        Some(last) => {
            let minutes = minutes_since(last.timestamp, ctx.clock.now());
            templates::last_mood(last.mood, minutes)
        }
        None => templates::NO_MOOD_YET.to_string(),
    }
}

/// Whole minutes from `then` to `now`, rounded to nearest and never negative.
pub fn minutes_since(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (now - then).num_milliseconds();
    if millis <= 0 {
        return 0;
    }
    (millis as f64 / 60_000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_minutes_since_rounds_to_nearest() {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        assert_eq!(minutes_since(t0, t0), 0);
        assert_eq!(minutes_since(t0, t0 + Duration::seconds(29)), 0);
        assert_eq!(minutes_since(t0, t0 + Duration::seconds(30)), 1);
        assert_eq!(minutes_since(t0, t0 + Duration::seconds(89)), 1);
        assert_eq!(minutes_since(t0, t0 + Duration::minutes(42)), 42);
        assert_eq!(minutes_since(t0, t0 - Duration::minutes(3)), 0);
    }

    #[test]
    fn test_rule_matching_expects_lowercase_input() {
        let rule = Rule::new(Intent::Custom("sleep"), &["Bedtime"], |_| "zz".into());
        assert_eq!(rule.keywords(), &["bedtime".to_string()]);
        assert!(rule.matches("when is bedtime?"));
        assert!(!rule.matches("what time is it?"));
    }

    #[test]
    fn test_default_rules_priority_order() {
        let intents: Vec<Intent> = default_rules().iter().map(Rule::intent).collect();
        assert_eq!(
            intents,
            vec![
                Intent::ScreenTime,
                Intent::Addiction,
                Intent::Unlocks,
                Intent::Tips,
                Intent::Mood
            ]
        );
    }
}
