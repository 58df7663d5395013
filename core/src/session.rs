//! Tab state of the study desk, independent of any rendering.
//!
//! Transitions return the loads they require as [`SessionEffect`]s; the
//! caller runs them against a [`crate::study::StudyDesk`] and feeds results
//! back through the `finish_*` methods.

use std::fmt;
use std::str::FromStr;

use crate::prompt::NewsPeriod;
use crate::research::ResearchAnalysis;
use crate::study::NewsDigest;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Dashboard,
    Research,
    Resources,
    Quiz,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Research, Tab::Resources, Tab::Quiz];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Research => "research",
            Self::Resources => "resources",
            Self::Quiz => "quiz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Daily Dose",
            Self::Research => "Research Lab",
            Self::Resources => "Live Sources",
            Self::Quiz => "Self Test",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown tab: {s}"))
    }
}

/// Work a transition asks the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    LoadNews(NewsPeriod),
    LoadTrending,
    Research(String),
    Quiz(String),
    Speak(String),
}

#[derive(Debug, Clone, Default)]
pub struct StudySession {
    tab: Tab,
    period: NewsPeriod,
    news: Option<NewsDigest>,
    trending: Vec<String>,
    topic: String,
    research: Option<ResearchAnalysis>,
    quiz_text: String,
    loading: bool,
    speaking: bool,
}

impl StudySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn period(&self) -> NewsPeriod {
        self.period
    }

    pub fn news(&self) -> Option<&NewsDigest> {
        self.news.as_ref()
    }

    pub fn trending(&self) -> &[String] {
        &self.trending
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn research(&self) -> Option<&ResearchAnalysis> {
        self.research.as_ref()
    }

    pub fn quiz_text(&self) -> &str {
        &self.quiz_text
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    /// Effects for entering the initial tab.
    pub fn start(&mut self) -> Vec<SessionEffect> {
        self.enter_effects()
    }

    pub fn select_tab(&mut self, tab: Tab) -> Vec<SessionEffect> {
        if tab == self.tab {
            return Vec::new();
        }
        if self.tab == Tab::Research {
            self.research = None;
            self.quiz_text.clear();
        }
        self.tab = tab;
        self.enter_effects()
    }

    fn enter_effects(&self) -> Vec<SessionEffect> {
        match self.tab {
            Tab::Dashboard => vec![SessionEffect::LoadNews(self.period)],
            Tab::Research if self.trending.is_empty() => vec![SessionEffect::LoadTrending],
            _ => Vec::new(),
        }
    }

    pub fn set_news_period(&mut self, period: NewsPeriod) -> Vec<SessionEffect> {
        let changed = period != self.period;
        self.period = period;
        if changed && self.tab == Tab::Dashboard {
            vec![SessionEffect::LoadNews(period)]
        } else {
            Vec::new()
        }
    }

    pub fn finish_news(&mut self, news: Option<NewsDigest>) {
        if news.is_some() {
            self.news = news;
        }
    }

    pub fn finish_trending(&mut self, topics: Vec<String>) {
        self.trending = topics;
    }

    /// Drops the previous result and quiz before the new request starts.
    pub fn begin_research(&mut self, topic: &str) -> Vec<SessionEffect> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Vec::new();
        }
        self.topic = topic.to_string();
        self.research = None;
        self.quiz_text.clear();
        self.loading = true;
        vec![SessionEffect::Research(self.topic.clone())]
    }

    /// `None` means the request failed; the view shows no result.
    pub fn finish_research(&mut self, result: Option<ResearchAnalysis>) {
        self.loading = false;
        self.research = result;
    }

    pub fn begin_quiz(&mut self) -> Vec<SessionEffect> {
        if self.topic.is_empty() || self.loading {
            return Vec::new();
        }
        self.quiz_text.clear();
        self.loading = true;
        vec![SessionEffect::Quiz(self.topic.clone())]
    }

    pub fn finish_quiz(&mut self, text: String) {
        self.loading = false;
        self.quiz_text = text;
    }

    /// Refused while nothing is researched or a speech is already playing.
    pub fn begin_speech(&mut self) -> Vec<SessionEffect> {
        if self.speaking {
            return Vec::new();
        }
        let Some(result) = &self.research else {
            return Vec::new();
        };
        self.speaking = true;
        vec![SessionEffect::Speak(result.summary.clone())]
    }

    pub fn finish_speech(&mut self) {
        self.speaking = false;
    }
}
