//! In-memory news/rules/wiki store edited from the admin panel
//!
//! Content lives for the process lifetime only and reverts to the seed data
//! on restart.

use chrono::Local;
use log::info;
use shared::{default_news, default_rules, default_wiki_sections, NewsItem, NewsTag, Rule, WikiSection};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("title and content are required")]
    EmptyNews,
    #[error("title and text are required")]
    EmptyRule,
}

pub struct ContentStore {
    news: Vec<NewsItem>,
    rules: Vec<Rule>,
    wiki: Vec<WikiSection>,
    next_news_id: u32,
    next_rule_id: u32,
}

impl ContentStore {
    pub fn new() -> Self {
        let news = default_news();
        let rules = default_rules();
        let next_news_id = news.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let next_rule_id = rules.iter().map(|r| r.id).max().unwrap_or(0) + 1;

        Self {
            news,
            rules,
            wiki: default_wiki_sections(),
            next_news_id,
            next_rule_id,
        }
    }

    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    /// The entries shown on the home page, newest first.
    pub fn latest_news(&self, count: usize) -> &[NewsItem] {
        &self.news[..count.min(self.news.len())]
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn wiki_sections(&self) -> &[WikiSection] {
        &self.wiki
    }

    /// Publishes a news entry stamped with today's date.
    pub fn add_news(
        &mut self,
        title: &str,
        content: &str,
        tag: NewsTag,
    ) -> Result<&NewsItem, ContentError> {
        if title.is_empty() || content.is_empty() {
            return Err(ContentError::EmptyNews);
        }

        let item = NewsItem {
            id: self.next_news_id,
            title: title.to_string(),
            date: Local::now().format("%-d %B %Y").to_string(),
            content: content.to_string(),
            tag,
        };
        self.next_news_id += 1;
        info!("news '{}' published ({})", item.title, item.tag);

        // Newest first, so the home page picks it up.
        self.news.insert(0, item);
        Ok(&self.news[0])
    }

    pub fn add_rule(&mut self, title: &str, text: &str) -> Result<&Rule, ContentError> {
        if title.is_empty() || text.is_empty() {
            return Err(ContentError::EmptyRule);
        }

        let rule = Rule {
            id: self.next_rule_id,
            title: title.to_string(),
            text: text.to_string(),
        };
        self.next_rule_id += 1;
        info!("rule '{}' added", rule.title);

        let index = self.rules.len();
        self.rules.push(rule);
        Ok(&self.rules[index])
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_starts_with_seed_content() {
        let store = ContentStore::new();

        assert_eq!(store.news().len(), 3);
        assert_eq!(store.rules().len(), 4);
        assert_eq!(store.wiki_sections().len(), 4);
    }

    #[test]
    fn test_latest_news_caps_at_available() {
        let store = ContentStore::new();

        assert_eq!(store.latest_news(3).len(), 3);
        assert_eq!(store.latest_news(10).len(), 3);
        assert_eq!(store.latest_news(1)[0].id, store.news()[0].id);
    }

    #[test]
    fn test_add_news_prepends_and_assigns_id() {
        let mut store = ContentStore::new();

        let item = store
            .add_news("Wipe announcement", "Full wipe this Friday.", NewsTag::Update)
            .unwrap();
        assert_eq!(item.id, 4);
        assert!(!item.date.is_empty());

        assert_eq!(store.news().len(), 4);
        assert_eq!(store.news()[0].title, "Wipe announcement");
        assert_eq!(store.latest_news(3)[0].title, "Wipe announcement");
    }

    #[test]
    fn test_add_news_rejects_empty_fields() {
        let mut store = ContentStore::new();

        assert_eq!(
            store.add_news("", "body", NewsTag::Important),
            Err(ContentError::EmptyNews)
        );
        assert_eq!(
            store.add_news("title", "", NewsTag::Important),
            Err(ContentError::EmptyNews)
        );
        assert_eq!(store.news().len(), 3);
    }

    #[test]
    fn test_add_rule_appends_and_assigns_id() {
        let mut store = ContentStore::new();

        let rule = store.add_rule("No multiaccounting", "One account per player.").unwrap();
        assert_eq!(rule.id, 5);

        assert_eq!(store.rules().len(), 5);
        assert_eq!(store.rules().last().unwrap().title, "No multiaccounting");
    }

    #[test]
    fn test_add_rule_rejects_empty_fields() {
        let mut store = ContentStore::new();

        assert_eq!(store.add_rule("", "text"), Err(ContentError::EmptyRule));
        assert_eq!(store.add_rule("title", ""), Err(ContentError::EmptyRule));
        assert_eq!(store.rules().len(), 4);
    }

    #[test]
    fn test_ids_stay_unique_across_inserts() {
        let mut store = ContentStore::new();

        let a = store.add_news("A", "a", NewsTag::Content).unwrap().id;
        let b = store.add_news("B", "b", NewsTag::Content).unwrap().id;
        assert_ne!(a, b);
    }
}
