//! Interactive story reader

use super::{ActivityKind, ActivityOutcome};
use crate::models::catalog::{StoryPage, STORY_PAGES};
use crate::util::fill_name;

pub const STORY_EXPERIENCE: u64 = 50;
pub const STORY_BADGE: &str = "Story Master";
pub const STORY_ITEM: &str = "Magical Crystal";

#[derive(Debug, Clone)]
pub struct StoryRun {
    pages: &'static [StoryPage],
    current: usize,
    correct_choices: usize,
}

impl StoryRun {
    pub fn new() -> Self {
        Self {
            pages: STORY_PAGES,
            current: 0,
            correct_choices: 0,
        }
    }

    pub fn page(&self) -> &StoryPage {
        &self.pages[self.current]
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn correct_choices(&self) -> usize {
        self.correct_choices
    }

    /// Page text with the reader's name filled in
    pub fn text_for(&self, name: &str) -> String {
        fill_name(self.page().text, name)
    }

    /// Pick an option on a question page and turn the page
    pub fn choose(&mut self, option: usize) -> Option<ActivityOutcome> {
        let (_, correct) = self.page().choices?;
        if option == correct {
            self.correct_choices += 1;
        }
        self.turn()
    }

    /// Turn a page without a question. Question pages need `choose`.
    pub fn advance(&mut self) -> Option<ActivityOutcome> {
        if self.page().choices.is_some() {
            return None;
        }
        self.turn()
    }

    fn turn(&mut self) -> Option<ActivityOutcome> {
        if self.current + 1 < self.pages.len() {
            self.current += 1;
            None
        } else {
            Some(
                ActivityOutcome::new(ActivityKind::Story, STORY_EXPERIENCE)
                    .with_badge(STORY_BADGE)
                    .with_item(STORY_ITEM),
            )
        }
    }
}

impl Default for StoryRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_to_the_end() {
        let mut story = StoryRun::new();
        let outcome = loop {
            let step = match story.page().choices {
                Some((_, correct)) => story.choose(correct),
                None => story.advance(),
            };
            if let Some(outcome) = step {
                break outcome;
            }
        };

        assert_eq!(story.correct_choices(), 2);
        assert_eq!(outcome.kind, ActivityKind::Story);
        assert_eq!(outcome.experience, 50);
        assert_eq!(outcome.badges, vec![STORY_BADGE.to_string()]);
        assert_eq!(outcome.items, vec![STORY_ITEM.to_string()]);
    }

    #[test]
    fn test_question_page_blocks_advance() {
        let mut story = StoryRun::new();
        story.advance();
        story.advance();
        assert!(story.page().choices.is_some());
        assert!(story.advance().is_none());
        assert_eq!(story.position(), 2);

        story.choose(1);
        assert_eq!(story.position(), 3);
        assert_eq!(story.correct_choices(), 0);
    }

    #[test]
    fn test_name_substitution() {
        let story = StoryRun::new();
        let text = story.text_for("Mia");
        assert!(text.contains("explorer named Mia"));
        assert!(!text.contains("{name}"));
    }
}
