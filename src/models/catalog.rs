//! Static content tables
//!
//! Option lists, question banks, the story library with its pages, and
//! the mocked report numbers the screens display.

/// A selectable avatar part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarOption {
    pub id: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const BODY_OPTIONS: &[AvatarOption] = &[
    AvatarOption { id: "default", label: "Smiley", emoji: "🙂" },
    AvatarOption { id: "happy", label: "Happy", emoji: "😊" },
    AvatarOption { id: "cool", label: "Cool", emoji: "😎" },
    AvatarOption { id: "star", label: "Star", emoji: "🌟" },
];

pub const HAIR_OPTIONS: &[AvatarOption] = &[
    AvatarOption { id: "short", label: "Short Hair", emoji: "💇" },
    AvatarOption { id: "long", label: "Long Hair", emoji: "💇‍♀️" },
    AvatarOption { id: "curly", label: "Curly Hair", emoji: "🦱" },
    AvatarOption { id: "cool", label: "Cool Cut", emoji: "✨" },
];

pub const OUTFIT_OPTIONS: &[AvatarOption] = &[
    AvatarOption { id: "casual", label: "Casual", emoji: "👕" },
    AvatarOption { id: "sporty", label: "Sporty", emoji: "⚽" },
    AvatarOption { id: "wizard", label: "Wizard", emoji: "🧙" },
    AvatarOption { id: "superhero", label: "Superhero", emoji: "🦸" },
];

/// Accessories offered by the avatar editor
pub const ACCESSORY_OPTIONS: &[AvatarOption] = &[
    AvatarOption { id: "glasses", label: "Glasses", emoji: "👓" },
    AvatarOption { id: "crown", label: "Crown", emoji: "👑" },
    AvatarOption { id: "cap", label: "Cap", emoji: "🧢" },
    AvatarOption { id: "bow", label: "Bow", emoji: "🎀" },
];

/// Emoji for a body id; unknown ids show the default face
pub fn body_emoji(id: &str) -> &'static str {
    BODY_OPTIONS
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.emoji)
        .unwrap_or("🙂")
}

/// A multiple-choice question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizQuestion {
    pub prompt: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
    pub emoji: &'static str,
}

pub const QUIZ_QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion { prompt: "What is 5 + 3?", options: ["6", "7", "8", "9"], correct: 2, emoji: "🔢" },
    QuizQuestion { prompt: "Which one is a fruit?", options: ["Carrot", "Apple", "Potato", "Onion"], correct: 1, emoji: "🍎" },
    QuizQuestion { prompt: "What color is the sky?", options: ["Green", "Red", "Blue", "Yellow"], correct: 2, emoji: "☁️" },
    QuizQuestion { prompt: "How many legs does a spider have?", options: ["4", "6", "8", "10"], correct: 2, emoji: "🕷️" },
    QuizQuestion { prompt: "What sound does a cat make?", options: ["Woof", "Meow", "Moo", "Oink"], correct: 1, emoji: "🐱" },
];

/// An entry in the quiz or game picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub emoji: &'static str,
}

pub const QUIZ_CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: 1, title: "Space Explorer", category: "Science", difficulty: "Easy", emoji: "🚀" },
    CatalogEntry { id: 2, title: "Number Ninjas", category: "Math", difficulty: "Easy", emoji: "🔢" },
    CatalogEntry { id: 3, title: "Animal Kingdom", category: "Nature", difficulty: "Medium", emoji: "🦁" },
    CatalogEntry { id: 4, title: "Word Wizards", category: "Reading", difficulty: "Medium", emoji: "📖" },
    CatalogEntry { id: 5, title: "World Travelers", category: "Geography", difficulty: "Hard", emoji: "🌍" },
];

pub const GAME_CATALOG: &[CatalogEntry] = &[
    CatalogEntry { id: 1, title: "Fruit Memory", category: "Memory", difficulty: "Easy", emoji: "🍎" },
    CatalogEntry { id: 2, title: "Shape Match", category: "Memory", difficulty: "Easy", emoji: "🔷" },
    CatalogEntry { id: 3, title: "Animal Pairs", category: "Memory", difficulty: "Medium", emoji: "🐶" },
    CatalogEntry { id: 4, title: "Number Flip", category: "Math", difficulty: "Hard", emoji: "🧮" },
];

/// A story in the reading library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryEntry {
    pub id: u32,
    pub title: &'static str,
    pub author: &'static str,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub chapters: u32,
    pub minutes: u32,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub const STORY_CATALOG: &[StoryEntry] = &[
    StoryEntry { id: 1, title: "Space Adventure", author: "Alex Starwalker", category: "Sci-Fi", difficulty: "Easy", chapters: 10, minutes: 15, emoji: "🚀", description: "Journey to distant galaxies and discover alien worlds!" },
    StoryEntry { id: 2, title: "Magical Forest", author: "Emma Greenleaf", category: "Fantasy", difficulty: "Medium", chapters: 15, minutes: 25, emoji: "🌳", description: "Enter an enchanted forest full of magical creatures and secrets." },
    StoryEntry { id: 3, title: "World Explorer", author: "Leo Navigator", category: "Adventure", difficulty: "Hard", chapters: 20, minutes: 12, emoji: "🗺️", description: "Travel across continents and learn about different cultures." },
    StoryEntry { id: 4, title: "Dragon Kingdom", author: "Dragon Master", category: "Fantasy", difficulty: "Hard", chapters: 8, minutes: 15, emoji: "🐉", description: "A tale of dragons, knights, and ancient kingdoms." },
    StoryEntry { id: 5, title: "Ocean Deep", author: "Marina Blue", category: "Adventure", difficulty: "Easy", chapters: 10, minutes: 5, emoji: "🌊", description: "Dive into the deep sea and discover amazing marine life." },
    StoryEntry { id: 6, title: "Friendship Tales", author: "Kindness Crew", category: "Heartwarming", difficulty: "Medium", chapters: 12, minutes: 8, emoji: "👫", description: "Beautiful stories about friendship and kindness." },
    StoryEntry { id: 7, title: "Mystery Island", author: "Detective Max", category: "Mystery", difficulty: "Easy", chapters: 10, minutes: 6, emoji: "🏝️", description: "Solve puzzles and uncover secrets on a mysterious island." },
    StoryEntry { id: 8, title: "Starry Night", author: "Sleepy Owl", category: "Bedtime", difficulty: "Easy", chapters: 10, minutes: 5, emoji: "✨", description: "Gentle stories perfect for bedtime reading." },
];

/// Something a picker can list, filter and search
pub trait Listing {
    fn category(&self) -> &str;

    /// Whether the entry matches an already lowercased search query
    fn matches(&self, query: &str) -> bool;

    /// One line in the picker list
    fn row(&self) -> String;
}

impl Listing for CatalogEntry {
    fn category(&self) -> &str {
        self.category
    }

    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
    }

    fn row(&self) -> String {
        format!(
            "{}  {:<18} {:<10} {}",
            self.emoji, self.title, self.category, self.difficulty
        )
    }
}

impl Listing for StoryEntry {
    fn category(&self) -> &str {
        self.category
    }

    // Stories are found by author too
    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.author.to_lowercase().contains(query)
    }

    fn row(&self) -> String {
        format!(
            "{}  {:<18} {:<16} {:<12} {:<6} {} ch, {} min",
            self.emoji,
            self.title,
            self.author,
            self.category,
            self.difficulty,
            self.chapters,
            self.minutes
        )
    }
}

/// Filter a catalog by category ("All" keeps everything) and a
/// case-insensitive search
pub fn filter_catalog<'a, T: Listing>(catalog: &'a [T], category: &str, query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    catalog
        .iter()
        .filter(|e| category == "All" || e.category() == category)
        .filter(|e| query.is_empty() || e.matches(&query))
        .collect()
}

/// A page of the story; some pages ask the reader to choose
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryPage {
    pub text: &'static str,
    pub image: &'static str,
    pub choices: Option<([&'static str; 2], usize)>,
}

pub const STORY_PAGES: &[StoryPage] = &[
    StoryPage { text: "Once upon a time, in a magical forest, there lived a brave little explorer named {name}. 🌲", image: "🏞️", choices: None },
    StoryPage { text: "One sunny morning, {name} discovered a mysterious glowing path that led deep into the forest. ✨", image: "🛤️", choices: None },
    StoryPage { text: "What should {name} do?", image: "🤔", choices: Some((["Follow the glowing path", "Go back home"], 0)) },
    StoryPage { text: "{name} bravely followed the path and found a friendly dragon who needed help! 🐉", image: "🐲", choices: None },
    StoryPage { text: "The dragon had lost its magical crystal. Where should they look?", image: "💎", choices: Some((["In the dark cave", "By the sparkling lake"], 1)) },
    StoryPage { text: "At the sparkling lake, {name} found the crystal! The dragon was so happy and gave {name} a special reward! 🎁", image: "🌟", choices: None },
    StoryPage { text: "Thanks to {name}'s kindness and bravery, the forest became even more magical! The End. 🎉", image: "🏆", choices: None },
];

/// Emoji faces used by the memory game
pub const MEMORY_EMOJIS: &[&str] = &["🍎", "🍌", "🍊", "🍇", "🍓", "🍉", "🥝", "🍒"];

/// Badge gallery on the child progress screen, keyed by the badge string
/// an activity grants. `None` marks badges no activity awards yet.
pub const BADGE_GALLERY: &[(&str, &str, Option<&str>)] = &[
    ("📝", "Quiz Master", Some("Perfect Quiz!")),
    ("🎮", "Memory Master", Some("Memory Master!")),
    ("📚", "Story Master", Some("Story Master")),
    ("🎯", "Mission Hero", Some("Mission Complete!")),
    ("🌅", "Early Bird", None),
    ("⚡", "Speed Demon", None),
    ("📅", "Perfect Week", None),
    ("🤝", "Helpful Friend", None),
    ("👑", "Champion", None),
];

/// Mocked weekly minutes for the progress report chart
pub const WEEKLY_MINUTES: &[(&str, u64)] = &[
    ("Mon", 30),
    ("Tue", 45),
    ("Wed", 25),
    ("Thu", 50),
    ("Fri", 40),
    ("Sat", 60),
    ("Sun", 35),
];

/// Mocked topic share for the progress report
pub const TOPIC_SHARE: &[(&str, u16)] = &[
    ("Math", 35),
    ("Reading", 30),
    ("Science", 20),
    ("Art", 15),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_answers_in_range() {
        for q in QUIZ_QUESTIONS {
            assert!(q.correct < q.options.len());
        }
    }

    #[test]
    fn test_body_emoji_fallback() {
        assert_eq!(body_emoji("cool"), "😎");
        assert_eq!(body_emoji("nope"), "🙂");
    }

    #[test]
    fn test_filter_catalog() {
        assert_eq!(filter_catalog(QUIZ_CATALOG, "All", "").len(), QUIZ_CATALOG.len());
        let math = filter_catalog(QUIZ_CATALOG, "Math", "");
        assert_eq!(math.len(), 1);
        assert_eq!(math[0].title, "Number Ninjas");
        assert_eq!(filter_catalog(QUIZ_CATALOG, "All", "SPACE").len(), 1);
        assert!(filter_catalog(GAME_CATALOG, "Science", "").is_empty());
    }

    #[test]
    fn test_story_filter_by_category_and_author() {
        assert_eq!(filter_catalog(STORY_CATALOG, "All", "").len(), 8);

        let fantasy = filter_catalog(STORY_CATALOG, "Fantasy", "");
        let titles: Vec<_> = fantasy.iter().map(|s| s.title).collect();
        assert_eq!(titles, vec!["Magical Forest", "Dragon Kingdom"]);

        let by_author = filter_catalog(STORY_CATALOG, "All", "sleepy");
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "Starry Night");

        assert!(filter_catalog(STORY_CATALOG, "Bedtime", "dragon").is_empty());
    }

    #[test]
    fn test_topic_share_sums_to_hundred() {
        assert_eq!(TOPIC_SHARE.iter().map(|(_, p)| p).sum::<u16>(), 100);
    }
}
