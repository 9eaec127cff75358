//! # Content Store
//!
//! The articles, their quizzes and the category list. Built once at startup,
//! validated, then shared read-only for the rest of the session.
//!
//! Content comes from one of two places:
//!
//! - [`ContentStore::sample`]: the built-in five-article set.
//! - [`ContentStore::from_json_file`]: a JSON file with the same shape.
//!
//! ```text
//! {
//!   "categories": [{ "id": "technology", "label": "Tech" }],   // optional
//!   "articles": [{ "id": 1, "title": ..., "shortSummary": ..., "fullText": ...,
//!                  "readTime": ..., "category": ..., "quiz": [...] }]
//! }
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

/// Identifier of an [`Article`], unique within a store.
pub type ArticleId = u32;

/// Category id meaning "no filter".
pub const ALL_CATEGORY: &str = "all";

/// Number of options every question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub short_summary: String,
    pub full_text: String,
    /// Display text such as "3 min read". Not parsed.
    pub read_time: String,
    pub category: String,
    /// Question order is the answer key: index `i` in a session refers to `quiz[i]`.
    pub quiz: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub options: Vec<String>,
    pub correct: String,
}

impl Question {
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub label: String,
}

impl Category {
    pub fn new(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
        }
    }

    pub fn is_all(&self) -> bool {
        self.id == ALL_CATEGORY
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ContentError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateArticleId(ArticleId),
    OptionCount {
        article: ArticleId,
        question: usize,
        found: usize,
    },
    DuplicateOption {
        article: ArticleId,
        question: usize,
        option: String,
    },
    CorrectNotInOptions {
        article: ArticleId,
        question: usize,
        correct: String,
    },
    UnknownCategory {
        article: ArticleId,
        category: String,
    },
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Io(e) => write!(f, "content I/O error: {e}"),
            ContentError::Parse(e) => write!(f, "content parse error: {e}"),
            ContentError::DuplicateArticleId(id) => write!(f, "duplicate article id {id}"),
            ContentError::OptionCount {
                article,
                question,
                found,
            } => write!(
                f,
                "article {article}, question {question}: expected {OPTIONS_PER_QUESTION} options, found {found}"
            ),
            ContentError::DuplicateOption {
                article,
                question,
                option,
            } => write!(
                f,
                "article {article}, question {question}: option {option:?} appears more than once"
            ),
            ContentError::CorrectNotInOptions {
                article,
                question,
                correct,
            } => write!(
                f,
                "article {article}, question {question}: correct answer {correct:?} is not one of the options"
            ),
            ContentError::UnknownCategory { article, category } => {
                write!(f, "article {article}: unknown category {category:?}")
            }
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Io(e) => Some(e),
            ContentError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Store
// ============================================================================

/// On-disk shape of a content file.
#[derive(Debug, Deserialize)]
struct ContentFile {
    #[serde(default)]
    categories: Option<Vec<Category>>,
    articles: Vec<Article>,
}

/// Immutable article list plus the categories used to filter it.
#[derive(Debug, Clone)]
pub struct ContentStore {
    articles: Vec<Article>,
    categories: Vec<Category>,
}

impl ContentStore {
    /// Validate and build a store.
    ///
    /// The `all` category is prepended when the list doesn't contain it.
    pub fn new(
        articles: Vec<Article>,
        mut categories: Vec<Category>,
    ) -> Result<Self, ContentError> {
        if !categories.iter().any(Category::is_all) {
            categories.insert(0, Category::new(ALL_CATEGORY, "All"));
        }

        let mut seen_ids = HashSet::new();
        for article in &articles {
            if !seen_ids.insert(article.id) {
                return Err(ContentError::DuplicateArticleId(article.id));
            }
            if !categories
                .iter()
                .any(|c| !c.is_all() && c.id == article.category)
            {
                return Err(ContentError::UnknownCategory {
                    article: article.id,
                    category: article.category.clone(),
                });
            }
            for (index, question) in article.quiz.iter().enumerate() {
                validate_question(article.id, index, question)?;
            }
        }

        debug!(
            "Content store built: {} articles, {} categories",
            articles.len(),
            categories.len()
        );
        Ok(Self {
            articles,
            categories,
        })
    }

    /// Parse a JSON document. Missing `categories` falls back to the built-in list.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let file: ContentFile = serde_json::from_str(json).map_err(ContentError::Parse)?;
        let categories = file.categories.unwrap_or_else(default_categories);
        Self::new(file.articles, categories)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ContentError> {
        let contents = fs::read_to_string(path).map_err(ContentError::Io)?;
        let store = Self::from_json(&contents)?;
        info!(
            "Loaded {} articles from {}",
            store.articles.len(),
            path.display()
        );
        Ok(store)
    }

    /// The built-in article set.
    pub fn sample() -> Self {
        Self {
            articles: sample_articles(),
            categories: default_categories(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }
}

fn validate_question(
    article: ArticleId,
    index: usize,
    question: &Question,
) -> Result<(), ContentError> {
    if question.options.len() != OPTIONS_PER_QUESTION {
        return Err(ContentError::OptionCount {
            article,
            question: index,
            found: question.options.len(),
        });
    }
    let mut seen = HashSet::new();
    for option in &question.options {
        if !seen.insert(option.as_str()) {
            return Err(ContentError::DuplicateOption {
                article,
                question: index,
                option: option.clone(),
            });
        }
    }
    if !question.has_option(&question.correct) {
        return Err(ContentError::CorrectNotInOptions {
            article,
            question: index,
            correct: question.correct.clone(),
        });
    }
    Ok(())
}

// ============================================================================
// Built-in content
// ============================================================================

pub fn default_categories() -> Vec<Category> {
    vec![
        Category::new(ALL_CATEGORY, "All"),
        Category::new("technology", "Tech"),
        Category::new("environment", "Environment"),
        Category::new("economics", "Economics"),
    ]
}

fn question(prompt: &str, options: [&str; OPTIONS_PER_QUESTION], correct: &str) -> Question {
    Question {
        question: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct: correct.to_string(),
    }
}

fn sample_articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Global Climate Summit Reaches Historic Agreement".to_string(),
            short_summary: "195 countries agree to accelerate renewable energy adoption and phase out fossil fuels by 2050.".to_string(),
            full_text: "In a landmark decision, 195 countries have committed to accelerating renewable energy adoption and completely phasing out fossil fuels by 2050. The agreement includes strict enforcement mechanisms and financial support for developing nations.".to_string(),
            read_time: "2 min read".to_string(),
            category: "environment".to_string(),
            quiz: vec![
                question(
                    "How many countries agreed to the climate agreement?",
                    ["150", "175", "195", "200"],
                    "195",
                ),
                question(
                    "What is the target year for phasing out fossil fuels?",
                    ["2040", "2045", "2050", "2055"],
                    "2050",
                ),
            ],
        },
        Article {
            id: 2,
            title: "Breakthrough in Quantum Computing".to_string(),
            short_summary: "Scientists achieve quantum supremacy with new 1000-qubit processor.".to_string(),
            full_text: "Researchers have achieved a major breakthrough in quantum computing with the development of a 1000-qubit processor. This advancement enables complex calculations that would take classical computers millions of years to complete.".to_string(),
            read_time: "3 min read".to_string(),
            category: "technology".to_string(),
            quiz: vec![
                question(
                    "How many qubits does the new processor have?",
                    ["500", "750", "1000", "1250"],
                    "1000",
                ),
                question(
                    "What is the main advantage of this quantum processor?",
                    ["Lower cost", "Faster calculations", "Smaller size", "Less energy use"],
                    "Faster calculations",
                ),
            ],
        },
        Article {
            id: 3,
            title: "Major Economic Policy Shift".to_string(),
            short_summary: "Central banks announce coordinated approach to tackle inflation.".to_string(),
            full_text: "Global central banks have announced a coordinated approach to combat rising inflation rates. The strategy includes synchronized interest rate adjustments and new monetary policy tools.".to_string(),
            read_time: "2 min read".to_string(),
            category: "economics".to_string(),
            quiz: vec![
                question(
                    "What is the main goal of the policy shift?",
                    ["Boost employment", "Tackle inflation", "Increase trade", "Reduce debt"],
                    "Tackle inflation",
                ),
                question(
                    "What tools are being used in this approach?",
                    [
                        "Interest rates only",
                        "Interest rates and monetary policy",
                        "Trade policies",
                        "Fiscal policies",
                    ],
                    "Interest rates and monetary policy",
                ),
            ],
        },
        Article {
            id: 4,
            title: "Revolutionary AI Healthcare System Launched".to_string(),
            short_summary: "New AI system demonstrates 99% accuracy in early disease detection.".to_string(),
            full_text: "A groundbreaking AI healthcare system has been launched, capable of detecting early signs of various diseases with 99% accuracy. The system uses advanced machine learning algorithms and processes medical imaging data in real-time.".to_string(),
            read_time: "4 min read".to_string(),
            category: "technology".to_string(),
            quiz: vec![
                question(
                    "What is the accuracy rate of the new AI system?",
                    ["95%", "97%", "98%", "99%"],
                    "99%",
                ),
                question(
                    "What type of data does the system process?",
                    ["Text only", "Medical imaging", "Patient records", "Blood tests"],
                    "Medical imaging",
                ),
            ],
        },
        Article {
            id: 5,
            title: "Space Tourism Milestone Achieved".to_string(),
            short_summary: "First commercial space hotel successfully completes orbital test.".to_string(),
            full_text: "The world's first commercial space hotel has successfully completed its orbital test, marking a major milestone in space tourism. The facility can accommodate up to 400 guests and features artificial gravity sections.".to_string(),
            read_time: "3 min read".to_string(),
            category: "technology".to_string(),
            quiz: vec![
                question(
                    "What is the capacity of the space hotel?",
                    ["200 guests", "300 guests", "400 guests", "500 guests"],
                    "400 guests",
                ),
                question(
                    "What special feature does the hotel include?",
                    ["Swimming pool", "Artificial gravity", "Tennis court", "Garden"],
                    "Artificial gravity",
                ),
            ],
        },
    ]
}
