//! Book records as delivered by the catalog API.
//!
//! The upstream API does not guarantee any field except `key`, so everything
//! else is optional. Unknown fields are ignored.

use log::warn;
use serde::{Deserialize, Deserializer};

use crate::column::BookColumn;

/// An author entry of a work.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A single work returned by the catalog.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Book {
    /// Stable identifier supplied by the catalog (e.g. `/works/OL45804W`).
    pub key: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "authors_or_empty")]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub first_publish_year: Option<i64>,
    /// The catalog sends either a single subject or a list; lists are joined with `", "`.
    #[serde(default, deserialize_with = "text_or_joined_list")]
    pub subject: Option<String>,
    #[serde(default)]
    pub ratings_average: Option<f64>,
    #[serde(default, deserialize_with = "text_or_joined_list")]
    pub author_birth_date: Option<String>,
    #[serde(default, deserialize_with = "text_or_joined_list")]
    pub author_top_work: Option<String>,
}

impl Book {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_authors<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.authors = names.into_iter().map(Author::new).collect();
        self
    }

    pub fn with_first_publish_year(mut self, year: i64) -> Self {
        self.first_publish_year = Some(year);
        self
    }

    pub fn with_ratings_average(mut self, rating: f64) -> Self {
        self.ratings_average = Some(rating);
        self
    }

    /// Author names joined with `", "`, or `None` when the work lists no authors.
    pub fn author_names(&self) -> Option<String> {
        if self.authors.is_empty() {
            return None;
        }

        Some(
            self.authors
                .iter()
                .map(|author| author.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
        )
    }

    /// Display text of a column, shared by the table cells, the edit buffer and CSV export.
    pub fn field_text(&self, column: BookColumn) -> Option<String> {
        match column {
            BookColumn::Title => self.title.clone(),
            BookColumn::AuthorName => self.author_names(),
            BookColumn::FirstPublishYear => self.first_publish_year.map(|year| year.to_string()),
            BookColumn::Subject => self.subject.clone(),
            BookColumn::RatingsAverage => self.ratings_average.map(|rating| rating.to_string()),
            BookColumn::AuthorBirthDate => self.author_birth_date.clone(),
            BookColumn::AuthorTopWork => self.author_top_work.clone(),
        }
    }
}

/// Response body of the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CatalogPage {
    /// Total number of works matching the subject, when the catalog reports it.
    #[serde(default)]
    pub work_count: Option<u64>,
    /// Works that fail to decode are skipped, the rest of the page is kept.
    #[serde(deserialize_with = "decodable_works")]
    pub works: Vec<Book>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrList {
    Text(String),
    List(Vec<String>),
}

fn text_or_joined_list<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<TextOrList>::deserialize(deserializer)?;
    Ok(value.map(|value| match value {
        TextOrList::Text(text) => text,
        TextOrList::List(items) => items.join(", "),
    }))
}

fn authors_or_empty<'de, D>(deserializer: D) -> Result<Vec<Author>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Author>>::deserialize(deserializer)?.unwrap_or_default())
}

fn decodable_works<'de, D>(deserializer: D) -> Result<Vec<Book>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
    let total = entries.len();
    let works: Vec<Book> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(book) => Some(book),
            Err(err) => {
                warn!("Skipping catalog work #{index}: {err}");
                None
            }
        })
        .collect();

    if works.len() < total {
        warn!("Decoded {} of {total} catalog works", works.len());
    }
    Ok(works)
}
