//! Edit modal state machine.
//!
//! `Closed -> Editing -> Closed`. Entering `Editing` deep-copies the row into an
//! [`EditBuffer`] of owned strings, so field edits can never reach the row list.
//! Leaving `Editing` always discards the buffer; Save does not write back.

use crate::book::Book;
use crate::column::BookColumn;

/// Editable text copy of one book.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    key: String,
    pub title: String,
    /// Comma-joined author names.
    pub author_names: String,
    pub first_publish_year: String,
    pub subject: String,
    pub ratings_average: String,
    pub author_birth_date: String,
    pub author_top_work: String,
}

impl EditBuffer {
    pub fn from_book(book: &Book) -> Self {
        let text = |column| book.field_text(column).unwrap_or_default();
        Self {
            key: book.key.clone(),
            title: text(BookColumn::Title),
            author_names: text(BookColumn::AuthorName),
            first_publish_year: text(BookColumn::FirstPublishYear),
            subject: text(BookColumn::Subject),
            ratings_average: text(BookColumn::RatingsAverage),
            author_birth_date: text(BookColumn::AuthorBirthDate),
            author_top_work: text(BookColumn::AuthorTopWork),
        }
    }

    /// Key of the book this buffer was copied from.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn field(&self, column: BookColumn) -> &str {
        match column {
            BookColumn::Title => &self.title,
            BookColumn::AuthorName => &self.author_names,
            BookColumn::FirstPublishYear => &self.first_publish_year,
            BookColumn::Subject => &self.subject,
            BookColumn::RatingsAverage => &self.ratings_average,
            BookColumn::AuthorBirthDate => &self.author_birth_date,
            BookColumn::AuthorTopWork => &self.author_top_work,
        }
    }

    pub fn field_mut(&mut self, column: BookColumn) -> &mut String {
        match column {
            BookColumn::Title => &mut self.title,
            BookColumn::AuthorName => &mut self.author_names,
            BookColumn::FirstPublishYear => &mut self.first_publish_year,
            BookColumn::Subject => &mut self.subject,
            BookColumn::RatingsAverage => &mut self.ratings_average,
            BookColumn::AuthorBirthDate => &mut self.author_birth_date,
            BookColumn::AuthorTopWork => &mut self.author_top_work,
        }
    }
}

/// What Save did with the buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The buffer was dropped without touching the row list or any backend.
    Discarded(EditBuffer),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditModal {
    #[default]
    Closed,
    Editing(EditBuffer),
}

impl EditModal {
    /// Opens the modal on a copy of `book`, replacing any open buffer.
    pub fn open(&mut self, book: &Book) {
        *self = Self::Editing(EditBuffer::from_book(book));
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Editing(_))
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        match self {
            Self::Editing(buffer) => Some(buffer),
            Self::Closed => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut EditBuffer> {
        match self {
            Self::Editing(buffer) => Some(buffer),
            Self::Closed => None,
        }
    }

    /// Closes the modal through Save. Returns `None` if it was not open.
    pub fn save(&mut self) -> Option<SaveOutcome> {
        self.take().map(SaveOutcome::Discarded)
    }

    /// Closes the modal without saving. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        self.take().is_some()
    }

    fn take(&mut self) -> Option<EditBuffer> {
        match std::mem::take(self) {
            Self::Editing(buffer) => Some(buffer),
            Self::Closed => None,
        }
    }
}
