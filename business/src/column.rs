//! The seven displayed book columns.

/// A displayed column of the book table.
///
/// The same set of columns drives sorting, table headers, the edit form and
/// the CSV export, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookColumn {
    Title,
    AuthorName,
    FirstPublishYear,
    Subject,
    RatingsAverage,
    AuthorBirthDate,
    AuthorTopWork,
}

impl BookColumn {
    pub const ALL: [Self; 7] = [
        Self::Title,
        Self::AuthorName,
        Self::FirstPublishYear,
        Self::Subject,
        Self::RatingsAverage,
        Self::AuthorBirthDate,
        Self::AuthorTopWork,
    ];

    /// Table header text.
    pub fn header(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::AuthorName => "Author name",
            Self::FirstPublishYear => "First publish year",
            Self::Subject => "Subject",
            Self::RatingsAverage => "Ratings average",
            Self::AuthorBirthDate => "Author birth date",
            Self::AuthorTopWork => "Author top work",
        }
    }

    /// Label used by the CSV header row and the edit form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::AuthorName => "Author Name",
            Self::FirstPublishYear => "First Publish Year",
            Self::Subject => "Subject",
            Self::RatingsAverage => "Ratings Average",
            Self::AuthorBirthDate => "Author Birth Date",
            Self::AuthorTopWork => "Author Top Work",
        }
    }
}
