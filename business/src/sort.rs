//! Sort state and the row comparator.

use std::cmp::Ordering;

use crate::book::Book;
use crate::column::BookColumn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Active sort column and direction.
///
/// Until a header is clicked, rows are ordered by [`SortState::DEFAULT_COLUMN`]
/// ascending and no header is marked active. The first click on any header,
/// including Title, activates it ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    active: Option<BookColumn>,
    direction: SortDirection,
}

impl SortState {
    pub const DEFAULT_COLUMN: BookColumn = BookColumn::Title;

    pub fn column(&self) -> BookColumn {
        self.active.unwrap_or(Self::DEFAULT_COLUMN)
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// The header the user selected, if any.
    pub fn active_header(&self) -> Option<BookColumn> {
        self.active
    }

    /// Toggles the direction when `column` is the active header, otherwise
    /// activates `column` ascending.
    pub fn request(&mut self, column: BookColumn) {
        if self.active == Some(column) {
            self.direction = self.direction.toggled();
        } else {
            self.active = Some(column);
            self.direction = SortDirection::Ascending;
        }
    }

    /// Returns the rows in display order. The sort is stable.
    pub fn apply<'a>(&self, rows: &'a [Book]) -> Vec<&'a Book> {
        let column = self.column();
        let direction = self.direction;
        let mut sorted: Vec<&Book> = rows.iter().collect();
        sorted.sort_by(|a, b| compare_books(a, b, column, direction));
        sorted
    }
}

/// Orders two books by `column`.
///
/// Absent values sort after present ones when ascending; descending is the
/// exact reverse.
pub fn compare_books(a: &Book, b: &Book, column: BookColumn, direction: SortDirection) -> Ordering {
    let ordering = match column {
        BookColumn::Title => compare_present(a.title.as_deref(), b.title.as_deref(), Ord::cmp),
        BookColumn::AuthorName => compare_present(a.author_names(), b.author_names(), |x, y| x.cmp(y)),
        BookColumn::FirstPublishYear => {
            compare_present(a.first_publish_year, b.first_publish_year, |x, y| x.cmp(y))
        }
        BookColumn::Subject => compare_present(a.subject.as_deref(), b.subject.as_deref(), Ord::cmp),
        BookColumn::RatingsAverage => {
            compare_present(a.ratings_average, b.ratings_average, |x, y| x.total_cmp(y))
        }
        BookColumn::AuthorBirthDate => compare_present(
            a.author_birth_date.as_deref(),
            b.author_birth_date.as_deref(),
            Ord::cmp,
        ),
        BookColumn::AuthorTopWork => compare_present(
            a.author_top_work.as_deref(),
            b.author_top_work.as_deref(),
            Ord::cmp,
        ),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn compare_present<T>(a: Option<T>, b: Option<T>, cmp: impl FnOnce(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles<'a>(rows: &[&'a Book]) -> Vec<&'a str> {
        rows.iter().map(|book| book.title.as_deref().unwrap_or("-")).collect()
    }

    #[test]
    fn test_default_sort_is_title_ascending_without_active_header() {
        let sort = SortState::default();
        assert_eq!(sort.column(), BookColumn::Title);
        assert_eq!(sort.direction(), SortDirection::Ascending);
        assert!(sort.active_header().is_none());
    }

    #[test]
    fn test_request_toggles_once_per_call_for_every_column() {
        for column in BookColumn::ALL {
            let mut sort = SortState::default();

            sort.request(column);
            assert_eq!(sort.column(), column);
            assert_eq!(sort.direction(), SortDirection::Ascending);

            sort.request(column);
            assert_eq!(sort.direction(), SortDirection::Descending);

            sort.request(column);
            assert_eq!(sort.direction(), SortDirection::Ascending);
        }
    }

    #[test]
    fn test_switching_column_resets_to_ascending() {
        let mut sort = SortState::default();
        sort.request(BookColumn::Subject);
        sort.request(BookColumn::Subject);
        assert_eq!(sort.direction(), SortDirection::Descending);

        sort.request(BookColumn::FirstPublishYear);
        assert_eq!(sort.active_header(), Some(BookColumn::FirstPublishYear));
        assert_eq!(sort.direction(), SortDirection::Ascending);
    }

    #[test]
    fn test_title_scenario() {
        let rows = vec![
            Book::new("a").with_title("Zeta").with_first_publish_year(2001),
            Book::new("b").with_title("Alpha").with_first_publish_year(1999),
        ];
        let mut sort = SortState::default();

        sort.request(BookColumn::Title);
        assert_eq!(titles(&sort.apply(&rows)), ["Alpha", "Zeta"]);

        sort.request(BookColumn::Title);
        assert_eq!(titles(&sort.apply(&rows)), ["Zeta", "Alpha"]);
    }

    #[test]
    fn test_absent_values_last_ascending_first_descending() {
        let rows = vec![
            Book::new("a").with_title("No year"),
            Book::new("b").with_title("Late").with_first_publish_year(2010),
            Book::new("c").with_title("Early").with_first_publish_year(1950),
        ];
        let mut sort = SortState::default();

        sort.request(BookColumn::FirstPublishYear);
        assert_eq!(titles(&sort.apply(&rows)), ["Early", "Late", "No year"]);

        sort.request(BookColumn::FirstPublishYear);
        assert_eq!(titles(&sort.apply(&rows)), ["No year", "Late", "Early"]);
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let rows = vec![
            Book::new("a").with_title("First").with_ratings_average(4.0),
            Book::new("b").with_title("Second").with_ratings_average(4.0),
            Book::new("c").with_title("Third").with_ratings_average(3.0),
        ];
        let mut sort = SortState::default();
        sort.request(BookColumn::RatingsAverage);

        assert_eq!(titles(&sort.apply(&rows)), ["Third", "First", "Second"]);
    }

    #[test]
    fn test_author_column_compares_joined_names() {
        let rows = vec![
            Book::new("a").with_title("Two").with_authors(["Le Guin", "Asimov"]),
            Book::new("b").with_title("One").with_authors(["Asimov"]),
            Book::new("c").with_title("None"),
        ];
        let mut sort = SortState::default();
        sort.request(BookColumn::AuthorName);

        assert_eq!(titles(&sort.apply(&rows)), ["One", "Two", "None"]);
    }

    #[test]
    fn test_sorted_rows_are_a_permutation() {
        let rows: Vec<Book> = (0..20)
            .map(|i| {
                let book = Book::new(format!("k{i}")).with_title(format!("T{}", (i * 7) % 20));
                if i % 3 == 0 { book } else { book.with_first_publish_year(1900 + (i * 13) % 50) }
            })
            .collect();

        for column in BookColumn::ALL {
            for flips in 1..=2 {
                let mut sort = SortState::default();
                for _ in 0..flips {
                    sort.request(column);
                }
                let sorted = sort.apply(&rows);
                let mut keys: Vec<&str> = sorted.iter().map(|book| book.key.as_str()).collect();
                keys.sort_unstable();
                let mut expected: Vec<&str> = rows.iter().map(|book| book.key.as_str()).collect();
                expected.sort_unstable();
                assert_eq!(keys, expected);

                for pair in sorted.windows(2) {
                    assert_ne!(
                        compare_books(pair[0], pair[1], column, sort.direction()),
                        Ordering::Greater
                    );
                }
            }
        }
    }
}
