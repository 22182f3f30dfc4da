use crate::domain::model::Book;
use crate::domain::report::{money, Section};
use std::collections::HashMap;

pub const LONG_BOOK_PAGES: i32 = 300;

#[derive(Debug, Clone, Copy, Default)]
pub struct BookAnalytics;

impl BookAnalytics {
    pub fn new() -> Self {
        Self
    }

    /// Titles of books with more than [`LONG_BOOK_PAGES`] pages, in codepoint order.
    pub fn long_titles_sorted(&self, books: &[Book]) -> Vec<String> {
        let mut titles: Vec<String> = books
            .iter()
            .filter(|b| b.pages > LONG_BOOK_PAGES)
            .map(|b| b.title.clone())
            .collect();
        titles.sort();
        titles
    }

    pub fn average_pages(&self, books: &[Book]) -> f64 {
        if books.is_empty() {
            return 0.0;
        }
        let total: i64 = books.iter().map(|b| i64::from(b.pages)).sum();
        total as f64 / books.len() as f64
    }

    pub fn count_by_author<'a>(&self, books: &'a [Book]) -> HashMap<&'a str, usize> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for book in books {
            *counts.entry(book.author.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Highest priced book. The first one wins when several share the top price.
    pub fn most_expensive<'a>(&self, books: &'a [Book]) -> Option<&'a Book> {
        books.iter().reduce(|best, book| {
            if book.price.total_cmp(&best.price).is_gt() {
                book
            } else {
                best
            }
        })
    }

    pub fn section(&self, books: &[Book]) -> Section {
        tracing::debug!("Building book section from {} records", books.len());

        let titles = self
            .long_titles_sorted(books)
            .into_iter()
            .map(|title| format!("- {title}"))
            .collect();

        let mut counts: Vec<(&str, usize)> = self.count_by_author(books).into_iter().collect();
        counts.sort_by(|a, b| a.0.cmp(b.0));
        let counts = counts
            .into_iter()
            .map(|(author, n)| format!("{author}: {n} book(s)"))
            .collect();

        let priciest = self
            .most_expensive(books)
            .map(|b| format!("{} - {} ({} pages)", b.title, money(b.price), b.pages))
            .into_iter()
            .collect();

        Section::new("BOOK ANALYTICS")
            .entry("Books with more than 300 pages (alphabetical)", titles)
            .entry(
                "Average page count",
                vec![format!("{:.0} pages", self.average_pages(books))],
            )
            .entry("Books per author", counts)
            .entry("Most expensive book", priciest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample::sample_books;
    use proptest::prelude::*;

    fn service() -> BookAnalytics {
        BookAnalytics::new()
    }

    #[test]
    fn test_long_titles_sorted() {
        let titles = service().long_titles_sorted(&sample_books());
        assert_eq!(
            titles,
            vec![
                "1984",
                "Cien Anos de Soledad",
                "Don Quijote",
                "El Senor de los Anillos",
                "Harry Potter y la Piedra Filosofal",
            ]
        );
    }

    #[test]
    fn test_page_threshold_is_strict() {
        let books = vec![Book::new("exact", "a", 300, 1.0), Book::new("over", "a", 301, 1.0)];
        assert_eq!(service().long_titles_sorted(&books), vec!["over"]);
    }

    #[test]
    fn test_average_pages() {
        let avg = service().average_pages(&sample_books());
        assert!((avg - 3389.0 / 7.0).abs() < 1e-9);
        assert_eq!(service().average_pages(&[]), 0.0);
        assert_eq!(service().average_pages(&[Book::new("t", "a", 97, 1.0)]), 97.0);
    }

    #[test]
    fn test_count_by_author() {
        let books = sample_books();
        let counts = service().count_by_author(&books);
        assert_eq!(counts.len(), 6);
        assert_eq!(counts["George Orwell"], 2);
        assert_eq!(counts["J.R.R. Tolkien"], 1);
        assert!(service().count_by_author(&[]).is_empty());
    }

    #[test]
    fn test_most_expensive() {
        let books = vec![
            Book::new("a", "x", 10, 10.0),
            Book::new("b", "x", 10, 50.0),
            Book::new("c", "x", 10, 30.0),
        ];
        assert_eq!(service().most_expensive(&books).map(|b| b.title.as_str()), Some("b"));
        assert!(service().most_expensive(&[]).is_none());
    }

    #[test]
    fn test_most_expensive_tie_picks_first() {
        let books = vec![
            Book::new("cheap", "x", 10, 5.0),
            Book::new("first", "x", 10, 50.0),
            Book::new("second", "x", 10, 50.0),
        ];
        assert_eq!(service().most_expensive(&books).unwrap().title, "first");
    }

    #[test]
    fn test_section_lines() {
        let section = service().section(&sample_books());
        assert_eq!(section.entries[1].lines, vec!["484 pages"]);
        assert!(section.entries[2].lines.contains(&"George Orwell: 2 book(s)".to_string()));
        assert_eq!(
            section.entries[3].lines,
            vec!["El Senor de los Anillos - $80.00 (1178 pages)"]
        );

        let empty = service().section(&[]);
        assert!(empty.entries[3].lines.is_empty());
        assert_eq!(empty.entries[1].lines, vec!["0 pages"]);
    }

    fn arb_books() -> impl Strategy<Value = Vec<Book>> {
        prop::collection::vec(
            ("[A-Za-z ]{1,10}", "(ann|bob|cid)", 1i32..1500, 1.0f64..100.0)
                .prop_map(|(title, author, pages, price)| Book::new(title, author, pages, price)),
            0..30,
        )
    }

    proptest! {
        #[test]
        fn prop_counts_partition_input(books in arb_books()) {
            let counts = service().count_by_author(&books);
            prop_assert_eq!(counts.values().sum::<usize>(), books.len());
            prop_assert!(counts.values().all(|&n| n >= 1));
        }

        #[test]
        fn prop_most_expensive_is_maximum(books in arb_books()) {
            match service().most_expensive(&books) {
                None => prop_assert!(books.is_empty()),
                Some(top) => prop_assert!(books.iter().all(|b| b.price <= top.price)),
            }
        }

        #[test]
        fn prop_long_titles_sorted(books in arb_books()) {
            let titles = service().long_titles_sorted(&books);
            prop_assert!(titles.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(titles.len(), books.iter().filter(|b| b.pages > LONG_BOOK_PAGES).count());

            let mut resorted = titles.clone();
            resorted.sort();
            prop_assert_eq!(&resorted, &titles);
        }
    }
}
