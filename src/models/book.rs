use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

const DESCRIPTION_PREVIEW_CHARS: usize = 100;
const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// A book as returned by the metadata API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Book {
    /// Opaque volume identifier, unique within a result set
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    /// Subject categories, first one is used as the seed's genre
    pub categories: Vec<String>,
    /// Free text, may contain markup
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub published_date: Option<String>,
    pub page_count: Option<u32>,
}

impl Book {
    /// Returns the thumbnail URL if it is present and non-empty
    pub fn usable_thumbnail(&self) -> Option<&str> {
        self.thumbnail.as_deref().filter(|url| !url.is_empty())
    }

    /// Case-insensitive exact title comparison
    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }

    /// Leading four-digit year of the published date
    pub fn published_year(&self) -> Option<i32> {
        let date = self.published_date.as_deref()?.trim();
        let year = date.get(..4)?;
        if year.chars().all(|c| c.is_ascii_digit()) {
            year.parse().ok()
        } else {
            None
        }
    }
}

// ============================================================================
// Book card projection
// ============================================================================

/// Display-ready projection of a recommended book
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookCard {
    pub id: String,
    pub title: String,
    pub authors_display: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub average_rating: Option<f64>,
    pub ratings_count: Option<u32>,
    pub published_year: Option<i32>,
    pub page_count: Option<u32>,
}

impl From<&Book> for BookCard {
    fn from(book: &Book) -> Self {
        let authors_display = if book.authors.is_empty() {
            UNKNOWN_AUTHOR.to_string()
        } else {
            book.authors.join(", ")
        };

        let description = book
            .description
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| truncate_text(&strip_markup(text), DESCRIPTION_PREVIEW_CHARS));

        BookCard {
            id: book.id.clone(),
            title: book.title.clone(),
            authors_display,
            description,
            thumbnail: book.usable_thumbnail().map(str::to_string),
            average_rating: book.average_rating,
            ratings_count: book.ratings_count,
            published_year: book.published_year(),
            page_count: book.page_count,
        }
    }
}

fn markup_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"<[^>]*>").expect("markup pattern is valid"))
}

/// Removes `<...>` tags from description text
pub fn strip_markup(text: &str) -> String {
    markup_pattern().replace_all(text, "").into_owned()
}

/// Cuts text to `max_chars` characters, appending "..." when shortened
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

// ============================================================================
// Book metadata API types
// ============================================================================

/// Raw search response from the volumes endpoint
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ApiVolumeList {
    #[serde(default)]
    pub items: Option<Vec<ApiVolume>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiVolume {
    pub id: String,
    #[serde(default)]
    pub volume_info: ApiVolumeInfo,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiVolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub categories: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_links: Option<ApiImageLinks>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub ratings_count: Option<u32>,
    #[serde(default)]
    pub published_date: Option<String>,
    #[serde(default)]
    pub page_count: Option<u32>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ApiImageLinks {
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub small_thumbnail: Option<String>,
}

impl From<ApiVolume> for Book {
    fn from(volume: ApiVolume) -> Self {
        let info = volume.volume_info;

        Book {
            id: volume.id,
            title: info.title.unwrap_or_default(),
            authors: info.authors.unwrap_or_default(),
            categories: info.categories.unwrap_or_default(),
            description: info.description,
            thumbnail: info.image_links.and_then(|links| links.thumbnail),
            average_rating: info.average_rating,
            ratings_count: info.ratings_count,
            published_date: info.published_date,
            page_count: info.page_count,
        }
    }
}

impl From<ApiVolumeList> for Vec<Book> {
    fn from(list: ApiVolumeList) -> Self {
        list.items
            .unwrap_or_default()
            .into_iter()
            .map(Book::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str) -> Book {
        Book {
            id: "id".to_string(),
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_volume_list_decodes_google_books_shape() {
        let body = r#"{
            "kind": "books#volumes",
            "totalItems": 1,
            "items": [{
                "id": "B1XfAQAAQBAJ",
                "volumeInfo": {
                    "title": "Dune",
                    "authors": ["Frank Herbert"],
                    "categories": ["Fiction"],
                    "description": "<p>Set on the desert planet Arrakis</p>",
                    "imageLinks": {
                        "smallThumbnail": "http://books.google.com/small",
                        "thumbnail": "http://books.google.com/thumb"
                    },
                    "averageRating": 4.5,
                    "ratingsCount": 120,
                    "publishedDate": "1965-08-01",
                    "pageCount": 412
                }
            }]
        }"#;

        let list: ApiVolumeList = serde_json::from_str(body).unwrap();
        let books: Vec<Book> = list.into();

        assert_eq!(books.len(), 1);
        let dune = &books[0];
        assert_eq!(dune.id, "B1XfAQAAQBAJ");
        assert_eq!(dune.title, "Dune");
        assert_eq!(dune.authors, vec!["Frank Herbert".to_string()]);
        assert_eq!(dune.categories, vec!["Fiction".to_string()]);
        assert_eq!(dune.thumbnail.as_deref(), Some("http://books.google.com/thumb"));
        assert_eq!(dune.average_rating, Some(4.5));
        assert_eq!(dune.ratings_count, Some(120));
        assert_eq!(dune.page_count, Some(412));
        assert_eq!(dune.published_year(), Some(1965));
    }

    #[test]
    fn test_volume_list_without_items() {
        let list: ApiVolumeList = serde_json::from_str(r#"{"totalItems": 0}"#).unwrap();
        let books: Vec<Book> = list.into();
        assert!(books.is_empty());
    }

    #[test]
    fn test_volume_with_sparse_metadata() {
        let body = r#"{"items": [{"id": "x1", "volumeInfo": {"title": "Sparse"}}, {"id": "x2"}]}"#;
        let books: Vec<Book> = serde_json::from_str::<ApiVolumeList>(body).unwrap().into();

        assert_eq!(books[0].title, "Sparse");
        assert!(books[0].authors.is_empty());
        assert_eq!(books[0].thumbnail, None);
        assert_eq!(books[1].title, "");
    }

    #[test]
    fn test_small_thumbnail_alone_is_not_a_thumbnail() {
        let body = r#"{"items": [{"id": "x1", "volumeInfo": {
            "title": "Small",
            "imageLinks": {"smallThumbnail": "http://small"}
        }}]}"#;
        let books: Vec<Book> = serde_json::from_str::<ApiVolumeList>(body).unwrap().into();
        assert_eq!(books[0].usable_thumbnail(), None);
    }

    #[test]
    fn test_empty_thumbnail_is_not_usable() {
        let mut b = book("Blank");
        b.thumbnail = Some(String::new());
        assert_eq!(b.usable_thumbnail(), None);
    }

    #[test]
    fn test_whitespace_thumbnail_is_kept_verbatim() {
        let mut b = book("Spaces");
        b.thumbnail = Some("   ".to_string());
        assert_eq!(b.usable_thumbnail(), Some("   "));
    }

    #[test]
    fn test_title_matches_ignores_case_only() {
        let b = book("The Great Gatsby");
        assert!(b.title_matches("the great gatsby"));
        assert!(b.title_matches("THE GREAT GATSBY"));
        assert!(!b.title_matches("Great Gatsby"));
    }

    #[test]
    fn test_published_year_variants() {
        let mut b = book("Dated");
        b.published_date = Some("2004".to_string());
        assert_eq!(b.published_year(), Some(2004));
        b.published_date = Some("1999-05".to_string());
        assert_eq!(b.published_year(), Some(1999));
        b.published_date = Some("n.d.".to_string());
        assert_eq!(b.published_year(), None);
        b.published_date = None;
        assert_eq!(b.published_year(), None);
    }

    #[test]
    fn test_card_strips_and_truncates_description() {
        let mut b = book("Long");
        b.description = Some(format!("<b>{}</b>", "a".repeat(150)));
        let card = BookCard::from(&b);
        let description = card.description.unwrap();
        assert_eq!(description, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_card_keeps_short_description() {
        let mut b = book("Short");
        b.description = Some("A <i>short</i> tale.".to_string());
        let card = BookCard::from(&b);
        assert_eq!(card.description.as_deref(), Some("A short tale."));
    }

    #[test]
    fn test_card_author_display() {
        let mut b = book("Anon");
        assert_eq!(BookCard::from(&b).authors_display, "Unknown Author");

        b.authors = vec!["Neil Gaiman".to_string(), "Terry Pratchett".to_string()];
        assert_eq!(
            BookCard::from(&b).authors_display,
            "Neil Gaiman, Terry Pratchett"
        );
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_text("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_text("short", 10), "short");
        assert_eq!(truncate_text("exact", 5), "exact");
    }
}
