//! Catalog page renderers

use html_escape::{encode_double_quoted_attribute, encode_text};
use urlencoding::encode;

use crate::catalog::{BookDisplay, PageWindow};
use crate::db::Book;
use crate::reviews::ReviewFeed;

/// Data for the letter listing page
#[derive(Debug, Clone)]
pub struct ListingView<'a> {
    pub letter: &'a str,
    pub books: &'a [Book],
    pub page: PageWindow,
}

/// Render the landing page: the A-Z navigation
pub fn render_index() -> String {
    let mut body = String::new();
    body.push_str("<h1>Browse the catalog</h1>\n<nav><ul>\n");
    for letter in 'A'..='Z' {
        body.push_str(&format!(
            "<li><a href=\"/byletter?letter={}\">{}</a></li>\n",
            letter, letter
        ));
    }
    body.push_str("</ul></nav>\n");

    page_shell("Book catalog", &body)
}

/// Render one page of the letter listing
pub fn render_listing(view: &ListingView) -> String {
    let heading = if view.letter.is_empty() {
        "All titles".to_string()
    } else {
        format!("Titles starting with {}", view.letter)
    };

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", encode_text(&heading)));

    if view.books.is_empty() {
        body.push_str("<p>No books found.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for book in view.books {
            body.push_str(&format!(
                "<li><a href=\"/book/{}\">{}</a></li>\n",
                encode(&book.book_id),
                encode_text(&book.title)
            ));
        }
        body.push_str("</ul>\n");
    }

    let letter_param = encode(view.letter);
    if view.page.has_previous() {
        body.push_str(&format!(
            "<a href=\"/byletter?letter={}&amp;offset={}\">Previous</a>\n",
            letter_param,
            view.page.prev_offset()
        ));
    }
    if view.page.has_next() {
        body.push_str(&format!(
            "<a href=\"/byletter?letter={}&amp;offset={}\">Next</a>\n",
            letter_param,
            view.page.next_offset()
        ));
    }
    body.push_str("<p><a href=\"/\">Back to letters</a></p>\n");

    page_shell(&heading, &body)
}

/// Render the detail page from the display projection
pub fn render_book(book: &BookDisplay) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", encode_text(&book.title)));

    if !book.image_url.is_empty() {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"Cover of {}\">\n",
            encode_double_quoted_attribute(&book.image_url),
            encode_double_quoted_attribute(&book.title)
        ));
    }

    body.push_str("<dl>\n");
    push_field(&mut body, "Authors", &book.authors);
    push_field(&mut body, "Pages", &book.pages.to_string());
    push_field(
        &mut body,
        "Rating",
        &format!("{:.2} ({} ratings)", book.rating, book.rating_count),
    );
    push_field(&mut body, "Genres", &book.genres);
    body.push_str("</dl>\n");

    body.push_str(&format!(
        "<p><a href=\"/bookReview/{}\">Reviews for this book</a></p>\n",
        encode(&book.title)
    ));
    body.push_str("<p><a href=\"/\">Back to letters</a></p>\n");

    page_shell(&book.title, &body)
}

/// Render the proxied review feed
pub fn render_reviews(book_name: &str, feed: &ReviewFeed) -> String {
    let heading = format!("Reviews for {}", book_name);

    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", encode_text(&heading)));

    if !feed.has_results() {
        body.push_str("<p>No reviews found.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for review in &feed.reviews {
            body.push_str("<li>");
            if review.url.is_empty() {
                body.push_str(&encode_text(&review.book_title));
            } else {
                body.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    encode_double_quoted_attribute(&review.url),
                    encode_text(&review.book_title)
                ));
            }
            if !review.byline.is_empty() {
                body.push_str(&format!(" <em>{}</em>", encode_text(&review.byline)));
            }
            if !review.summary.is_empty() {
                body.push_str(&format!("<p>{}</p>", encode_text(&review.summary)));
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n");
    }

    if !feed.copyright.is_empty() {
        body.push_str(&format!(
            "<footer><small>{}</small></footer>\n",
            encode_text(&feed.copyright)
        ));
    }

    page_shell(&heading, &body)
}

fn push_field(body: &mut String, label: &str, value: &str) {
    body.push_str(&format!(
        "<dt>{}</dt><dd>{}</dd>\n",
        label,
        encode_text(value)
    ));
}

fn page_shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        encode_text(title),
        body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::Review;

    fn sample_book(title: &str) -> Book {
        Book {
            book_id: "abc123".to_string(),
            title: title.to_string(),
            authors: "Jane Austen|Anonymous".to_string(),
            pages: 474,
            rating: 4.0,
            rating_count: 12345,
            genres: "Classics|Romance".to_string(),
            description: "A novel.".to_string(),
            image_url: "https://example.com/cover.jpg".to_string(),
        }
    }

    #[test]
    fn test_index_links_every_letter() {
        let html = render_index();
        assert!(html.contains("/byletter?letter=A"));
        assert!(html.contains("/byletter?letter=M"));
        assert!(html.contains("/byletter?letter=Z"));
    }

    #[test]
    fn test_listing_escapes_titles() {
        let books = vec![sample_book("Dick & Jane <3")];
        let view = ListingView {
            letter: "D",
            books: &books,
            page: PageWindow::new(0, 10, 1),
        };

        let html = render_listing(&view);
        assert!(html.contains("Dick &amp; Jane &lt;3"));
        assert!(!html.contains("Jane <3"));
    }

    #[test]
    fn test_listing_nav_follows_window() {
        let books = vec![sample_book("Middlemarch")];
        let view = ListingView {
            letter: "M",
            books: &books,
            page: PageWindow::new(10, 10, 30),
        };

        let html = render_listing(&view);
        assert!(html.contains("offset=0\">Previous"));
        assert!(html.contains("offset=20\">Next"));
    }

    #[test]
    fn test_listing_first_and_only_page_has_no_nav() {
        let books = vec![sample_book("Emma")];
        let view = ListingView {
            letter: "E",
            books: &books,
            page: PageWindow::new(0, 10, 1),
        };

        let html = render_listing(&view);
        assert!(!html.contains("Previous"));
        assert!(!html.contains("Next"));
    }

    #[test]
    fn test_listing_empty_state() {
        let view = ListingView {
            letter: "Q",
            books: &[],
            page: PageWindow::new(0, 10, 0),
        };

        let html = render_listing(&view);
        assert!(html.contains("No books found."));
    }

    #[test]
    fn test_book_page_shows_normalized_fields() {
        let book = sample_book("Emma");
        let display = crate::catalog::BookDisplay::from_book(&book);

        let html = render_book(&display);
        assert!(html.contains("Jane Austen, Anonymous"));
        assert!(html.contains("Classics, Romance"));
        assert!(!html.contains("Jane Austen|Anonymous"));
    }

    #[test]
    fn test_reviews_empty_state() {
        let feed = ReviewFeed {
            copyright: "c".to_string(),
            reviews: Vec::new(),
        };

        let html = render_reviews("Emma", &feed);
        assert!(html.contains("No reviews found."));
    }

    #[test]
    fn test_reviews_render_links_and_copyright() {
        let feed = ReviewFeed {
            copyright: "Copyright (c) The Paper".to_string(),
            reviews: vec![Review {
                url: "https://example.com/review".to_string(),
                byline: "A Critic".to_string(),
                book_title: "Emma".to_string(),
                book_author: "Jane Austen".to_string(),
                summary: "Sharp and funny.".to_string(),
                publication_dt: None,
                source: None,
            }],
        };

        let html = render_reviews("Emma", &feed);
        assert!(html.contains("https://example.com/review"));
        assert!(html.contains("Sharp and funny."));
        assert!(html.contains("Copyright (c) The Paper"));
    }
}
