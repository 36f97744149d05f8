/// A single catalog record as returned by the book provider.
///
/// `index` is the provider's stable position for the record within the
/// result set identified by the query parameters; it is what the browser
/// keys row expansion on.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Book {
    pub index: u64,
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub publisher: String,
    pub cover_image: String,
    pub likes: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub reviews: Vec<Review>,
}

/// A reader review attached to a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Review {
    #[cfg_attr(feature = "serde", serde(rename = "review"))]
    pub text: String,
    pub reviewer: String,
    pub company: String,
}

impl Book {
    pub fn has_reviews(&self) -> bool {
        !self.reviews.is_empty()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_payload() {
        let json = r#"{
            "index": 7,
            "isbn": "978-3-16-148410-0",
            "title": "The Quiet Shore",
            "author": "Ada Vance",
            "publisher": "Harbor Press",
            "coverImage": "https://covers.example/7.png",
            "likes": 4,
            "reviews": [
                {"review": "Lovely.", "reviewer": "Tom Reed", "company": "Acme"}
            ]
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert_eq!(book.index, 7);
        assert_eq!(book.cover_image, "https://covers.example/7.png");
        assert_eq!(book.reviews[0].text, "Lovely.");
        assert!(book.has_reviews());
    }

    #[test]
    fn missing_reviews_decode_as_empty() {
        let json = r#"{
            "index": 1, "isbn": "x", "title": "t", "author": "a",
            "publisher": "p", "coverImage": "c", "likes": 0
        }"#;

        let book: Book = serde_json::from_str(json).unwrap();
        assert!(book.reviews.is_empty());
    }
}
