use std::fmt;

use crate::language::Language;

/// Parameters that define the identity of a result set.
///
/// Any change to these invalidates everything fetched so far.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueryParameters {
    pub language: Language,
    pub seed: i64,
    /// Average likes per book, 0 to 10.
    pub likes: f32,
    /// Average reviews per book.
    pub reviews: f32,
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self {
            language: Language::EnUs,
            seed: 42,
            likes: 5.0,
            reviews: 3.0,
        }
    }
}

impl fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed={} language={} likes={} reviews={}",
            self.seed, self.language, self.likes, self.reviews
        )
    }
}

/// Whether a page replaces the current list or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchMode {
    Replace,
    Append,
}

impl fmt::Display for FetchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchMode::Replace => f.write_str("replace"),
            FetchMode::Append => f.write_str("append"),
        }
    }
}

/// One page read against the provider.
///
/// Serializes to the provider's query string; `mode` stays client side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PageRequest {
    #[cfg_attr(feature = "serde", serde(skip))]
    pub mode: FetchMode,
    pub seed: i64,
    pub language: Language,
    pub count: usize,
    pub likes: f32,
    pub reviews: f32,
    pub offset: usize,
}

impl PageRequest {
    /// First page for a parameter set, always read from offset zero.
    pub fn cold(params: &QueryParameters, count: usize) -> Self {
        Self::new(FetchMode::Replace, params, count, 0)
    }

    /// Follow-up page starting at `offset`.
    pub fn append(
        params: &QueryParameters,
        count: usize,
        offset: usize,
    ) -> Self {
        Self::new(FetchMode::Append, params, count, offset)
    }

    fn new(
        mode: FetchMode,
        params: &QueryParameters,
        count: usize,
        offset: usize,
    ) -> Self {
        Self {
            mode,
            seed: params.seed,
            language: params.language,
            count,
            likes: params.likes,
            reviews: params.reviews,
            offset,
        }
    }

    /// The parameter set this request was built from.
    pub fn parameters(&self) -> QueryParameters {
        QueryParameters {
            language: self.language,
            seed: self.seed,
            likes: self.likes,
            reviews: self.reviews,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cold_request_starts_at_zero() {
        let params = QueryParameters::default();
        let request = PageRequest::cold(&params, 20);

        assert_eq!(request.mode, FetchMode::Replace);
        assert_eq!(request.offset, 0);
        assert_eq!(request.count, 20);
        assert_eq!(request.parameters(), params);
    }

    #[test]
    fn append_request_carries_offset() {
        let params = QueryParameters {
            language: Language::FrFr,
            seed: -3,
            likes: 2.5,
            reviews: 0.0,
        };
        let request = PageRequest::append(&params, 10, 40);

        assert_eq!(request.mode, FetchMode::Append);
        assert_eq!(request.offset, 40);
        assert_eq!(request.language, Language::FrFr);
        assert_eq!(request.seed, -3);
    }

    // Wire format tests below are feature gated; make sure they run.
    #[test]
    fn serde_feature_is_on_under_test() {
        assert!(cfg!(feature = "serde"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn mode_is_not_serialized() {
        let request = PageRequest::cold(&QueryParameters::default(), 20);
        let json = serde_json::to_value(request).unwrap();

        assert!(json.get("mode").is_none());
        assert_eq!(json["language"], "en_US");
        assert_eq!(json["offset"], 0);
    }
}
