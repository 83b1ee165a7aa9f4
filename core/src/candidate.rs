//! Candidate type returned by ranked queries.
use serde::{Deserialize, Serialize};

/// A single autocomplete result: a stored term and its weight.
///
/// Weights are non-negative and higher is better. `f64` matches the
/// precision the vocabulary is ingested with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub term: String,
    pub weight: f64,
}

impl Candidate {
    pub fn new<T: Into<String>>(term: T, weight: f64) -> Self {
        Candidate {
            term: term.into(),
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_str_and_string() {
        let a = Candidate::new("bell", 4.0);
        let b = Candidate::new(String::from("bell"), 4.0);
        assert_eq!(a, b);
        assert_eq!(a.term, "bell");
        assert_eq!(a.weight, 4.0);
    }
}
