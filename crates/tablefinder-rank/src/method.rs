use std::str::FromStr;

use crate::error::RankError;

/// Ranking methods accepted by [`crate::rank`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RankMethod {
    Distance,
    Rating,
    Price,
    Weighted,
    Knn,
}

impl RankMethod {
    pub const ALL: [RankMethod; 5] = [
        RankMethod::Distance,
        RankMethod::Rating,
        RankMethod::Price,
        RankMethod::Weighted,
        RankMethod::Knn,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RankMethod::Distance => "distance",
            RankMethod::Rating => "rating",
            RankMethod::Price => "price",
            RankMethod::Weighted => "weighted",
            RankMethod::Knn => "knn",
        }
    }
}

impl std::fmt::Display for RankMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankMethod {
    type Err = RankError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "distance" => Ok(RankMethod::Distance),
            "rating" => Ok(RankMethod::Rating),
            "price" => Ok(RankMethod::Price),
            "weighted" => Ok(RankMethod::Weighted),
            "knn" => Ok(RankMethod::Knn),
            _ => Err(RankError::UnknownMethod(normalized)),
        }
    }
}
