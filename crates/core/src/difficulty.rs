//! Chart difficulty classes and the filename convention that selects them.

use serde::{Deserialize, Serialize};

/// Chart difficulty class. Selects the playfield geometry used by the
/// arc position checker; opaque to every other checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Past.
    Pst,
    /// Present.
    Prs,
    /// Future. Also the fallback when detection fails.
    #[default]
    Ftr,
    /// Beyond.
    Byd,
    /// Eternal.
    Etr,
}

impl Difficulty {
    /// Detect the difficulty from a chart URI.
    ///
    /// By convention the difficulty code is the last character before the
    /// `.aff` extension (`.../2.aff` is FTR). Anything unrecognized falls
    /// back to [`Difficulty::Ftr`].
    pub fn from_uri(uri: &str) -> Self {
        let code = uri
            .rfind('.')
            .and_then(|dot| uri[..dot].chars().next_back());
        match code {
            Some('0') => Difficulty::Pst,
            Some('1') => Difficulty::Prs,
            Some('2') => Difficulty::Ftr,
            Some('3') => Difficulty::Byd,
            Some('4') => Difficulty::Etr,
            _ => Difficulty::Ftr,
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pst" => Ok(Difficulty::Pst),
            "prs" => Ok(Difficulty::Prs),
            "ftr" => Ok(Difficulty::Ftr),
            "byd" => Ok(Difficulty::Byd),
            "etr" => Ok(Difficulty::Etr),
            other => Err(format!(
                "unknown difficulty '{other}' (expected pst, prs, ftr, byd, or etr)"
            )),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Pst => "pst",
            Difficulty::Prs => "prs",
            Difficulty::Ftr => "ftr",
            Difficulty::Byd => "byd",
            Difficulty::Etr => "etr",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_uri_reads_digit_before_extension() {
        assert_eq!(Difficulty::from_uri("songs/base/0.aff"), Difficulty::Pst);
        assert_eq!(Difficulty::from_uri("songs/base/1.aff"), Difficulty::Prs);
        assert_eq!(Difficulty::from_uri("songs/base/2.aff"), Difficulty::Ftr);
        assert_eq!(Difficulty::from_uri("songs/base/3.aff"), Difficulty::Byd);
        assert_eq!(Difficulty::from_uri("songs/base/4.aff"), Difficulty::Etr);
    }

    #[test]
    fn from_uri_unknown_code_falls_back_to_ftr() {
        assert_eq!(Difficulty::from_uri("songs/base/9.aff"), Difficulty::Ftr);
        assert_eq!(Difficulty::from_uri("chart.aff"), Difficulty::Ftr);
        assert_eq!(Difficulty::from_uri("no_extension"), Difficulty::Ftr);
        assert_eq!(Difficulty::from_uri(""), Difficulty::Ftr);
    }

    #[test]
    fn from_str_accepts_names_case_insensitively() {
        assert_eq!("byd".parse::<Difficulty>().unwrap(), Difficulty::Byd);
        assert_eq!("ETR".parse::<Difficulty>().unwrap(), Difficulty::Etr);
        assert!("expert".parse::<Difficulty>().is_err());
    }
}
