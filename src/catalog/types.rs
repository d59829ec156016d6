use serde::{Deserialize, Serialize};

/// One movie row in a listing or search response.
///
/// Only the documented fields are consumed; everything else in the
/// response body is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: Option<f64>,
}

/// Full record for a single movie, replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub release_date: String,
    /// Runtime in minutes.
    #[serde(default)]
    pub runtime: u32,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub budget: u64,
    #[serde(default)]
    pub revenue: u64,
    #[serde(default)]
    pub genres: Vec<Genre>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

/// Page envelope for listing and search responses.
#[derive(Debug, Clone, Deserialize)]
pub struct MoviePage {
    #[serde(default)]
    pub results: Vec<MovieSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_parses_with_null_optionals() {
        let body = r#"{
            "id": 7,
            "title": "Pengabdi Setan",
            "poster_path": null,
            "overview": "",
            "release_date": "2017-09-28",
            "vote_average": null,
            "adult": false,
            "genre_ids": [27]
        }"#;
        let movie: MovieSummary = serde_json::from_str(body).unwrap();
        assert_eq!(movie.id, 7);
        assert!(movie.poster_path.is_none());
        assert!(movie.vote_average.is_none());
    }

    #[test]
    fn page_tolerates_missing_results() {
        let page: MoviePage = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn detail_defaults_absent_fields_to_zero() {
        let body = r#"{"id": 3, "title": "Laskar Pelangi"}"#;
        let movie: MovieDetail = serde_json::from_str(body).unwrap();
        assert_eq!(movie.budget, 0);
        assert_eq!(movie.revenue, 0);
        assert_eq!(movie.runtime, 0);
        assert!(movie.genres.is_empty());
    }
}
