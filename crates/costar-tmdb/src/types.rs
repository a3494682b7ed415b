//! TMDB response payloads. Unknown fields are ignored.

use serde::Deserialize;

use costar_core::{CastMember, MovieCredit, PersonId};

/// `GET /person/{id}/movie_credits`
#[derive(Debug, Clone, Deserialize)]
pub struct MovieCreditsResponse {
    #[serde(default)]
    pub cast: Vec<MovieCredit>,
}

/// `GET /movie/{id}/credits`
#[derive(Debug, Clone, Deserialize)]
pub struct MovieCastResponse {
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

/// `GET /person/{id}`
#[derive(Debug, Clone, Deserialize)]
pub struct PersonResponse {
    pub id: PersonId,
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_movie_credits_payload() {
        let body = r#"{
            "id": 2975,
            "cast": [
                {"id": 603, "title": "The Matrix", "release_date": "1999-03-30",
                 "character": "Morpheus", "popularity": 80.1},
                {"id": 9999, "title": "Untitled", "release_date": ""},
                {"id": 9998, "title": "Rumored", "release_date": null},
                {"id": 9997, "title": "No date"}
            ],
            "crew": []
        }"#;
        let parsed: MovieCreditsResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.cast.len(), 4);
        assert_eq!(parsed.cast[0], MovieCredit::new(603, "The Matrix", "1999-03-30"));
        assert!(parsed.cast[1].parsed_release_date().is_none());
        assert_eq!(parsed.cast[2].release_date, None);
        assert_eq!(parsed.cast[3].release_date, None);
    }

    #[test]
    fn test_movie_cast_payload() {
        let body = r#"{
            "id": 603,
            "cast": [
                {"id": 6384, "name": "Keanu Reeves", "order": 0, "character": "Neo"},
                {"id": 2975, "name": "Laurence Fishburne", "order": 1}
            ]
        }"#;
        let parsed: MovieCastResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            parsed.cast,
            vec![
                CastMember::new(6384, "Keanu Reeves", 0),
                CastMember::new(2975, "Laurence Fishburne", 1),
            ]
        );
    }

    #[test]
    fn test_missing_cast_defaults_to_empty() {
        let parsed: MovieCastResponse = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert!(parsed.cast.is_empty());
    }

    #[test]
    fn test_person_payload() {
        let parsed: PersonResponse =
            serde_json::from_str(r#"{"id": 2975, "name": "Laurence Fishburne", "gender": 2}"#)
                .unwrap();
        assert_eq!(parsed.id, 2975);
        assert_eq!(parsed.name, "Laurence Fishburne");
    }
}
