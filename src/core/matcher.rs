//! Fuzzy building-name resolution.
//!
//! Jaro-Winkler over lowercased, trimmed input, scaled to 0..=100. A match
//! must reach [`MATCH_THRESHOLD`]; ties keep the earliest candidate in
//! upstream list order.

use crate::domain::model::Building;

/// Minimum similarity for a building name to count as a match.
pub const MATCH_THRESHOLD: u32 = 70;

/// Similarity between the query and a candidate name, scaled to 0..=100.
pub fn similarity_score(query: &str, candidate: &str) -> u32 {
    let score = strsim::jaro_winkler(&normalize(query), &normalize(candidate));
    (score * 100.0).round() as u32
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Best-scoring building in list order, with its score.
pub fn best_match<'a>(query: &str, buildings: &'a [Building]) -> Option<(&'a Building, u32)> {
    let mut best: Option<(&Building, u32)> = None;
    for building in buildings {
        let score = similarity_score(query, &building.name);
        match best {
            // strict comparison keeps the first maximal-score candidate
            Some((_, top)) if score <= top => {}
            _ => best = Some((building, score)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn building(id: &str, name: &str) -> Building {
        Building {
            id: Some(id.to_string()),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_exact_match_scores_100() {
        assert_eq!(similarity_score("Edifício Sol", "Edifício Sol"), 100);
    }

    #[test]
    fn test_case_and_spacing_perturbations_stay_above_threshold() {
        assert!(similarity_score("EDIFÍCIO SOL", "Edifício Sol") >= MATCH_THRESHOLD);
        assert!(similarity_score("  edifício sol  ", "Edifício Sol") >= MATCH_THRESHOLD);
        assert!(similarity_score("Edificio Sol", "Edifício Sol") >= MATCH_THRESHOLD);
    }

    #[test]
    fn test_unrelated_names_score_below_threshold() {
        assert!(similarity_score("Zzzz Nonexistent", "Edifício Sol") < MATCH_THRESHOLD);
        assert!(similarity_score("Zzzz Nonexistent", "Residencial Lua") < MATCH_THRESHOLD);
    }

    #[test]
    fn test_best_match_picks_highest_score() {
        let buildings = vec![
            building("1", "Residencial Lua"),
            building("2", "Edifício Sol"),
            building("3", "Condomínio Estrela"),
        ];

        let (winner, score) = best_match("Edificio Sol", &buildings).unwrap();
        assert_eq!(winner.id.as_deref(), Some("2"));
        assert!(score >= MATCH_THRESHOLD);
    }

    #[test]
    fn test_best_match_tie_keeps_first_in_list_order() {
        let buildings = vec![
            building("1", "Edifício Sol"),
            building("2", "Edifício Sol"),
        ];

        let (winner, score) = best_match("Edifício Sol", &buildings).unwrap();
        assert_eq!(winner.id.as_deref(), Some("1"));
        assert_eq!(score, 100);
    }

    #[test]
    fn test_best_match_empty_list() {
        assert!(best_match("Edifício Sol", &[]).is_none());
    }
}
