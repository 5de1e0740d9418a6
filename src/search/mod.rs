//! Site search over the live collections.
//!
//! Backs the `search` route. The whole corpus is at most a few hundred
//! records already held in memory, so this is weighted substring matching,
//! not an index: every term must match somewhere in a record for it to
//! score, fields are weighted so title hits rank above body hits, and
//! pinned notices get a small multiplier.

use crate::models::{Notice, Page};

/// Field weights, title hits dominating.
const BOOST_TITLE: f32 = 10.0;
const BOOST_CATEGORY: f32 = 4.0;
const BOOST_BODY: f32 = 2.0;
/// Multiplier applied to pinned notices.
const BOOST_PINNED: f32 = 1.5;

/// Which collection a hit came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitKind {
    Notice,
    News,
    Page,
}

/// Single search result.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub kind: HitKind,
    pub id: String,
    /// Set for page hits, empty otherwise.
    pub slug: String,
    pub title: String,
    pub score: f32,
}

/// Search notices, news and pages for the query, best matches first.
pub fn search_site(
    query: &str,
    notices: &[Notice],
    news: &[Notice],
    pages: &[Page],
    limit: usize,
) -> Vec<SearchHit> {
    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();
    if terms.is_empty() {
        return Vec::new();
    }

    let mut hits = Vec::new();

    for (kind, feed) in [(HitKind::Notice, notices), (HitKind::News, news)] {
        for notice in feed {
            if let Some(mut score) = score_fields(
                &terms,
                &[
                    (notice.title.as_str(), BOOST_TITLE),
                    (notice.category.as_str(), BOOST_CATEGORY),
                    (notice.body.as_str(), BOOST_BODY),
                ],
            ) {
                if notice.pinned {
                    score *= BOOST_PINNED;
                }
                hits.push(SearchHit {
                    kind,
                    id: notice.id.clone(),
                    slug: String::new(),
                    title: notice.title.clone(),
                    score,
                });
            }
        }
    }

    for page in pages {
        if let Some(score) = score_fields(
            &terms,
            &[
                (page.title.as_str(), BOOST_TITLE),
                (page.body.as_str(), BOOST_BODY),
            ],
        ) {
            hits.push(SearchHit {
                kind: HitKind::Page,
                id: page.id.clone(),
                slug: page.slug.clone(),
                title: page.title.clone(),
                score,
            });
        }
    }

    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(limit);
    hits
}

/// Score a record's fields against the terms. Every term must match at
/// least one field; a record missing any term is not a hit at all.
fn score_fields(terms: &[String], fields: &[(&str, f32)]) -> Option<f32> {
    let lowered: Vec<(String, f32)> = fields
        .iter()
        .map(|(text, boost)| (text.to_lowercase(), *boost))
        .collect();

    let mut total = 0.0;
    for term in terms {
        let mut term_score = 0.0;
        for (text, boost) in &lowered {
            if text.contains(term.as_str()) {
                term_score += boost;
            }
        }
        if term_score == 0.0 {
            return None;
        }
        total += term_score;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(title: &str, body: &str, pinned: bool) -> Notice {
        let mut n = Notice::new(title, body);
        n.pinned = pinned;
        n
    }

    #[test]
    fn test_title_outranks_body() {
        let notices = vec![
            notice("Annual sports day", "See the schedule", false),
            notice("Schedule change", "Sports practice moved", false),
        ];
        let hits = search_site("sports", &notices, &[], &[], 10);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].title, "Annual sports day");
    }

    #[test]
    fn test_all_terms_required() {
        let notices = vec![notice("Exam routine", "Class five", false)];
        assert!(search_site("exam missing-term", &notices, &[], &[], 10).is_empty());
        assert_eq!(search_site("exam routine", &notices, &[], &[], 10).len(), 1);
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let notices = vec![notice("Exam routine", "", false)];
        assert!(search_site("  ", &notices, &[], &[], 10).is_empty());
    }

    #[test]
    fn test_pinned_outranks_equal_match() {
        let notices = vec![
            notice("Holiday notice", "", false),
            notice("Holiday notice", "", true),
        ];
        let hits = search_site("holiday", &notices, &[], &[], 10);
        assert!(hits[0].score > hits[1].score);
    }

    #[test]
    fn test_pages_hit_by_slugged_record() {
        let pages = vec![Page::new("admissions", "Admissions", "How to apply")];
        let hits = search_site("apply", &[], &[], &pages, 10);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].kind, HitKind::Page);
        assert_eq!(hits[0].slug, "admissions");
    }
}
