//! Mock SEO analyzer data, same footing as the analytics dashboard: canned
//! numbers for the brochure pages.

use crate::analytics::StatCard;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RankingBucket {
    /// Position range, e.g. "1-3" or "50+".
    pub rank: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeywordRow {
    pub keyword: &'static str,
    pub position: u32,
    pub volume: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeoDashboard {
    pub stats: Vec<StatCard>,
    pub rankings: Vec<RankingBucket>,
    pub top_keywords: Vec<KeywordRow>,
}

pub fn dashboard() -> SeoDashboard {
    SeoDashboard {
        stats: vec![
            StatCard {
                label: "Domain Authority",
                value: "78",
                change: "+2 since last analysis",
            },
            StatCard {
                label: "Organic Traffic",
                value: "2,350",
                change: "+18% month-over-month",
            },
            StatCard {
                label: "Backlinks",
                value: "12,542",
                change: "+1,200 new links",
            },
            StatCard {
                label: "Top 3 Keywords",
                value: "15",
                change: "in top 3 search results",
            },
        ],
        rankings: vec![
            RankingBucket { rank: "1-3", count: 15 },
            RankingBucket { rank: "4-10", count: 45 },
            RankingBucket { rank: "11-20", count: 60 },
            RankingBucket { rank: "21-50", count: 30 },
            RankingBucket { rank: "50+", count: 15 },
        ],
        top_keywords: vec![
            KeywordRow { keyword: "digital marketing agency", position: 2, volume: 12100 },
            KeywordRow { keyword: "seo services", position: 4, volume: 8100 },
            KeywordRow { keyword: "content creation tool", position: 1, volume: 5400 },
            KeywordRow { keyword: "linkedin growth", position: 8, volume: 2900 },
            KeywordRow { keyword: "google analytics expert", position: 12, volume: 1900 },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_shape() {
        let d = dashboard();
        assert_eq!(d.stats.len(), 4);
        assert_eq!(d.rankings.len(), 5);
        assert_eq!(d.top_keywords.len(), 5);
    }

    #[test]
    fn top_keywords_have_positive_volume() {
        assert!(dashboard().top_keywords.iter().all(|k| k.volume > 0));
    }
}
