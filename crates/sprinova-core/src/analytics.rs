//! Mock analytics dashboard data. The dashboard is illustrative by design;
//! the numbers are canned, not wired to a measurement backend.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatCard {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthlyTraffic {
    pub date: &'static str,
    pub visitors: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct TrafficSource {
    pub name: &'static str,
    /// Share of total traffic, in percent.
    pub share: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsDashboard {
    pub stats: Vec<StatCard>,
    pub traffic: Vec<MonthlyTraffic>,
    pub sources: Vec<TrafficSource>,
}

pub fn dashboard() -> AnalyticsDashboard {
    AnalyticsDashboard {
        stats: vec![
            StatCard {
                label: "Total Visitors",
                value: "12,234",
                change: "+19% from last month",
            },
            StatCard {
                label: "Bounce Rate",
                value: "45.5%",
                change: "-5% from last month",
            },
            StatCard {
                label: "Session Duration",
                value: "2m 34s",
                change: "+12s from last month",
            },
            StatCard {
                label: "Conversions",
                value: "350",
                change: "+8% from last month",
            },
        ],
        traffic: vec![
            MonthlyTraffic { date: "2024-01-01", visitors: 2400 },
            MonthlyTraffic { date: "2024-02-01", visitors: 1398 },
            MonthlyTraffic { date: "2024-03-01", visitors: 9800 },
            MonthlyTraffic { date: "2024-04-01", visitors: 3908 },
            MonthlyTraffic { date: "2024-05-01", visitors: 4800 },
            MonthlyTraffic { date: "2024-06-01", visitors: 3800 },
            MonthlyTraffic { date: "2024-07-01", visitors: 4300 },
        ],
        sources: vec![
            TrafficSource { name: "Organic Search", share: 45 },
            TrafficSource { name: "Direct", share: 25 },
            TrafficSource { name: "Referral", share: 20 },
            TrafficSource { name: "Social", share: 10 },
        ],
    }
}

/// Sample report used to pre-fill the analytics summary tool.
pub fn sample_report() -> serde_json::Value {
    serde_json::json!({
        "report": "Website Traffic Overview",
        "period": "2024-06-01 to 2024-06-30",
        "metrics": {
            "users": 12234,
            "sessions": 15678,
            "bounce_rate": 0.455,
            "avg_session_duration": 154
        },
        "traffic_sources": [
            { "source": "google", "users": 5505, "type": "organic" },
            { "source": "(direct)", "users": 3058, "type": "direct" },
            { "source": "linkedin.com", "users": 2446, "type": "referral" },
            { "source": "facebook.com", "users": 1223, "type": "social" }
        ],
        "top_pages": [
            { "path": "/", "pageviews": 18034 },
            { "path": "/services/seo", "pageviews": 9876 },
            { "path": "/blog/top-10-marketing-trends", "pageviews": 7654 }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_has_four_stat_cards_and_full_year_to_date() {
        let d = dashboard();
        assert_eq!(d.stats.len(), 4);
        assert_eq!(d.traffic.len(), 7);
        assert_eq!(d.sources.iter().map(|s| s.share).sum::<u32>(), 100);
    }

    #[test]
    fn sample_report_is_well_formed() {
        let report = sample_report();
        assert_eq!(report["metrics"]["users"], 12234);
        assert!(report["traffic_sources"].as_array().unwrap().len() >= 4);
    }
}
