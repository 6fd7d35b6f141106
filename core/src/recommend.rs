use std::collections::{HashMap, HashSet};

use crate::types::{Finding, Priority, Recommendation};

const DESCRIPTION_LIMIT: usize = 200;
const URL_SAMPLE_LIMIT: usize = 5;

/// Groups findings by type and derives one prioritized recommendation per
/// group.
///
/// Pure function of the finding list: same input, same output. Groups keep
/// first-seen order, and the final two-key sort (priority, then risk) is
/// stable, so equal keys retain that order.
pub fn build_recommendations(findings: &[Finding]) -> Vec<Recommendation> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&Finding>> = HashMap::new();

    for finding in findings {
        let group = groups.entry(finding.name.as_str()).or_default();
        if group.is_empty() {
            order.push(finding.name.as_str());
        }
        group.push(finding);
    }

    let mut recommendations: Vec<Recommendation> = order
        .iter()
        .map(|name| {
            let group = &groups[name];
            let first = group[0];
            Recommendation {
                priority: Priority::from_risk(first.risk),
                finding_type: first.name.clone(),
                count: group.len(),
                risk: first.risk,
                description: truncate_description(&first.description),
                solution: first.solution.clone(),
                affected_urls: sample_urls(group),
                cwe_id: first.cwe_id.clone(),
            }
        })
        .collect();

    recommendations.sort_by_key(|rec| (rec.priority.rank(), rec.risk.rank()));
    recommendations
}

fn truncate_description(description: &str) -> String {
    if description.chars().count() > DESCRIPTION_LIMIT {
        let truncated: String = description.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{}...", truncated)
    } else {
        description.to_string()
    }
}

/// Deduplicated URLs across the whole group, first occurrence first, capped
/// at the sample limit.
fn sample_urls(group: &[&Finding]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut urls = Vec::new();
    for finding in group {
        for url in &finding.urls {
            if urls.len() == URL_SAMPLE_LIMIT {
                return urls;
            }
            if seen.insert(url.as_str()) {
                urls.push(url.clone());
            }
        }
    }
    urls
}
