use roxmltree::{Document, Node};

use crate::types::{Finding, RiskLevel};

/// Extracts every `alertitem` element from a ZAP XML report, wherever it
/// sits under the root.
///
/// Only a document that fails to parse at all is an error; a missing child
/// element degrades that one field to its default.
pub fn parse_report(content: &str) -> Result<Vec<Finding>, roxmltree::Error> {
    let doc = Document::parse(content)?;
    Ok(doc
        .descendants()
        .filter(|node| node.has_tag_name("alertitem"))
        .map(parse_alert)
        .collect())
}

/// Maps a numeric `riskcode` onto the risk scale. A missing element counts
/// as code "0"; an unrecognized code degrades to `Unknown`.
fn parse_risk(code: &str) -> RiskLevel {
    match code {
        "3" => RiskLevel::High,
        "2" => RiskLevel::Medium,
        "1" => RiskLevel::Low,
        "0" => RiskLevel::Informational,
        _ => RiskLevel::Unknown,
    }
}

fn child_text<'a>(node: Node<'a, '_>, name: &str, default: &'a str) -> &'a str {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .unwrap_or(default)
}

fn opt_child_text(node: Node, name: &str) -> Option<String> {
    node.children()
        .find(|child| child.has_tag_name(name))
        .and_then(|child| child.text())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn parse_alert(alert: Node) -> Finding {
    let instances: Vec<Node> = alert
        .children()
        .filter(|node| node.has_tag_name("instances"))
        .flat_map(|node| node.children().filter(|child| child.has_tag_name("instance")))
        .collect();

    // An instance without a uri child contributes to the count but not to
    // the URL list.
    let urls = instances
        .iter()
        .filter_map(|instance| {
            instance
                .children()
                .find(|child| child.has_tag_name("uri"))
                .map(|uri| uri.text().unwrap_or("").to_string())
        })
        .collect();

    Finding {
        id: child_text(alert, "pluginid", "unknown").to_string(),
        name: child_text(alert, "name", "Unknown Alert").to_string(),
        risk: parse_risk(child_text(alert, "riskcode", "0")),
        confidence: child_text(alert, "confidence", "Unknown").to_string(),
        description: child_text(alert, "desc", "").to_string(),
        solution: child_text(alert, "solution", "").to_string(),
        reference: child_text(alert, "reference", "").to_string(),
        instance_count: instances.len(),
        urls,
        cwe_id: opt_child_text(alert, "cweid"),
        wasc_id: opt_child_text(alert, "wascid"),
        source: super::ZAP_SOURCE.to_string(),
    }
}
