use serde_json::Value;

use crate::types::{Finding, RiskLevel};

/// Extracts every alert from a ZAP JSON report.
///
/// Alerts live under `site[0].alerts`. A report without a `site` entry is a
/// valid report with zero findings, not an error; structural problems are
/// caught earlier when the document itself fails to deserialize.
pub fn parse_report(data: &Value) -> Vec<Finding> {
    data.get("site")
        .and_then(Value::as_array)
        .and_then(|sites| sites.first())
        .and_then(|site| site.get("alerts"))
        .and_then(Value::as_array)
        .map(|alerts| alerts.iter().map(parse_alert).collect())
        .unwrap_or_default()
}

/// Maps the leading token of a `riskdesc` value (e.g. "High (Medium)") onto
/// the risk scale. This scanner family never emits "Critical" here, so that
/// token, like any other unrecognized one, degrades to `Unknown`.
fn parse_risk(riskdesc: &str) -> RiskLevel {
    match riskdesc.split(' ').next().unwrap_or("") {
        "High" => RiskLevel::High,
        "Medium" => RiskLevel::Medium,
        "Low" => RiskLevel::Low,
        "Informational" => RiskLevel::Informational,
        _ => RiskLevel::Unknown,
    }
}

fn str_field<'a>(value: &'a Value, key: &str, default: &'a str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or(default)
}

fn opt_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn parse_alert(alert: &Value) -> Finding {
    let instances = alert
        .get("instances")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[]);

    Finding {
        id: str_field(alert, "pluginid", "unknown").to_string(),
        name: str_field(alert, "name", "Unknown Alert").to_string(),
        risk: parse_risk(str_field(alert, "riskdesc", "Unknown")),
        confidence: str_field(alert, "confidence", "Unknown").to_string(),
        description: str_field(alert, "desc", "").to_string(),
        solution: str_field(alert, "solution", "").to_string(),
        reference: str_field(alert, "reference", "").to_string(),
        instance_count: instances.len(),
        urls: instances
            .iter()
            .map(|instance| str_field(instance, "uri", "").to_string())
            .collect(),
        cwe_id: opt_field(alert, "cweid"),
        wasc_id: opt_field(alert, "wascid"),
        source: super::ZAP_SOURCE.to_string(),
    }
}
