use std::path::Path;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// End-of-request roll-up written next to the events file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub request_id: String,
    pub started_at: String,
    pub finished_at: String,
    pub total_detections: u64,
    pub total_elements: u64,
    pub total_activities: u64,
    pub activities: Vec<Map<String, Value>>,
}

pub fn write_report(
    path: &Path,
    report: &AnalysisReport,
    extra: Option<&Map<String, Value>>,
) -> anyhow::Result<()> {
    let mut payload = Map::new();
    payload.insert(
        "request_id".to_string(),
        Value::String(report.request_id.clone()),
    );
    payload.insert(
        "started_at".to_string(),
        Value::String(report.started_at.clone()),
    );
    payload.insert(
        "finished_at".to_string(),
        Value::String(report.finished_at.clone()),
    );
    payload.insert(
        "total_detections".to_string(),
        Value::Number(report.total_detections.into()),
    );
    payload.insert(
        "total_elements".to_string(),
        Value::Number(report.total_elements.into()),
    );
    payload.insert(
        "total_activities".to_string(),
        Value::Number(report.total_activities.into()),
    );
    payload.insert(
        "activities".to_string(),
        Value::Array(
            report
                .activities
                .iter()
                .cloned()
                .map(Value::Object)
                .collect(),
        ),
    );
    payload.insert("ts".to_string(), Value::String(now_utc_iso()));
    if let Some(extra) = extra {
        for (key, value) in extra {
            payload.insert(key.clone(), value.clone());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string_pretty(&Value::Object(payload))?)?;
    Ok(())
}

fn now_utc_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Map, Value};

    use super::{write_report, AnalysisReport};

    #[test]
    fn write_report_generates_expected_payload() -> anyhow::Result<()> {
        let temp = tempfile::tempdir()?;
        let path = temp.path().join("report.json");

        let mut row = Map::new();
        row.insert("object_label".to_string(), json!("ball"));
        row.insert("focus".to_string(), json!("gross_motor"));
        let report = AnalysisReport {
            request_id: "req-123".to_string(),
            started_at: "2026-02-19T00:00:00+00:00".to_string(),
            finished_at: "2026-02-19T00:00:02+00:00".to_string(),
            total_detections: 7,
            total_elements: 3,
            total_activities: 5,
            activities: vec![row],
        };
        let mut extra = Map::new();
        extra.insert("audience".to_string(), Value::String("parent".to_string()));
        write_report(&path, &report, Some(&extra))?;

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        assert_eq!(parsed["request_id"], json!("req-123"));
        assert_eq!(parsed["total_elements"], json!(3));
        assert_eq!(parsed["activities"][0]["object_label"], json!("ball"));
        assert_eq!(parsed["audience"], json!("parent"));
        assert!(parsed.get("ts").and_then(Value::as_str).is_some());
        Ok(())
    }
}
