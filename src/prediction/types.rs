use serde::{Deserialize, Serialize};

/// Three-level triage severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    #[default]
    Medium,
    High,
}

/// Structured triage suggestion returned for every prediction.
///
/// All fields carry defaults so a partial JSON object from the generative
/// backend still decodes; downstream consumers must tolerate defaulted
/// fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PredictionResult {
    pub condition: String,
    pub confidence: f64,
    pub severity: Severity,
    pub specialist: String,
    pub medicine: String,
    pub recommended_minerals: Vec<String>,
    pub mineral_benefits: String,
    pub advice: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Severity::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"high\"");
    }

    #[test]
    fn severity_deserializes_lowercase() {
        let s: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(s, Severity::High);
    }

    #[test]
    fn empty_object_decodes_to_defaults() {
        let result: PredictionResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.condition, "");
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.severity, Severity::Medium);
        assert!(result.recommended_minerals.is_empty());
    }

    #[test]
    fn result_round_trips_through_json() {
        let result = PredictionResult {
            condition: "Migraine".into(),
            confidence: 0.82,
            severity: Severity::Low,
            specialist: "Neurologist".into(),
            medicine: "Paracetamol, Ibuprofen".into(),
            recommended_minerals: vec!["Magnesium".into(), "Vitamin B2".into()],
            mineral_benefits: "Helps relax blood vessels and nerves.".into(),
            advice: "Rest in a dark room.".into(),
        };
        let json = serde_json::to_string(&result).unwrap();
        let back: PredictionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.condition, "Migraine");
        assert_eq!(back.severity, Severity::Low);
        assert_eq!(back.recommended_minerals.len(), 2);
    }
}
