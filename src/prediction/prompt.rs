/// Build the triage prompt for one symptom description.
///
/// The backend is told to answer with a bare JSON object matching
/// `PredictionResult`; `parser::parse_prediction` still strips stray code
/// fences because models do not always comply.
pub fn build_prediction_prompt(symptoms: &str) -> String {
    format!(
        r#"Act as a compassionate and professional doctor. Analyze these symptoms: "{symptoms}".
Return a JSON object ONLY (no markdown) with these fields:
- condition: The most likely medical condition.
- confidence: A float between 0.0 and 1.0.
- severity: "low", "medium", or "high".
- specialist: The type of doctor to see (e.g. Cardiologist).
- medicine: Recommended over-the-counter medicine for temporary relief (or "None" if unsafe).
- recommended_minerals: A list of minerals/vitamins that help (e.g. ["Magnesium", "Vitamin D"]).
- mineral_benefits: A short string explaining why these minerals help.
- advice: A 2-sentence empathetic professional advice."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_symptom_text() {
        let prompt = build_prediction_prompt("sore throat and fever");
        assert!(prompt.contains("\"sore throat and fever\""));
    }

    #[test]
    fn prompt_names_every_result_field() {
        let prompt = build_prediction_prompt("headache");
        for field in [
            "condition",
            "confidence",
            "severity",
            "specialist",
            "medicine",
            "recommended_minerals",
            "mineral_benefits",
            "advice",
        ] {
            assert!(prompt.contains(field), "prompt is missing field {field}");
        }
    }

    #[test]
    fn prompt_constrains_severity_levels() {
        let prompt = build_prediction_prompt("headache");
        assert!(prompt.contains(r#""low", "medium", or "high""#));
    }
}
