use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{PredictionResult, Severity};

/// One keyword category: symptom keyword, candidate conditions, suggested
/// over-the-counter relief.
struct SymptomCategory {
    keyword: &'static str,
    conditions: &'static [&'static str],
    medicine: &'static str,
}

/// Category scan order matters: when several keywords match, the last
/// matching row wins the medicine assignment — including over the
/// chest-pain emergency default.
const CATEGORIES: &[SymptomCategory] = &[
    SymptomCategory {
        keyword: "headache",
        conditions: &["Migraine", "Tension Headache", "Sinusitis"],
        medicine: "Paracetamol, Ibuprofen",
    },
    SymptomCategory {
        keyword: "fever",
        conditions: &["Viral Infection", "Flu", "Typhoid"],
        medicine: "Paracetamol, Stay hydrated",
    },
    SymptomCategory {
        keyword: "stomach",
        conditions: &["Gastritis", "Food Poisoning", "Ulcer"],
        medicine: "Antacids (Eno/Digene), ORS",
    },
    SymptomCategory {
        keyword: "chest",
        conditions: &["Angina", "Heartburn", "Bronchitis"],
        medicine: "Aspirin (consult doctor immediately)",
    },
    SymptomCategory {
        keyword: "joint",
        conditions: &["Arthritis", "Gout", "Injury"],
        medicine: "Pain relief spray/gel, Ibuprofen",
    },
    SymptomCategory {
        keyword: "skin",
        conditions: &["Eczema", "Psoriasis", "Allergy"],
        medicine: "Antihistamine (Cetirizine)",
    },
];

/// Match symptoms against the keyword tables using the thread-local RNG.
pub fn match_symptoms(text: &str) -> PredictionResult {
    match_symptoms_with_rng(text, &mut rand::thread_rng())
}

/// Keyword-containment triage. Deterministic in every field except
/// `condition` (drawn uniformly from the accumulated candidates) and
/// `confidence` (uniform in [0.70, 0.95], rounded to 2 decimals).
///
/// Always returns a fully-populated result; unrecognized input yields the
/// fixed "Unknown Condition" answer.
pub fn match_symptoms_with_rng<R: Rng>(text: &str, rng: &mut R) -> PredictionResult {
    let text = text.to_lowercase();

    let mut candidates: Vec<&str> = Vec::new();
    let mut severity = Severity::Low;
    let mut specialist = "General Physician";
    let mut medicine = "Rest and Hydration";

    // Emergency default: overridable by the category scan below.
    if text.contains("chest") && text.contains("pain") {
        candidates.push("Angina / Possible Heart Issue");
        severity = Severity::High;
        specialist = "Cardiologist";
        medicine = "Aspirin (Emergency only) - Call Ambulance";
    }

    for category in CATEGORIES {
        if text.contains(category.keyword) {
            candidates.extend_from_slice(category.conditions);
            medicine = category.medicine;
        }
    }

    if candidates.is_empty() {
        return PredictionResult {
            condition: "Unknown Condition".into(),
            confidence: 0.0,
            severity: Severity::Medium,
            specialist: "General Physician".into(),
            medicine: "Consult Doctor".into(),
            recommended_minerals: Vec::new(),
            mineral_benefits: "N/A".into(),
            advice: "We could not match your symptoms to our database. Please consult a doctor."
                .into(),
        };
    }

    if text.contains("skin") {
        specialist = "Dermatologist";
    } else if text.contains("stomach") {
        specialist = "Gastroenterologist";
    } else if text.contains("joint") {
        specialist = "Orthopedic";
    } else if text.contains("head") {
        specialist = "Neurologist";
    }

    let (recommended_minerals, mineral_benefits) = recommend_minerals(&text);

    let condition = candidates
        .choose(rng)
        .copied()
        .unwrap_or("Unknown Condition");
    let confidence = (rng.gen_range(0.70f64..=0.95) * 100.0).round() / 100.0;

    let advice = format!(
        "Based on '{text}', we recommend seeing a {specialist}. Temporary relief: {medicine}."
    );

    PredictionResult {
        condition: condition.into(),
        confidence,
        severity,
        specialist: specialist.into(),
        medicine: medicine.into(),
        recommended_minerals,
        mineral_benefits: mineral_benefits.into(),
        advice,
    }
}

/// Supplement suggestion, first matching rule wins.
fn recommend_minerals(text: &str) -> (Vec<String>, &'static str) {
    if text.contains("head") {
        (
            vec!["Magnesium".into(), "Vitamin B2".into()],
            "Helps relax blood vessels and nerves.",
        )
    } else if text.contains("bone") || text.contains("joint") {
        (
            vec!["Calcium".into(), "Vitamin D3".into()],
            "Strengthens bones and reduces inflammation.",
        )
    } else if text.contains("stomach") {
        (
            vec!["Probiotics".into(), "Ginger".into()],
            "Aids digestion and reduces nausea.",
        )
    } else if text.contains("fatigue") || text.contains("tired") {
        (
            vec!["Iron".into(), "Vitamin B12".into()],
            "Increases energy levels and oxygen transport.",
        )
    } else {
        (
            vec!["Vitamin C".into(), "Zinc".into()],
            "Boosts immunity and general health.",
        )
    }
}
