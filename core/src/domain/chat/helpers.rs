use std::fmt::Write as _;

use crate::domain::chat::value_objects::AnalysisSnapshot;

/// Builds the dietician system prompt, embedding whatever analysis context
/// the caller supplied. Sections with no data are left out.
pub fn build_system_prompt(analysis: Option<&AnalysisSnapshot>, lang: &str) -> String {
    let mut prompt = String::from(
        "You are a helpful and friendly AI Dietician Assistant. \
         Provide concise, practical nutrition advice.\n\n",
    );

    if let Some(snapshot) = analysis {
        prompt.push_str("--- NUTRITION ANALYSIS CONTEXT ---\n");

        if !snapshot.total_nutrients.is_empty() {
            prompt.push_str("\n[Total Nutrients]\n");
            for (nutrient, amount) in &snapshot.total_nutrients {
                let _ = writeln!(prompt, "- {nutrient}: {amount}");
            }
        }

        if !snapshot.deficient.is_empty() {
            prompt.push_str("\n[Deficient Nutrients]\n");
            for (nutrient, shortfall) in &snapshot.deficient {
                let _ = writeln!(prompt, "- {nutrient}: need {shortfall} more");
            }
        }

        if let Some(weather) = &snapshot.weather {
            prompt.push_str("\n[Weather Context]\n");
            let _ = writeln!(prompt, "- Condition: {}", weather.condition);
            let _ = writeln!(prompt, "- Temperature: {}°C", weather.temp_c);
        }

        prompt.push_str("\n--- END CONTEXT ---\n");
    }

    prompt.push_str("\nProvide helpful, concise responses (2-4 sentences).");

    if !lang.is_empty() && lang != "en" {
        let _ = write!(prompt, "\nRespond in: {lang}");
    }

    prompt
}
