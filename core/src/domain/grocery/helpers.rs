use crate::domain::{
    common::entities::app_errors::CoreError,
    grocery::{entities::GroceryItem, value_objects::GroceryProfile},
};

pub const GROCERY_SYSTEM_PROMPT: &str = "You are an expert nutritionist and meal planner. \
     Generate practical, healthy grocery lists in valid JSON format ONLY. \
     Return raw JSON array with no markdown formatting, no code blocks, \
     no explanations - just pure JSON.";

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Renders the grocery-list prompt from the health profile.
pub fn build_grocery_prompt(profile: &GroceryProfile) -> String {
    let restrictions = or_default(&profile.dietary_restrictions, "None");
    let cuisines = or_default(&profile.preferred_cuisines, "Any");

    format!(
        r#"Generate a personalized grocery list based on this health profile:

**Personal Information:**
- Age: {age} years
- Gender: {gender}
- Height: {height} cm
- Weight: {weight} kg
- Activity Level: {activity}

**Health Metrics:**
- Blood Pressure: {systolic}/{diastolic} mmHg
- Blood Sugar: {sugar} mg/dL
- Cholesterol: {cholesterol} mg/dL

**Dietary Preferences:**
- Goals: {goals}
- Restrictions: {restrictions}
- Preferred Cuisines: {cuisines}
- Budget Level: {budget}
- Meal Plan Duration: {duration} days

**Location Context:**
- Region: {region}
- Weather: {weather}

Please generate a comprehensive grocery list organized by categories.

Return ONLY a valid JSON array with this exact format (no markdown, no explanations):
[
  {{"category": "Fruits & Vegetables", "name": "Spinach", "quantity": "500g"}},
  {{"category": "Proteins", "name": "Chicken Breast", "quantity": "1kg"}}
]

Make the list:
- Tailored to their health conditions (BP, sugar, cholesterol)
- Appropriate for their dietary goals and restrictions
- Suitable for their region ({region}) and weather ({weather})
- Within their budget level ({budget})
- Sufficient for {duration} days
- Include 15-25 items with variety and balanced nutrition"#,
        age = profile.age,
        gender = profile.gender,
        height = profile.height,
        weight = profile.weight,
        activity = profile.activity_level,
        systolic = profile.systolic_bp,
        diastolic = profile.diastolic_bp,
        sugar = profile.blood_sugar,
        cholesterol = profile.cholesterol,
        goals = profile.dietary_goals,
        restrictions = restrictions,
        cuisines = cuisines,
        budget = profile.budget_level,
        duration = profile.meal_plan_duration,
        region = profile.region,
        weather = profile.weather,
    )
}

/// Strips a markdown code fence if the model wrapped its JSON in one.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let inner = if let Some((_, rest)) = trimmed.split_once("```json") {
        rest.split("```").next().unwrap_or(rest)
    } else if let Some((_, rest)) = trimmed.split_once("```") {
        rest.split("```").next().unwrap_or(rest)
    } else {
        trimmed
    };
    inner.trim()
}

/// Parses the provider's output into grocery items. Every item must carry
/// category, name, and quantity.
pub fn parse_grocery_list(raw: &str) -> Result<Vec<GroceryItem>, CoreError> {
    serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| CoreError::MalformedProviderResponse(format!("grocery list: {e}")))
}

/// Fixed list substituted when the provider's output cannot be parsed.
pub fn fallback_grocery_list() -> Vec<GroceryItem> {
    vec![
        GroceryItem::new("Fruits & Vegetables", "Spinach", "500g"),
        GroceryItem::new("Fruits & Vegetables", "Tomatoes", "1kg"),
        GroceryItem::new("Proteins", "Chicken Breast", "1kg"),
        GroceryItem::new("Proteins", "Eggs", "12 pieces"),
        GroceryItem::new("Grains & Cereals", "Brown Rice", "2kg"),
        GroceryItem::new("Dairy & Alternatives", "Low-fat Milk", "2L"),
        GroceryItem::new("Snacks & Beverages", "Green Tea", "100g"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_profile_and_defaults() {
        let profile = GroceryProfile {
            age: "30".into(),
            region: "Pune".into(),
            ..Default::default()
        };
        let prompt = build_grocery_prompt(&profile);
        assert!(prompt.contains("- Age: 30 years"));
        assert!(prompt.contains("- Region: Pune"));
        assert!(prompt.contains("- Restrictions: None"));
        assert!(prompt.contains("- Preferred Cuisines: Any"));
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let raw = "```json\n[{\"category\":\"Proteins\",\"name\":\"Eggs\",\"quantity\":\"12\"}]\n```";
        let items = parse_grocery_list(raw).unwrap();
        assert_eq!(items, vec![GroceryItem::new("Proteins", "Eggs", "12")]);
    }

    #[test]
    fn bare_fences_are_unwrapped_too() {
        let raw = "```\n[]\n```";
        assert_eq!(parse_grocery_list(raw).unwrap(), vec![]);
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        let raw = r#"[{"name": "Eggs"}]"#;
        assert!(matches!(
            parse_grocery_list(raw),
            Err(CoreError::MalformedProviderResponse(_))
        ));
    }

    #[test]
    fn non_array_output_fails_to_parse() {
        assert!(parse_grocery_list("Sure! Here is your list.").is_err());
        assert!(parse_grocery_list(r#"{"category":"x","name":"y","quantity":"z"}"#).is_err());
    }

    #[test]
    fn fallback_spans_multiple_categories() {
        let items = fallback_grocery_list();
        assert!(items.len() >= 5);
        let categories: std::collections::BTreeSet<&str> =
            items.iter().map(|item| item.category.as_str()).collect();
        assert!(categories.len() >= 3);
    }
}
