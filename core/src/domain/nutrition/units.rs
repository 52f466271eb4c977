/// Converts a provider-reported amount into canonical milligrams.
///
/// Only the gram and milligram families are recognized. Unknown or missing
/// units are passed through unchanged, i.e. treated as already-milligram.
/// This mirrors the provider contract and is a known weakness (a "µg" value
/// would be overcounted 1000×); do not tighten it without product sign-off.
pub fn to_milligrams(amount: f64, unit: &str) -> f64 {
    match unit.trim().to_lowercase().as_str() {
        "g" | "gram" | "grams" => amount * 1000.0,
        "mg" | "milligram" | "milligrams" => amount,
        _ => amount,
    }
}
