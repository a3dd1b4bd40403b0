/// Fixed EUR→IDR conversion rate baked into the application. The model
/// predicts in EUR; the second estimate is derived multiplicatively.
pub const EUR_TO_IDR_RATE: f64 = 16741.0;

/// Conversion happens on the raw estimate, before any display truncation.
/// Multiply first, truncate each result independently at formatting time.
pub fn eur_to_idr(price_eur: f64) -> f64 {
    price_eur * EUR_TO_IDR_RATE
}
