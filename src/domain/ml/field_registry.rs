use crate::domain::customer::CustomerRecord;

/// Ordered list of external field names.
/// This order and casing MUST match exactly what the trained pipeline was fit
/// on, including the embedded spaces in the last three names. Any change here
/// is a breaking change for deployed artifacts.
pub const FIELD_NAMES: &[&str] = &[
    "CreditScore",
    "Geography",
    "Gender",
    "Age",
    "Tenure",
    "Balance",
    "NumOfProducts",
    "HasCrCard",
    "IsActiveMember",
    "EstimatedSalary",
    "Complain",
    "Satisfaction Score",
    "Card Type",
    "Point Earned",
];

/// A single column value before artifact-side encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Category(&'static str),
}

/// Flattens a record into `(external name, value)` pairs in `FIELD_NAMES`
/// order. Booleans become 0/1; categoricals stay symbolic so the artifact can
/// apply its own stored encoding.
pub fn record_fields(record: &CustomerRecord) -> Vec<(&'static str, FieldValue)> {
    vec![
        ("CreditScore", FieldValue::Number(record.credit_score as f64)),
        ("Geography", FieldValue::Category(record.geography.as_str())),
        ("Gender", FieldValue::Category(record.gender.as_str())),
        ("Age", FieldValue::Number(record.age as f64)),
        ("Tenure", FieldValue::Number(record.tenure as f64)),
        ("Balance", FieldValue::Number(record.balance)),
        (
            "NumOfProducts",
            FieldValue::Number(record.num_of_products as f64),
        ),
        (
            "HasCrCard",
            FieldValue::Number(if record.has_cr_card { 1.0 } else { 0.0 }),
        ),
        (
            "IsActiveMember",
            FieldValue::Number(if record.is_active_member { 1.0 } else { 0.0 }),
        ),
        ("EstimatedSalary", FieldValue::Number(record.estimated_salary)),
        (
            "Complain",
            FieldValue::Number(if record.complain { 1.0 } else { 0.0 }),
        ),
        (
            "Satisfaction Score",
            FieldValue::Number(record.satisfaction_score as f64),
        ),
        ("Card Type", FieldValue::Category(record.card_type.as_str())),
        ("Point Earned", FieldValue::Number(record.point_earned as f64)),
    ]
}
