use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
}

/// Accepts a string, a number or null and yields text.
///
/// Stored recipes are produced by an LLM and by hand, so quantities show up
/// as `"2"`, `2`, `2.5` or `null` depending on who wrote them.
pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;

    Ok(match value {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Integer(n)) => n.to_string(),
        Some(Scalar::Float(n)) => n.to_string(),
        None => String::new(),
    })
}
