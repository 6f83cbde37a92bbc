use serde::{Deserialize, Deserializer};

// Query strings arrive as text; a page value that does not parse as a number
// is treated the same as no page value at all.
pub fn deserialize_lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.parse::<usize>().ok()))
}
