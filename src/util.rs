use serde::{Deserialize, Deserializer};

pub(crate) mod duration_millis;

/// Deserialize a JSON `null` into the type's default value. The API emits explicit nulls for some list fields where an
/// empty list is meant.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
