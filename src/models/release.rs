use serde::Deserialize;

/// The slice of an upstream release payload this service reads.
///
/// Every other field of the payload (author, assets, bodies) is ignored.
/// A missing or `null` `tag_name` decodes to an empty string, which also
/// covers error bodies such as `{"message": "Not Found"}`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct UpstreamRelease {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tag_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
