use serde::Serializer;

pub(crate) fn is_zero(value: &u64) -> bool {
    *value == 0
}

/// The id is omitted both when absent and when zero, as the wire JSON does.
pub(crate) fn id_is_zero(id: &Option<u8>) -> bool {
    matches!(id, None | Some(0))
}

/// Render a u64 as a decimal string.
pub(crate) fn u64_string<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut buffer = itoa::Buffer::new();
    serializer.serialize_str(buffer.format(*value))
}

pub(crate) fn hex_bytes<S, T>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    serializer.serialize_str(&hex::encode(bytes))
}
