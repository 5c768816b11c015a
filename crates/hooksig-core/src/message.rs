/// Builds the signed message: `UTF-8(timestamp) || payload`.
///
/// There is no separator and no length prefix. Producers sign exactly these
/// bytes, so any change here breaks interoperability.
pub fn signed_message(timestamp: &str, payload: &[u8]) -> Vec<u8> {
    let mut message = Vec::with_capacity(timestamp.len() + payload.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(payload);
    message
}
