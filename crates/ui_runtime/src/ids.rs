use std::fmt::Write;

/// Encodes a caller-supplied key as a segment that is safe inside a DOM `id`.
///
/// ASCII letters, digits and `-` pass through. Every other byte, `_` included, becomes `_xx`
/// with two lowercase hex digits, so distinct keys always produce distinct segments.
pub fn dom_id_segment(raw: &str) -> String {
    let mut segment = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' {
            segment.push(char::from(byte));
        } else {
            let _ = write!(segment, "_{byte:02x}");
        }
    }
    segment
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn segment_keeps_safe_characters_and_escapes_the_rest() {
        assert_eq!(dom_id_segment("item-1"), "item-1");
        assert_eq!(dom_id_segment("shipping & returns"), "shipping_20_26_20returns");
        assert_eq!(dom_id_segment("faq_2"), "faq_5f2");
    }

    #[test]
    fn distinct_keys_never_share_a_segment() {
        let keys = ["a b", "a-b", "a_b", "a_20b", "日本", "中国", " a", "a"];
        let segments: std::collections::HashSet<String> =
            keys.iter().map(|key| dom_id_segment(key)).collect();
        assert_eq!(segments.len(), keys.len());
    }
}
