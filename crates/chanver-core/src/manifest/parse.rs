//! Parse checksum-file lines (`sha256sum` layout) into manifest entries.

/// Length of a hex-encoded SHA-256 digest.
pub(crate) const DIGEST_HEX_LEN: usize = 64;

/// True if `value` has the length of a hex SHA-256 digest. The content is not
/// checked: a token of the right length that is not lowercase hex is kept and
/// simply never matches a computed digest.
pub(crate) fn is_digest_token(value: &str) -> bool {
    value.len() == DIGEST_HEX_LEN
}

/// Parse one manifest line into `(filename, digest)`, digest kept as written.
///
/// Layout: `<digest><space><marker?><filename>`, where the marker is the
/// second space of text mode or `*` of binary mode. Returns None for lines
/// that do not have this shape.
pub(crate) fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (digest, rest) = line.split_once(' ')?;
    if !is_digest_token(digest) {
        return None;
    }
    let name = rest
        .strip_prefix(' ')
        .or_else(|| rest.strip_prefix('*'))
        .unwrap_or(rest);
    if name.is_empty() {
        return None;
    }
    Some((name.to_string(), digest.to_string()))
}
