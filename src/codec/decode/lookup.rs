use super::records::records;

/// Finds the value at `path` inside `data`.
///
/// The first path element is matched against the top-level records and the
/// first match wins; duplicates later in the payload are ignored. Remaining
/// path elements descend into the matched value as a nested payload.
///
/// Malformed input is tolerated on purpose: payloads come from scanned QR
/// codes, so any structural problem met before a match is reported as "not
/// found" rather than as an error. An empty path finds nothing.
pub fn get_in<'a, S: AsRef<str>>(data: &'a str, path: &[S]) -> Option<&'a str> {
    let (first, rest) = path.split_first()?;
    let first = first.as_ref();

    let record = records(data).find(|record| record.tag == first)?;
    if rest.is_empty() {
        Some(record.value)
    } else {
        get_in(record.value, rest)
    }
}

/// Like [`get_in`] but returns the empty string when nothing is found.
pub fn get_in_or_empty<'a, S: AsRef<str>>(data: &'a str, path: &[S]) -> &'a str {
    get_in(data, path).unwrap_or_default()
}
