/* Cookie headers arrive as `key=value` pairs separated by `;`. Values may themselves contain `=`
 * characters, so each segment is only split on the first one.
 */

pub fn find<'a>(header: Option<&'a str>, name: &str) -> Option<&'a str> {
  let header = header?;

  header
    .split(';')
    .map(|segment| segment.trim())
    .find_map(|segment| match segment.split_once('=') {
      Some((key, value)) if key == name => Some(value),
      None if segment == name => Some(""),
      _ => None,
    })
}

#[cfg(test)]
mod test {
  use super::find;

  #[test]
  fn finds_value_between_others() {
    assert_eq!(find(Some("a=1; accessToken=XYZ; b=2"), "accessToken"), Some("XYZ"));
  }

  #[test]
  fn preserves_equals_inside_value() {
    assert_eq!(find(Some("accessToken=a=b=c"), "accessToken"), Some("a=b=c"));
  }

  #[test]
  fn missing_header_finds_nothing() {
    assert_eq!(find(None, "accessToken"), None);
  }

  #[test]
  fn missing_key_finds_nothing() {
    assert_eq!(find(Some("a=1; b=2"), "accessToken"), None);
  }

  #[test]
  fn tolerates_padded_segments() {
    assert_eq!(find(Some("  a=1 ;   accessToken=XYZ  ; b=2"), "accessToken"), Some("XYZ"));
  }

  #[test]
  fn first_match_wins() {
    assert_eq!(find(Some("accessToken=one; accessToken=two"), "accessToken"), Some("one"));
  }

  #[test]
  fn bare_key_reads_as_empty() {
    assert_eq!(find(Some("a=1; accessToken"), "accessToken"), Some(""));
  }

  #[test]
  fn empty_header_finds_nothing() {
    assert_eq!(find(Some(""), "accessToken"), None);
  }
}
