/* src/server/adapter/axum/src/locale.rs */

use axum::http::HeaderMap;
use axum::http::header::ACCEPT_LANGUAGE;

/// Pick the best supported locale from `Accept-Language`.
/// Higher q-values win; `zh-CN` falls back to `zh` when only the prefix is supported.
pub(crate) fn negotiate_locale(headers: &HeaderMap, locales: &[String]) -> Option<String> {
  if locales.is_empty() {
    return None;
  }
  let header = headers.get(ACCEPT_LANGUAGE).and_then(|v| v.to_str().ok())?;
  parse_accept_language(header, locales)
}

fn parse_accept_language(header: &str, locales: &[String]) -> Option<String> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        // Malformed or non-finite weights (nan, inf) make the entry unusable
        q = val
          .parse::<f64>()
          .ok()
          .filter(|v| v.is_finite())
          .map_or(0.0, |v| v.clamp(0.0, 1.0));
      }
    }
    // q=0 means "not acceptable"
    if q > 0.0 {
      entries.push((lang, q));
    }
  }

  // Stable sort keeps header order among equal q-values
  entries.sort_by(|a, b| b.1.total_cmp(&a.1));

  let supported = |lang: &str| locales.iter().find(|l| l.eq_ignore_ascii_case(lang)).cloned();
  for (lang, _) in &entries {
    if let Some(loc) = supported(lang) {
      return Some(loc);
    }
    if let Some((prefix, _)) = lang.split_once('-') {
      if let Some(loc) = supported(prefix) {
        return Some(loc);
      }
    }
  }
  None
}

#[cfg(test)]
mod tests {
  use axum::http::HeaderValue;

  use super::*;

  fn locales() -> Vec<String> {
    vec!["en".into(), "zh".into(), "ja".into()]
  }

  #[test]
  fn exact_match() {
    assert_eq!(parse_accept_language("zh,en;q=0.5", &locales()).as_deref(), Some("zh"));
  }

  #[test]
  fn q_value_priority() {
    assert_eq!(parse_accept_language("en;q=0.5,ja;q=0.9", &locales()).as_deref(), Some("ja"));
  }

  #[test]
  fn region_prefix_match() {
    assert_eq!(parse_accept_language("zh-CN,en;q=0.5", &locales()).as_deref(), Some("zh"));
  }

  #[test]
  fn no_supported_locale() {
    assert_eq!(parse_accept_language("fr,de;q=0.8", &locales()), None);
    assert_eq!(parse_accept_language("", &locales()), None);
  }

  #[test]
  fn zero_and_malformed_weights_skipped() {
    assert_eq!(parse_accept_language("zh;q=0,ja;q=0.2", &locales()).as_deref(), Some("ja"));
    let header = "zh;q=nan,en;q=inf,ja;q=0.1";
    assert_eq!(parse_accept_language(header, &locales()).as_deref(), Some("ja"));
    assert_eq!(parse_accept_language("zh;q=abc", &locales()), None);
    assert_eq!(parse_accept_language("ja;q=0.5,en;q=7", &locales()).as_deref(), Some("en"));
  }

  #[test]
  fn long_header_with_nan_weights_does_not_panic() {
    for n in [20, 25, 40, 64] {
      let mut parts: Vec<String> = (0..n)
        .map(|i| {
          let q = if i % 3 == 0 { "nan".to_string() } else { format!("0.{}", (i % 9) + 1) };
          format!("x{i};q={q}")
        })
        .collect();
      parts.push("ja;q=0.95".to_string());
      let header = parts.join(",");
      assert_eq!(parse_accept_language(&header, &locales()).as_deref(), Some("ja"));
    }
  }

  #[test]
  fn header_missing_or_no_locales() {
    let mut headers = HeaderMap::new();
    assert_eq!(negotiate_locale(&headers, &locales()), None);
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("ja"));
    assert_eq!(negotiate_locale(&headers, &locales()).as_deref(), Some("ja"));
    assert_eq!(negotiate_locale(&headers, &[]), None);
  }
}
