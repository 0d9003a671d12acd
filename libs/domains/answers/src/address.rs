use regex::Regex;
use std::sync::LazyLock;

/// Regex pattern capturing the address segment of a listing text.
///
/// Listing texts follow the shape `주소:<address> 용도:<usage> ...`; the
/// capture runs from the address marker up to the first character of the
/// usage marker.
static ADDRESS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"주소:([^용도]+)").unwrap());

/// Fallback address used when a listing text carries no recognizable address
pub const ADDRESS_FALLBACK: &str = "주소 정보 없음";

/// Extract the address portion from a listing text.
///
/// Returns [`ADDRESS_FALLBACK`] when the pattern does not match. A matching
/// but whitespace-only capture trims to an empty string.
pub fn extract_address(text: &str) -> String {
    ADDRESS_PATTERN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|address| address.as_str().trim().to_string())
        .unwrap_or_else(|| ADDRESS_FALLBACK.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_address_between_markers() {
        let text = "주소:Seoul Gangnam-gu 역삼동 1-1 용도:Residential";
        assert_eq!(extract_address(text), "Seoul Gangnam-gu 역삼동 1-1");
    }

    #[test]
    fn test_missing_marker_returns_fallback() {
        assert_eq!(extract_address("면적:84㎡ 가격:12억"), ADDRESS_FALLBACK);
    }

    #[test]
    fn test_capture_stops_at_first_marker_character() {
        // The character class excludes 용 and 도 individually, so the capture
        // ends at the first occurrence of either.
        assert_eq!(extract_address("주소:세종도시 앞 용도:상가"), "세종");
    }

    #[test]
    fn test_whitespace_only_capture_trims_to_empty() {
        assert_eq!(extract_address("주소:   용도:Residential"), "");
    }

    #[test]
    fn test_marker_immediately_followed_by_usage_returns_fallback() {
        assert_eq!(extract_address("주소:용도:Residential"), ADDRESS_FALLBACK);
    }
}
