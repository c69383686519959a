//! Small string helpers shared by the extractors, the downloader and logging.
//!
//! - HTML tag stripping for titles
//! - File extension lookup for image links
//! - Output file naming
//! - String truncation for log previews

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("static regex"));

/// Remove every `<...>` sequence from `s`.
///
/// The search API wraps the matched keyword in `<b>` tags, so this is applied
/// to every extracted title.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(strip_html_tags("A<b>B</b>"), "AB");
/// ```
pub fn strip_html_tags(s: &str) -> String {
    HTML_TAG.replace_all(s, "").into_owned()
}

/// The segment after the last `.` of `link`, with trailing dots ignored.
///
/// A link without any dot yields the whole link.
pub fn extension_of(link: &str) -> &str {
    let trimmed = link.trim_end_matches('.');
    trimmed.rsplit('.').next().unwrap_or(trimmed)
}

/// Whether `link` ends in a `png` or `jpg` extension, ignoring case.
pub fn has_supported_image_extension(link: &str) -> bool {
    let ext = extension_of(link);
    ext.eq_ignore_ascii_case("png") || ext.eq_ignore_ascii_case("jpg")
}

/// `<dir>/<keyword>.txt`
pub fn titles_file_path(dir: &Path, keyword: &str) -> PathBuf {
    dir.join(format!("{keyword}.txt"))
}

/// `<dir>/image_<keyword>.<ext>`
pub fn image_file_path(dir: &Path, keyword: &str, ext: &str) -> PathBuf {
    dir.join(format!("image_{keyword}.{ext}"))
}

/// Truncate a string for logging purposes.
///
/// Long strings are cut to `max` bytes (backing off to a char boundary) with
/// an ellipsis and the number of dropped bytes appended.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(truncate_for_log("short", 100), "short");
/// assert_eq!(truncate_for_log(&"a".repeat(500), 10), "aaaaaaaaaa…(+490 bytes)");
/// ```
pub fn truncate_for_log(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut cut = max;
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…(+{} bytes)", &s[..cut], s.len() - cut)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_tags() {
        assert_eq!(strip_html_tags("A<b>B</b>"), "AB");
        assert_eq!(strip_html_tags("no tags"), "no tags");
        assert_eq!(strip_html_tags("<a href=\"x\">link</a> text"), "link text");
    }

    #[test]
    fn test_strip_html_tags_keeps_unclosed_bracket() {
        assert_eq!(strip_html_tags("1 < 2"), "1 < 2");
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("http://x/b.JPG"), "JPG");
        assert_eq!(extension_of("http://x/a.tar.gz"), "gz");
        assert_eq!(extension_of("noext"), "noext");
        assert_eq!(extension_of("http://x/a.png."), "png");
    }

    #[test]
    fn test_has_supported_image_extension() {
        assert!(has_supported_image_extension("http://x/b.JPG"));
        assert!(has_supported_image_extension("http://x/b.png"));
        assert!(!has_supported_image_extension("http://x/a.gif"));
        assert!(!has_supported_image_extension("http://x/a.jpeg"));
    }

    #[test]
    fn test_output_paths() {
        let dir = Path::new("/tmp/out");
        assert_eq!(titles_file_path(dir, "test"), Path::new("/tmp/out/test.txt"));
        assert_eq!(
            image_file_path(dir, "test", "JPG"),
            Path::new("/tmp/out/image_test.JPG")
        );
    }

    #[test]
    fn test_truncate_for_log_short_string() {
        assert_eq!(truncate_for_log("Hello, world!", 100), "Hello, world!");
    }

    #[test]
    fn test_truncate_for_log_long_string() {
        let s = "a".repeat(500);
        let result = truncate_for_log(&s, 100);
        assert!(result.starts_with(&"a".repeat(100)));
        assert!(result.contains("…(+400 bytes)"));
    }

    #[test]
    fn test_truncate_for_log_multibyte() {
        // "뉴스" is 6 bytes; cutting at 4 must back off to 3
        assert_eq!(truncate_for_log("뉴스", 4), "뉴…(+3 bytes)");
    }
}
