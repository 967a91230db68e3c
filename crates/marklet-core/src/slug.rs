//! Heading id generation

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<[!/a-z].*?>").expect("valid tag pattern"));

static PUNCTUATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r##"[\u{2000}-\u{206F}\u{2E00}-\u{2E7F}\\'!"#$%&()*+,./:;<=>?@\[\]^`{|}~]"##)
        .expect("valid punctuation pattern")
});

static WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s").expect("valid whitespace pattern"));

/// Produces unique, URL-safe ids from heading text.
///
/// A slugger remembers every slug it handed out, so the second heading titled
/// "Intro" becomes `intro-1`. Create one per rendered document.
#[derive(Debug, Clone, Default)]
pub struct Slugger {
    seen: HashMap<String, u32>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a value into its base slug without recording it
    pub fn serialize(value: &str) -> String {
        let lowered = value.trim().to_lowercase();
        let without_tags = HTML_TAG.replace_all(&lowered, "");
        let without_punct = PUNCTUATION.replace_all(&without_tags, "");
        WHITESPACE.replace_all(&without_punct, "-").into_owned()
    }

    /// Return the next unused slug for `value`. With `dry_run` the slug is
    /// computed but not recorded.
    pub fn slug(&mut self, value: &str, dry_run: bool) -> String {
        let base = Self::serialize(value);
        self.next_safe_slug(&base, dry_run)
    }

    fn next_safe_slug(&mut self, base: &str, dry_run: bool) -> String {
        let mut slug = base.to_string();
        let mut occurrences = 0;

        if let Some(&count) = self.seen.get(base) {
            occurrences = count;
            loop {
                occurrences += 1;
                slug = format!("{base}-{occurrences}");
                if !self.seen.contains_key(&slug) {
                    break;
                }
            }
        }

        if !dry_run {
            self.seen.insert(base.to_string(), occurrences);
            self.seen.insert(slug.clone(), 0);
        }
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize() {
        assert_eq!(Slugger::serialize("Hello World"), "hello-world");
        assert_eq!(Slugger::serialize("  What's <b>new</b>?  "), "whats-new");
        assert_eq!(Slugger::serialize("a_b-c"), "a_b-c");
    }

    #[test]
    fn test_serialize_strips_quotes_and_hashes() {
        assert_eq!(Slugger::serialize(r#"Say "hi" #1"#), "say-hi-1");
        assert_eq!(Slugger::serialize("C# & F# \u{2014} notes"), "c--f--notes");
    }

    #[test]
    fn test_repeated_slugs() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Intro", false), "intro");
        assert_eq!(slugger.slug("Intro", false), "intro-1");
        assert_eq!(slugger.slug("Intro", false), "intro-2");
    }

    #[test]
    fn test_collision_with_suffixed_heading() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("foo 1", false), "foo-1");
        assert_eq!(slugger.slug("foo", false), "foo");
        assert_eq!(slugger.slug("foo", false), "foo-2");
    }

    #[test]
    fn test_dry_run_does_not_record() {
        let mut slugger = Slugger::new();
        assert_eq!(slugger.slug("Intro", true), "intro");
        assert_eq!(slugger.slug("Intro", false), "intro");
    }
}
