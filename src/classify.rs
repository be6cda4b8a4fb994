//! Repository classification heuristics
//!
//! Maps a repository's language list and topic tags to exactly one display
//! category. The rules are an ordered list evaluated first-match-wins, so a
//! repository tagged both `android` and `blockchain` classifies as
//! Blockchain. Rule order is load-bearing and must not be changed.

use serde::Serialize;
use std::fmt;

/// Display category assigned to every portfolio project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Machine Learning")]
    MachineLearning,
    Blockchain,
    #[serde(rename = "Mobile App")]
    MobileApp,
    #[serde(rename = "IoT")]
    Iot,
    #[serde(rename = "Web Application")]
    WebApplication,
    Other,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::MachineLearning => "Machine Learning",
            Category::Blockchain => "Blockchain",
            Category::MobileApp => "Mobile App",
            Category::Iot => "IoT",
            Category::WebApplication => "Web Application",
            Category::Other => "Other",
        };
        write!(f, "{}", name)
    }
}

impl Category {
    /// Hex color used for the placeholder image background accent
    pub fn color(&self) -> &'static str {
        match self {
            Category::MachineLearning => "10b981",
            Category::WebApplication => "3b82f6",
            Category::MobileApp => "ec4899",
            Category::Blockchain => "8b5cf6",
            Category::Iot => "f59e0b",
            Category::Other => "6b7280",
        }
    }
}

const ML_TOPICS: &[&str] = &["machine-learning", "ai", "tensorflow", "pytorch"];
const ML_HINT_TOPICS: &[&str] = &["ml", "ai", "data"];
const BLOCKCHAIN_TOPICS: &[&str] = &["blockchain", "ethereum", "web3"];
const MOBILE_TOPICS: &[&str] = &["mobile", "android", "ios", "flutter", "react-native"];
const MOBILE_LANGUAGES: &[&str] = &["kotlin", "swift", "dart", "java"];
const IOT_TOPICS: &[&str] = &["iot", "arduino", "raspberry-pi", "sensors"];
const WEB_LANGUAGES: &[&str] = &["javascript", "typescript", "html", "css"];

/// Classify a repository from its languages and topics
///
/// All comparisons are case-insensitive. Languages are checked as reported
/// by the languages endpoint; topics as reported by the detail endpoint.
pub fn classify(languages: &[String], topics: &[String]) -> Category {
    let languages: Vec<String> = languages.iter().map(|l| l.to_lowercase()).collect();
    let topics: Vec<String> = topics.iter().map(|t| t.to_lowercase()).collect();

    let has_lang = |name: &str| languages.iter().any(|l| l == name);
    let any_lang = |names: &[&str]| languages.iter().any(|l| names.contains(&l.as_str()));
    let any_topic = |names: &[&str]| topics.iter().any(|t| names.contains(&t.as_str()));

    if any_topic(ML_TOPICS) || (has_lang("python") && any_topic(ML_HINT_TOPICS)) {
        return Category::MachineLearning;
    }

    if any_topic(BLOCKCHAIN_TOPICS) || has_lang("solidity") {
        return Category::Blockchain;
    }

    if any_topic(MOBILE_TOPICS) || any_lang(MOBILE_LANGUAGES) {
        return Category::MobileApp;
    }

    if any_topic(IOT_TOPICS) || has_lang("c++") {
        return Category::Iot;
    }

    if any_lang(WEB_LANGUAGES) {
        return Category::WebApplication;
    }

    Category::Other
}

/// Build the deterministic placeholder image URL for a project card
///
/// The text is the repository name with `-`/`_` separators replaced by
/// spaces, URL-encoded; the accent color comes from the category.
pub fn placeholder_image(category: Category, name: &str, width: u32, height: u32) -> String {
    let text = name.replace(['-', '_'], " ");
    format!(
        "https://via.placeholder.com/{}x{}/1f2937/{}?text={}",
        width,
        height,
        category.color(),
        urlencoding::encode(&text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_topic_rules_match() {
        assert_eq!(
            classify(&[], &strings(&["machine-learning"])),
            Category::MachineLearning
        );
        assert_eq!(classify(&[], &strings(&["web3"])), Category::Blockchain);
        assert_eq!(classify(&[], &strings(&["flutter"])), Category::MobileApp);
        assert_eq!(classify(&[], &strings(&["raspberry-pi"])), Category::Iot);
    }

    #[test]
    fn test_language_rules_match() {
        assert_eq!(classify(&strings(&["Solidity"]), &[]), Category::Blockchain);
        assert_eq!(classify(&strings(&["Kotlin"]), &[]), Category::MobileApp);
        assert_eq!(classify(&strings(&["C++"]), &[]), Category::Iot);
        assert_eq!(
            classify(&strings(&["TypeScript"]), &[]),
            Category::WebApplication
        );
    }

    #[test]
    fn test_rule_order_blockchain_preempts_mobile() {
        // Tagged both android and blockchain: blockchain wins because its
        // rule comes first.
        let topics = strings(&["android", "blockchain"]);
        assert_eq!(classify(&[], &topics), Category::Blockchain);
    }

    #[test]
    fn test_ml_topic_alone_matches_without_python() {
        // The standalone "ai" topic satisfies the first clause of rule 1
        // regardless of language.
        assert_eq!(classify(&[], &strings(&["ai"])), Category::MachineLearning);
        assert_eq!(
            classify(&strings(&["Rust"]), &strings(&["AI"])),
            Category::MachineLearning
        );
    }

    #[test]
    fn test_ml_hint_topics_require_python() {
        // "ml"/"data" are only ML signals when paired with Python.
        assert_eq!(
            classify(&strings(&["Python"]), &strings(&["data"])),
            Category::MachineLearning
        );
        assert_eq!(classify(&strings(&["Go"]), &strings(&["data"])), Category::Other);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            classify(&strings(&["Python"]), &strings(&["ML"])),
            classify(&strings(&["python"]), &strings(&["ml"]))
        );
        assert_eq!(
            classify(&strings(&["JAVASCRIPT"]), &[]),
            Category::WebApplication
        );
    }

    #[test]
    fn test_no_match_is_other() {
        assert_eq!(classify(&strings(&["Rust"]), &strings(&["cli"])), Category::Other);
        assert_eq!(classify(&[], &[]), Category::Other);
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(Category::MachineLearning.color(), "10b981");
        assert_eq!(Category::WebApplication.color(), "3b82f6");
        assert_eq!(Category::MobileApp.color(), "ec4899");
        assert_eq!(Category::Blockchain.color(), "8b5cf6");
        assert_eq!(Category::Iot.color(), "f59e0b");
        assert_eq!(Category::Other.color(), "6b7280");
    }

    #[test]
    fn test_placeholder_image_url() {
        let url = placeholder_image(Category::WebApplication, "my-cool_project", 400, 250);
        assert_eq!(
            url,
            "https://via.placeholder.com/400x250/1f2937/3b82f6?text=my%20cool%20project"
        );
    }
}
