//! Decides whether a query should be treated as conversational ("ask the
//! assistant") or as a traditional keyword search. A handful of fixed
//! heuristics, nothing resembling real language understanding.

/// Interrogative and modal words that mark a question when the text starts
/// with them. Prefix test, deliberately not word-bounded: "whatever" counts.
const QUESTION_STARTERS: &[&str] = &[
    "what", "where", "when", "why", "who", "how", "can", "could", "would", "will", "should", "is",
    "are", "do", "does", "did", "has", "have", "had",
];

/// Imperative verbs that read as a request rather than a keyword.
const COMMAND_VERBS: &[&str] = &[
    "find", "search", "show", "tell", "help", "get", "create", "make", "write", "draft", "analyze",
    "explain", "suggest",
];

/// First/second-person pronouns, matched as whole words only.
const PRONOUNS: &[&str] = &["me", "my", "i", "we", "our", "us", "you", "your"];

/// True if `text` looks like natural-language input. Pure and deterministic;
/// the shell calls this on every keystroke so the mode indicator stays live.
#[must_use]
pub fn is_conversational(text: &str) -> bool {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return false;
    }

    let lower = trimmed.to_lowercase();

    if QUESTION_STARTERS.iter().any(|w| lower.starts_with(w))
        || COMMAND_VERBS.iter().any(|w| lower.starts_with(w))
    {
        return true;
    }

    let long_enough = trimmed.split_whitespace().count() >= 3;
    long_enough && contains_pronoun(&lower)
}

fn contains_pronoun(lower: &str) -> bool {
    lower
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .any(|word| PRONOUNS.contains(&word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_whitespace_are_not_conversational() {
        assert!(!is_conversational(""));
        assert!(!is_conversational("   "));
        assert!(!is_conversational("\t\n"));
    }

    #[test]
    fn question_starters_classify_conversational() {
        assert!(is_conversational("What are the recent API discussions?"));
        assert!(is_conversational("how do I deploy"));
        assert!(is_conversational("is the build green"));
        // Prefix test: not word-bounded.
        assert!(is_conversational("whatever happened to the roadmap"));
    }

    #[test]
    fn command_verbs_classify_conversational() {
        assert!(is_conversational("Find code review feedback"));
        assert!(is_conversational("show deployment issues"));
        assert!(is_conversational("draft a release announcement"));
    }

    #[test]
    fn pronouns_need_at_least_three_tokens() {
        assert!(is_conversational("my design update"));
        assert!(!is_conversational("my design"));
        assert!(is_conversational("ping me tomorrow"));
    }

    #[test]
    fn pronouns_match_whole_words_only() {
        // "home" contains "me" but not as a word.
        assert!(!is_conversational("home page redesign"));
        // Punctuation still delimits the word.
        assert!(is_conversational("remind me, then the standup"));
    }

    #[test]
    fn keywords_stay_keyword_searches() {
        assert!(!is_conversational("engineering"));
        assert!(!is_conversational("#design-team"));
        assert!(!is_conversational("q4 roadmap"));
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert!(is_conversational("  what changed"));
    }
}
