//! Keyword-based message classification.
//!
//! A classifier is an ordered list of keyword rules evaluated top-down: the
//! first rule with a keyword occurring anywhere in the lowercased text wins,
//! and text matching no rule is `Text`.

use crate::types::Category;

/// One keyword family linked to the category it implies.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub category: Category,
    /// Lowercase substrings; matching is case-insensitive on the input side.
    pub keywords: &'static [&'static str],
}

impl KeywordRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Rules used for outgoing messages. Code is checked before analysis.
pub const CLIENT_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Code,
        keywords: &["код", "программ", "функц", "класс", "function", "class"],
    },
    KeywordRule {
        category: Category::Analysis,
        keywords: &["анализ", "проверь", "ошибк", "баг"],
    },
];

/// Wider rule set the reference backend applies when a request arrives
/// tagged `text`. Analysis is checked first here.
pub const SERVER_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: Category::Analysis,
        keywords: &[
            "анализ",
            "проверь",
            "ошибк",
            "баг",
            "оптимиз",
            "производительность",
            "безопасность",
            "review",
            "рефактор",
            "улучш",
            "исправ",
        ],
    },
    KeywordRule {
        category: Category::Code,
        keywords: &[
            "код",
            "программ",
            "function",
            "class",
            "def",
            "var",
            "const",
            "let",
            "import",
            "export",
            "if",
            "else",
            "for",
            "while",
            "try",
            "catch",
            "javascript",
            "python",
            "react",
            "html",
            "css",
            "sql",
            "api",
            "алгоритм",
            "функц",
            "класс",
            "метод",
            "переменная",
        ],
    },
];

/// Ordered rule engine mapping free text to a [`Category`].
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    rules: &'static [KeywordRule],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::client()
    }
}

impl Classifier {
    pub const fn new(rules: &'static [KeywordRule]) -> Self {
        Self { rules }
    }

    pub const fn client() -> Self {
        Self::new(CLIENT_RULES)
    }

    pub const fn server() -> Self {
        Self::new(SERVER_RULES)
    }

    /// Classify `text`. Never fails; unmatched text is `Text`.
    pub fn classify(&self, text: &str) -> Category {
        let lowered = text.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| rule.category)
            .unwrap_or(Category::Text)
    }
}

/// Classify an outgoing message with the client rule set.
pub fn classify(text: &str) -> Category {
    Classifier::client().classify(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_keywords() {
        assert_eq!(classify("напиши функцию сортировки"), Category::Code);
        assert_eq!(classify("покажи код"), Category::Code);
        assert_eq!(classify("нужна программа"), Category::Code);
        assert_eq!(classify("a class for users"), Category::Code);
        assert_eq!(classify("создай класс"), Category::Code);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(classify("Function"), Category::Code);
        assert_eq!(classify("function"), Category::Code);
        assert_eq!(classify("FUNCTION"), Category::Code);
        assert_eq!(classify("КОД"), Category::Code);
        assert_eq!(classify("АНАЛИЗ"), Category::Analysis);
    }

    #[test]
    fn test_analysis_keywords() {
        assert_eq!(classify("сделай анализ"), Category::Analysis);
        assert_eq!(classify("проверь, пожалуйста"), Category::Analysis);
        assert_eq!(classify("тут ошибка"), Category::Analysis);
        assert_eq!(classify("нашёл баг"), Category::Analysis);
    }

    #[test]
    fn test_code_wins_over_analysis() {
        assert_eq!(classify("проверь эту function"), Category::Code);
        assert_eq!(classify("анализ кода"), Category::Code);
    }

    #[test]
    fn test_default_is_text() {
        assert_eq!(classify("привет"), Category::Text);
        assert_eq!(classify("hello there"), Category::Text);
        assert_eq!(classify(""), Category::Text);
    }

    #[test]
    fn test_deterministic() {
        let input = "Проверь мой class";
        let first = classify(input);
        for _ in 0..10 {
            assert_eq!(classify(input), first);
        }
    }

    #[test]
    fn test_never_yields_error_category() {
        for input in ["", "ошибка", "error", "function", "привет"] {
            assert_ne!(classify(input), Category::Error);
        }
    }

    #[test]
    fn test_server_rules_check_analysis_first() {
        let server = Classifier::server();
        assert_eq!(server.classify("анализ кода"), Category::Analysis);
        assert_eq!(server.classify("оптимизируй этот алгоритм"), Category::Analysis);
        assert_eq!(server.classify("write some python"), Category::Code);
        assert_eq!(server.classify("привет"), Category::Text);
    }

    #[test]
    fn test_default_classifier_is_client() {
        assert_eq!(
            Classifier::default().classify("анализ кода"),
            classify("анализ кода")
        );
    }
}
