use crate::types::Token;

#[derive(Copy, Clone)]
pub struct Tokenizer {
    pub case_insensitive: bool,
    pub strip_non_alphanumeric: bool,
}

impl Tokenizer {
    /// Configuration for personal-name parsing. This is the rule the index
    /// applies to both indexed entries and queries unless told otherwise.
    pub fn name_parser() -> Self {
        Self {
            case_insensitive: true,
            strip_non_alphanumeric: true,
        }
    }

    /// Configuration that keeps tokens exactly as they appear between
    /// whitespace runs. Useful for identifiers that are already normalized.
    pub fn verbatim_parser() -> Self {
        Self {
            case_insensitive: false,
            strip_non_alphanumeric: false,
        }
    }

    /// Tokenizer function to split the text into individual tokens.
    ///
    /// The same `Tokenizer` value must be applied to indexed entries and to
    /// queries; asymmetric tokenization silently breaks recall.
    pub fn tokenize(self, text: &str) -> Vec<Token> {
        text.split_whitespace()
            .map(|word| {
                if self.strip_non_alphanumeric {
                    word.chars().filter(|c| c.is_alphanumeric()).collect()
                } else {
                    word.to_string()
                }
            })
            .filter(|word: &String| !word.is_empty())
            .map(|word| {
                if self.case_insensitive {
                    word.to_uppercase()
                } else {
                    word
                }
            })
            .collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::name_parser()
    }
}
