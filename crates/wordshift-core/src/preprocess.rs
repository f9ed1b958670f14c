/// Splits raw text into lexicon lookup keys
pub trait Tokenizer: Send + Sync {
    // Case-fold, then split on whitespace. Punctuation stays attached.
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}

pub struct WhitespaceTokenizer;
impl Tokenizer for WhitespaceTokenizer {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_splits_on_any_whitespace() {
        let tokens = WhitespaceTokenizer.tokenize("Love\tis  LOVE\nhappy ");
        assert_eq!(tokens, vec!["love", "is", "love", "happy"]);
    }

    #[test]
    fn keeps_punctuation() {
        let tokens = WhitespaceTokenizer.tokenize("peace, \"war\".");
        assert_eq!(tokens, vec!["peace,", "\"war\"."]);
    }

    #[test]
    fn blank_text_has_no_tokens() {
        assert!(WhitespaceTokenizer.tokenize(" \n\t ").is_empty());
    }
}
