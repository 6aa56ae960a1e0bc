/// Split text into word tokens on runs of Unicode whitespace.
///
/// Runs of whitespace act as a single delimiter, so leading, trailing and
/// repeated whitespace never produce empty tokens. Tokens are exact
/// substrings of the input: no case folding, no punctuation stripping.
/// Scripts that do not separate words with whitespace come out as one
/// token per whitespace-free run.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
