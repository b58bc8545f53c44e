pub mod languages;

pub use languages::{display_name, is_programming_language, normalize_language_name};

/// Title-cases `text` word by word after turning `separators` into spaces.
///
/// Only the first character of each word changes case; `my-cool_Project`
/// with `-` and `_` becomes `My Cool Project`.
pub fn title_case(text: &str, separators: &[char]) -> String {
    let spaced: String = text
        .chars()
        .map(|c| if separators.contains(&c) { ' ' } else { c })
        .collect();

    let mut output = String::with_capacity(spaced.len());
    let mut at_word_start = true;
    for c in spaced.chars() {
        if c.is_alphanumeric() || c == '_' {
            if at_word_start {
                output.extend(c.to_uppercase());
            } else {
                output.push(c);
            }
            at_word_start = false;
        } else {
            output.push(c);
            at_word_start = true;
        }
    }
    output
}

/// Splits on `separator` and upper-cases the first character of each piece,
/// joining the pieces with spaces (`machine-learning` → `Machine Learning`).
pub fn capitalize_words(text: &str, separator: char) -> String {
    text.split(separator)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_repository_name() {
        assert_eq!(title_case("my-cool_Project", &['-', '_']), "My Cool Project");
        assert_eq!(title_case("dotfiles", &['-', '_']), "Dotfiles");
        assert_eq!(title_case("api.v2-server", &['-', '_']), "Api.V2 Server");
    }

    #[test]
    fn test_capitalize_topic() {
        assert_eq!(capitalize_words("machine-learning", '-'), "Machine Learning");
        assert_eq!(capitalize_words("vue.js", '-'), "Vue.js");
        assert_eq!(capitalize_words("rust_lang", '-'), "Rust_lang");
    }
}
