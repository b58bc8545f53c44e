/// Canonical display name for a language reported by GitHub's languages API.
///
/// Dialects fold into the language they are written in so that their bytes
/// accumulate into one bucket. Unknown names pass through unchanged.
pub fn normalize_language_name(name: &str) -> &str {
    match name {
        "ASP.NET" => "C#",
        "JSX" | "TSX" => "React",
        "Vue" => "Vue.js",
        "Dockerfile" => "Docker",
        "Makefile" => "Make",
        other => other,
    }
}

/// False for markup, styling and configuration formats.
pub fn is_programming_language(name: &str) -> bool {
    !matches!(
        name,
        "HTML"
            | "CSS"
            | "SCSS"
            | "Sass"
            | "Less"
            | "Markdown"
            | "YAML"
            | "JSON"
            | "Dockerfile"
            | "Makefile"
    )
}

/// Name shown on a project tag for a repository's primary language.
pub fn display_name(language: &str) -> &str {
    match language {
        "Vue" => "Vue.js",
        "Nuxt" => "Nuxt.js",
        "Tailwind" => "Tailwind CSS",
        "Material-UI" => "Material UI",
        "GCP" => "Google Cloud",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_merges_dialects() {
        assert_eq!(normalize_language_name("ASP.NET"), "C#");
        assert_eq!(normalize_language_name("JSX"), "React");
        assert_eq!(normalize_language_name("TSX"), "React");
        assert_eq!(normalize_language_name("Vue"), "Vue.js");
        assert_eq!(normalize_language_name("Dockerfile"), "Docker");
        assert_eq!(normalize_language_name("Rust"), "Rust");
        assert_eq!(normalize_language_name("Zig"), "Zig");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in [
            "ASP.NET", "JSX", "TSX", "Vue", "Dockerfile", "Makefile", "C#", "Python", "HTML",
            "Vue.js", "Docker", "",
        ] {
            let once = normalize_language_name(name);
            assert_eq!(normalize_language_name(once), once, "not idempotent for {name:?}");
        }
    }

    #[test]
    fn test_classifier_denylist() {
        for name in [
            "HTML", "CSS", "SCSS", "Sass", "Less", "Markdown", "YAML", "JSON", "Dockerfile",
            "Makefile",
        ] {
            assert!(!is_programming_language(name), "{name} should be excluded");
        }
        assert!(is_programming_language("Python"));
        assert!(is_programming_language("Docker"));
        assert!(is_programming_language("Make"));
    }

    #[test]
    fn test_classifier_is_case_sensitive() {
        assert!(is_programming_language("html"));
        assert!(is_programming_language("Json"));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("Vue"), "Vue.js");
        assert_eq!(display_name("TypeScript"), "TypeScript");
    }
}
