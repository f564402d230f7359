/// Split an identifier into words at uppercase boundaries.
///
/// A word starts at an uppercase letter that follows a lowercase letter or a
/// digit, or at the last uppercase letter of an uppercase run that is followed
/// by a lowercase letter. Underscores and other characters stay inside the
/// word they appear in.
///
/// # Examples
/// ```
/// use enumgen_core::utils::split_words;
/// assert_eq!(split_words("EnumFirst"), vec!["Enum", "First"]);
/// assert_eq!(split_words("HTTPServer"), vec!["HTTP", "Server"]);
/// assert_eq!(split_words("m_2"), vec!["m_2"]);
/// ```
pub fn split_words(s: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = s.char_indices().collect();
    let mut words = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let (pos, c) = chars[i];
        if !c.is_uppercase() {
            continue;
        }
        let prev = chars[i - 1].1;
        let next_is_lower = chars.get(i + 1).is_some_and(|&(_, n)| n.is_lowercase());
        let boundary = prev.is_lowercase()
            || prev.is_ascii_digit()
            || (prev.is_uppercase() && next_is_lower);
        if boundary {
            words.push(&s[start..pos]);
            start = pos;
        }
    }

    if start < s.len() {
        words.push(&s[start..]);
    }
    words
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert an identifier to PascalCase.
///
/// Words are separated by case boundaries and by `_`, `-` or `.`; separators
/// are dropped and every word is capitalized with the rest lower-cased.
///
/// # Examples
/// ```
/// use enumgen_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("foo_bar"), "FooBar");
/// assert_eq!(to_pascal_case("FOO_BAR"), "FooBar");
/// assert_eq!(to_pascal_case("HTTPServer"), "HttpServer");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.')
    }

    let mut result = String::with_capacity(s.len());
    for part in s.split(is_separator).filter(|p| !p.is_empty()) {
        for word in split_words(part) {
            result.push_str(&capitalize(&word.to_lowercase()));
        }
    }
    result
}

/// Convert PascalCase or camelCase to snake_case.
///
/// # Examples
/// ```
/// use enumgen_core::utils::to_snake_case;
/// assert_eq!(to_snake_case("FooBar"), "foo_bar");
/// assert_eq!(to_snake_case("fooBar"), "foo_bar");
/// ```
pub fn to_snake_case(s: &str) -> String {
    split_words(s).join("_").to_lowercase()
}

/// Convert PascalCase or camelCase to kebab-case.
pub fn to_kebab_case(s: &str) -> String {
    split_words(s).join("-").to_lowercase()
}

/// Convert an identifier to lowerCamelCase.
///
/// The first word is lower-cased entirely; later words get an upper-case
/// first letter and keep the rest as written.
///
/// # Examples
/// ```
/// use enumgen_core::utils::to_lower_camel_case;
/// assert_eq!(to_lower_camel_case("EnumFirst"), "enumFirst");
/// assert_eq!(to_lower_camel_case("HTTPServer"), "httpServer");
/// ```
pub fn to_lower_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for (i, word) in split_words(s).into_iter().enumerate() {
        if i == 0 {
            result.push_str(&word.to_lowercase());
        } else {
            result.push_str(&capitalize(word));
        }
    }
    result
}
