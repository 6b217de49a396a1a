//! Tab completion over primary command names.

/// Complete `partial` to the first name (in the order given) that starts
/// with it, ignoring ASCII case. Returns `partial` unchanged when nothing
/// matches. A blank input matches the first name.
pub fn complete<'a, I>(partial: &str, names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = partial.to_ascii_lowercase();
    names
        .into_iter()
        .find(|name| name.to_ascii_lowercase().starts_with(&needle))
        .map_or_else(|| partial.to_string(), str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAMES: &[&str] = &["help", "about", "projects", "project", "skills", "theme"];

    #[test]
    fn first_registered_wins() {
        assert_eq!(complete("pro", NAMES.iter().copied()), "projects");
    }

    #[test]
    fn registration_order_not_alphabetical() {
        let names = ["project", "projects"];
        assert_eq!(complete("pro", names), "project");
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(complete("SK", NAMES.iter().copied()), "skills");
    }

    #[test]
    fn no_match_returns_input() {
        assert_eq!(complete("zz", NAMES.iter().copied()), "zz");
    }

    #[test]
    fn exact_name_completes_to_itself() {
        assert_eq!(complete("theme", NAMES.iter().copied()), "theme");
    }

    #[test]
    fn blank_takes_first_name() {
        assert_eq!(complete("", NAMES.iter().copied()), "help");
        assert_eq!(complete("", std::iter::empty()), "");
    }

    #[test]
    fn input_with_arguments_does_not_match() {
        assert_eq!(complete("theme da", NAMES.iter().copied()), "theme da");
    }
}
