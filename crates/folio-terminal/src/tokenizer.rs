//! Splits a raw input line into a command token and arguments.

/// One parsed submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedInput {
    /// First token, lower-cased. Empty for blank input.
    pub command: String,
    /// Remaining tokens with their original case.
    pub args: Vec<String>,
}

impl ParsedInput {
    /// True when the input held no tokens at all.
    pub fn is_empty(&self) -> bool {
        self.command.is_empty()
    }

    /// Arguments as string slices, the shape command handlers take.
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

/// Tokenize a line. Never fails; blank input yields an empty command.
pub fn parse(input: &str) -> ParsedInput {
    let mut tokens = input.split_whitespace();
    let command = tokens.next().map(str::to_lowercase).unwrap_or_default();
    let args = tokens.map(str::to_string).collect();
    ParsedInput { command, args }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple() {
        let p = parse("projects fintech");
        assert_eq!(p.command, "projects");
        assert_eq!(p.args, vec!["fintech"]);
    }

    #[test]
    fn blank_is_empty() {
        assert!(parse("").is_empty());
        assert!(parse("   \t  ").is_empty());
        assert!(parse("  ").args.is_empty());
    }

    #[test]
    fn command_lowercased_args_kept() {
        let p = parse("ECHO Hello World");
        assert_eq!(p.command, "echo");
        assert_eq!(p.args, vec!["Hello", "World"]);
    }

    #[test]
    fn runs_of_whitespace_collapse() {
        let p = parse("  cowsay \t hi   there  ");
        assert_eq!(p.command, "cowsay");
        assert_eq!(p.args, vec!["hi", "there"]);
    }

    #[test]
    fn arg_refs_match_args() {
        let p = parse("project ledgerly extra");
        assert_eq!(p.arg_refs(), vec!["ledgerly", "extra"]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn never_panics(s in ".*") {
                let _ = parse(&s);
            }

            #[test]
            fn tokens_have_no_whitespace(s in "[a-zA-Z \\t]{0,40}") {
                let p = parse(&s);
                prop_assert!(!p.command.contains(char::is_whitespace));
                for a in &p.args {
                    prop_assert!(!a.is_empty());
                    prop_assert!(!a.contains(char::is_whitespace));
                }
            }

            #[test]
            fn token_count_matches_split(s in "[a-z ]{0,40}") {
                let p = parse(&s);
                let n = s.split_whitespace().count();
                let got = if p.is_empty() { 0 } else { 1 + p.args.len() };
                prop_assert_eq!(got, n);
            }
        }
    }
}
