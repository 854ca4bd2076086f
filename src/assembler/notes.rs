/// Extract the release body from a built fragment: the global message is
/// removed, whitespace trimmed, and the leading version header line dropped.
/// The remaining body is trimmed again so blank lines under the header vanish.
pub fn release_body(text: &str, global_message: &str) -> String {
    let stripped = if global_message.is_empty() {
        text.to_string()
    } else {
        text.replace(global_message, "")
    };

    match stripped.trim().split_once('\n') {
        Some((_header, body)) => body.trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_body_strips_header_and_global() {
        let text = "1.2.0\n=====\n\n- Fixed gutter icons\n\nThanks!";
        assert_eq!(
            release_body(text, "Thanks!"),
            "=====\n\n- Fixed gutter icons"
        );
    }

    #[test]
    fn test_release_body_drops_blank_lines_after_header() {
        assert_eq!(release_body("1.1.0\n\n- Second\n\nThanks!", "Thanks!"), "- Second");
    }

    #[test]
    fn test_release_body_single_line() {
        assert_eq!(release_body("1.2.0\n", ""), "");
    }

    #[test]
    fn test_release_body_without_global() {
        assert_eq!(release_body("v1\nbody\n", "Thanks!"), "body");
    }
}
