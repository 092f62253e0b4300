//! Workflow command formatting.

/// Escapes a command message.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escapes a command property value.
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Formats `::command key=value,...::message`.
#[must_use]
pub fn format_command(command: &str, properties: &[(&str, &str)], message: &str) -> String {
    let mut line = format!("::{command}");

    for (i, (key, value)) in properties.iter().enumerate() {
        line.push(if i == 0 { ' ' } else { ',' });
        line.push_str(key);
        line.push('=');
        line.push_str(&escape_property(value));
    }

    line.push_str("::");
    line.push_str(&escape_data(message));
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_data() {
        assert_eq!(escape_data("100% done\r\nnext"), "100%25 done%0D%0Anext");
    }

    #[test]
    fn test_escape_data_keeps_separators() {
        assert_eq!(escape_data("a:b,c"), "a:b,c");
    }

    #[test]
    fn test_escape_property() {
        assert_eq!(escape_property("a:b,c%\n"), "a%3Ab%2Cc%25%0A");
    }

    #[test]
    fn test_format_command_without_properties() {
        assert_eq!(format_command("error", &[], "boom"), "::error::boom");
    }

    #[test]
    fn test_format_command_with_properties() {
        let line = format_command("set-output", &[("name", "all")], "a.txt,b.txt");
        assert_eq!(line, "::set-output name=all::a.txt,b.txt");
    }

    #[test]
    fn test_format_command_multiple_properties() {
        let line = format_command("warning", &[("file", "a,b.rs"), ("line", "3")], "x");
        assert_eq!(line, "::warning file=a%2Cb.rs,line=3::x");
    }
}
