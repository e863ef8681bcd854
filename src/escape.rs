pub fn escape_path(path: &str) -> String {
    let mut escaped = String::with_capacity(path.len());

    for character in path.chars() {
        if matches!(character, '$' | ' ' | ':') {
            escaped.push('$');
        }

        escaped.push(character);
    }

    escaped
}

pub fn escape_command(value: &str) -> String {
    value.replace('$', "$$")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn escape_special_characters_in_path() {
        assert_eq!(escape_path("c:/foo bar/$x"), "c$:/foo$ bar/$$x");
    }

    #[test]
    fn escape_dollar_in_command() {
        assert_eq!(escape_command("echo $PATH: $x"), "echo $$PATH: $$x");
    }
}
