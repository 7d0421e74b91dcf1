use console::style;

pub enum Style {
    Path,    // File paths and install directories
    Program, // Target names such as "Battle.net"
    Link,    // Download URLs
    InfoPrefix,    // "==>": text
    WarningPrefix, // "warning:" text
    ErrorPrefix,   // "error:" text
    SuccessPrefix, // checkmark
}

impl Style {
    pub fn paint<S: AsRef<str>>(&self, message: S) -> String {
        let message_ref = message.as_ref();

        if is_no_color_set() {
            return message_ref.to_string();
        }

        match &self {
            Style::Link => style(message_ref).cyan().underlined(),
            Style::Program => style(message_ref).yellow(),
            Style::Path => style(message_ref).bold(),
            Style::InfoPrefix => style(message_ref).blue().bold(),
            Style::WarningPrefix => style(message_ref).yellow(),
            Style::ErrorPrefix => style(message_ref).red().bold(),
            Style::SuccessPrefix => style(message_ref).green(),
        }
        .to_string()
    }
}

pub fn is_no_color_set() -> bool {
    is_bool_env_var_set("NO_COLOR") || is_bool_env_var_set("HSNERD_NO_COLOR")
}

fn is_bool_env_var_set(key: &str) -> bool {
    !matches!(
        std::env::var(key).as_deref(),
        Err(..) | Ok("") | Ok("0") | Ok("false") | Ok("False") | Ok("FALSE")
    )
}
