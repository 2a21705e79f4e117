use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub link: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub idx: fn(&str) -> String,
    pub count: fn(&str) -> String,
    pub ok: fn(&str) -> String,
    pub bad: fn(&str) -> String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: |s| s.bright_magenta().bold().to_string(),
            label: |s| s.cyan().to_string(),
            link: |s| s.bright_blue().underline().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            idx: |s| s.bright_white().to_string(),
            count: |s| s.yellow().bold().to_string(),
            ok: |s| s.green().bold().to_string(),
            bad: |s| s.red().bold().to_string(),
        }
    }
}

impl Theme {
    /// No escape codes, for pipes and tests.
    pub fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            label: |s| s.to_string(),
            link: |s| s.to_string(),
            line: |s| s.to_string(),
            idx: |s| s.to_string(),
            count: |s| s.to_string(),
            ok: |s| s.to_string(),
            bad: |s| s.to_string(),
        }
    }
}
