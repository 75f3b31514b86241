use std::fmt;

/// Blocking notifications shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    MissingUrl,
    /// Generic on purpose; the cause is only logged
    FetchFailed,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        match self {
            Notice::MissingUrl => "Please enter a recipe URL.",
            Notice::FetchFailed => "Failed to fetch recipe. Please check the URL and try again.",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
