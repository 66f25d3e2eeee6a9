use std::fmt;

#[derive(Debug, Clone)]
pub enum WidgetError {
    Transport(String),
    Decode(String),
    Dom(String),
    Timer(String),
    MissingContainer(String),
}

impl fmt::Display for WidgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidgetError::Transport(msg) => write!(f, "Transport Error: {msg}"),
            WidgetError::Decode(msg) => write!(f, "Decode Error: {msg}"),
            WidgetError::Dom(msg) => write!(f, "DOM Error: {msg}"),
            WidgetError::Timer(msg) => write!(f, "Timer Error: {msg}"),
            WidgetError::MissingContainer(id) => {
                write!(f, "Container element '{id}' not found")
            }
        }
    }
}

impl std::error::Error for WidgetError {}

impl WidgetError {
    pub fn transport(message: impl Into<String>) -> Self {
        WidgetError::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        WidgetError::Decode(message.into())
    }

    pub fn dom(message: impl Into<String>) -> Self {
        WidgetError::Dom(message.into())
    }

    pub fn timer(message: impl Into<String>) -> Self {
        WidgetError::Timer(message.into())
    }

    pub fn missing_container(id: impl Into<String>) -> Self {
        WidgetError::MissingContainer(id.into())
    }
}
