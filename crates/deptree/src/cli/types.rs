//! CLI value enums.

use clap::ValueEnum;

/// Rendering of the built forest
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormatArg {
    /// Pretty-printed JSON forest
    #[default]
    Json,
    /// Indented text tree
    Tree,
    /// Mermaid flowchart definition
    Mermaid,
    /// Standalone HTML page rendering the Mermaid flowchart
    Html,
}

impl std::fmt::Display for OutputFormatArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Tree => write!(f, "tree"),
            Self::Mermaid => write!(f, "mermaid"),
            Self::Html => write!(f, "html"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OutputFormatArg::Json, "json")]
    #[case(OutputFormatArg::Tree, "tree")]
    #[case(OutputFormatArg::Mermaid, "mermaid")]
    #[case(OutputFormatArg::Html, "html")]
    fn test_display_matches_value_name(#[case] format: OutputFormatArg, #[case] expected: &str) {
        assert_eq!(format.to_string(), expected);
        assert_eq!(
            OutputFormatArg::from_str(expected, false).expect("known value"),
            format
        );
    }
}
