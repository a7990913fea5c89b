//! Command execution logic.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::Cli;
use super::types::OutputFormatArg;
use crate::builder::build_forest;
use crate::config::ProjectLayout;
use crate::diagram::{html_document, render_flowchart};
use crate::domain::DependencyNode;
use crate::install::run_install;
use crate::manifest::ProjectManifest;
use crate::output::{self, OutputConfig};
use crate::store::NodeModulesStore;

/// Load, optionally install, build and emit.
pub(super) fn execute(cli: &Cli) -> Result<()> {
    let layout = ProjectLayout::new(&cli.project_path);
    let project = ProjectManifest::load(&layout)?;

    if cli.skip_install {
        debug!("Skipping install");
    } else {
        run_install(layout.root(), &cli.install_command)?;
    }

    let store = NodeModulesStore::for_project(&layout);
    let forest = build_forest(&store, &project)?;

    let mut config = OutputConfig::from_env();
    if cli.output.is_some() {
        config = config.without_colors();
    }

    let rendered = render(&forest, cli.format, &cli.script_url, &config)?;
    output::emit(cli.output.as_deref(), &rendered)?;

    if let Some(path) = &cli.output {
        info!(format = %cli.format, path = %path.display(), "Dependency tree written");
    }
    Ok(())
}

/// Render the forest in the requested format.
///
/// # Errors
///
/// Fails only if JSON serialization or diagram rendering fails.
pub fn render(
    forest: &[DependencyNode],
    format: OutputFormatArg,
    script_url: &str,
    config: &OutputConfig,
) -> Result<String> {
    let rendered = match format {
        OutputFormatArg::Json => {
            output::forest_to_json(forest).context("Failed to serialize dependency tree")?
        }
        OutputFormatArg::Tree => output::render_forest_text(forest, config),
        OutputFormatArg::Mermaid => render_flowchart(forest)?,
        OutputFormatArg::Html => html_document(&render_flowchart(forest)?, script_url),
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::MERMAID_SCRIPT_URL;

    fn forest() -> Vec<DependencyNode> {
        vec![DependencyNode::resolved(
            "a",
            Some("1.0.0".to_string()),
            vec![DependencyNode::circular("a", Some("1.0.0".to_string()))],
        )]
    }

    fn plain() -> OutputConfig {
        OutputConfig::new(false, false)
    }

    #[test]
    fn test_render_json() {
        let text = render(&forest(), OutputFormatArg::Json, MERMAID_SCRIPT_URL, &plain())
            .expect("render");
        let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");

        assert_eq!(value[0]["children"][0]["circular"], true);
    }

    #[test]
    fn test_render_tree() {
        let text = render(&forest(), OutputFormatArg::Tree, MERMAID_SCRIPT_URL, &plain())
            .expect("render");
        assert_eq!(text, "◆ a@1.0.0\n└── a@1.0.0 (circular)\n");
    }

    #[test]
    fn test_render_mermaid() {
        let text = render(&forest(), OutputFormatArg::Mermaid, MERMAID_SCRIPT_URL, &plain())
            .expect("render");
        assert_eq!(
            text,
            "flowchart TD\n    1001[\"a@1.0.0\"] --> 1001[\"a: 1.0.0\"]\n"
        );
    }

    #[test]
    fn test_render_html_uses_script_url() {
        let text = render(
            &forest(),
            OutputFormatArg::Html,
            "https://example.test/mermaid.mjs",
            &plain(),
        )
        .expect("render");

        assert!(text.contains("import mermaid from \"https://example.test/mermaid.mjs\""));
        assert!(text.contains("flowchart TD"));
    }
}
