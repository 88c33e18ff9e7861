//! Static site generation: substitutes the rendered project grid and the
//! JSON-LD block into an HTML template and writes the final page.

use std::env;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::process;

use portfolio_content::records::{CATALOGUE, CategoryFilter};
use portfolio_content::render::render_grid;
use portfolio_content::structured_data::structured_data;

const GRID_MARKER: &str = "<!-- projects-grid -->";
const JSONLD_MARKER: &str = "<!-- projects-jsonld -->";

fn main() {
    if let Err(error) = run() {
        eprintln!("site-gen failed: {error}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = env::args().skip(1);
    let template_path = PathBuf::from(
        args.next()
            .unwrap_or_else(|| "templates/portfolio.html".to_string()),
    );
    let output_path = PathBuf::from(args.next().unwrap_or_else(|| "dist/index.html".to_string()));

    let template = fs::read_to_string(&template_path)?;
    let grid = render_grid(CATALOGUE, CategoryFilter::All);
    let jsonld = format!(
        r#"<script type="application/ld+json" id="projects-jsonld">{}</script>"#,
        serde_json::to_string(&structured_data(CATALOGUE))?
    );
    let page = render_page(&template, &grid, &jsonld)
        .map_err(|marker| format!("template {} has no {marker} marker", template_path.display()))?;

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, page)?;
    println!("wrote {}", output_path.display());
    Ok(())
}

/// Substitute the grid and JSON-LD blocks into the template. Both markers
/// are required; the error names whichever one is missing.
fn render_page(template: &str, grid: &str, jsonld: &str) -> Result<String, &'static str> {
    for marker in [GRID_MARKER, JSONLD_MARKER] {
        if !template.contains(marker) {
            return Err(marker);
        }
    }

    Ok(template
        .replace(GRID_MARKER, grid)
        .replace(JSONLD_MARKER, jsonld))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_markers_are_substituted() {
        let template = format!("<main>{GRID_MARKER}</main>\n{JSONLD_MARKER}\n");
        let page = render_page(&template, "<div>grid</div>", "<script>ld</script>")
            .expect("complete template");
        assert!(page.contains("<div>grid</div>"));
        assert!(page.contains("<script>ld</script>"));
        assert!(!page.contains(GRID_MARKER));
        assert!(!page.contains(JSONLD_MARKER));
    }

    #[test]
    fn missing_grid_marker_is_rejected() {
        let error = render_page(JSONLD_MARKER, "", "").expect_err("no grid marker");
        assert_eq!(error, GRID_MARKER);
    }

    #[test]
    fn missing_jsonld_marker_is_rejected() {
        let error = render_page(GRID_MARKER, "", "").expect_err("no jsonld marker");
        assert_eq!(error, JSONLD_MARKER);
    }
}
