//! Build step: inline minified roadmap data into the viewer page.
//!
//! Reads the source-of-truth array from the data JS file
//! (`window.data = [...];`), writes it as compact JSON to a sidecar file,
//! and substitutes it into the `<script type="application/json"
//! id="a2z-json">` placeholder of the page. Rerunning on unchanged input
//! produces byte-identical output. Any failure aborts before anything is
//! written.

use anyhow::{bail, Context, Result};
use clap::Parser;
use regex::Regex;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

/// Id of the placeholder script block in the page
const PLACEHOLDER_ID: &str = "a2z-json";

#[derive(Parser)]
#[command(name = "inline-json")]
#[command(about = "Inline minified roadmap JSON data into the viewer page")]
struct Cli {
    /// Source data file carrying the `window.data = [...];` assignment
    #[arg(long, default_value = "data.global.js")]
    data_js: PathBuf,

    /// Sidecar file for the minified JSON
    #[arg(long, default_value = "data.min.json")]
    out_json: PathBuf,

    /// Page whose placeholder block receives the JSON
    #[arg(long, default_value = "index.html")]
    index: PathBuf,
}

/// Extract the assigned array literal from the data JS and parse it.
fn extract_data_array(js: &str) -> Result<Vec<Value>> {
    let assign = Regex::new(r"(?s)window\.data\s*=\s*(.*?);\s*$").unwrap();
    let literal = match assign.captures(js) {
        Some(caps) => caps.get(1).unwrap().as_str(),
        None => {
            // Fallback: first '[' after the assignment up to the last ']'
            let assign_idx = js
                .find("window.data")
                .context("could not locate `window.data` assignment in data file")?;
            let start = js[assign_idx..]
                .find('[')
                .map(|i| assign_idx + i)
                .context("could not locate array literal in data file")?;
            let end = js
                .rfind(']')
                .context("could not locate array literal in data file")?;
            &js[start..=end]
        }
    };

    let value: Value =
        serde_json::from_str(literal.trim()).context("failed to parse data array")?;
    match value {
        Value::Array(items) => Ok(items),
        _ => bail!("data assignment is not an array"),
    }
}

/// Replace the placeholder block's contents with the minified JSON.
fn inline_into_html(html: &str, min_json: &str) -> Result<String> {
    let block = Regex::new(&format!(
        r#"(?is)(<script\s+type="application/json"\s+id="{PLACEHOLDER_ID}">)(.*?)(</script>)"#
    ))
    .unwrap();
    if !block.is_match(html) {
        bail!(
            "page does not contain <script type=\"application/json\" id=\"{PLACEHOLDER_ID}\">"
        );
    }
    // Closure replacement so '$' in the JSON is taken literally
    Ok(block
        .replace(html, |caps: &regex::Captures| {
            format!("{}{}{}", &caps[1], min_json, &caps[3])
        })
        .into_owned())
}

fn run(cli: &Cli) -> Result<()> {
    let js = fs::read_to_string(&cli.data_js)
        .with_context(|| format!("failed to read {}", cli.data_js.display()))?;
    let items = extract_data_array(&js)?;
    let min = serde_json::to_string(&items).context("failed to serialize data")?;

    // Resolve the page before writing anything so a missing placeholder
    // leaves no partial artifact behind
    let html = fs::read_to_string(&cli.index)
        .with_context(|| format!("failed to read {}", cli.index.display()))?;
    let out_html = inline_into_html(&html, &min)?;

    fs::write(&cli.out_json, &min)
        .with_context(|| format!("failed to write {}", cli.out_json.display()))?;
    fs::write(&cli.index, out_html)
        .with_context(|| format!("failed to write {}", cli.index.display()))?;

    println!(
        "Wrote {} ({} bytes) and inlined JSON into {}",
        cli.out_json.display(),
        min.len(),
        cli.index.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    run(&Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE: &str = concat!(
        "<html><body><div id=\"content\"></div>\n",
        "<script type=\"application/json\" id=\"a2z-json\">[]</script>\n",
        "</body></html>"
    );

    #[test]
    fn extracts_assigned_array() {
        let js = "window.data = [{\"step\": 1, \"title\": \"Two Sum\"}];\n";
        let items = extract_data_array(js).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "Two Sum");
    }

    #[test]
    fn bracket_scan_fallback_handles_unterminated_assignment() {
        // No trailing semicolon, so the regex path misses
        let js = "window.data = [1, 2, 3]\n";
        let items = extract_data_array(js).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn missing_assignment_fails() {
        let err = extract_data_array("var other = 1;").unwrap_err();
        assert!(err.to_string().contains("window.data"));
    }

    #[test]
    fn non_array_assignment_fails() {
        let err = extract_data_array("window.data = {\"a\": 1};").unwrap_err();
        assert!(err.to_string().contains("not an array"));
    }

    #[test]
    fn unparseable_literal_fails() {
        let err = extract_data_array("window.data = [{step: 1}];").unwrap_err();
        assert!(err.to_string().contains("failed to parse data array"));
    }

    #[test]
    fn replaces_only_the_placeholder_contents() {
        let out = inline_into_html(PAGE, "[{\"step\":1}]").unwrap();
        assert!(out.contains(
            "<script type=\"application/json\" id=\"a2z-json\">[{\"step\":1}]</script>"
        ));
        assert!(out.contains("<div id=\"content\">"));
    }

    #[test]
    fn json_with_dollar_signs_is_taken_literally() {
        let out = inline_into_html(PAGE, "[\"$1\"]").unwrap();
        assert!(out.contains(">[\"$1\"]</script>"));
    }

    #[test]
    fn missing_placeholder_fails() {
        let err = inline_into_html("<html></html>", "[]").unwrap_err();
        assert!(err.to_string().contains("a2z-json"));
    }

    #[test]
    fn rerun_on_unchanged_input_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            data_js: dir.path().join("data.global.js"),
            out_json: dir.path().join("data.min.json"),
            index: dir.path().join("index.html"),
        };
        fs::write(&cli.data_js, "window.data = [ {\"step\": 1,  \"substep\": 2} ];\n").unwrap();
        fs::write(&cli.index, PAGE).unwrap();

        run(&cli).unwrap();
        let first_json = fs::read_to_string(&cli.out_json).unwrap();
        let first_html = fs::read_to_string(&cli.index).unwrap();
        assert_eq!(first_json, "[{\"step\":1,\"substep\":2}]");

        run(&cli).unwrap();
        assert_eq!(fs::read_to_string(&cli.out_json).unwrap(), first_json);
        assert_eq!(fs::read_to_string(&cli.index).unwrap(), first_html);
    }

    #[test]
    fn failed_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli {
            data_js: dir.path().join("data.global.js"),
            out_json: dir.path().join("data.min.json"),
            index: dir.path().join("index.html"),
        };
        fs::write(&cli.data_js, "window.data = [1];\n").unwrap();
        fs::write(&cli.index, "<html>no placeholder</html>").unwrap();

        assert!(run(&cli).is_err());
        assert!(!cli.out_json.exists());
        assert_eq!(
            fs::read_to_string(&cli.index).unwrap(),
            "<html>no placeholder</html>"
        );
    }
}
