//! Standalone HTML page around a plotly figure.

use super::config::ChartConfig;
use super::figure::Figure;
use crate::utils::config::{CHART_DIV_ID, PLOTLY_CDN_URL};
use crate::utils::error::ChartError;
use crate::utils::markup::escape_html;
use log::{debug, info};

/// Render a complete HTML document for a figure
///
/// The figure JSON is embedded in the page. plotly.js is inlined when
/// `config.plotly_js` points at a local bundle, otherwise loaded from the CDN.
///
/// # Errors
/// * `ChartError::SerializationFailed` - figure cannot be serialized
/// * `ChartError::PlotlyReadFailed` - local plotly.js bundle cannot be read
pub fn render_html(figure: &Figure, config: &ChartConfig) -> Result<String, ChartError> {
    let figure_json = json_script_safe(&serde_json::to_string(figure)?);

    let plotly_tag = match &config.plotly_js {
        Some(path) => {
            info!("Inlining plotly.js from: {}", path.display());
            let bundle = std::fs::read_to_string(path).map_err(ChartError::PlotlyReadFailed)?;
            format!(
                "<script type=\"text/javascript\">{}</script>",
                script_safe(&bundle)
            )
        }
        None => format!(
            "<script src=\"{}\" charset=\"utf-8\"></script>",
            PLOTLY_CDN_URL
        ),
    };

    let mut out = String::with_capacity(figure_json.len() + 1024);
    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_html(&config.title)));
    out.push_str(&plotly_tag);
    out.push_str("\n</head>\n<body>\n");
    out.push_str(&format!(
        "<div id=\"{}\" style=\"width:100%;height:100vh;\"></div>\n",
        CHART_DIV_ID
    ));
    out.push_str("<script type=\"text/javascript\">\n");
    out.push_str(&format!("var figure = {};\n", figure_json));
    out.push_str(&format!(
        "Plotly.newPlot(\"{}\", figure.data, figure.layout, {{\"showLink\": false, \"responsive\": true}});\n",
        CHART_DIV_ID
    ));
    out.push_str("</script>\n</body>\n</html>\n");

    debug!("Rendered HTML document ({} bytes)", out.len());

    Ok(out)
}

/// Keep embedded JSON from producing any markup inside the `<script>` element
///
/// Every `<` becomes `\u003c`, which JSON reads back as `<`. This covers
/// `</script>` as well as `<!--` sequences.
fn json_script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

/// Keep an inlined JavaScript bundle from closing the surrounding `<script>` element
///
/// `</` becomes `<\/`, which JavaScript reads back as `</` inside strings and
/// regular expressions.
fn script_safe(source: &str) -> String {
    source.replace("</", "<\\/")
}
