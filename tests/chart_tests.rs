use race_pace::aggregator::series::{build_series, SeriesSet};
use race_pace::chart::figure::AxisRange;
use race_pace::chart::{build_figure, generate_chart, load_chart_config, render_html, ChartConfig};
use race_pace::parser::parse_dataset;
use race_pace::utils::error::ChartError;
use std::io::Write;
use tempfile::NamedTempFile;

fn create_test_series() -> SeriesSet {
    let dataset = parse_dataset(
        r#"{
        "distances": { "5K": 5, "10K": 10 },
        "races": [
            { "name": "Parkrun", "date": "2015-03-01", "type": "5K",
              "chip_time": "00:25:30", "position": 5, "participants": 120,
              "url": "https://results.example.org/1" },
            { "name": "River 10K", "date": "2016-04-01", "type": "10K",
              "chip_time": "0:45:00", "position": 40, "participants": 900 }
        ]
    }"#,
    )
    .unwrap();
    build_series(&dataset).unwrap()
}

#[test]
fn test_figure_has_trace_per_category() {
    let figure = build_figure(&create_test_series(), &ChartConfig::default()).unwrap();

    let names: Vec<&str> = figure
        .data
        .iter()
        .filter(|t| t.showlegend != Some(false))
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(names, vec!["5K", "10K"]);

    let five_k = &figure.data[0];
    assert_eq!(five_k.mode, "lines+markers+text");
    assert_eq!(five_k.x, vec!["2015-03-01".to_string()]);
    assert!((five_k.y[0] - 5.1).abs() < 1e-9);
    assert_eq!(five_k.hoverinfo, "text");
}

#[test]
fn test_primary_axis_is_inverted_with_ticks() {
    let figure = build_figure(&create_test_series(), &ChartConfig::default()).unwrap();
    let yaxis = &figure.layout.yaxis;

    assert_eq!(yaxis.range, AxisRange::Values([5.0, 3.5]));
    let ticktext = yaxis.ticktext.as_ref().unwrap();
    assert_eq!(ticktext.first().map(String::as_str), Some("3m30s"));
    assert_eq!(ticktext.last().map(String::as_str), Some("5m00s"));
    assert_eq!(ticktext.len(), 10);
}

#[test]
fn test_secondary_axis_overlays_in_miles() {
    let figure = build_figure(&create_test_series(), &ChartConfig::default()).unwrap();
    let yaxis2 = &figure.layout.yaxis2;

    assert_eq!(yaxis2.overlaying, Some("y"));
    assert_eq!(yaxis2.side, Some("right"));
    match yaxis2.range {
        AxisRange::Values([slow, fast]) => {
            assert!((slow - 5.0 * 1.609).abs() < 1e-9);
            assert!((fast - 3.5 * 1.609).abs() < 1e-9);
        }
        _ => panic!("expected numeric range"),
    }

    let anchor = figure.data.last().unwrap();
    assert_eq!(anchor.yaxis, Some("y2"));
    assert_eq!(anchor.showlegend, Some(false));
}

#[test]
fn test_x_axis_range_and_legend() {
    let config = ChartConfig::new().with_x_range("2015-01-01", "2017-01-01");
    let figure = build_figure(&create_test_series(), &config).unwrap();

    assert_eq!(
        figure.layout.xaxis.range,
        AxisRange::Dates(["2015-01-01".to_string(), "2017-01-01".to_string()])
    );
    assert_eq!(figure.layout.legend.orientation, "h");
    assert_eq!(figure.layout.hovermode, "closest");
}

#[test]
fn test_year_bands() {
    let config = ChartConfig::new().with_years([2016, 2015]);
    let figure = build_figure(&create_test_series(), &config).unwrap();
    let shapes = &figure.layout.shapes;

    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].x0, "2015-01-01");
    assert_eq!(shapes[0].x1, "2016-01-01");
    assert_eq!(shapes[1].x0, "2016-01-01");
    assert_eq!(shapes[0].yref, "paper");
    assert_eq!(shapes[0].layer, "below");
}

#[test]
fn test_no_bands_by_default() {
    let figure = build_figure(&create_test_series(), &ChartConfig::default()).unwrap();
    assert!(figure.layout.shapes.is_empty());
}

#[test]
fn test_all_unknown_categories_still_render() {
    let dataset = parse_dataset(
        r#"{"distances": {"5K": 5}, "races": [
            {"name": "Fell Race", "date": "2015-05-01", "type": "Fell",
             "chip_time": "1:10:00", "position": 9, "participants": 60}
        ]}"#,
    )
    .unwrap();
    let set = build_series(&dataset).unwrap();
    assert!(set.is_empty());

    let figure = build_figure(&set, &ChartConfig::new().with_years([2015])).unwrap();
    assert_eq!(figure.data[0].name, "5K");
    assert!(figure.data[0].x.is_empty());
    assert_eq!(figure.layout.shapes.len(), 1);

    let html = generate_chart(&set, &ChartConfig::default()).unwrap();
    assert!(html.contains("Plotly.newPlot"));
    assert!(!html.contains("Fell Race"));
}

#[test]
fn test_empty_race_list_renders() {
    let set = SeriesSet {
        series: Vec::new(),
        skipped: Vec::new(),
    };

    let html = generate_chart(&set, &ChartConfig::default()).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn test_invalid_config_is_error() {
    let config = ChartConfig::new().with_pace_range(5.0, 3.5);

    assert!(matches!(
        build_figure(&create_test_series(), &config),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn test_render_html_document() {
    let html = generate_chart(&create_test_series(), &ChartConfig::default()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<title>Races</title>"));
    assert!(html.contains("https://cdn.plot.ly/"));
    assert!(html.contains("Plotly.newPlot"));
    assert!(html.contains("5m06s/km (8m12s/mi)"));
    // Markup inside labels must not reach the HTML parser from the inline script
    assert!(html.contains(r#"Parkrun\u003c/a>"#));
    assert!(!html.contains("Parkrun</a>"));
    assert!(!html.contains("<br>"));
}

#[test]
fn test_render_html_inlines_local_plotly() {
    let mut bundle = NamedTempFile::new().unwrap();
    bundle.write_all(b"window.Plotly = {};").unwrap();

    let config = ChartConfig::new().with_plotly_js(bundle.path());
    let figure = build_figure(&create_test_series(), &config).unwrap();
    let html = render_html(&figure, &config).unwrap();

    assert!(html.contains("window.Plotly = {};"));
    assert!(!html.contains("cdn.plot.ly"));
}

#[test]
fn test_render_html_missing_plotly_bundle() {
    let config = ChartConfig::new().with_plotly_js("/nonexistent/plotly.min.js");
    let figure = build_figure(&create_test_series(), &config).unwrap();

    assert!(matches!(
        render_html(&figure, &config),
        Err(ChartError::PlotlyReadFailed(_))
    ));
}

#[test]
fn test_category_name_cannot_open_script_context() {
    let dataset = parse_dataset(
        r#"{"distances": {"<!--<script>": 5}, "races": [
            {"name": "Parkrun", "date": "2015-03-01", "type": "<!--<script>",
             "chip_time": "0:20:00", "position": 1, "participants": 10}
        ]}"#,
    )
    .unwrap();
    let set = build_series(&dataset).unwrap();

    let html = generate_chart(&set, &ChartConfig::default()).unwrap();

    assert!(!html.contains("<!--"));
    assert!(html.contains(r#"\u003c!--\u003cscript>"#));
}

#[test]
fn test_load_chart_config_overrides_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(
        br#"
title = "Road races"
pace_min = 3.0
highlight_years = [2016]
"#,
    )
    .unwrap();

    let config = load_chart_config(file.path()).unwrap();

    assert_eq!(config.title, "Road races");
    assert_eq!(config.pace_min, 3.0);
    assert_eq!(config.pace_max, 5.0);
    assert_eq!(config.highlight_years, vec![2016]);
    assert_eq!(config.x_start, "2014-01-01");
}

#[test]
fn test_load_chart_config_invalid_toml() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"title = ").unwrap();

    assert!(load_chart_config(file.path()).is_err());
}

#[test]
fn test_huge_pace_range_from_toml_is_rejected() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"pace_max = 1e9\n").unwrap();

    let config = load_chart_config(file.path()).unwrap();

    assert!(matches!(
        build_figure(&create_test_series(), &config),
        Err(ChartError::InvalidConfig(_))
    ));
}
