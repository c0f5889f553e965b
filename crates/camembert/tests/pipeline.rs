use camembert::render::{RenderOptions, render_svg, render_svg_sync};
use camembert::{Error, PieConfigOverrides};
use futures::executor::block_on;

const NETFLIX: &str = r#"pie showData
    title What Voldemort doesn't have?
    "FRIENDS" : 2
    "FAMILY" : 3
    "NOSE" : 45
"#;

#[test]
fn end_to_end_pipeline_produces_a_sized_svg() {
    let options = RenderOptions {
        diagram_id: Some("pie-1".to_string()),
        ..Default::default()
    };
    let svg = render_svg_sync(NETFLIX, &options).unwrap();

    assert!(svg.starts_with(r#"<svg id="pie-1""#));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(svg.matches(r#"class="pieCircle""#).count(), 3);
    assert!(svg.contains("What Voldemort doesn&#39;t have?"));
    // 45 of 50 units, largest slice first.
    assert!(svg.contains(">90%<"));
    assert!(svg.contains("NOSE [45]"));
    assert!(svg.contains("FAMILY [3]"));
    assert!(svg.contains(r#"viewBox="0 0 "#));
}

#[test]
fn async_wrapper_matches_the_sync_output() {
    let options = RenderOptions::default();
    let sync_svg = render_svg_sync(NETFLIX, &options).unwrap();
    let async_svg = block_on(render_svg(NETFLIX, &options)).unwrap();
    assert_eq!(sync_svg, async_svg);
}

#[test]
fn site_config_layers_below_directives() {
    let options = RenderOptions {
        site_config: PieConfigOverrides {
            pie_stroke_color: Some("site-red".to_string()),
            pie_opacity: Some("0.1".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };
    let text = "%%{init: {\"pie\": {\"pieOpacity\": \"0.9\"}}}%%\npie\n\"a\": 1\n";
    let svg = render_svg_sync(text, &options).unwrap();
    assert!(svg.contains("stroke:site-red;"));
    assert!(svg.contains("opacity:0.9;"));
}

#[test]
fn parse_errors_propagate_through_the_pipeline() {
    let err = render_svg_sync("pie\n\"a\": -1\n", &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::NegativeSectionValue { .. }));

    let err = render_svg_sync("gantt\n", &RenderOptions::default()).unwrap_err();
    assert!(matches!(err, Error::MissingPieKeyword));
}
