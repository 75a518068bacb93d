use sejahtera_components::{
    pipelines::register_pipelines,
    progress_circle::{ProgressCircle, ProgressCircleArgs, progress_circle},
    theme::PlanTheme,
};
use sejahtera_ui::{Dp, FrameClock, Scene, SvgRenderer};
use usvg::{Group, Node, Tree};

fn render(scene: &Scene) -> String {
    SvgRenderer::with_pipelines(register_pipelines)
        .render(scene)
        .unwrap()
}

fn parse(svg: &str) -> Tree {
    Tree::from_str(svg, &usvg::Options::default()).unwrap()
}

fn strokes(group: &Group, out: &mut Vec<usvg::Stroke>) {
    for node in group.children() {
        match node {
            Node::Group(group) => strokes(group, out),
            Node::Path(path) => out.extend(path.stroke().cloned()),
            _ => {}
        }
    }
}

#[test]
fn rendered_circle_is_valid_svg_of_requested_size() {
    let svg = render(&progress_circle(&ProgressCircleArgs::default().progress(0.5)));
    let tree = parse(&svg);
    assert_eq!(tree.size().width(), 120.0);
    assert_eq!(tree.size().height(), 120.0);
    assert!(svg.contains(r#"transform="rotate(-90 60 60)""#));
    assert!(svg.contains("<title>50% complete</title>"));
}

#[test]
fn track_and_progress_are_both_stroked() {
    let svg = render(&progress_circle(&ProgressCircleArgs::default().progress(0.25)));
    let mut found = Vec::new();
    strokes(parse(&svg).root(), &mut found);
    assert_eq!(found.len(), 2);

    let progress = &found[1];
    let dasharray = progress.dasharray().unwrap();
    assert!((dasharray[0] - 339.292).abs() < 0.01);
    assert!((progress.dashoffset() - 254.469).abs() < 0.01);
}

#[test]
fn empty_progress_renders_track_only() {
    let svg = render(&progress_circle(&ProgressCircleArgs::default()));
    let mut found = Vec::new();
    strokes(parse(&svg).root(), &mut found);
    assert_eq!(found.len(), 1);
    assert!(found[0].dasharray().is_none());
}

#[test]
fn invalid_geometry_renders_no_circles() {
    let args = ProgressCircleArgs::default()
        .size(Dp(10.0))
        .stroke_width(Dp(20.0))
        .progress(0.5);
    let svg = render(&progress_circle(&args));
    assert!(!svg.contains("<circle"));
    assert_eq!(parse(&svg).size().width(), 10.0);
}

#[test]
fn labeled_dashboard_widget() {
    let args = ProgressCircleArgs::themed(&PlanTheme::dashboard())
        .progress(4.0 / 6.0)
        .show_label(true)
        .caption("Tasks & goals");
    let svg = render(&progress_circle(&args));
    parse(&svg);
    assert!(svg.contains(r##"stroke="#007aff""##));
    assert!(svg.contains(">67%</text>"));
    assert!(svg.contains(">Tasks &amp; goals</text>"));
}

#[test]
fn animated_frames_move_toward_target() {
    let mut clock = FrameClock::new();
    let mut circle = ProgressCircle::new(ProgressCircleArgs::default().show_label(true));
    circle.set_progress(1.0, &mut clock);

    let mut labels = Vec::new();
    let mut now = 0;
    while clock.has_pending() {
        clock.tick(now);
        labels.push(render(&circle.render()));
        now += 16_000_000;
    }

    assert!(labels.len() > 10);
    assert!(labels[0].contains(">0%</text>"));
    assert!(labels.last().unwrap().contains(">100%</text>"));
}
