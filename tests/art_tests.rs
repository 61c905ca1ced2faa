//! End-to-end checks of generated documents.

use artgen::{
    ArtGenerator, ArtProfile, ArtRanges, ArtStyle, CanvasSize, ShapeCount, ShapeKind, demo_circles,
    generate_document, write_shapes,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use regex_lite::Regex;

/// Lines strictly between the `<svg ...>` and `</svg>` lines
fn canvas_body(doc: &str) -> Vec<&str> {
    doc.lines()
        .skip_while(|l| !l.trim_start().starts_with("<svg "))
        .skip(1)
        .take_while(|l| l.trim_start() != "</svg>")
        .collect()
}

fn shape_regex() -> Regex {
    Regex::new(concat!(
        r#"^      <(circle|rect|ellipse) (?:[a-z]+="-?\d+" )+"#,
        r#"fill="rgb\((\d+),(\d+),(\d+)\)" fill-opacity="(\d\.\d)"></(circle|rect|ellipse)>$"#,
    ))
    .unwrap()
}

#[test]
fn ten_prebuilt_circles() {
    let doc = write_shapes(Vec::new(), "My Art", CanvasSize::new(500, 300), &demo_circles().unwrap()).unwrap();
    let doc = String::from_utf8(doc).unwrap();

    insta::assert_snapshot!(doc.trim_end(), @r#"
    <html>
    <head>
       <title>My Art</title>
    </head>
    <body>
       <svg width="500" height="300">
          <circle cx="50" cy="50" r="50" fill="rgb(255,0,0)" fill-opacity="1.0"></circle>
          <circle cx="150" cy="50" r="50" fill="rgb(255,0,0)" fill-opacity="1.0"></circle>
          <circle cx="250" cy="50" r="50" fill="rgb(255,0,0)" fill-opacity="1.0"></circle>
          <circle cx="350" cy="50" r="50" fill="rgb(255,0,0)" fill-opacity="1.0"></circle>
          <circle cx="450" cy="50" r="50" fill="rgb(255,0,0)" fill-opacity="1.0"></circle>
          <circle cx="50" cy="250" r="50" fill="rgb(0,0,255)" fill-opacity="1.0"></circle>
          <circle cx="150" cy="250" r="50" fill="rgb(0,0,255)" fill-opacity="1.0"></circle>
          <circle cx="250" cy="250" r="50" fill="rgb(0,0,255)" fill-opacity="1.0"></circle>
          <circle cx="350" cy="250" r="50" fill="rgb(0,0,255)" fill-opacity="1.0"></circle>
          <circle cx="450" cy="250" r="50" fill="rgb(0,0,255)" fill-opacity="1.0"></circle>
       </svg>
    </body>
    </html>
    "#);

    let body = canvas_body(&doc);
    assert_eq!(body.len(), 10);
    for line in body {
        assert!(line.starts_with("      <circle "), "{line:?}");
    }
}

#[test]
fn large_scenes_are_well_formed() {
    for (seed, style) in ArtStyle::ALL.into_iter().enumerate() {
        let profile = style.profile();
        let mut generator = ArtGenerator::with_rng(profile.ranges, StdRng::seed_from_u64(seed as u64)).unwrap();
        let doc = generator
            .render(Vec::new(), "My Art", profile.canvas, &profile.shape_count)
            .unwrap();
        let doc = String::from_utf8(doc).unwrap();

        assert!(doc.contains("   <svg width=\"1200\" height=\"650\">\n"));
        let body = canvas_body(&doc);
        let counts = generator.counts();
        assert!((500..=1250).contains(&body.len()), "{style}: {} shapes", body.len());
        assert_eq!(body.len() as u32, counts.total());

        let re = shape_regex();
        let mut tags = [0u32; 3];
        for line in &body {
            let caps = re.captures(line).unwrap_or_else(|| panic!("{style}: bad line {line:?}"));
            assert_eq!(&caps[1], &caps[6]);
            for channel in 2..=4 {
                let value: i32 = caps[channel].parse().unwrap();
                assert!((0..=255).contains(&value));
            }
            let opacity: f64 = caps[5].parse().unwrap();
            assert!((0.0..=1.0).contains(&opacity));
            match &caps[1] {
                "circle" => tags[0] += 1,
                "rect" => tags[1] += 1,
                _ => tags[2] += 1,
            }
        }
        assert_eq!(tags[0], counts.get(ShapeKind::Circle));
        assert_eq!(tags[1], counts.get(ShapeKind::Rectangle));
        assert_eq!(tags[2], counts.get(ShapeKind::Ellipse));
    }
}

#[test]
fn forest_colours_stay_in_style_bounds() {
    let profile = ArtStyle::Forest.profile();
    let mut generator = ArtGenerator::with_rng(profile.ranges, StdRng::seed_from_u64(21)).unwrap();
    let doc = generator
        .render(Vec::new(), "Forest", profile.canvas, &ShapeCount::Fixed(2_000))
        .unwrap();
    let doc = String::from_utf8(doc).unwrap();

    let re = shape_regex();
    for line in canvas_body(&doc) {
        let caps = re.captures(line).unwrap();
        let red: i32 = caps[2].parse().unwrap();
        let green: i32 = caps[3].parse().unwrap();
        let blue: i32 = caps[4].parse().unwrap();
        assert!(red <= 140 && green <= 230 && blue <= 140, "{line}");
    }
}

#[test]
fn tags_balance_and_indent_tracks_nesting() {
    let mut sink = Vec::new();
    let counts = generate_document(&mut sink, "Balance", &ArtProfile::small_demo()).unwrap();
    assert_eq!(counts.total(), 10);
    let doc = String::from_utf8(sink).unwrap();

    let open_tag = Regex::new(r"^<([a-z]+)[ >]").unwrap();
    let close_tag = Regex::new(r"^</([a-z]+)>$").unwrap();
    let mut stack: Vec<String> = Vec::new();
    for line in doc.lines() {
        let content = line.trim_start();
        let indent = line.len() - content.len();
        assert_eq!(indent % 3, 0, "{line:?}");
        if let Some(caps) = close_tag.captures(content) {
            assert_eq!(stack.pop().as_deref(), Some(&caps[1]), "{line:?}");
        } else if let Some(caps) = open_tag.captures(content) {
            let tag = caps[1].to_string();
            // Elements opened and closed on one line do not nest
            if !content.ends_with(&format!("</{tag}>")) {
                stack.push(tag);
            }
        }
    }
    assert!(stack.is_empty(), "unclosed: {stack:?}");
}

#[test]
fn independent_generators_do_not_share_state() {
    let make = || ArtGenerator::with_rng(ArtRanges::DEFAULT, StdRng::seed_from_u64(5)).unwrap();
    let mut a = make();
    let mut b = make();
    let first: Vec<_> = (0..20).map(|_| a.next_shape().unwrap()).collect();
    // Draws from `b` are unaffected by the draws already taken from `a`
    let second: Vec<_> = (0..20).map(|_| b.next_shape().unwrap()).collect();
    assert_eq!(first, second);
}
