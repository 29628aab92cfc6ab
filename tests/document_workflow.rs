use sketch_pad::{
    ClockTime, Document, EventOutcome, InputEvent, KeyCommand, Mode, Point, Shape, TimeAngle,
};

fn click(doc: &mut Document, x: i32, y: i32) {
    let point = Point::new(x, y);
    doc.handle_event(InputEvent::PointerMove(point));
    doc.handle_event(InputEvent::PointerDown(point));
    doc.handle_event(InputEvent::PointerUp(point));
}

fn drag(doc: &mut Document, from: (i32, i32), to: (i32, i32)) {
    doc.handle_event(InputEvent::PointerDown(from.into()));
    doc.handle_event(InputEvent::PointerMove(to.into()));
    doc.handle_event(InputEvent::PointerUp(to.into()));
}

fn key(doc: &mut Document, command: KeyCommand) -> EventOutcome {
    doc.handle_event(InputEvent::Key(command))
}

fn noon() -> TimeAngle {
    TimeAngle::new(ClockTime::new(12, 0, 0))
}

#[test]
fn test_four_clicks_commit_one_curve() {
    let mut doc = Document::default();
    key(&mut doc, KeyCommand::SelectCurve);

    click(&mut doc, 100, 100);
    click(&mut doc, 150, 50);
    click(&mut doc, 250, 50);
    assert_eq!(doc.history().len(Mode::Curve), 0);
    assert!(doc.gesture().is_drawing_curve());
    assert!(!doc.scene(&noon()).curve_guide.is_empty());

    click(&mut doc, 300, 100);
    assert_eq!(doc.history().len(Mode::Curve), 1);
    assert!(doc.gesture().control_points().is_empty());
    assert!(!doc.gesture().is_drawing_curve());

    let curve = &doc.history().curves()[0];
    assert_eq!(
        curve.control,
        [
            Point::new(100, 100),
            Point::new(150, 50),
            Point::new(250, 50),
            Point::new(300, 100)
        ]
    );
    let raster = doc.rasterizer();
    let mut polygon = raster.line(Point::new(100, 100), Point::new(150, 50));
    polygon.extend(raster.line(Point::new(150, 50), Point::new(250, 50)));
    polygon.extend(raster.line(Point::new(250, 50), Point::new(300, 100)));
    assert_eq!(curve.control_overlay(), polygon.as_slice());
}

#[test]
fn test_control_overlays_follow_toggle() {
    let mut doc = Document::default();
    key(&mut doc, KeyCommand::SelectCurve);
    for (x, y) in [(100, 100), (150, 50), (250, 50), (300, 100)] {
        click(&mut doc, x, y);
    }
    assert!(doc.scene(&noon()).control_overlays.is_empty());

    key(&mut doc, KeyCommand::ToggleControlPoints);
    let scene = doc.scene(&noon());
    assert_eq!(scene.control_overlays.len(), 1);
    assert_eq!(scene.accent().count(), doc.history().curves()[0].control_overlay().len());

    key(&mut doc, KeyCommand::Undo);
    assert_eq!(doc.history().len(Mode::Curve), 0);
    assert!(doc.scene(&noon()).control_overlays.is_empty());
}

#[test]
fn test_undo_on_empty_history_is_idempotent() {
    let mut doc = Document::default();
    drag(&mut doc, (10, 10), (50, 50));
    key(&mut doc, KeyCommand::SelectCircle);

    assert!(doc.undo().is_none());
    assert_eq!(doc.history().len(Mode::Line), 1);
    assert!(doc.undo().is_none());
    assert_eq!(doc.history().len(Mode::Line), 1);
    assert_eq!(doc.mode(), Mode::Circle);
}

#[test]
fn test_undo_only_pops_current_mode() {
    let mut doc = Document::default();
    drag(&mut doc, (10, 10), (50, 50));
    drag(&mut doc, (20, 10), (60, 50));
    key(&mut doc, KeyCommand::SelectCircle);
    drag(&mut doc, (200, 200), (210, 200));

    key(&mut doc, KeyCommand::SelectLine);
    match doc.undo() {
        Some(Shape::Line(line)) => assert_eq!(line.p0, Point::new(20, 10)),
        other => panic!("expected a line, got {other:?}"),
    }
    assert_eq!(doc.history().len(Mode::Line), 1);
    assert_eq!(doc.history().len(Mode::Circle), 1);
}

#[test]
fn test_clock_entries_stay_whole() {
    let mut doc = Document::default();
    key(&mut doc, KeyCommand::SelectClock);
    drag(&mut doc, (100, 100), (103, 104));
    drag(&mut doc, (300, 300), (301, 301));
    drag(&mut doc, (500, 300), (540, 300));

    let radii: Vec<u32> = doc.history().clocks().iter().map(|c| c.radius).collect();
    assert_eq!(radii, vec![5, 1, 40]);

    key(&mut doc, KeyCommand::Undo);
    key(&mut doc, KeyCommand::Undo);
    let clocks = doc.history().clocks();
    assert_eq!(clocks.len(), 1);
    assert_eq!((clocks[0].center, clocks[0].radius), (Point::new(100, 100), 5));

    key(&mut doc, KeyCommand::Undo);
    key(&mut doc, KeyCommand::Undo);
    assert!(doc.history().clocks().is_empty());
}

#[test]
fn test_scene_rederives_clock_hands() {
    let mut doc = Document::default();
    key(&mut doc, KeyCommand::SelectClock);
    drag(&mut doc, (400, 300), (400, 400));

    let noon_scene = doc.scene(&noon());
    let three = TimeAngle::new(ClockTime::new(3, 15, 45));
    let later_scene = doc.scene(&three);

    assert_eq!(noon_scene.shapes, later_scene.shapes);
    assert_ne!(noon_scene.hands, later_scene.hands);

    let raster = doc.rasterizer();
    assert_eq!(later_scene.hands, raster.hands(Point::new(400, 300), 100, &three));
}

#[test]
fn test_rubber_band_is_never_committed() {
    let mut doc = Document::default();
    key(&mut doc, KeyCommand::SelectCircle);
    doc.handle_event(InputEvent::PointerDown(Point::new(100, 100)));
    doc.handle_event(InputEvent::PointerMove(Point::new(110, 100)));

    let scene = doc.scene(&noon());
    assert_eq!(scene.preview, doc.rasterizer().circle(Point::new(100, 100), 10));
    assert!(scene.shapes.is_empty());
    assert!(doc.history().is_empty());

    doc.handle_event(InputEvent::PointerMove(Point::new(120, 100)));
    assert_eq!(
        doc.scene(&noon()).preview,
        doc.rasterizer().circle(Point::new(100, 100), 20)
    );
}

#[test]
fn test_clock_preview_has_face_and_hands() {
    let mut doc = Document::default();
    key(&mut doc, KeyCommand::SelectClock);
    doc.handle_event(InputEvent::PointerDown(Point::new(200, 200)));
    doc.handle_event(InputEvent::PointerMove(Point::new(200, 250)));

    let raster = doc.rasterizer();
    let mut expected = raster.circle(Point::new(200, 200), 50);
    expected.extend(raster.hands(Point::new(200, 200), 50, &noon()));
    assert_eq!(doc.scene(&noon()).preview, expected);
}

#[test]
fn test_clear_empties_everything() {
    let mut doc = Document::default();
    drag(&mut doc, (10, 10), (50, 50));
    key(&mut doc, KeyCommand::SelectClock);
    drag(&mut doc, (100, 100), (120, 100));
    key(&mut doc, KeyCommand::SelectCurve);
    for (x, y) in [(100, 100), (150, 50), (250, 50), (300, 100)] {
        click(&mut doc, x, y);
    }

    key(&mut doc, KeyCommand::Clear);
    assert!(doc.history().is_empty());
    let scene = doc.scene(&noon());
    assert!(scene.shapes.is_empty());
    assert!(scene.hands.is_empty());

    key(&mut doc, KeyCommand::Clear);
    assert!(doc.history().is_empty());
}

#[test]
fn test_quit_is_reported() {
    let mut doc = Document::default();
    assert_eq!(key(&mut doc, KeyCommand::SelectClock), EventOutcome::Continue);
    assert_eq!(key(&mut doc, KeyCommand::Quit), EventOutcome::Quit);
}
