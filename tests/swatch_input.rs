use chalkboard::components::SWATCH_SIZE;
use chalkboard::panels::{SWATCH_MARGIN, SWATCH_SPACING};
use chalkboard::{BrushColor, ChalkboardApp};
use egui::{Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Vec2};

/// Screen position of the middle of `color`'s swatch
fn swatch_center(color: BrushColor) -> Pos2 {
    let index = BrushColor::ALL.iter().position(|c| *c == color).unwrap() as f32;
    Pos2::new(
        SWATCH_MARGIN + index * (SWATCH_SIZE + SWATCH_SPACING) + SWATCH_SIZE / 2.0,
        SWATCH_MARGIN + SWATCH_SIZE / 2.0,
    )
}

fn run_frame(ctx: &egui::Context, app: &mut ChalkboardApp, events: Vec<Event>) {
    let input = RawInput {
        screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(1024.0, 768.0))),
        events,
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| app.show(ctx));
}

fn click(ctx: &egui::Context, app: &mut ChalkboardApp, pos: Pos2) {
    let button = |pressed| Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::NONE,
    };
    run_frame(ctx, app, vec![Event::PointerMoved(pos)]);
    run_frame(ctx, app, vec![button(true)]);
    run_frame(ctx, app, vec![button(false)]);
}

fn toast_messages(app: &ChalkboardApp) -> Vec<&str> {
    app.session()
        .notifier()
        .toasts()
        .iter()
        .map(|toast| toast.message.as_str())
        .collect()
}

#[test]
fn test_clicking_swatch_sets_brush_color() {
    let ctx = egui::Context::default();
    let mut app = ChalkboardApp::default();

    // Let the swatch area lay itself out before it takes clicks
    run_frame(&ctx, &mut app, Vec::new());
    run_frame(&ctx, &mut app, Vec::new());

    click(&ctx, &mut app, swatch_center(BrushColor::Blue));

    assert_eq!(app.session().brush().color(), BrushColor::Blue);
    assert_eq!(
        toast_messages(&app),
        ["Brush Color set to white", "Brush Color set to blue"]
    );
    // The swatch took the click, not the canvas below it
    assert!(app.session().surface().is_empty());
}

#[test]
fn test_clicking_current_swatch_is_quiet() {
    let ctx = egui::Context::default();
    let mut app = ChalkboardApp::default();
    run_frame(&ctx, &mut app, Vec::new());
    run_frame(&ctx, &mut app, Vec::new());

    click(&ctx, &mut app, swatch_center(BrushColor::White));

    assert_eq!(app.session().brush().color(), BrushColor::White);
    assert_eq!(toast_messages(&app), ["Brush Color set to white"]);
}
