//! End-to-end tests driving whole sessions through the public API.
//!
//! Everything here goes through `ScreenshotSession::handle` and the keyboard
//! shortcut table, the same surface a host application uses.

use image::{Rgba, RgbaImage};

use redpen::domain::Rect;
use redpen::session::shortcuts::{self, Key, Modifiers};
use redpen::{
    EditorConfig, Msg, Outcome, Phase, ScreenshotSession, ShapeColor, StaticProvider, Tool,
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn session_over(width: u32, height: u32) -> ScreenshotSession {
    let mut provider = StaticProvider::new(RgbaImage::from_pixel(width, height, WHITE));
    ScreenshotSession::begin(
        &mut provider,
        Rect::from_size(width as f32, height as f32),
        EditorConfig::default(),
    )
    .expect("session should start from a valid capture")
}

fn drag(session: &mut ScreenshotSession, from: (f32, f32), to: (f32, f32)) {
    session.handle(Msg::pointer_down(from.0, from.1)).unwrap();
    session.handle(Msg::pointer_move(to.0, to.1)).unwrap();
    session.handle(Msg::pointer_up(to.0, to.1)).unwrap();
}

// ── Full session flow ───────────────────────────────────────────────

#[test]
fn full_session_produces_saved_artifact() {
    init_logging();
    let mut session = session_over(400, 300);

    drag(&mut session, (50.0, 50.0), (350.0, 250.0));
    session.handle(Msg::confirm_selection()).unwrap();
    assert_eq!(session.phase(), Phase::Annotate);

    session.handle(Msg::set_tool(Tool::Arrow)).unwrap();
    session
        .handle(Msg::set_color(ShapeColor::from_rgb8(0, 0, 255)))
        .unwrap();
    drag(&mut session, (60.0, 60.0), (200.0, 120.0));

    let outcome = session.handle(Msg::finish()).unwrap();
    let Some(Outcome::Finished(artifact)) = outcome else {
        panic!("expected a finished artifact");
    };
    assert_eq!((artifact.width(), artifact.height()), (300, 200));

    // The artifact lands on disk complete and decodable
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("annotated.png");
    artifact.save_as(&path).unwrap();
    let decoded = image::open(&path).unwrap().to_rgba8();
    assert_eq!((decoded.width(), decoded.height()), (300, 200));
    assert!(decoded.pixels().any(|p| p != &WHITE));
}

// ── Keyboard-driven flow ────────────────────────────────────────────

#[test]
fn keyboard_flow_confirms_undoes_and_finishes() {
    init_logging();
    let mut session = session_over(200, 200);

    drag(&mut session, (20.0, 20.0), (180.0, 160.0));
    let confirm = shortcuts::handle_key(session.key_context(), Key::Enter, Modifiers::default())
        .expect("enter should confirm a pending selection");
    session.handle(confirm).unwrap();
    assert_eq!(session.phase(), Phase::Annotate);

    drag(&mut session, (30.0, 30.0), (90.0, 90.0));
    let ctrl = Modifiers {
        ctrl: true,
        shift: false,
    };
    let undo = shortcuts::handle_key(session.key_context(), Key::Character('z'), ctrl)
        .expect("ctrl+z should undo while annotating");
    session.handle(undo).unwrap();
    assert!(session.annotator().unwrap().log().is_empty());

    let finish = shortcuts::handle_key(session.key_context(), Key::Enter, Modifiers::default())
        .expect("enter should finish the annotate phase");
    match session.handle(finish).unwrap() {
        Some(Outcome::Finished(artifact)) => {
            assert_eq!((artifact.width(), artifact.height()), (160, 140));
        }
        other => panic!("expected a finished artifact, got {other:?}"),
    }
}

#[test]
fn escape_cancels_the_session() {
    init_logging();
    let mut session = session_over(100, 100);
    let cancel =
        shortcuts::handle_key(session.key_context(), Key::Escape, Modifiers::default()).unwrap();
    let outcome = session.handle(cancel).unwrap();
    assert!(matches!(outcome, Some(Outcome::Cancelled)));
}

#[test]
fn escape_during_text_entry_only_discards_the_anchor() {
    init_logging();
    let mut session = session_over(200, 200);
    drag(&mut session, (0.0, 0.0), (150.0, 150.0));
    session.handle(Msg::confirm_selection()).unwrap();

    session.handle(Msg::set_tool(Tool::Text)).unwrap();
    session.handle(Msg::pointer_down(40.0, 40.0)).unwrap();
    assert!(session.annotator().unwrap().pending_text_anchor().is_some());

    let msg =
        shortcuts::handle_key(session.key_context(), Key::Escape, Modifiers::default()).unwrap();
    let outcome = session.handle(msg).unwrap();

    // The session keeps running; only the text anchor is gone
    assert!(outcome.is_none());
    assert_eq!(session.phase(), Phase::Annotate);
    assert!(session.annotator().unwrap().pending_text_anchor().is_none());
}
