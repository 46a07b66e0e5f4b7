//! Loading patterns from disk and persisting rendered evolutions.

use std::fs;
use std::thread;

use lifegrid_core::{Coordinates, LifeRule, Pattern};
use lifegrid_engine::{
    Evolution, EvolutionConfig, StopCondition, WhenEmpty, WhenRepeated, WhenStable,
};
use lifegrid_io::{
    channel, load_pattern, load_pattern_utf8, Encoding, GenerationEvent, HtmlRepresentation,
    LoadError, PrintToStream, TextualRepresentation, WrittenOnCompleted, XmlRepresentation,
};
use lifegrid_test_utils::FailingObserver;
use tempfile::tempdir;

// ── Loading ─────────────────────────────────────────────────────

#[test]
fn loads_utf8_pattern_named_after_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("glider.txt");
    fs::write(&path, "...o.\n..o..\n..ooo\n").unwrap();
    let pattern = load_pattern_utf8(&path, 'o').unwrap();
    assert_eq!(pattern, Pattern::glider());
    assert_eq!((pattern.width(), pattern.height()), (5, 3));
    assert_eq!(pattern.name(), Some("glider"));
}

#[test]
fn loads_latin1_pattern_with_custom_live_char() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    // 0xB7 is MIDDLE DOT in ISO-8859-1 and invalid as UTF-8 on its own.
    fs::write(&path, [b'#', 0xB7, b'\n', 0xB7, b'#']).unwrap();
    let pattern = load_pattern(&path, '#', Encoding::Latin1).unwrap();
    assert_eq!(
        pattern,
        Pattern::from_cells([Coordinates::new(0, 0), Coordinates::new(1, 1)])
    );
    assert!(matches!(
        load_pattern(&path, '#', Encoding::Utf8),
        Err(LoadError::Decode { position: 1, .. })
    ));
}

// ── Rendering and persistence ───────────────────────────────────

#[test]
fn demo_wiring_writes_both_documents() {
    let dir = tempdir().unwrap();
    let xml_path = dir.path().join("demo.xml");
    let html_path = dir.path().join("demo.html");
    let mut xml = WrittenOnCompleted::new(&xml_path, XmlRepresentation::new());
    let mut html = WrittenOnCompleted::new(&html_path, HtmlRepresentation::new());
    let mut print = PrintToStream::new(Vec::new(), Vec::new());

    let config = EvolutionConfig::default()
        .size(6, 6)
        .rule(LifeRule::Conway)
        .populate_with_pattern(Pattern::glider().centered(6, 6))
        .observe(&mut print)
        .observe(&mut xml)
        .observe(&mut html)
        .stop(WhenRepeated::new().or(WhenStable::new()).or(WhenEmpty));
    Evolution::new(config).unwrap().evolve(100).unwrap();

    assert!(xml.error().is_none());
    assert!(html.error().is_none());
    let saved = fs::read_to_string(&xml_path).unwrap();
    assert_eq!(saved, xml.text());
    assert!(saved.starts_with("<evolution>\n"));
    assert!(saved.ends_with("</world>\n</evolution>"));
    assert_eq!(saved.matches("<world generation=").count(), 13);
    assert_eq!(fs::read_to_string(&html_path).unwrap(), html.text());

    assert_eq!(print.printed(), 13);
    let (out, _) = print.into_inner();
    let out = String::from_utf8(out).unwrap();
    assert!(out.starts_with("Generation 1\n......\n....o.\n...o..\n...ooo\n......\n......\n\n"));
}

#[test]
fn failed_write_is_kept_and_inner_still_completes() {
    let dir = tempdir().unwrap();
    let missing_dir = dir.path().join("no_such_dir").join("out.xml");
    let mut xml = WrittenOnCompleted::new(&missing_dir, XmlRepresentation::new());
    let config = EvolutionConfig::default()
        .populate_with_pattern(Pattern::blinker())
        .observe(&mut xml);
    Evolution::new(config).unwrap().evolve(2).unwrap();

    assert!(xml.error().is_some());
    assert!(xml.inner().is_closed());
    assert!(!missing_dir.exists());
}

#[test]
fn renderer_sees_error_when_another_observer_fails() {
    let mut xml = XmlRepresentation::new();
    let config = EvolutionConfig::default()
        .populate_with_pattern(Pattern::toad())
        .observe(&mut xml)
        .observe(FailingObserver::new(1));
    assert!(Evolution::new(config).unwrap().evolve(5).is_err());
    assert_eq!(xml.text().matches("<world ").count(), 2);
    assert!(xml.text().contains("<error>"));
    assert!(xml.is_closed());
}

// ── Channel ─────────────────────────────────────────────────────

#[test]
fn channel_feeds_another_thread() {
    let (observer, rx) = channel(Some(2));
    let consumer = thread::spawn(move || {
        let mut populations = Vec::new();
        for event in rx {
            match event {
                GenerationEvent::Next(g) => populations.push(g.alive_count()),
                GenerationEvent::Completed => break,
                GenerationEvent::Error(message) => panic!("unexpected error: {message}"),
            }
        }
        populations
    });

    let config = EvolutionConfig::default()
        .populate_with_pattern(Pattern::toad())
        .observe(observer);
    Evolution::new(config).unwrap().evolve(4).unwrap();
    assert_eq!(consumer.join().unwrap(), vec![6, 6, 6, 6]);
}
