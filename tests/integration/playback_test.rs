//! End-to-end playback tests against in-memory regions

use std::time::Duration;

use ghostwrite::config::TimingConfig;
use ghostwrite::typist::status::{format_position, INSERT_MARKER};
use ghostwrite::typist::{draw_placeholders, play, HumanDelay};
use ghostwrite::{CursorPosition, Document, Panes, TermRegion, Theme, Typist};
use ratatui::layout::Rect;

use crate::helpers::{temp_fixture, FixedDelay, PauseLog, Recorder};

fn status_region(width: u16) -> TermRegion<Vec<u8>> {
    TermRegion::new(Vec::new(), Rect::new(0, 23, width, 1))
}

#[test]
fn two_line_document_end_to_end() {
    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: Recorder::new(76),
        gutter: Recorder::new(4),
        status: status_region(40),
    };

    let pos = {
        let mut typist = Typist::new(FixedDelay(Duration::ZERO), &mut log, 23);
        typist
            .type_document(&Document::from_lines(["ab", "c"]), &mut panes)
            .unwrap()
    };

    assert_eq!(panes.content.text, "ab\nc\n");
    assert_eq!(panes.gutter.text, "1\n2\n3\n");
    assert_eq!(pos, CursorPosition { line: 3, column: 0 });

    let expected = format!("{}{}3,0{}All", INSERT_MARKER, " ".repeat(8), " ".repeat(13));
    assert_eq!(panes.status.row_text(0), expected);
}

#[test]
fn drawn_characters_match_document() {
    let (_dir, path) = temp_fixture("sample.txt");
    let document = Document::load(&path, 4).unwrap();

    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: Recorder::new(80),
        gutter: Recorder::new(4),
        status: Recorder::new(80),
    };
    let pos = {
        let mut typist = Typist::new(FixedDelay(Duration::ZERO), &mut log, 23);
        typist.type_document(&document, &mut panes).unwrap()
    };

    let drawn: usize = panes.content.text.chars().filter(|c| *c != '\n').count();
    assert_eq!(drawn, document.char_count());
    assert_eq!(panes.content.text.matches('\n').count(), document.len());
    assert_eq!(pos.line, document.len() + 1);
    assert_eq!(log.pauses.len(), document.char_count());
    assert_eq!(
        panes.content.refreshes,
        document.char_count() + document.len()
    );
}

#[test]
fn gutter_numbers_increase_by_one() {
    let document = Document::from_lines(["one", "", "three", "four"]);
    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: Recorder::new(80),
        gutter: Recorder::new(4),
        status: Recorder::new(80),
    };
    {
        let mut typist = Typist::new(FixedDelay(Duration::ZERO), &mut log, 23);
        typist.type_document(&document, &mut panes).unwrap();
    }

    let numbers: Vec<usize> = panes
        .gutter
        .text
        .lines()
        .filter(|l| !l.is_empty())
        .map(|l| l.parse().unwrap())
        .collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
}

#[test]
fn delays_stay_within_bounds() {
    let document = Document::from_lines(["let x = 1;", "  return x + y;"]);
    let timing = TimingConfig::default();

    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: Recorder::new(80),
        gutter: Recorder::new(4),
        status: Recorder::new(80),
    };
    {
        let mut typist = Typist::new(HumanDelay::seeded(&timing, 1234), &mut log, 23);
        typist.type_document(&document, &mut panes).unwrap();
    }

    let chars: Vec<char> = document.lines().iter().flat_map(|l| l.chars()).collect();
    assert_eq!(chars.len(), log.pauses.len());

    let mut spaces = 0u32;
    let mut others = 0u32;
    for (c, pause) in chars.iter().zip(&log.pauses) {
        if *c == ' ' {
            spaces += 1;
            assert_eq!(*pause, timing.space_delay());
        } else {
            others += 1;
            assert!(*pause < timing.max_char_delay());
        }
    }

    let total: Duration = log.pauses.iter().sum();
    let lower = timing.space_delay() * spaces;
    let upper = lower + timing.max_char_delay() * others;
    assert!(total >= lower && total <= upper);
}

#[test]
fn long_document_scrolls_with_gutter_aligned() {
    let document = Document::from_lines(["l1", "l2", "l3", "l4", "l5"]);
    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: TermRegion::new(Vec::new(), Rect::new(4, 0, 10, 3)).scrolling(true),
        gutter: TermRegion::new(Vec::new(), Rect::new(0, 0, 4, 3))
            .scrolling(true)
            .with_overscan(1),
        status: status_region(40),
    };
    draw_placeholders(&mut panes.gutter, &Theme::plain()).unwrap();

    {
        let mut typist = Typist::new(FixedDelay(Duration::ZERO), &mut log, 3);
        typist.type_document(&document, &mut panes).unwrap();
    }

    let content: Vec<String> = (0..3).map(|r| panes.content.row_text(r)).collect();
    let gutter: Vec<String> = (0..3).map(|r| panes.gutter.row_text(r)).collect();
    assert_eq!(content, vec!["l4", "l5", ""]);
    assert_eq!(gutter, vec!["4", "5", "6"]);
    assert!(panes.status.row_text(0).ends_with("Bot"));
}

#[test]
fn wrapped_line_keeps_gutter_aligned() {
    let document = Document::from_lines(["abcdefgh", "z"]);
    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: TermRegion::new(Vec::new(), Rect::new(4, 0, 4, 5)).scrolling(true),
        gutter: TermRegion::new(Vec::new(), Rect::new(0, 0, 4, 5))
            .scrolling(true)
            .with_overscan(1),
        status: status_region(40),
    };
    draw_placeholders(&mut panes.gutter, &Theme::plain()).unwrap();

    {
        let mut typist = Typist::new(FixedDelay(Duration::ZERO), &mut log, 5);
        typist.type_document(&document, &mut panes).unwrap();
    }

    assert_eq!(panes.content.row_text(0), "abcd");
    assert_eq!(panes.content.row_text(1), "efgh");
    assert_eq!(panes.content.row_text(2), "z");
    assert_eq!(panes.gutter.row_text(0), "1");
    assert_eq!(panes.gutter.row_text(1), "");
    assert_eq!(panes.gutter.row_text(2), "2");
    assert_eq!(panes.gutter.row_text(3), "3");
    assert_eq!(panes.gutter.row_text(4), "~");
}

#[test]
fn double_width_text_keeps_gutter_aligned() {
    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: TermRegion::new(Vec::new(), Rect::new(4, 0, 4, 5)).scrolling(true),
        gutter: TermRegion::new(Vec::new(), Rect::new(0, 0, 4, 5))
            .scrolling(true)
            .with_overscan(1),
        status: status_region(40),
    };
    draw_placeholders(&mut panes.gutter, &Theme::plain()).unwrap();

    {
        let mut typist = Typist::new(FixedDelay(Duration::ZERO), &mut log, 5);
        typist
            .type_document(&Document::from_lines(["界界界", "z"]), &mut panes)
            .unwrap();
    }

    assert_eq!(panes.content.row_text(0), "界界");
    assert_eq!(panes.content.row_text(1), "界");
    assert_eq!(panes.content.row_text(2), "z");
    assert_eq!(panes.gutter.row_text(0), "1");
    assert_eq!(panes.gutter.row_text(1), "");
    assert_eq!(panes.gutter.row_text(2), "2");
    assert_eq!(panes.gutter.row_text(3), "3");
}

#[test]
fn empty_document_goes_straight_to_save_command() {
    let timing = TimingConfig::default();
    let mut log = PauseLog::default();
    let mut panes = Panes {
        content: Recorder::new(80),
        gutter: Recorder::new(4),
        status: status_region(40),
    };

    let pos = {
        let mut typist = Typist::new(FixedDelay(Duration::from_millis(1)), &mut log, 23);
        play(&Document::default(), &mut panes, &mut typist, &timing, ":wq").unwrap()
    };

    assert_eq!(pos, CursorPosition::start());
    assert_eq!(panes.content.text, "");
    assert_eq!(panes.status.row_text(0), ":wq");
    assert_eq!(
        log.pauses,
        vec![
            timing.start_pause(),
            timing.end_pause(),
            Duration::from_millis(1),
            Duration::from_millis(1),
            Duration::from_millis(1),
            timing.hold(),
        ]
    );
}

#[test]
fn status_position_snapshots() {
    insta::assert_snapshot!(format_position(CursorPosition::start()), @"0,0");
    insta::assert_snapshot!(format_position(CursorPosition { line: 1, column: 0 }), @"0,0");
    insta::assert_snapshot!(format_position(CursorPosition { line: 3, column: 0 }), @"3,0");
    insta::assert_snapshot!(format_position(CursorPosition { line: 42, column: 17 }), @"42,17");
}
