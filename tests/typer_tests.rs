// Host-side tests for the phrase typewriter state machine.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod typer {
    include!("../src/core/typer.rs");
}

use typer::*;

fn make_typer(phrases: &[&str], timing: TyperTiming) -> PhraseTyper {
    PhraseTyper::new(phrases.iter().map(|p| p.to_string()).collect(), timing)
}

#[test]
fn two_phrase_trace_matches_documented_behavior() {
    let timing = TyperTiming {
        type_ms: 2,
        delete_ms: 1,
        pause_ms: 5,
    };
    let mut typer = make_typer(&["ab", "c"], timing);

    let expected = [
        ("a", 2),  // typing forward
        ("ab", 5), // fully typed: long pause scheduled, now deleting
        ("a", 1),  // deleting runs on the shorter delay
        ("", 1),   // empty again: advance to the next phrase, no extra pause
        ("c", 5),  // one-char phrase completes immediately
        ("", 1),   // wrap back to the first phrase
    ];
    for (i, (text, delay)) in expected.iter().enumerate() {
        let step = typer.step();
        assert_eq!(step.text, *text, "text at step {}", i + 1);
        assert_eq!(step.delay_ms, *delay, "delay at step {}", i + 1);
    }
    assert_eq!(typer.phrase_index(), 0, "wrapped back to the first phrase");
    assert!(!typer.is_deleting());
}

#[test]
fn char_count_stays_within_phrase_bounds() {
    let mut typer = make_typer(&["héllo", "wörld", "ab"], TyperTiming::default());
    for _ in 0..500 {
        let phrase = typer.current_phrase().to_string();
        let step = typer.step();
        assert!(
            phrase.starts_with(&step.text),
            "{:?} is not a prefix of {:?}",
            step.text,
            phrase
        );
        let len = typer.current_phrase().chars().count();
        assert!(typer.char_count() <= len);
    }
}

#[test]
fn direction_flips_only_at_boundaries() {
    let mut typer = make_typer(&["abc", "de"], TyperTiming::default());
    let mut was_deleting = typer.is_deleting();
    for _ in 0..200 {
        let phrase_len = typer.current_phrase().chars().count();
        let _ = typer.step();
        let now_deleting = typer.is_deleting();
        if !was_deleting && now_deleting {
            assert_eq!(
                typer.char_count(),
                phrase_len,
                "flip to deleting requires a fully typed phrase"
            );
        }
        if was_deleting && !now_deleting {
            assert_eq!(
                typer.char_count(),
                0,
                "flip to typing requires a fully deleted phrase"
            );
        }
        was_deleting = now_deleting;
    }
}

#[test]
fn phrases_are_visited_in_order_cyclically() {
    let phrases = ["one", "two", "three"];
    let mut typer = make_typer(&phrases, TyperTiming::default());
    // Each phrase needs len steps to type and len to delete, so two full
    // passes over the list take 4 * total steps.
    let total: usize = phrases.iter().map(|p| p.len()).sum();
    let mut completed = Vec::new();
    for _ in 0..4 * total {
        let step = typer.step();
        let full_len = typer.current_phrase().chars().count();
        if typer.is_deleting() && step.text.chars().count() == full_len {
            completed.push(step.text.clone());
        }
    }
    assert_eq!(completed, ["one", "two", "three", "one", "two", "three"]);
}

#[test]
fn phrase_index_advances_exactly_once_per_cycle() {
    let mut typer = make_typer(&["ab", "cde"], TyperTiming::default());
    let mut advances = 0;
    let mut prev_index = typer.phrase_index();
    let mut steps = 0;
    while advances < 4 {
        let _ = typer.step();
        steps += 1;
        if typer.phrase_index() != prev_index {
            advances += 1;
            prev_index = typer.phrase_index();
            // the advancing step is the deleting -> typing transition
            assert!(!typer.is_deleting());
            assert_eq!(typer.char_count(), 0);
        }
        assert!(steps < 1000, "typer failed to cycle");
    }
}

#[test]
fn empty_phrase_pauses_once_and_advances() {
    let timing = TyperTiming {
        type_ms: 2,
        delete_ms: 1,
        pause_ms: 5,
    };
    let mut typer = make_typer(&["", "x"], timing);

    let s1 = typer.step();
    assert_eq!(s1.text, "");
    assert_eq!(s1.delay_ms, 5);
    assert!(typer.is_deleting());

    let s2 = typer.step();
    assert_eq!(s2.text, "");
    assert_eq!(s2.delay_ms, 1);
    assert_eq!(typer.phrase_index(), 1);
    assert!(!typer.is_deleting());
}

#[test]
fn default_timing_types_slower_than_it_deletes() {
    let t = TyperTiming::default();
    assert!(t.type_ms > t.delete_ms);
    assert!(t.pause_ms > t.type_ms);
}

#[test]
#[should_panic(expected = "at least one phrase")]
fn empty_phrase_list_fails_fast() {
    let _ = PhraseTyper::new(Vec::new(), TyperTiming::default());
}
