#![cfg(target_arch = "wasm32")]

use bingo_core::*;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn shuffle_matches_native_known_answer() {
    let order = shuffle(&(0..24).collect::<Vec<usize>>(), "12345678");
    assert_eq!(
        order,
        [9, 0, 3, 5, 20, 4, 17, 22, 8, 10, 2, 7, 19, 6, 13, 11, 21, 1, 12, 23, 14, 16, 15, 18]
    );
}

#[wasm_bindgen_test]
fn session_round_trip_in_the_browser() {
    let mut session = Session::new(&PhrasePool::builtin(), "12345678", Some("7888")).unwrap();
    let outcome = session.toggle(0).unwrap();

    assert!(outcome.is_new_completion());
    assert_eq!(session.share_path(), "/12345678?state=f888");
}
