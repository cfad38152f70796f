//! List operations: whole-chain waves, top and bottom access, rotations,
//! reversal, and the stream loaders/unloaders.

mod common;

use asynchain_rs::{Chain, ChainError, Word};
use common::{assert_channel, AUX, CH, CH2};

// --- whole-chain waves ----------------------------------------------------

#[test]
fn copy_duplicates_contents() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3], &[10, 11, 12, 13], &[100, 101]]);
    chain.copy(CH, AUX);
    assert_channel(&mut chain, CH, &[1, 2, 3]);
    assert_channel(&mut chain, AUX, &[1, 2, 3]);
    assert_channel(&mut chain, CH2, &[100, 101]);
    chain.stop();
}

#[test]
fn copy_of_empty_clears_destination() {
    let mut chain = Chain::with_columns(&[&[], &[10, 11, 12, 13]]);
    chain.copy(CH, AUX);
    assert_channel(&mut chain, AUX, &[]);
    chain.stop();
}

#[test]
fn copy_over_shorter_and_longer_destinations() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3], &[10, 11, 12, 13]]);
    chain.copy(AUX, CH);
    assert_channel(&mut chain, CH, &[10, 11, 12, 13]);
    assert_channel(&mut chain, AUX, &[10, 11, 12, 13]);
    chain.stop();
}

#[test]
fn move_transfers_and_empties_the_source() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3], &[10, 11, 12, 13]]);
    chain.move_contents(CH, AUX);
    assert_channel(&mut chain, CH, &[]);
    assert_channel(&mut chain, AUX, &[1, 2, 3]);
    chain.stop();
}

#[test]
fn swap_exchanges_channels_of_different_lengths() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3, 4], &[10, 11, 12], &[100, 101]]);
    chain.swap(AUX, CH);
    assert_channel(&mut chain, CH, &[10, 11, 12]);
    assert_channel(&mut chain, AUX, &[1, 2, 3, 4]);
    assert_channel(&mut chain, CH2, &[100, 101]);
    chain.stop();
}

#[test]
fn swap_with_an_empty_channel() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3], &[]]);
    chain.swap(AUX, CH);
    assert_channel(&mut chain, CH, &[]);
    assert_channel(&mut chain, AUX, &[1, 2, 3]);
    chain.stop();
}

#[test]
fn set_all_overwrites_exactly_the_contents() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3]]);
    chain.set_all(CH, 0);
    assert_channel(&mut chain, CH, &[0, 0, 0]);

    chain.clear(CH);
    chain.set_all(CH, 7);
    assert_channel(&mut chain, CH, &[]);
    chain.stop();
}

#[test]
fn member_finds_words_anywhere_in_the_contents() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3]]);
    assert!(!chain.member(CH, 0));
    assert!(chain.member(CH, 1));
    assert!(chain.member(CH, 2));
    assert!(chain.member(CH, 3));
    chain.clear(CH);
    assert!(!chain.member(CH, 1));
    chain.stop();
}

// --- top operations -------------------------------------------------------

#[test]
fn push_prepends() {
    let mut chain = Chain::new();
    chain.push(CH, 3);
    chain.push(CH, 2);
    chain.push(CH, 1);
    chain.push(CH, 0);
    assert_channel(&mut chain, CH, &[0, 1, 2, 3]);
    chain.stop();
}

#[test]
fn push_linear_matches_push() {
    let mut chain = Chain::with_columns(&[&[1, 2, 3]]);
    chain.push_linear(CH, 0);
    assert_channel(&mut chain, CH, &[0, 1, 2, 3]);
    chain.stop();
}

#[test]
fn stack_discipline() {
    let mut chain = Chain::new();
    chain.push(CH, 0);
    chain.push(CH, 1);
    chain.push(CH, 2);
    assert_channel(&mut chain, CH, &[2, 1, 0]);
    assert_eq!(chain.pull(CH), Ok(2));
    assert_channel(&mut chain, CH, &[1, 0]);
    chain.stop();
}

#[test]
fn queue_discipline() {
    let mut chain = Chain::new();
    chain.add_last(CH, 0);
    chain.add_last(CH, 1);
    chain.add_last(CH, 2);
    assert_channel(&mut chain, CH, &[0, 1, 2]);
    assert_eq!(chain.pull(CH), Ok(0));
    assert_channel(&mut chain, CH, &[1, 2]);
    chain.stop();
}

#[test]
fn pull_until_empty_reconstructs_the_sequence() {
    let mut chain = Chain::with_columns(&[&[5, 4, 3, 2, 1]]);
    let mut drained = Vec::new();
    while let Ok(w) = chain.pull(CH) {
        drained.push(w);
    }
    assert_eq!(drained, vec![5, 4, 3, 2, 1]);
    assert!(chain.is_empty(CH));
    chain.stop();
}

// --- bottom operations ----------------------------------------------------

#[test]
fn last_walks_to_the_bottom() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2]]);
    assert_eq!(chain.last(CH), Ok(2));
    assert_channel(&mut chain, CH, &[0, 1, 2]);
    chain.stop();
}

#[test]
fn empty_bottom_operations_are_domain_errors() {
    let mut chain = Chain::new();
    assert_eq!(chain.last(CH), Err(ChainError::Empty { channel: CH }));
    assert_eq!(chain.take_last(CH), Err(ChainError::Empty { channel: CH }));
    assert_eq!(chain.remove_last(CH), Err(ChainError::Empty { channel: CH }));
    assert_eq!(chain.set_last(CH, 3), Err(ChainError::Empty { channel: CH }));
    assert_eq!(chain.replace_last(CH, 3), Err(ChainError::Empty { channel: CH }));
    assert_eq!(chain.rotate_down(CH), Err(ChainError::Empty { channel: CH }));
    assert_eq!(chain.rotate_up(CH), Err(ChainError::Empty { channel: CH }));
    chain.stop();
}

#[test]
fn remove_last_shortens_by_one() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2]]);
    chain.remove_last(CH).unwrap();
    assert_channel(&mut chain, CH, &[0, 1]);
    chain.remove_last(CH).unwrap();
    chain.remove_last(CH).unwrap();
    assert_channel(&mut chain, CH, &[]);
    chain.stop();
}

#[test]
fn take_last_returns_the_bottom_word() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2]]);
    assert_eq!(chain.take_last(CH), Ok(2));
    assert_channel(&mut chain, CH, &[0, 1]);
    assert_eq!(chain.take_last(CH), Ok(1));
    assert_eq!(chain.take_last(CH), Ok(0));
    assert!(chain.is_empty(CH));
    chain.stop();
}

#[test]
fn set_last_replaces_in_place() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2]]);
    chain.set_last(CH, 3).unwrap();
    assert_channel(&mut chain, CH, &[0, 1, 3]);
    chain.stop();
}

#[test]
fn set_last_on_single_element() {
    let mut chain = Chain::with_columns(&[&[0]]);
    chain.set_last(CH, 3).unwrap();
    assert_channel(&mut chain, CH, &[3]);
    chain.stop();
}

#[test]
fn replace_last_returns_the_old_bottom() {
    let mut chain = Chain::with_columns(&[&[0, 1]]);
    assert_eq!(chain.replace_last(CH, 3), Ok(1));
    assert_channel(&mut chain, CH, &[0, 3]);
    chain.stop();
}

// --- rotations ------------------------------------------------------------

#[test]
fn rotate_down_cycles_top_to_bottom() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2]]);
    assert_eq!(chain.rotate_down(CH), Ok(0));
    assert_channel(&mut chain, CH, &[1, 2, 0]);
    chain.stop();
}

#[test]
fn rotate_down_single_element_is_identity() {
    let mut chain = Chain::with_columns(&[&[0]]);
    assert_eq!(chain.rotate_down(CH), Ok(0));
    assert_channel(&mut chain, CH, &[0]);
    chain.stop();
}

#[test]
fn rotate_up_cycles_bottom_to_top() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2]]);
    assert_eq!(chain.rotate_up(CH), Ok(2));
    assert_channel(&mut chain, CH, &[2, 0, 1]);
    chain.stop();
}

#[test]
fn full_rotation_restores_the_contents() {
    let mut chain = Chain::with_columns(&[&[0, 1, 2, 3]]);
    for _ in 0..4 {
        chain.rotate_down(CH).unwrap();
    }
    assert_channel(&mut chain, CH, &[0, 1, 2, 3]);
    chain.stop();
}

// --- reversal ---------------------------------------------------------------

#[test]
fn reverse_variants_agree() {
    for n in 0..7u8 {
        let input: Vec<Word> = (0..n).rev().collect();
        let expected: Vec<Word> = (0..n).collect();

        let mut chain = Chain::with_columns(&[&input[..]]);
        chain.reverse(CH, AUX);
        assert_channel(&mut chain, AUX, &expected);
        chain.stop();

        let mut chain = Chain::with_columns(&[&input[..]]);
        chain.reverse_simple(CH, AUX);
        assert_channel(&mut chain, AUX, &expected);
        chain.stop();

        let mut chain = Chain::with_columns(&[&input[..]]);
        chain.reverse_simplest(CH, AUX);
        assert_channel(&mut chain, AUX, &expected);
        chain.stop();
    }
}

#[test]
fn double_reverse_is_identity() {
    let mut chain = Chain::with_columns(&[&[3, 1, 4, 1, 5]]);
    chain.reverse(CH, AUX);
    chain.reverse(AUX, CH2);
    assert_channel(&mut chain, CH2, &[3, 1, 4, 1, 5]);
    chain.stop();
}

// --- loaders ----------------------------------------------------------------

#[test]
fn load_words_variants() {
    let mut chain = Chain::new();

    chain.load_words(CH, &[1, 2, 3]);
    assert_channel(&mut chain, CH, &[1, 2, 3]);
    chain.load_words(CH, &[]);
    assert_channel(&mut chain, CH, &[]);

    chain.load_words_reverse(CH, &[1, 2, 3]);
    assert_channel(&mut chain, CH, &[3, 2, 1]);

    chain.load_words_sorted(CH, &[2, 4, 1, 5, 2, 3]);
    assert_channel(&mut chain, CH, &[1, 2, 2, 3, 4, 5]);

    chain.load_words_unique(CH, &[2, 4, 1, 3, 5, 2, 3, 1]);
    assert_channel(&mut chain, CH, &[1, 2, 3, 4, 5]);

    chain.stop();
}

#[test]
fn simple_loaders_match_streaming_loaders() {
    let mut chain = Chain::new();

    chain.load_words_simple(CH, &[1, 2, 3]);
    assert_channel(&mut chain, CH, &[1, 2, 3]);

    chain.load_words_reverse_simple(CH, &[1, 2, 3]);
    assert_channel(&mut chain, CH, &[3, 2, 1]);

    chain.load_words_sorted_simple(CH, &[2, 4, 1, 5, 2, 3]);
    assert_channel(&mut chain, CH, &[1, 2, 2, 3, 4, 5]);

    chain.load_words_unique_simple(CH, &[2, 4, 1, 3, 5, 2, 3, 1]);
    assert_channel(&mut chain, CH, &[1, 2, 3, 4, 5]);

    chain.stop();
}

#[test]
fn load_words_replaces_longer_previous_contents() {
    let mut chain = Chain::with_columns(&[&[9, 9, 9, 9, 9]]);
    chain.load_words(CH, &[1, 2]);
    assert_channel(&mut chain, CH, &[1, 2]);
    chain.stop();
}

// --- unloaders ---------------------------------------------------------------

#[test]
fn unload_words_drains_top_to_bottom() {
    let mut chain = Chain::with_columns(&[&[5, 4, 3, 2, 1]]);
    let words: Vec<Word> = chain.unload_words(CH).collect();
    assert_eq!(words, vec![5, 4, 3, 2, 1]);
    assert!(chain.is_empty(CH));
    chain.stop();
}

#[test]
fn unload_words_is_interruptible() {
    let mut chain = Chain::with_columns(&[&[5, 4, 3, 2, 1]]);
    let words: Vec<Word> = chain.unload_words(CH).take(2).collect();
    assert_eq!(words, vec![5, 4]);
    assert_channel(&mut chain, CH, &[3, 2, 1]);
    chain.stop();
}

#[test]
fn unload_all_words_streams_everything() {
    let mut chain = Chain::with_columns(&[&[3, 2, 1]]);
    assert_eq!(chain.unload_all_words(CH), vec![3, 2, 1]);
    assert!(chain.is_empty(CH));
    assert_eq!(chain.unload_all_words(CH), Vec::<Word>::new());
    chain.stop();
}

#[test]
fn unload_words_reverse_yields_bottom_first_and_restores() {
    let mut chain = Chain::with_columns(&[&[5, 4, 3, 2, 1]]);
    let words: Vec<Word> = chain.unload_words_reverse(CH, AUX).collect();
    assert_eq!(words, vec![1, 2, 3, 4, 5]);
    assert_channel(&mut chain, CH, &[5, 4, 3, 2, 1]);
    assert!(chain.is_empty(AUX));
    chain.stop();
}

#[test]
fn unload_all_words_reverse_streams_bottom_first() {
    let mut chain = Chain::with_columns(&[&[3, 2, 1]]);
    assert_eq!(chain.unload_all_words_reverse(CH, AUX), vec![1, 2, 3]);
    assert_channel(&mut chain, CH, &[3, 2, 1]);
    chain.stop();
}

#[test]
fn unload_reverse_of_empty_yields_nothing() {
    let mut chain = Chain::new();
    assert_eq!(chain.unload_words_reverse(CH, AUX).count(), 0);
    assert_eq!(chain.unload_all_words_reverse(CH, AUX), Vec::<Word>::new());
    chain.stop();
}
