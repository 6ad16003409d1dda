mod common;

use common::init_logging;
use dynamic_sets::red_black_tree::{RedBlackMap, RedBlackSet};
use serde_test::{assert_de_tokens, assert_tokens, Token};

#[test]
fn int_test_set_tokens() {
    init_logging();
    let set: RedBlackSet<u32> = vec![3, 1, 2].into_iter().collect();

    assert_tokens(
        &set,
        &[
            Token::Seq { len: Some(3) },
            Token::U32(1),
            Token::U32(2),
            Token::U32(3),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn int_test_empty_set_tokens() {
    init_logging();
    let set: RedBlackSet<u32> = RedBlackSet::new();

    assert_tokens(&set, &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
}

#[test]
fn int_test_map_tokens() {
    init_logging();
    let mut map: RedBlackMap<u32, String> = RedBlackMap::new();
    map.insert(2, String::from("bob"));
    map.insert(1, String::from("alice"));

    assert_tokens(
        &map,
        &[
            Token::Map { len: Some(2) },
            Token::U32(1),
            Token::Str("alice"),
            Token::U32(2),
            Token::Str("bob"),
            Token::MapEnd,
        ],
    );
}

#[test]
fn int_test_deserialize_unsorted_set() {
    init_logging();
    let set: RedBlackSet<u32> = vec![1, 2, 5].into_iter().collect();

    assert_de_tokens(
        &set,
        &[
            Token::Seq { len: Some(5) },
            Token::U32(5),
            Token::U32(1),
            Token::U32(5),
            Token::U32(2),
            Token::U32(1),
            Token::SeqEnd,
        ],
    );
}

#[test]
fn int_test_deserialize_map_keeps_first_value() {
    init_logging();
    let mut map: RedBlackMap<u32, String> = RedBlackMap::new();
    map.insert(1, String::from("first"));
    map.insert(3, String::from("third"));

    assert_de_tokens(
        &map,
        &[
            Token::Map { len: Some(3) },
            Token::U32(3),
            Token::Str("third"),
            Token::U32(1),
            Token::Str("first"),
            Token::U32(1),
            Token::Str("second"),
            Token::MapEnd,
        ],
    );
}
