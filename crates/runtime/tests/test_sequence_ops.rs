//! Behavioural tests for the sequence operations
//!
//! These exercise the public contract of `SequenceOps`: wraparound reads,
//! copy semantics of concat/map, join rendering, callback ordering and
//! short-circuiting, and unmodified propagation of callback errors.

use dynseq_runtime::{ConcatPolicy, SeqError, Sequence, SequenceOps, Slot, Value};

fn ints(values: &[i64]) -> Sequence {
    values.iter().copied().map(Value::Int).collect()
}

fn holey() -> Sequence {
    // [1, <empty>, 3]
    let mut seq = ints(&[1]);
    seq.set(2, Value::Int(3)).unwrap();
    seq
}

#[test]
fn test_at_positive_indices_match_storage() {
    let seq = ints(&[1, 2, 3, 4, 5]);
    for i in 0..seq.len() {
        assert_eq!(seq.at(i as i64), seq.get(i));
    }
}

#[test]
fn test_at_minus_one_is_last() {
    let seq = ints(&[1, 2, 3, 4, 5]);
    assert_eq!(seq.at(-1), seq.at(seq.len() as i64 - 1));
    assert_eq!(seq.at(-1), Some(&Value::Int(5)));
}

#[test]
fn test_at_out_of_range_is_absent() {
    let seq = ints(&[1, 2, 3]);
    assert_eq!(seq.at(3), None);
    assert_eq!(seq.at(100), None);
    assert_eq!(seq.at(-4), None);
    assert_eq!(Sequence::new().at(0), None);
    assert_eq!(Sequence::new().at(-1), None);
}

#[test]
fn test_join_empty_sequence() {
    assert_eq!(Sequence::new().join("-"), "");
    assert_eq!(Sequence::new().join(""), "");
}

#[test]
fn test_join_literal() {
    assert_eq!(ints(&[1, 2, 3]).join("-"), "1-2-3");
    assert_eq!(ints(&[1, 2, 3, 4, 5]).join("/"), "1/2/3/4/5");
    assert_eq!(ints(&[1, 2, 3]).join(""), "123");
    assert_eq!(ints(&[7]).join(", "), "7");
}

#[test]
fn test_join_renders_holes_as_empty() {
    assert_eq!(holey().join("-"), "1--3");
}

#[test]
fn test_join_mixed_values() {
    let seq = Sequence::from_values([
        Value::from("a"),
        Value::Bool(false),
        Value::Null,
        Value::Float(1.5),
        Value::from(ints(&[1, 2])),
    ]);
    assert_eq!(seq.join("|"), "a|false|null|1.5|1,2");
}

#[test]
fn test_join_value_type_error() {
    let err = ints(&[1]).join_value(&Value::Null).unwrap_err();
    assert_eq!(err, SeqError::SeparatorNotString("null".to_string()));
}

#[test]
fn test_map_preserves_length() {
    for seq in [Sequence::new(), ints(&[1]), ints(&[1, 2, 3]), holey()] {
        let mapped = seq.map(|_, i| Value::Int(i as i64));
        assert_eq!(mapped.len(), seq.len());
    }
}

#[test]
fn test_map_doubles() {
    let mapped = ints(&[1, 2, 3, 4, 5]).map(|v, _| match v {
        Some(Value::Int(n)) => Value::Int(n * 2),
        _ => Value::Null,
    });
    assert_eq!(mapped, ints(&[2, 4, 6, 8, 10]));
}

#[test]
fn test_map_visits_every_index_in_order() {
    let seq = holey();
    let mut seen = Vec::new();
    let mapped = seq.map(|v, i| {
        seen.push((v.cloned(), i));
        Value::Bool(v.is_some())
    });

    assert_eq!(
        seen,
        vec![(Some(Value::Int(1)), 0), (None, 1), (Some(Value::Int(3)), 2)]
    );
    // holes become whatever the transform produced
    assert_eq!(mapped.occupied(), 3);
    assert_eq!(mapped.get(1), Some(&Value::Bool(false)));
}

#[test]
fn test_map_does_not_mutate_source() {
    let seq = ints(&[1, 2]);
    let mut mapped = seq.map(|_, _| Value::Null);
    mapped.push(Value::Int(9)).unwrap();
    assert_eq!(seq, ints(&[1, 2]));
}

#[test]
fn test_try_map_propagates_callback_error() {
    #[derive(Debug, PartialEq)]
    struct Boom(usize);

    let mut calls = 0;
    let result = ints(&[1, 2, 3, 4]).try_map(|v, i| {
        calls += 1;
        if i == 1 {
            Err(Boom(i))
        } else {
            Ok(v.cloned().unwrap_or(Value::Null))
        }
    });

    assert_eq!(result, Err(Boom(1)));
    assert_eq!(calls, 2);
}

#[test]
fn test_find_returns_first_match() {
    let seq = ints(&[1, 2, 3, 4, 5]);
    let found = seq.find(|v, _| matches!(v, Some(Value::Int(n)) if n % 2 == 0));
    assert_eq!(found, Some(&Value::Int(2)));
}

#[test]
fn test_find_short_circuits() {
    let seq = ints(&[1, 2, 3, 4, 5]);
    let mut visited = Vec::new();
    let found = seq.find(|v, i| {
        visited.push(i);
        matches!(v, Some(Value::Int(n)) if n % 2 == 0)
    });
    assert_eq!(found, Some(&Value::Int(2)));
    assert_eq!(visited, vec![0, 1]);
}

#[test]
fn test_find_absent() {
    let mut calls = 0;
    assert_eq!(
        Sequence::new().find(|_, _| {
            calls += 1;
            true
        }),
        None
    );
    assert_eq!(calls, 0);

    assert_eq!(ints(&[1, 3, 5]).find(|v, _| v == Some(&Value::Int(4))), None);
}

#[test]
fn test_find_receives_index() {
    let seq = ints(&[10, 20, 30]);
    let found = seq.find(|_, i| i == 2);
    assert_eq!(found, Some(&Value::Int(30)));
}

#[test]
fn test_try_find_propagates_callback_error() {
    let seq = ints(&[1, 2]);
    let result: Result<Option<&Value>, String> =
        seq.try_find(|_, i| if i == 0 { Ok(false) } else { Err("bad".to_string()) });
    assert_eq!(result, Err("bad".to_string()));
}

#[test]
fn test_concat_is_contiguous() {
    let joined = ints(&[1, 2, 3, 4, 5]).concat(&ints(&[6, 7, 8]));
    assert_eq!(joined, ints(&[1, 2, 3, 4, 5, 6, 7, 8]));
    assert_eq!(joined.at(6), Some(&Value::Int(7)));
}

#[test]
fn test_concat_preserves_holes() {
    let joined = holey().concat(&holey());
    assert_eq!(joined.len(), 6);
    assert_eq!(joined.slot(1), Some(&Slot::Empty));
    assert_eq!(joined.slot(4), Some(&Slot::Empty));
    assert_eq!(joined.join(","), "1,,3,1,,3");
}

#[test]
fn test_concat_with_empty_operands() {
    assert_eq!(Sequence::new().concat(&ints(&[1])), ints(&[1]));
    assert_eq!(ints(&[1]).concat(&Sequence::new()), ints(&[1]));
    assert!(Sequence::new().concat(&Sequence::new()).is_empty());
}

#[test]
fn test_concat_isolates_inputs() {
    let a = ints(&[1, 2]);
    let b = ints(&[3]);
    let mut joined = a.concat(&b);
    joined.set(0, Value::from("changed")).unwrap();
    joined.set(2, Value::from("changed")).unwrap();
    joined.push(Value::Int(4)).unwrap();

    assert_eq!(a, ints(&[1, 2]));
    assert_eq!(b, ints(&[3]));
}

#[test]
fn test_concat_with_legacy_gap() {
    let joined = ints(&[1, 2, 3, 4, 5])
        .concat_with(&ints(&[6, 7, 8]), ConcatPolicy::legacy())
        .unwrap();
    assert_eq!(joined.len(), 10);
    assert_eq!(joined.at(6), None);
    assert_eq!(joined.at(7), Some(&Value::Int(6)));
    assert_eq!(joined.join(","), "1,2,3,4,5,,,6,7,8");
}

#[test]
fn test_every() {
    let seq = ints(&[1, 2, 3, 4, 5]);
    assert!(seq.every(|v, _| matches!(v, Some(Value::Int(n)) if *n < 10)));
    assert!(!seq.every(|v, _| matches!(v, Some(Value::Int(n)) if *n < 3)));
    assert!(!holey().every(|v, _| v.is_some()));
}
