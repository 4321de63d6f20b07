use super::*;

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use std::collections::BTreeSet;

/// No dead branches below the root, and `count` matches the terminal nodes.
fn validate_trie(t: &Trie) {
    fn walk(node: &Node, is_root: bool, terminals: &mut usize) {
        assert!(
            is_root || node.terminal || !node.is_leaf(),
            "dead branch left behind: non-terminal leaf below the root"
        );
        if node.terminal {
            *terminals += 1;
        }
        for child in node.children.values() {
            walk(child, false, terminals);
        }
    }

    let mut terminals = 0usize;
    walk(&t.root, true, &mut terminals);
    assert_eq!(
        terminals, t.count,
        "reachable terminal count must match Trie::len"
    );
}

fn word_strategy() -> impl Strategy<Value = String> {
    // Three symbols keep shared prefixes frequent.
    "[abñ]{0,6}"
}

#[derive(Arbitrary, Clone, Debug)]
enum Op {
    #[proptest(weight = 5)]
    Insert(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 3)]
    Delete(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 2)]
    Search(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 2)]
    StartsWith(#[proptest(strategy = "word_strategy()")] String),
    #[proptest(weight = 2)]
    Complete(#[proptest(strategy = "word_strategy()")] String),
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence(ops in prop::collection::vec(any::<Op>(), 0..=400)) {
        let mut t = Trie::new();
        let mut m: BTreeSet<String> = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(word) => {
                    let got = t.insert(&word);
                    prop_assert_eq!(got, m.insert(word));
                }
                Op::Delete(word) => {
                    let got = t.delete(&word);
                    prop_assert_eq!(got, m.remove(&word));
                }
                Op::Search(word) => {
                    prop_assert_eq!(t.search(&word), m.contains(&word));
                    prop_assert_eq!(t.contains(&word), m.contains(&word));
                }
                Op::StartsWith(prefix) => {
                    let expected = m.iter().any(|w| w.starts_with(prefix.as_str()));
                    prop_assert_eq!(t.starts_with(&prefix), expected);
                }
                Op::Complete(prefix) => {
                    let got: Vec<String> = t.words_with_prefix(&prefix).collect();
                    let expected: Vec<String> = m
                        .iter()
                        .filter(|w| w.starts_with(prefix.as_str()))
                        .cloned()
                        .collect();
                    prop_assert_eq!(got, expected);
                }
            }

            prop_assert_eq!(t.len(), m.len());
        }

        validate_trie(&t);
        let got: Vec<String> = t.iter().collect();
        let expected: Vec<String> = m.iter().cloned().collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_render_marks_every_word(words in prop::collection::vec(word_strategy(), 0..=20)) {
        let t: Trie = words.iter().collect();
        let out = t.render();
        prop_assert!(out.starts_with(ROOT_LABEL));
        prop_assert_eq!(out.contains(TERMINAL_MARKER), !t.is_empty());
        let marked = out.matches(TERMINAL_MARKER).count();
        prop_assert_eq!(marked, t.len());
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

const SHARED_PREFIX_WORDS: [&str; 6] = ["", "s", "so", "sol", "sombra", "hola"];

#[test]
fn exhaustive_insert_order_small_set() {
    let expected: Vec<String> = SHARED_PREFIX_WORDS
        .iter()
        .map(|w| w.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let reference = SHARED_PREFIX_WORDS.iter().collect::<Trie>().render();

    for_each_permutation(&SHARED_PREFIX_WORDS, |perm| {
        let mut t = Trie::new();
        for w in perm {
            assert!(t.insert(w));
        }

        validate_trie(&t);
        assert_eq!(t.iter().collect::<Vec<_>>(), expected);
        assert_eq!(t.render(), reference, "shape must not depend on insert order");
    });
}

#[test]
fn exhaustive_delete_order_small_set() {
    let base: Trie = SHARED_PREFIX_WORDS.iter().collect();

    for_each_permutation(&SHARED_PREFIX_WORDS, |perm| {
        let mut t = base.clone();
        let mut m: BTreeSet<&str> = SHARED_PREFIX_WORDS.iter().copied().collect();

        for w in perm {
            assert!(t.delete(w));
            m.remove(w);
            assert_eq!(t.len(), m.len());
            validate_trie(&t);
            for rest in &m {
                assert!(t.search(rest), "{rest:?} lost after deleting {w:?}");
            }
        }
        assert!(t.is_empty());
        assert!(t.root.is_leaf());
        assert!(!t.root.terminal);
    });
}
