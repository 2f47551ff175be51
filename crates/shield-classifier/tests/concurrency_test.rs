//! Many threads sharing one classifier and one file-backed store.

use std::sync::{Arc, Barrier};
use std::thread;

use shield_classifier::Classifier;
use shield_core::traits::CountStore;
use shield_storage::SqliteStore;
use shield_tokens::WordTokenizer;
use tempfile::TempDir;

#[test]
fn concurrent_learn_forget_and_score() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(SqliteStore::open(&dir.path().join("shield.db"), 4).unwrap());
    let classifier = Arc::new(Classifier::new(store.clone(), Arc::new(WordTokenizer::new())));

    let learners = 4;
    let rounds = 25;
    let barrier = Arc::new(Barrier::new(learners * 2 + 1));
    let mut handles = Vec::new();

    for i in 0..learners {
        let classifier = Arc::clone(&classifier);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let class = if i % 2 == 0 { "even" } else { "odd" };
            barrier.wait();
            for _ in 0..rounds {
                classifier.learn(class, "alpha beta gamma").unwrap();
            }
        }));
    }
    for i in 0..learners {
        let classifier = Arc::clone(&classifier);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let class = if i % 2 == 0 { "even" } else { "odd" };
            barrier.wait();
            for _ in 0..rounds {
                classifier.forget(class, "alpha").unwrap();
            }
        }));
    }
    {
        let classifier = Arc::clone(&classifier);
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            barrier.wait();
            for _ in 0..rounds {
                let scores = classifier.score("alpha beta").unwrap();
                assert!(scores.values().all(|s| (0.0..=1.0).contains(s)));
            }
        }));
    }

    for h in handles {
        h.join().unwrap();
    }

    assert!(store.verify_totals().unwrap().is_empty());
    let words = vec!["alpha".to_string(), "beta".to_string(), "gamma".to_string()];
    for class in ["even", "odd"] {
        let counts = store.class_word_counts(class, &words).unwrap();
        let learned = (learners / 2 * rounds) as i64;
        assert_eq!(counts["beta"], learned);
        assert_eq!(counts["gamma"], learned);
        assert!(counts["alpha"] >= 0 && counts["alpha"] <= learned);
    }
}
