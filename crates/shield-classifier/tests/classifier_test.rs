//! Engine behaviour against the embedded store.

use std::sync::Arc;

use shield_classifier::Classifier;
use shield_core::errors::ClassifierError;
use shield_core::traits::{CountStore, Tokenizer};
use shield_core::types::Document;
use shield_storage::SqliteStore;
use shield_tokens::{EnglishTokenizer, WordTokenizer};
use tempfile::TempDir;

fn classifier_with(tokenizer: Arc<dyn Tokenizer>) -> (Classifier, Arc<SqliteStore>) {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let classifier = Classifier::new(store.clone(), tokenizer);
    (classifier, store)
}

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|w| w.to_string()).collect()
}

#[test]
fn scenario_good_and_bad() {
    let (classifier, _) = classifier_with(Arc::new(EnglishTokenizer::new()));
    classifier
        .learn("good", "sunshine drugs love sex lobster sloth")
        .unwrap();
    classifier
        .learn("bad", "fear death horror government zombie god")
        .unwrap();

    assert_eq!(
        classifier.classify("sloths are so cute i love them").unwrap(),
        "good"
    );
    assert_eq!(
        classifier
            .classify("i fear god and love the government")
            .unwrap(),
        "bad"
    );
}

#[test]
fn scenario_clamped_forget() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("a", "hello").unwrap();
    classifier.learn("a", "sunshine").unwrap();
    classifier.learn("a", "tree").unwrap();
    classifier.learn("a", "water").unwrap();
    classifier.learn("b", "iamb!").unwrap();
    classifier.forget("a", "hello tree").unwrap();
    classifier.forget("a", "hello").unwrap();

    let counts = store
        .class_word_counts("a", &words(&["hello", "sunshine", "tree", "water"]))
        .unwrap();
    assert_eq!(counts["hello"], 0);
    assert_eq!(counts["sunshine"], 1);
    assert_eq!(counts["tree"], 0);
    assert_eq!(counts["water"], 1);

    let totals = store.total_class_word_counts().unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals["a"], 2);
    assert_eq!(totals["b"], 1);
    assert!(store.verify_totals().unwrap().is_empty());
}

#[test]
fn forget_twice_stops_at_zero() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("c", "hello").unwrap();
    classifier.forget("c", "hello").unwrap();
    classifier.forget("c", "hello").unwrap();

    let counts = store.class_word_counts("c", &words(&["hello"])).unwrap();
    assert_eq!(counts["hello"], 0);
    assert_eq!(store.total_class_word_counts().unwrap()["c"], 0);
}

#[test]
fn forget_does_not_touch_other_classes() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("a", "shared word").unwrap();
    classifier.learn("b", "shared word").unwrap();
    classifier.forget("a", "shared shared shared").unwrap();

    let b = store.class_word_counts("b", &words(&["shared"])).unwrap();
    assert_eq!(b["shared"], 1);
    assert_eq!(store.total_class_word_counts().unwrap()["a"], 1);
}

#[test]
fn unseen_words_score_every_class_one() {
    let (classifier, _) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("a", "alpha beta").unwrap();
    classifier.learn("b", "gamma delta").unwrap();
    classifier.learn("c", "epsilon").unwrap();

    let scores = classifier.score("nothing here matches").unwrap();
    assert_eq!(scores.len(), 3);
    for score in scores.values() {
        assert_eq!(*score, 1.0);
    }
}

#[test]
fn classes_without_mass_are_not_scored() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    store.add_class("empty").unwrap();
    classifier.learn("full", "words here").unwrap();

    let scores = classifier.score("words").unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores["full"], 1.0);
}

#[test]
fn scores_are_normalized() {
    let (classifier, _) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("cats", "meow purr whiskers").unwrap();
    classifier.learn("dogs", "woof bark fetch").unwrap();
    classifier.learn("birds", "tweet wings meow").unwrap();

    let scores = classifier.score("meow purr").unwrap();
    assert_eq!(scores["cats"], 1.0);
    assert_eq!(scores["dogs"], 0.0);
    assert!(scores["birds"] > 0.0 && scores["birds"] < 1.0);
}

#[test]
fn repeated_query_words_count_once() {
    let (classifier, _) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("a", "apple apple apple banana").unwrap();
    classifier.learn("b", "banana cherry").unwrap();

    assert_eq!(
        classifier.score("banana").unwrap(),
        classifier.score("banana banana banana banana").unwrap()
    );
}

#[test]
fn bulk_learn_merges_documents_of_one_class() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier
        .bulk_learn(&[
            Document::new("a", "one two"),
            Document::new("b", "three"),
            Document::new("a", "two"),
        ])
        .unwrap();

    let counts = store.class_word_counts("a", &words(&["one", "two"])).unwrap();
    assert_eq!(counts["one"], 1);
    assert_eq!(counts["two"], 2);
    let totals = store.total_class_word_counts().unwrap();
    assert_eq!(totals["a"], 3);
    assert_eq!(totals["b"], 1);
}

#[test]
fn bulk_forget_is_symmetric() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    let docs = [Document::new("a", "x y"), Document::new("b", "z")];
    classifier.bulk_learn(&docs).unwrap();
    classifier.bulk_forget(&docs).unwrap();

    let totals = store.total_class_word_counts().unwrap();
    assert_eq!(totals["a"], 0);
    assert_eq!(totals["b"], 0);
    assert!(matches!(
        classifier.classify("x"),
        Err(ClassifierError::Untrained)
    ));
}

#[test]
fn preconditions_are_checked_before_any_write() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));

    assert!(matches!(
        classifier.learn("", "text"),
        Err(ClassifierError::InvalidClass)
    ));
    assert!(matches!(
        classifier.learn("a", ""),
        Err(ClassifierError::InvalidText)
    ));
    assert!(matches!(
        classifier.forget("", "text"),
        Err(ClassifierError::InvalidClass)
    ));
    assert!(matches!(
        classifier.forget("a", ""),
        Err(ClassifierError::InvalidText)
    ));
    assert!(matches!(
        classifier.bulk_learn(&[]),
        Err(ClassifierError::InvalidInput)
    ));
    assert!(matches!(
        classifier.bulk_forget(&[]),
        Err(ClassifierError::InvalidInput)
    ));

    // One bad entry rejects the whole batch, including the good ones.
    let result = classifier.bulk_learn(&[Document::new("a", "fine"), Document::new("", "bad")]);
    assert!(matches!(result, Err(ClassifierError::InvalidClass)));
    assert!(store.classes().unwrap().is_empty());
    assert!(store.total_class_word_counts().unwrap().is_empty());
}

#[test]
fn classify_untrained_is_an_error() {
    let (classifier, _) = classifier_with(Arc::new(WordTokenizer::new()));
    assert!(classifier.score("anything").unwrap().is_empty());
    assert!(matches!(
        classifier.classify("anything"),
        Err(ClassifierError::Untrained)
    ));
}

#[test]
fn ties_go_to_smallest_class_name() {
    let (classifier, _) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("zulu", "same").unwrap();
    classifier.learn("alpha", "same").unwrap();
    classifier.learn("mike", "same").unwrap();
    assert_eq!(classifier.classify("same").unwrap(), "alpha");
}

#[test]
fn reset_clears_store() {
    let (classifier, store) = classifier_with(Arc::new(WordTokenizer::new()));
    classifier.learn("a", "hello").unwrap();
    classifier.reset().unwrap();
    assert!(store.classes().unwrap().is_empty());
    assert!(store.total_class_word_counts().unwrap().is_empty());
    assert!(classifier.score("hello").unwrap().is_empty());
}

#[test]
fn learned_state_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shield.db");
    {
        let store = Arc::new(SqliteStore::open(&path, 2).unwrap());
        let classifier = Classifier::new(store, Arc::new(WordTokenizer::new()));
        classifier.learn("spam", "buy cheap pills now").unwrap();
        classifier.learn("ham", "lunch meeting at noon").unwrap();
    }
    let store = Arc::new(SqliteStore::open(&path, 2).unwrap());
    let classifier = Classifier::new(store, Arc::new(WordTokenizer::new()));
    assert_eq!(classifier.classify("cheap pills").unwrap(), "spam");
    assert_eq!(classifier.classify("noon meeting").unwrap(), "ham");
}

#[test]
fn custom_floor_changes_unseen_penalty() {
    let store = Arc::new(SqliteStore::open_in_memory().unwrap());
    let classifier =
        Classifier::new(store, Arc::new(WordTokenizer::new())).with_floor_probability(0.5);
    assert_eq!(classifier.floor_probability(), 0.5);

    // a: P(x) = 1/4, b: unseen -> 0.5. A generous floor favours b.
    classifier.learn("a", "x filler filler filler").unwrap();
    classifier.learn("b", "other").unwrap();
    assert_eq!(classifier.classify("x").unwrap(), "b");
}
