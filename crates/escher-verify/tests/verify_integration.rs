// ────────────────────────────────────────────────────────────────
//  escher-verify — integration tests
//
//  Strategy:
//    • Build a rule database through the JSON path (same code the CLI
//      exercises), with the rotation-order tables for several tilings.
//    • Throw seeded pseudo-random walks at the full pipeline and check
//      the three laws: idempotence, irreducibility, and geometric
//      preservation in both realizations.
// ────────────────────────────────────────────────────────────────

use rand::{rngs::StdRng, Rng, SeedableRng};

use escher_core::{TilingKey, Word};
use escher_rewrite::{RewriteError, RuleDatabase};
use escher_verify::{verify, DEFAULT_TOLERANCE};

/// Rotation-order rule tables for the tilings exercised below.
const RULES_JSON: &str = r#"{
    "square-pentagonal": {
        "p": 4, "q": 5,
        "rules": [
            ["bB", ""], ["Bb", ""], ["aa", ""],
            ["bbbb", ""], ["BBBB", ""],
            ["bbb", "B"], ["BBB", "b"]
        ]
    },
    "pentagonal-tetravalent": {
        "p": 5, "q": 4,
        "rules": [
            ["bB", ""], ["Bb", ""], ["aa", ""],
            ["bbbbb", ""], ["BBBBB", ""],
            ["bbbb", "B"], ["BBBB", "b"],
            ["bbb", "BB"], ["BBB", "bb"]
        ]
    },
    "heptagonal-trivalent": {
        "p": 7, "q": 3,
        "rules": [
            ["bB", ""], ["Bb", ""], ["aa", ""],
            ["bbbbbbb", ""], ["BBBBBBB", ""],
            ["bbbbbb", "B"], ["BBBBBB", "b"],
            ["bbbbb", "BB"], ["BBBBB", "bb"],
            ["bbbb", "BBB"], ["BBBB", "bbb"]
        ]
    },
    "triangular-heptavalent": {
        "p": 3, "q": 7,
        "rules": [
            ["bB", ""], ["Bb", ""], ["aa", ""],
            ["bbb", ""], ["BBB", ""],
            ["bb", "B"], ["BB", "b"]
        ]
    }
}"#;

fn db() -> RuleDatabase {
    RuleDatabase::from_json_str(RULES_JSON).unwrap()
}

fn keys() -> Vec<TilingKey> {
    vec![
        TilingKey::new(4, 5),
        TilingKey::new(5, 4),
        TilingKey::new(7, 3),
        TilingKey::new(3, 7),
    ]
}

/// Pseudo-random walk: groups of `b`/`B` joined by `a` separators, the
/// same shape the CLI generates for ad-hoc testing.
fn random_word(rng: &mut StdRng, p: u32, groups: usize) -> Word {
    let mut s = String::new();
    for i in 0..groups {
        if i > 0 {
            s.push('a');
        }
        let run = rng.gen_range(1..=p.max(2) as usize);
        for _ in 0..run {
            s.push(if rng.gen_bool(0.5) { 'b' } else { 'B' });
        }
    }
    s.parse().unwrap()
}

#[test]
fn random_walks_preserve_geometry_in_both_realizations() {
    let db = db();
    let mut rng = StdRng::seed_from_u64(0x45534348); // "ESCH"
    for key in keys() {
        for _ in 0..100 {
            let groups = rng.gen_range(0..16);
            let word = random_word(&mut rng, key.p, groups);
            let report = verify(&db, key, &word).unwrap();
            assert!(
                report.is_ok(DEFAULT_TOLERANCE),
                "{key}: word {word} → {} has errors {:.3e} / {:.3e}",
                report.normalized,
                report.matrix_error,
                report.dual_matrix_error
            );
        }
    }
}

#[test]
fn normalization_is_idempotent_on_random_walks() {
    let db = db();
    let mut rng = StdRng::seed_from_u64(7);
    for key in keys() {
        let table = db.table(key).unwrap();
        for _ in 0..50 {
            let len = rng.gen_range(1..12);
            let word = random_word(&mut rng, key.p, len);
            let once = table.normalize(&word).unwrap();
            let twice = table.normalize(&once).unwrap();
            assert_eq!(once, twice, "{key}: not idempotent on {word}");
        }
    }
}

#[test]
fn normalized_output_is_irreducible() {
    let db = db();
    let mut rng = StdRng::seed_from_u64(99);
    for key in keys() {
        let table = db.table(key).unwrap();
        for _ in 0..50 {
            let len = rng.gen_range(1..12);
            let word = random_word(&mut rng, key.p, len);
            let normalized = table.normalize(&word).unwrap();
            assert!(
                table.is_normal(&normalized),
                "{key}: reducible output {normalized} from {word}"
            );
        }
    }
}

#[test]
fn already_normal_words_take_zero_passes() {
    let db = db();
    let table = db.table(TilingKey::new(4, 5)).unwrap();
    // No pattern of the square table occurs in this walk.
    let word: Word = "babaBab".parse().unwrap();
    let (normalized, report) = table.normalize_report(&word).unwrap();
    assert_eq!(normalized, word);
    assert_eq!(report.passes, 0);
    assert_eq!(report.replacements, 0);
}

#[test]
fn unknown_tiling_error_reports_the_available_set() {
    let err = verify(&db(), TilingKey::new(6, 6), &Word::empty()).unwrap_err();
    match err {
        RewriteError::UnknownTiling { key, available } => {
            assert_eq!(key, TilingKey::new(6, 6));
            let mut expected = keys();
            expected.sort();
            assert_eq!(available, expected);
        }
        other => panic!("expected UnknownTiling, got {other:?}"),
    }
}
