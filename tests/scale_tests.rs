use lexsift::prelude::*;
use rand::Rng;
use std::time::Instant;

#[test]
fn test_sort_100k() {
    let count = 100_000;
    let mut rng = rand::rng();
    let mut input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    let mut expected = input.clone();
    expected.sort_unstable();

    let start = Instant::now();
    sort_by(&mut input, |a, b| a.cmp(b));
    println!("Sorted {} elements in {:?}", count, start.elapsed());

    assert_eq!(input, expected);
}

#[test]
fn test_sort_indices_100k() {
    let count = 100_000;
    let mut rng = rand::rng();
    let input: Vec<u64> = (0..count).map(|_| rng.random()).collect();

    let start = Instant::now();
    let indices = sort_indices(&input, |a, b| a.cmp(b));
    println!("Index-sorted {} elements in {:?}", count, start.elapsed());

    assert_eq!(indices.len(), count);
    for pair in indices.windows(2) {
        assert!(
            input[pair[0]] <= input[pair[1]],
            "Sort failed between indices {} and {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_analyze_large_text() {
    // 20k lines of generated text against a small common-word dictionary.
    let dict = Dictionary::from_words(["the", "of", "and", "a", "to"]);

    let mut rng = rand::rng();
    let vocab = [
        "the", "of", "and", "lexer", "parser", "token", "tree", "graph", "sort", "word",
    ];
    let mut text = String::new();
    let mut expected_words = 0usize;
    for _ in 0..20_000 {
        let words = rng.random_range(1..12);
        for w in 0..words {
            if w > 0 {
                text.push(' ');
            }
            text.push_str(vocab[rng.random_range(0..vocab.len())]);
            expected_words += 1;
        }
        text.push('\n');
    }

    let start = Instant::now();
    let analysis = analyze(text.as_bytes(), &dict, None).unwrap();
    println!(
        "Analyzed {} lines in {:?}",
        analysis.stats.line_count,
        start.elapsed()
    );

    assert_eq!(analysis.stats.line_count, 20_000);
    assert_eq!(analysis.stats.word_count, expected_words);
    // Only the 7 non-dictionary vocabulary words can become keywords.
    assert!(analysis.stats.keyword_count <= 7);

    let counted: usize = analysis.keywords.iter().map(|k| k.count).sum();
    let dict_hits = expected_words - counted;
    assert!(dict_hits > 0);
}
