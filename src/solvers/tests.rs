use crate::{Puzzle, PuzzleOption, solve};

#[test]
fn puzzle_examples_solving() {
    // Array of (category, question, expected answer)
    let cases: Vec<(&str, &str, &str)> = vec![
        ("math", "What is 2 + 3 * 4?", "14"),
        ("math", "What is (2 + 3) * 4?", "20"),
        ("math", "What is 10 / 4?", "2.5"),
        ("math", "What is 12 × 3 - 6?", "30"),
        ("math", "What is 100 ÷ 8?", "12.5"),
        ("math", "What is 1 / 3?", "0.33"),
        ("math", "What is 2 / 3 * 3?", "2"),
        ("math", "What is 0.1 + 0.2?", "0.3"),
        ("math", "What is 1 / 8?", "0.12"),
        ("math", "What is 5 / 8?", "0.62"),
        ("math", "What is 9 / 8?", "1.12"),
        ("math", "What is ((15 - 5) * (2 + 2)) / 8?", "5"),
        ("math", "Solve this. what is 45 + 55 ?", "100"),
        ("math", "What is 2 + x?", "0"),
        ("math", "What is two plus two?", "0"),
        ("math", "How much is 2 + 2", "0"),
        ("logic", "What comes next? 1, 1, 2, 3, 5, ?", "8"),
        ("logic", "What comes next? 2, 4, 6, 8, ?", "10"),
        ("logic", "What comes next? 1, 2, 4, 8, ?", "16"),
        ("logic", "What comes next? 1, 2, 4, 7, ?", "11"),
        ("logic", "What comes next? 1, 2, 3, ?", "5"),
        ("logic", "What comes next? 1, 4, 9, 16, 25, ?", "36"),
        ("logic", "What comes next? 20, 17, 14, ?", "11"),
        ("logic", "What comes next? 2, 6, 18, 54, ?", "162"),
        ("logic", "What comes next? 3, 1, 4, 1, 5, ?", "6"),
        ("logic", "What comes next? 7, ?", "0"),
        ("logic", "Which number follows 1, 2, 3?", "0"),
        ("word", "Unscramble this word: TSCYRLA", "CRYSTAL"),
        ("word", "Unscramble the letters: ymnohar", "HARMONY"),
        ("word", "Unscramble: MODFERE", "FREEDOM"),
        ("word", "Unscramble: QWERTYU", "UNKNOWN"),
        ("word", "Spell TSCYRLA backwards", "UNKNOWN"),
        ("trivia", "Capital of France?", "A"),
        ("geography", "What is 2 + 2?", "42"),
        ("", "What is 2 + 2?", "42"),
        ("math", "What is ((((((((((1))))))))))?", "1"),
    ];

    for (category, question, expected) in cases {
        let puzzle = Puzzle::new(category, question);
        let answer = solve(&puzzle);

        assert_eq!(answer, expected, "category '{}', question '{}'", category, question);
    }
}

#[test]
fn trivia_examples_solving() {
    let cases: Vec<(&str, &str)> = vec![
        (r#"[{"id": "B", "text": "Paris"}]"#, "B"),
        (r#"[{"id": "C", "text": "Rome"}, {"id": "A", "text": "Oslo"}]"#, "C"),
        (r#"[{"text": "Madrid"}]"#, "Madrid"),
        (r#"["Lisbon", "Vienna"]"#, "Lisbon"),
        (r#"[1945, 1939]"#, "1945"),
        (r#"[]"#, "A"),
    ];

    for (raw, expected) in cases {
        let options: Vec<PuzzleOption> = serde_json::from_str(raw).unwrap();
        let puzzle = Puzzle::new("trivia", "Pick one").with_options(options);

        assert_eq!(solve(&puzzle), expected, "options {}", raw);
    }
}

#[test]
fn solving_is_idempotent() {
    let puzzles = [
        Puzzle::new("math", "What is 7 * (3 + 1)?"),
        Puzzle::new("logic", "What comes next? 1, 2, 4, 7, ?"),
        Puzzle::new("word", "Unscramble: TSCYRLA"),
        Puzzle::new("trivia", "?").with_options(vec![PuzzleOption::choice("D", "Four")]),
        Puzzle::new("geography", "Longest river?"),
    ];

    for puzzle in &puzzles {
        assert_eq!(solve(puzzle), solve(puzzle));
    }
}

#[test]
fn solving_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|n| {
            std::thread::spawn(move || {
                let q = format!("What comes next? {}, {}, {}, ?", n, n + 5, n + 10);
                solve(&Puzzle::new("logic", q))
            })
        })
        .collect();

    let answers: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(answers, vec!["15", "16", "17", "18"]);
}
