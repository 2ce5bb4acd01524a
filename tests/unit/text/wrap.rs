use super::*;

/// Every character is `advance` pixels wide.
struct FixedAdvance {
    advance: f32,
    calls: usize,
}

impl FixedAdvance {
    fn new(advance: f32) -> Self {
        Self { advance, calls: 0 }
    }
}

impl TextMeasure for FixedAdvance {
    fn measure_width(&mut self, text: &str) -> PlaceholderResult<f32> {
        self.calls += 1;
        Ok(text.chars().count() as f32 * self.advance)
    }
}

struct Failing;

impl TextMeasure for Failing {
    fn measure_width(&mut self, _text: &str) -> PlaceholderResult<f32> {
        Err(crate::foundation::error::PlaceholderError::font("no shaping today"))
    }
}

fn texts(lines: &[TextLine]) -> Vec<String> {
    lines.iter().map(TextLine::text).collect()
}

#[test]
fn short_text_stays_on_one_line() {
    let lines = wrap_greedy("My Cool App", 360.0, &mut FixedAdvance::new(10.0)).unwrap();
    assert_eq!(texts(&lines), vec!["My Cool App"]);
}

#[test]
fn packs_greedily_left_to_right() {
    // budget 10 chars
    let lines = wrap_greedy("aaa bbb ccc dd e", 100.0, &mut FixedAdvance::new(10.0)).unwrap();
    assert_eq!(texts(&lines), vec!["aaa bbb", "ccc dd e"]);
}

#[test]
fn exact_fit_is_accepted() {
    let lines = wrap_greedy("aaaa bbbbb", 100.0, &mut FixedAdvance::new(10.0)).unwrap();
    assert_eq!(texts(&lines), vec!["aaaa bbbbb"]);
}

#[test]
fn overlong_word_gets_its_own_line() {
    let lines = wrap_greedy(
        "hi supercalifragilistic yo",
        100.0,
        &mut FixedAdvance::new(10.0),
    )
    .unwrap();
    assert_eq!(texts(&lines), vec!["hi", "supercalifragilistic", "yo"]);
}

#[test]
fn overlong_first_word_is_closed_immediately() {
    let lines = wrap_greedy("abcdefghijkl ab", 100.0, &mut FixedAdvance::new(10.0)).unwrap();
    assert_eq!(texts(&lines), vec!["abcdefghijkl", "ab"]);
}

#[test]
fn empty_and_blank_text_produce_no_lines() {
    let mut m = FixedAdvance::new(10.0);
    assert!(wrap_greedy("", 100.0, &mut m).unwrap().is_empty());
    assert!(wrap_greedy("   \t ", 100.0, &mut m).unwrap().is_empty());
    assert_eq!(m.calls, 0);
}

#[test]
fn repeated_whitespace_collapses_between_words() {
    let lines = wrap_greedy("a   b", 100.0, &mut FixedAdvance::new(10.0)).unwrap();
    assert_eq!(lines[0].words, vec!["a", "b"]);
}

#[test]
fn words_are_preserved_and_lines_fit_budget() {
    let inputs = [
        "The Quick Brown Fox Jumps Over The Lazy Dog",
        "A Ridiculously Long Application Name That Keeps Going And Going",
        "x yy zzz wwww vvvvv uuuuuu ttttttt ssssssss rrrrrrrrr qqqqqqqqqqqq",
        "Single",
        "Antidisestablishmentarianism Is Long",
    ];
    for budget in [30.0_f32, 60.0, 100.0, 360.0] {
        for input in inputs {
            let mut m = FixedAdvance::new(7.5);
            let lines = wrap_greedy(input, budget, &mut m).unwrap();

            let rejoined: Vec<String> = lines.iter().flat_map(|l| l.words.clone()).collect();
            let original: Vec<String> = input.split_whitespace().map(str::to_string).collect();
            assert_eq!(rejoined, original, "words changed for {input:?} @ {budget}");

            for line in &lines {
                assert!(!line.words.is_empty());
                let w = m.measure_width(&line.text()).unwrap();
                assert!(
                    w <= budget || line.words.len() == 1,
                    "line {:?} is {w}px wide over budget {budget}",
                    line.text()
                );
            }
        }
    }
}

#[test]
fn measure_errors_propagate() {
    assert!(wrap_greedy("a b", 100.0, &mut Failing).is_err());
}
