//! The stateful paragraph randomizer.

use handlatex_core::error::ConfigError;
use handlatex_core::options::OptionSet;
use handlatex_core::rng::DeterministicRng;
use tracing::trace;

use super::bernoulli::BernoulliTrials;
use super::counters::UsageCounters;
use super::fill::{FILL_WIDTH, fill};
use super::markup;
use super::walk::BoundedRandomWalk;

/// Produces `handparfull` markup for successive paragraphs of one document.
///
/// The randomizer owns its RNG and the live paragraph walk, so each document
/// gets its own instance. It borrows the option set for the whole run and
/// never modifies it.
pub struct ParagraphRandomizer<'o> {
    rng: Box<dyn DeterministicRng>,
    options: &'o OptionSet,
    walk: BoundedRandomWalk,
    trials: BernoulliTrials,
    counters: UsageCounters,
}

impl<'o> ParagraphRandomizer<'o> {
    /// Creates a randomizer and starts its paragraph walk.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvertedBounds` if any bound pair in `options`
    /// is inverted, or `ConfigError::UnboundedScale` if the scale range is
    /// not finite.
    pub fn new(
        mut rng: Box<dyn DeterministicRng>,
        options: &'o OptionSet,
    ) -> Result<Self, ConfigError> {
        options.validate()?;
        let walk = start_walk(options, rng.as_mut());
        Ok(Self {
            rng,
            options,
            walk,
            trials: BernoulliTrials::new(options.freq_word),
            counters: UsageCounters::default(),
        })
    }

    /// Switches to a new option set and restarts the paragraph walk from a
    /// fresh random position. Counters keep accumulating.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`ParagraphRandomizer::new`]; the randomizer
    /// is left unchanged in that case.
    pub fn configure(&mut self, options: &'o OptionSet) -> Result<(), ConfigError> {
        options.validate()?;
        self.walk = start_walk(options, self.rng.as_mut());
        self.trials = BernoulliTrials::new(options.freq_word);
        self.options = options;
        Ok(())
    }

    /// The option set in effect.
    #[must_use]
    pub fn options(&self) -> &OptionSet {
        self.options
    }

    /// Counts accumulated so far. Never draws a random value.
    #[must_use]
    pub fn counters(&self) -> UsageCounters {
        self.counters
    }

    /// Rewrites one paragraph body into `handparfull` markup.
    ///
    /// Advances the paragraph walk by exactly one step, draws one scale,
    /// then one Bernoulli trial per word and one angle per rotated word.
    pub fn transform(&mut self, paragraph: &str) -> String {
        self.counters.paragraphs += 1;

        let angle = self.walk.next_position(self.rng.as_mut());
        let scale = self
            .rng
            .next_f64_range(self.options.min_par_scale, self.options.max_par_scale);

        let mut words = Vec::new();
        for word in paragraph.split_whitespace() {
            self.counters.words += 1;
            if self.trials.next_trial(self.rng.as_mut()) {
                self.counters.rotated_words += 1;
                let word_angle = self
                    .rng
                    .next_i32_range(self.options.low_word_angle, self.options.high_word_angle);
                words.push(markup::rotated_word(word_angle, word));
            } else {
                words.push(word.to_owned());
            }
        }

        trace!(angle, scale, words = words.len(), "randomized paragraph");
        markup::paragraph(angle, scale, &fill(&words, FILL_WIDTH))
    }
}

fn start_walk(options: &OptionSet, rng: &mut dyn DeterministicRng) -> BoundedRandomWalk {
    BoundedRandomWalk::start(options.min_par_angle, options.max_par_angle, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use handlatex_core::rng::SeededRng;
    use handlatex_test_support::{MockRng, SequenceRng};

    /// Splits generated markup into `(angle, scale, body)`.
    fn parse_output(output: &str) -> (i32, f64, String) {
        let header_end = output.find('\n').unwrap();
        let header = &output[..header_end];
        let rest = &output[header_end + 1..];
        let body = rest.strip_suffix("\n\\end{handparfull}").unwrap();

        let params = header.strip_prefix("\\begin{handparfull}{").unwrap();
        let (angle, scale) = params.strip_suffix('}').unwrap().split_once("}{").unwrap();
        (angle.parse().unwrap(), scale.parse().unwrap(), body.to_owned())
    }

    fn options_with_freq(freq_word: f64) -> OptionSet {
        OptionSet {
            freq_word,
            ..OptionSet::default()
        }
    }

    // --- transform tests ---

    #[test]
    fn test_transform_with_mock_rng_produces_exact_markup() {
        let options = OptionSet::default();
        let mut randomizer = ParagraphRandomizer::new(Box::new(MockRng), &options).unwrap();

        let output = randomizer.transform("word");

        assert_eq!(
            output,
            "\\begin{handparfull}{-2}{0.80}\n\\handword{-2}{word}\n\\end{handparfull}"
        );
    }

    #[test]
    fn test_transform_with_scripted_draws() {
        let options = OptionSet {
            min_par_scale: 1.0,
            max_par_scale: 2.0,
            ..OptionSet::default()
        };
        // walk start, walk step, angle of the one rotated word
        let rng = SequenceRng::new(vec![0, 1, 2]).with_floats(vec![0.5, 0.9, 0.1, 0.5]);
        let mut randomizer = ParagraphRandomizer::new(Box::new(rng), &options).unwrap();

        let output = randomizer.transform("one two three");

        assert_eq!(
            output,
            "\\begin{handparfull}{1}{1.50}\none \\handword{2}{two} three\n\\end{handparfull}"
        );
        assert_eq!(
            randomizer.counters(),
            UsageCounters {
                paragraphs: 1,
                words: 3,
                rotated_words: 1,
            }
        );
    }

    #[test]
    fn test_zero_frequency_keeps_body_verbatim() {
        let options = options_with_freq(0.0);
        let mut randomizer =
            ParagraphRandomizer::new(Box::new(SeededRng::from_seed(9)), &options).unwrap();

        for _ in 0..50 {
            let (angle, scale, body) = parse_output(&randomizer.transform("hello world foo"));

            assert_eq!(body, "hello world foo");
            assert!((-2..=2).contains(&angle));
            assert!((0.8..=1.25).contains(&scale));
        }
        assert_eq!(randomizer.counters().rotated_words, 0);
    }

    #[test]
    fn test_unit_frequency_rotates_every_word() {
        let options = OptionSet {
            freq_word: 1.0,
            low_word_angle: 0,
            high_word_angle: 0,
            ..OptionSet::default()
        };
        let mut randomizer =
            ParagraphRandomizer::new(Box::new(SeededRng::from_seed(10)), &options).unwrap();

        let (_, _, body) = parse_output(&randomizer.transform("a b"));

        assert_eq!(body, "\\handword{0}{a} \\handword{0}{b}");
        assert_eq!(randomizer.counters().rotated_words, 2);
    }

    #[test]
    fn test_word_angles_stay_within_bounds() {
        let options = OptionSet {
            freq_word: 1.0,
            low_word_angle: -3,
            high_word_angle: 5,
            ..OptionSet::default()
        };
        let mut randomizer =
            ParagraphRandomizer::new(Box::new(SeededRng::from_seed(77)), &options).unwrap();

        let (_, _, body) = parse_output(&randomizer.transform(&"w ".repeat(500)));

        for token in body.split_whitespace() {
            let angle: i32 = token
                .strip_prefix("\\handword{")
                .and_then(|rest| rest.split_once('}'))
                .map(|(angle, _)| angle.parse().unwrap())
                .unwrap();
            assert!((-3..=5).contains(&angle));
        }
    }

    #[test]
    fn test_token_count_is_preserved() {
        let options = options_with_freq(0.5);
        let mut randomizer =
            ParagraphRandomizer::new(Box::new(SeededRng::from_seed(4)), &options).unwrap();
        let paragraph = "  Lorem ipsum dolor\tsit amet,\n consectetur adipiscing elit, sed do \
                         eiusmod tempor incididunt ut labore et dolore magna aliqua.  ";
        let input_tokens = paragraph.split_whitespace().count();

        for _ in 0..100 {
            let (_, _, body) = parse_output(&randomizer.transform(paragraph));
            let rotated = body.matches("\\handword{").count();
            let plain = body
                .split_whitespace()
                .filter(|token| !token.starts_with("\\handword{"))
                .count();

            assert_eq!(rotated + plain, input_tokens);
            assert_eq!(body.split_whitespace().count(), input_tokens);
        }
    }

    #[test]
    fn test_long_paragraph_is_wrapped() {
        let options = options_with_freq(0.0);
        let mut randomizer = ParagraphRandomizer::new(Box::new(MockRng), &options).unwrap();

        let (_, _, body) = parse_output(&randomizer.transform(&"lorem ipsum ".repeat(40)));

        assert!(body.lines().count() > 1);
        assert!(body.lines().all(|line| line.chars().count() <= FILL_WIDTH));
    }

    #[test]
    fn test_empty_paragraph_counts_without_words() {
        let options = OptionSet::default();
        let mut randomizer = ParagraphRandomizer::new(Box::new(MockRng), &options).unwrap();

        let output = randomizer.transform(" \n ");

        assert_eq!(output, "\\begin{handparfull}{-2}{0.80}\n\n\\end{handparfull}");
        assert_eq!(
            randomizer.counters(),
            UsageCounters {
                paragraphs: 1,
                words: 0,
                rotated_words: 0,
            }
        );
    }

    #[test]
    fn test_successive_paragraphs_follow_one_walk() {
        let options = options_with_freq(0.0);
        // start at 0, then +1, +1, +1 (rejected), -1
        let rng = SequenceRng::new(vec![0, 1, 1, 1, -1]);
        let mut randomizer = ParagraphRandomizer::new(Box::new(rng), &options).unwrap();

        let angles: Vec<i32> = (0..4)
            .map(|_| parse_output(&randomizer.transform("x")).0)
            .collect();

        assert_eq!(angles, vec![1, 2, 2, 1]);
    }

    #[test]
    fn test_paragraph_angles_drift_by_at_most_one() {
        let options = OptionSet {
            min_par_angle: -6,
            max_par_angle: 6,
            ..OptionSet::default()
        };
        let mut randomizer =
            ParagraphRandomizer::new(Box::new(SeededRng::from_seed(31)), &options).unwrap();

        let angles: Vec<i32> = (0..300)
            .map(|_| parse_output(&randomizer.transform("x y")).0)
            .collect();

        assert!(angles.windows(2).all(|pair| (pair[0] - pair[1]).abs() <= 1));
        assert!(angles.iter().all(|angle| (-6..=6).contains(angle)));
    }

    // --- configure and counters tests ---

    #[test]
    fn test_new_rejects_inverted_bounds() {
        let options = OptionSet {
            low_word_angle: 4,
            high_word_angle: 1,
            ..OptionSet::default()
        };

        let result = ParagraphRandomizer::new(Box::new(MockRng), &options);

        assert!(matches!(result, Err(ConfigError::InvertedBounds { .. })));
    }

    #[test]
    fn test_new_rejects_infinite_scale_range() {
        let options = OptionSet {
            min_par_scale: f64::NEG_INFINITY,
            max_par_scale: f64::INFINITY,
            ..OptionSet::default()
        };

        let result = ParagraphRandomizer::new(Box::new(MockRng), &options);

        assert!(matches!(result, Err(ConfigError::UnboundedScale { .. })));
    }

    #[test]
    fn test_configure_restarts_walk_and_keeps_counters() {
        let first = options_with_freq(0.0);
        let second = OptionSet {
            min_par_angle: 10,
            max_par_angle: 12,
            freq_word: 0.0,
            ..OptionSet::default()
        };
        // first walk: start 0, step 0; second walk: start 11, step 1
        let rng = SequenceRng::new(vec![0, 0, 11, 1]);
        let mut randomizer = ParagraphRandomizer::new(Box::new(rng), &first).unwrap();

        assert_eq!(parse_output(&randomizer.transform("a b")).0, 0);
        randomizer.configure(&second).unwrap();
        assert_eq!(parse_output(&randomizer.transform("c")).0, 12);

        assert_eq!(randomizer.options().min_par_angle, 10);
        assert_eq!(
            randomizer.counters(),
            UsageCounters {
                paragraphs: 2,
                words: 3,
                rotated_words: 0,
            }
        );
    }

    #[test]
    fn test_configure_with_inverted_bounds_leaves_state_unchanged() {
        let good = options_with_freq(0.0);
        let bad = OptionSet {
            min_par_scale: 2.0,
            max_par_scale: 1.0,
            ..OptionSet::default()
        };
        let rng = SequenceRng::new(vec![1, 0]);
        let mut randomizer = ParagraphRandomizer::new(Box::new(rng), &good).unwrap();

        assert!(randomizer.configure(&bad).is_err());
        assert_eq!(parse_output(&randomizer.transform("x")).0, 1);
        assert_eq!(randomizer.options(), &good);
    }

    #[test]
    fn test_reading_counters_draws_nothing() {
        let options = options_with_freq(0.0);
        // exactly enough integers for construction and one paragraph
        let rng = SequenceRng::new(vec![0, 0]);
        let mut randomizer = ParagraphRandomizer::new(Box::new(rng), &options).unwrap();
        randomizer.transform("only paragraph");

        for _ in 0..10 {
            assert_eq!(randomizer.counters().paragraphs, 1);
        }
    }
}
