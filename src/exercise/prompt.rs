//! Exercise Prompt Selection
//!
//! Chooses the next shape to ask for, uniformly at random over the four
//! labels, and supplies the matching natural-language prompt text. The label
//! and text are always consistent by construction; the classifier makes no
//! assumption about the label distribution.

use crate::capture::types::ShapeLabel;
use rand::seq::SliceRandom;
use serde::Serialize;

/// One exercise prompt: the target label and its question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Prompt {
    pub shape: ShapeLabel,
    pub text: &'static str,
}

/// Prompt text for a given shape label. Total over the enumeration.
pub fn prompt_text(shape: ShapeLabel) -> &'static str {
    match shape {
        ShapeLabel::Circle => "Draw a circle.",
        ShapeLabel::Rectangle => "Draw a rectangle.",
        ShapeLabel::Triangle => "Draw a triangle.",
        ShapeLabel::Line => "Draw a line.",
    }
}

/// Select a prompt uniformly at random.
pub fn random_prompt() -> Prompt {
    let mut rng = rand::thread_rng();
    random_prompt_with(&mut rng)
}

/// Select a prompt using the supplied RNG (seedable in tests).
pub fn random_prompt_with<R: rand::Rng + ?Sized>(rng: &mut R) -> Prompt {
    // ALL is non-empty, so choose() cannot fail; fall back to the first
    // label rather than panic.
    let shape = *ShapeLabel::ALL.choose(rng).unwrap_or(&ShapeLabel::ALL[0]);
    Prompt {
        shape,
        text: prompt_text(shape),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prompt_text_is_consistent_with_label() {
        assert_eq!(prompt_text(ShapeLabel::Circle), "Draw a circle.");
        assert_eq!(prompt_text(ShapeLabel::Rectangle), "Draw a rectangle.");
        assert_eq!(prompt_text(ShapeLabel::Triangle), "Draw a triangle.");
        assert_eq!(prompt_text(ShapeLabel::Line), "Draw a line.");
    }

    #[test]
    fn test_random_prompt_pairs_label_and_text() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let prompt = random_prompt_with(&mut rng);
            assert_eq!(prompt.text, prompt_text(prompt.shape));
        }
    }

    #[test]
    fn test_random_prompt_covers_all_labels() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..256 {
            seen.insert(random_prompt_with(&mut rng).shape);
        }
        assert_eq!(seen.len(), ShapeLabel::ALL.len());
    }
}
