// src/challenge/pool.rs
use chrono::NaiveDate;
use uuid::Uuid;

use crate::entity::{DailyChallenge, Difficulty};

/// An undated challenge in the pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChallengeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub prompt: &'static str,
    pub hints: &'static [&'static str],
    pub sample_solution: &'static str,
}

impl ChallengeTemplate {
    /// Issue this template for `date` under a fresh id.
    pub fn stamp(&self, date: NaiveDate) -> DailyChallenge {
        DailyChallenge {
            id: Uuid::new_v4(),
            date,
            title: self.title.to_string(),
            description: self.description.to_string(),
            difficulty: self.difficulty,
            prompt: self.prompt.to_string(),
            hints: self.hints.iter().map(|h| h.to_string()).collect(),
            sample_solution: self.sample_solution.to_string(),
        }
    }
}

pub fn default_pool() -> Vec<ChallengeTemplate> {
    vec![
        ChallengeTemplate {
            title: "The Storyteller Challenge",
            description: "Create a compelling narrative with specific constraints",
            difficulty: Difficulty::Intermediate,
            prompt: "Write a 100-word story that includes these 3 elements: a mysterious package, a talking cat, and rain. The story must have a surprise ending.",
            hints: &[
                "Start with an intriguing opening",
                "Build tension quickly",
                "The surprise should reframe the entire story",
            ],
            sample_solution: "The package arrived in the rain, addressed to no one. 'Don't open it,' warned Mittens, my cat. I laughed—cats don't talk. But as I reached for the box, Mittens spoke again: 'Please, Sarah.' My hand froze. Inside wasn't a gift, but a collar with a note: 'For the cat who forgot she was human.' Mittens' eyes filled with tears. 'Ten years I've protected you from knowing.' Thunder crashed. I looked at my hands—were those... paws? The rain washed away the illusion. We were both cats, always had been.",
        },
        ChallengeTemplate {
            title: "The Explainer Challenge",
            description: "Make complex topics simple and engaging",
            difficulty: Difficulty::Beginner,
            prompt: "Explain how the internet works to a 5-year-old using only things found in a kitchen.",
            hints: &[
                "Use familiar objects as metaphors",
                "Keep language very simple",
                "Make it fun and relatable",
            ],
            sample_solution: "Imagine the internet is like a giant recipe sharing party! Your computer is like your kitchen. When you want to see something (like a video), you send a note through pipes (like water pipes, but for information). The note goes to a big recipe library (server) that has what you want. The library sends the recipe back through the pipes, but broken into tiny pieces (like ingredients). Your kitchen (computer) puts all the pieces together, and voilà—you can watch your video! Just like following a recipe to make cookies!",
        },
        ChallengeTemplate {
            title: "The Analyst Challenge",
            description: "Practice data interpretation and insight generation",
            difficulty: Difficulty::Advanced,
            prompt: "A coffee shop's sales dropped 30% last month. Generate 5 specific questions you'd ask to diagnose the problem, then provide hypotheses for each.",
            hints: &[
                "Consider internal and external factors",
                "Think about seasonal patterns",
                "Look at competitive landscape",
                "Consider operational changes",
            ],
            sample_solution: "Questions & Hypotheses:\n1. Did competitor shops open nearby? → New competition may be drawing customers\n2. Were there any menu or price changes? → Price increases might have driven customers away\n3. Did key staff members leave? → Service quality may have declined\n4. Were there any equipment failures? → Inconsistent product quality could impact sales\n5. Did foot traffic in the area change? → Construction, events, or seasonal changes might affect customer flow",
        },
        ChallengeTemplate {
            title: "The Coder's Challenge",
            description: "Write prompts for code generation and debugging",
            difficulty: Difficulty::Intermediate,
            prompt: "Create a prompt that would generate a Python function to validate email addresses. Include edge cases and error handling requirements.",
            hints: &[
                "Specify the validation rules clearly",
                "Mention return types",
                "Include test cases",
                "Request documentation",
            ],
            sample_solution: "Write a Python function called 'validate_email' that:\n- Takes a string as input\n- Returns True if valid, False otherwise\n- Checks for: @ symbol, domain extension, valid characters\n- Handles edge cases: empty string, None, multiple @\n- Includes docstring with examples\n- Add 5 test cases showing valid and invalid emails\n- Use regex for validation\n- Raise TypeError for non-string inputs",
        },
        ChallengeTemplate {
            title: "The Persuader Challenge",
            description: "Craft compelling arguments and persuasive content",
            difficulty: Difficulty::Intermediate,
            prompt: "Write a 150-word pitch convincing someone to learn a new language. Make it personal, specific, and actionable.",
            hints: &[
                "Start with a relatable problem or desire",
                "Use specific benefits, not generic ones",
                "Include a clear call-to-action",
                "Address common objections",
            ],
            sample_solution: "Remember that trip to Barcelona where you could only point at menu items? Learning Spanish changes everything. In just 15 minutes daily, you'll go from tourist to traveler. Start with DuoLingo's free app—it's like a game. Within 3 months, you'll order tapas like a local, understand street signs, and actually connect with people. Yes, you're busy, but you scroll social media for 30 minutes daily—swap half for Spanish. You're not 'bad at languages'—you just haven't found the right method. Skip traditional textbooks; use Netflix with Spanish subtitles, listen to Spanish podcasts during commutes. That promotion requiring bilingual skills? That dream of living abroad? They're waiting. Download DuoLingo now, set a daily reminder for 8 PM, and commit to a 30-day streak. Your future self will thank you.",
        },
    ]
}
