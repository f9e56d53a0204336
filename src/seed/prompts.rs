// src/seed/prompts.rs
use uuid::Uuid;

use super::seed_id;
use crate::entity::Prompt;

fn sample(title: &str, content: &str, category: &str, tags: &[&str], ai: &[&str]) -> Prompt {
    Prompt {
        id: seed_id("prompt", title),
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        recommended_ai: ai.iter().map(|m| m.to_string()).collect(),
        is_favorite: false,
    }
}

/// The built-in prompt library, in display order.
pub fn sample_prompts() -> Vec<Prompt> {
    vec![
        sample(
            "Email Marketing Campaign",
            "Create a compelling email marketing campaign for [product/service] targeting [audience]. Include subject line, body copy, and call-to-action.",
            "Business",
            &["marketing", "email", "sales", "copywriting"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Business Plan Executive Summary",
            "Write an executive summary for a [business type] startup. Include market opportunity, solution, business model, and financial projections.",
            "Business",
            &["strategy", "planning", "startup", "executive"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Customer Support Response",
            "Draft a professional customer support response for [issue type]. Be empathetic, solution-focused, and maintain brand voice.",
            "Business",
            &["support", "customer service", "communication"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Market Research Analysis",
            "Analyze the market for [industry/product]. Include market size, trends, competitors, opportunities, and threats.",
            "Business",
            &["research", "analysis", "market", "competitive"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Blog Post Outline",
            "Create a detailed outline for a blog post about [topic]. Include engaging headline, introduction, main points, and conclusion.",
            "Writing",
            &["blogging", "content", "outline", "SEO"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Social Media Content",
            "Write 5 engaging social media posts about [topic] for [platform]. Include relevant hashtags and call-to-actions.",
            "Writing",
            &["social media", "content", "engagement", "hashtags"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Press Release",
            "Write a press release announcing [event/product/news]. Follow standard PR format with compelling headline and quotes.",
            "Writing",
            &["PR", "news", "announcement", "media"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Product Description",
            "Write compelling product descriptions for [product]. Highlight benefits, features, and unique selling points.",
            "Writing",
            &["product", "e-commerce", "copywriting", "sales"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Code Review Checklist",
            "Create a comprehensive code review checklist for [language/framework]. Include best practices, security, and performance considerations.",
            "Coding",
            &["code review", "best practices", "security", "quality"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "API Documentation",
            "Write clear API documentation for [endpoint/function]. Include parameters, responses, examples, and error handling.",
            "Coding",
            &["documentation", "API", "technical writing"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Debug Code Issue",
            "Help me debug this [language] code: [paste code]. Explain the issue and provide a corrected version with explanation.",
            "Coding",
            &["debugging", "troubleshooting", "code analysis"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Algorithm Explanation",
            "Explain the [algorithm name] algorithm in simple terms. Include time complexity, use cases, and implementation example.",
            "Coding",
            &["algorithms", "computer science", "education"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "SWOT Analysis",
            "Conduct a SWOT analysis for [company/product]. Provide detailed insights on Strengths, Weaknesses, Opportunities, and Threats with actionable recommendations.",
            "Business",
            &["analysis", "strategy", "planning", "SWOT"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Sales Pitch Script",
            "Create a compelling sales pitch for [product/service] targeting [customer type]. Include opening hook, value proposition, handling objections, and closing techniques.",
            "Business",
            &["sales", "pitch", "script", "persuasion"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Meeting Agenda Template",
            "Create a structured meeting agenda for [meeting type] with [participants]. Include objectives, time allocations, discussion points, and action items.",
            "Business",
            &["meetings", "productivity", "planning", "agenda"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "LinkedIn Post Generator",
            "Write a professional LinkedIn post about [topic/achievement]. Make it engaging, authentic, and include a call-to-action. Target length: 150-200 words.",
            "Business",
            &["LinkedIn", "social media", "professional", "networking"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Competitive Analysis Report",
            "Analyze [number] main competitors of [company/product]. Compare features, pricing, market position, strengths, and weaknesses. Present in a structured format.",
            "Business",
            &["competition", "analysis", "market research", "strategy"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Newsletter Content",
            "Write a newsletter about [topic] for [audience]. Include catchy subject line, 3-4 content sections, and clear CTAs. Keep it under 500 words.",
            "Writing",
            &["newsletter", "email", "content", "marketing"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Case Study Template",
            "Write a case study about [project/success story]. Include challenge, solution, implementation, results with metrics, and key takeaways.",
            "Writing",
            &["case study", "content", "marketing", "storytelling"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Video Script Writer",
            "Write a script for a [length] video about [topic]. Include hook, main content, visuals suggestions, and call-to-action. Specify tone: [formal/casual/humorous].",
            "Writing",
            &["video", "script", "content", "multimedia"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "SEO Meta Descriptions",
            "Write SEO-optimized meta descriptions for [webpage/topic]. Maximum 155 characters, include target keyword [keyword], and compelling call-to-action.",
            "Writing",
            &["SEO", "meta", "optimization", "web content"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Podcast Show Notes",
            "Create detailed show notes for a podcast episode about [topic]. Include timestamps, key takeaways, guest bio, resources mentioned, and relevant links.",
            "Writing",
            &["podcast", "content", "show notes", "media"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Unit Test Generator",
            "Generate comprehensive unit tests for [function/class] in [language]. Include edge cases, error handling, and both positive and negative test scenarios.",
            "Coding",
            &["testing", "unit tests", "quality assurance", "code"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Code Refactoring Assistant",
            "Refactor this [language] code for better readability and performance: [paste code]. Explain each improvement and maintain functionality.",
            "Coding",
            &[
                "refactoring",
                "optimization",
                "clean code",
                "best practices",
            ],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Database Query Optimizer",
            "Optimize this SQL query for better performance: [paste query]. Explain the optimizations and provide execution plan analysis.",
            "Coding",
            &["SQL", "database", "optimization", "performance"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Error Message Explainer",
            "Explain this error message in simple terms: [paste error]. Provide common causes, debugging steps, and solution with code example.",
            "Coding",
            &["debugging", "errors", "troubleshooting", "help"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Design Pattern Implementation",
            "Implement the [pattern name] design pattern in [language] for [use case]. Include explanation, benefits, and complete code example.",
            "Coding",
            &["design patterns", "architecture", "best practices", "OOP"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Story Generator",
            "Write a short story about [character] who discovers [object/situation]. Include dialogue, setting, and plot twist.",
            "Creative",
            &["storytelling", "fiction", "creative writing"],
            &["Claude", "ChatGPT"],
        ),
        sample(
            "Brand Name Ideas",
            "Generate 10 creative brand names for a [business type] that conveys [desired feeling/attribute]. Include brief explanations.",
            "Creative",
            &["branding", "naming", "creative", "business"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Creative Writing Prompt",
            "Create an imaginative writing prompt involving [theme/setting]. Include character suggestions and potential plot directions.",
            "Creative",
            &["writing prompts", "inspiration", "creativity"],
            &["Claude", "ChatGPT"],
        ),
        sample(
            "Poetry Generator",
            "Write a [style] poem about [subject/theme]. Include specific imagery, emotion, and if specified, follow [rhyme scheme/structure].",
            "Creative",
            &["poetry", "creative writing", "artistic", "literature"],
            &["Claude", "ChatGPT"],
        ),
        sample(
            "Character Backstory Creator",
            "Create a detailed backstory for a [character type] in a [genre] story. Include childhood, motivations, fears, relationships, and defining moments.",
            "Creative",
            &[
                "character development",
                "storytelling",
                "fiction",
                "worldbuilding",
            ],
            &["Claude", "ChatGPT", "Gemini"],
        ),
        sample(
            "Slogan Generator",
            "Create 10 catchy slogans for [brand/product] that emphasizes [key benefit/value]. Keep under 8 words each and make them memorable.",
            "Creative",
            &["slogan", "branding", "marketing", "copywriting"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Lesson Plan Creator",
            "Create a detailed lesson plan for teaching [topic] to [age group/level]. Include objectives, activities, materials needed, and assessment methods.",
            "Education",
            &["teaching", "lesson plan", "education", "curriculum"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Study Guide Generator",
            "Create a comprehensive study guide for [subject/topic]. Include key concepts, definitions, examples, practice questions, and memory aids.",
            "Education",
            &["study", "learning", "education", "exam prep"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Complex Concept Simplifier",
            "Explain [complex topic] in simple terms that a [age/knowledge level] can understand. Use analogies and real-world examples.",
            "Education",
            &["explanation", "teaching", "simplification", "learning"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
        sample(
            "Quiz Question Creator",
            "Create [number] quiz questions about [topic] at [difficulty level]. Include multiple choice, true/false, and short answer with answer key.",
            "Education",
            &["quiz", "assessment", "questions", "testing"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Resume Bullet Points",
            "Transform this job responsibility into 3 impressive resume bullet points: [responsibility]. Use action verbs and quantify results where possible.",
            "Personal",
            &["resume", "career", "job search", "professional"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Cover Letter Template",
            "Write a cover letter for [position] at [company type]. Highlight [key skills/experiences] and show enthusiasm for [company aspect].",
            "Personal",
            &["cover letter", "job application", "career", "writing"],
            &["ChatGPT", "Claude"],
        ),
        sample(
            "Daily Journal Prompts",
            "Generate 7 thought-provoking journal prompts for [theme/focus area]. Include mix of reflection, gratitude, and goal-setting questions.",
            "Personal",
            &[
                "journaling",
                "self-reflection",
                "personal growth",
                "mindfulness",
            ],
            &["Claude", "ChatGPT"],
        ),
        sample(
            "Personal Goal Planner",
            "Help me create a SMART goal plan for [objective]. Break it down into weekly milestones, potential obstacles, and success metrics.",
            "Personal",
            &["goals", "planning", "personal development", "productivity"],
            &["ChatGPT", "Claude", "Gemini"],
        ),
    ]
}

/// Id a sample prompt is seeded with, for callers that refer to one by title.
pub fn sample_prompt_id(title: &str) -> Uuid {
    seed_id("prompt", title)
}
