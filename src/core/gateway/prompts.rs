//! The two instruction templates sent to the model.

/// Token budget for a vivid example.
pub const EXAMPLE_MAX_TOKENS: u32 = 2000;
/// Token budget for rewrite feedback.
pub const FEEDBACK_MAX_TOKENS: u32 = 1500;

pub fn vivid_example_prompt(draft: &str) -> String {
    format!(
        r#"You are a creative writing teacher helping young writers (ages 9-12) learn to write vividly.

A student wrote this rough draft or idea:
"""
{draft}
"""

Your job:
1. Rewrite this into EXACTLY 3 vivid, engaging sentences
2. Add sensory details (sight, sound, smell, taste, touch)
3. Add emotional details (feelings, thoughts, reactions)
4. Add setting details (where/when, atmosphere)
5. Add specific action details (precise movements)

IMPORTANT: Return your response as JSON in this exact format:
{{
  "vividText": "The full vivid rewrite as exactly 3 sentences",
  "highlights": [
    {{"text": "exact phrase from vividText", "type": "sensory"}},
    {{"text": "another exact phrase", "type": "emotional"}},
    {{"text": "another phrase", "type": "setting"}},
    {{"text": "another phrase", "type": "action"}}
  ]
}}

Include 4-6 highlights total, spread across all 4 types. The "text" must be EXACT substrings from vividText.
Keep the tone fun and age-appropriate. Make it exciting! Remember: EXACTLY 3 sentences.

Return ONLY the JSON, no other text."#
    )
}

pub fn feedback_prompt(draft: &str, example_text: &str, rewrite: &str) -> String {
    format!(
        r#"You are a friendly, encouraging writing teacher for young writers (ages 9-12).

ORIGINAL ROUGH DRAFT:
"""
{draft}
"""

AI EXAMPLE (what the student studied):
"""
{example_text}
"""

STUDENT'S OWN REWRITE:
"""
{rewrite}
"""

Analyze the student's rewrite. IMPORTANT: The student is SUPPOSED to write about the same story/scene - that's the assignment!

Only mark as "too similar" if they COPIED exact phrases word-for-word from the AI example. Using the same plot, characters, or story events is FINE and expected. We want them to tell the SAME story in THEIR OWN WORDS.

Examples of GOOD (not too similar):
- AI says "heart pounding like a drum" → Student says "heart pounding so fast" ✓ GOOD
- AI says "darted around the corner" → Student says "zoomed towards" ✓ GOOD
- AI says "trembling hand" → Student says "slammed his hand down" ✓ GOOD
- Using their own slang like "sus" instead of "suspicious" ✓ GREAT!

Examples of ACTUAL copying (too similar):
- Student uses "fingers flew across the glowing tablet" exactly
- Student copies whole sentences word-for-word

Return JSON:
{{
  "similarityScore": <0-100, only high if they copied exact phrases>,
  "vividnessScore": <0-100, how vivid their writing is>,
  "overallRating": "<'amazing' | 'great' | 'good' | 'needs_work' | 'too_similar'>",
  "isTooSimilar": <true ONLY if they copied exact phrases, NOT for same story>,
  "sensoryDetails": ["list", "of", "sensory", "details", "they", "used"],
  "emotionalDetails": ["list", "of", "emotional", "details"],
  "settingDetails": ["list", "of", "setting", "details"],
  "actionDetails": ["list", "of", "action", "details"],
  "praise": "A specific, encouraging comment about what they did well - notice their unique word choices! (1-2 sentences)",
  "suggestion": "One friendly suggestion to make it even better (1-2 sentences)",
  "encouragement": "A fun, motivating closing message (1 sentence)"
}}

Be encouraging! If they rewrote it in their own words (even if the story is the same), that's SUCCESS!
Return ONLY JSON."#
    )
}
