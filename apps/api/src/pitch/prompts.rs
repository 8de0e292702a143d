// Prompt constants for pitch generation.

/// Pitch prompt. Replace `{restaurant_context}`, `{cheese_context}`, and
/// `{persona_instruction}` before sending. The model must answer with
/// JSON matching `PitchContent`.
pub const PITCH_PROMPT_TEMPLATE: &str = r#"You are a sales assistant helping a rep from Happy Pastures Creamery sell artisan cheese to restaurants.

RESTAURANT PROFILE:
{restaurant_context}

CHEESE PRODUCT TO PITCH:
{cheese_context}

Generate a compelling, concise sales pitch for this restaurant. The pitch should:

1. **Opening Hook** (1-2 sentences): Why this cheese is perfect for THIS specific restaurant
2. **3-4 Specific Menu Pairings**: Real dishes from their reviews/menu that would work beautifully with this cheese
3. **Key Selling Points** (2-3 bullets): What makes this cheese special (local, sustainable, small-batch, etc.)
4. **Competitive Advantage**: Why artisan > generic cheese for their menu
5. **Call to Action**: Simple next step (sample order, tasting, etc.)

Keep it focused on THEIR menu and THEIR customers. {persona_instruction}

Format as JSON:
{
  "opening_hook": "...",
  "menu_pairings": [
    {"dish": "...", "why_it_works": "..."},
    ...
  ],
  "selling_points": ["...", "...", "..."],
  "competitive_advantage": "...",
  "call_to_action": "..."
}"#;
