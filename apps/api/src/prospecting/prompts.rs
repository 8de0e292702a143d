// Prompt constants for batch prospect classification.

/// Batch classification prompt. Replace `{restaurants}` with one
/// numbered "name - Categories: ..." line per candidate before sending.
/// One unified rule description is used for every target segment.
pub const BATCH_CLASSIFY_PROMPT_TEMPLATE: &str = r#"Our rep sells premium artisan cheeses ($30-50/lb) and needs high-quality restaurant prospects.

CRITICAL: Cheese/dairy does NOT pair well with Asian cuisines. We must filter out ALL Asian restaurants.

Restaurants to evaluate:
{restaurants}

KEEP if restaurant is:
- Fine dining: French (Bistro, Brasserie), Italian (Trattoria, Osteria), European
- Upscale steakhouses, upscale seafood
- Quality casual: tapas bars, upscale cafes with a real food menu
- Chef-driven, creative menus, would use artisan ingredients
- Mediterranean, Middle Eastern (if cheese-friendly)
- Likely $20+ entrees, quality-focused

EXCLUDE if:
- No name or "Unknown" - cannot prospect without a proper restaurant name
- Fast food or chains (IHOP, Applebee's, Chipotle, Olive Garden, etc.)
- Obvious casual: diners, "grill", "kitchen", "eats", taverns, sports bars
- Pizza places (unless upscale wood-fired)
- ANY Asian cuisine: Chinese, Japanese, Thai, Korean, Vietnamese, Indian, Malaysian, Indonesian, Filipino
- Asian restaurants (even if upscale): sushi, ramen, pho, curry, dim sum, hibachi, izakaya, yakitori
- Mexican fast-casual (burrito, taco shops)
- Coffee shops (unless clearly upscale cafe with food menu)
- Delis, bagel shops, sandwich shops

IMPORTANT: Be very strict with Asian cuisine. Even if it looks upscale, if the name sounds Asian or the cuisine is Asian, EXCLUDE it. Cheese does not pair well with Asian food.

When in doubt: would this restaurant appreciate and USE a $40/lb artisan cheese in their dishes? If yes, KEEP. If no or unsure, EXCLUDE.

For each number: "1. KEEP" or "1. EXCLUDE". One per line."#;
