//! Style-keyed prompt templates for the image generation provider.
//!
//! One fixed template per style, describing a single image containing a 3x3
//! grid of nine distinct expressions. The style is resolved through the
//! [`Style`](crate::Style) enum, so an unrecognized style never reaches this
//! module; there is no fallback template.

use crate::Style;

const CUTE_TEMPLATE: &str = "Create ONE single image containing a 3x3 grid of 9 emoji expressions of this pet. The image should show the SAME pet with 9 different cute expressions arranged in a grid: Row 1: Happy tongue out, Winking, Thinking with paw. Row 2: Surprised wide eyes, Sleeping peacefully, Laughing joyfully. Row 3: Shy/blushing, Acting cool, Blowing kiss. CRITICAL: Generate ONE image file with all 9 expressions in a grid layout, pure white/light background, consistent pet appearance, professional quality like popular pet emoji packs.";

const FUNNY_TEMPLATE: &str = "Create ONE single image containing a 3x3 grid of 9 meme expressions of this pet. The image should show the SAME pet with 9 different funny expressions arranged in a grid: Row 1: Tongue sideways, Cross-eyed silly, Big yawn. Row 2: Shocked face, Smirking, Confused head tilt. Row 3: Laughing hard, Duck face, Side-eye judging. CRITICAL: Generate ONE image file with all 9 expressions in a grid layout, pure white/light background, consistent pet appearance, meme-worthy quality.";

const ANGRY_TEMPLATE: &str = "Create ONE single image containing a 3x3 grid of 9 grumpy expressions of this pet. The image should show the SAME pet with 9 different angry expressions arranged in a grid: Row 1: Deep frown, Showing teeth, Suspicious squint. Row 2: Pouting, Eye roll, Puffed cheeks. Row 3: Intense glare, Looking away annoyed, Defensive posture. CRITICAL: Generate ONE image file with all 9 expressions in a grid layout, pure white/light background, consistent pet appearance, dramatic but safe.";

const HAPPY_TEMPLATE: &str = "Create ONE single image containing a 3x3 grid of 9 joyful expressions of this pet. The image should show the SAME pet with 9 different happy expressions arranged in a grid: Row 1: Big smile, Laughing eyes closed, Heart eyes. Row 2: Happy panting, Excited sparkly eyes, Content smile. Row 3: Playful head tilt, Waving paw, Jumping for joy. CRITICAL: Generate ONE image file with all 9 expressions in a grid layout, pure white/light background, consistent pet appearance, bright positive energy.";

const ADDITIONAL_REQUIREMENTS: &str = "\n\nAdditional critical requirements:\n- Output must be ONE SINGLE IMAGE containing all 9 expressions\n- Arrange as a 3x3 grid with clear separation between each expression\n- Each cell shows the SAME pet with consistent fur color/pattern\n- Background must be PURE WHITE or very light solid color\n- Show only head and partial upper body in each cell\n- Professional photography quality, natural pet expressions\n- Consistent lighting and angle across all cells\n- High resolution (at least 1024x1024) suitable for emoji/sticker use\n- Similar to popular pet emoji packs but as one unified image";

/// The base grid-description template for a style.
pub fn template(style: Style) -> &'static str {
    match style {
        Style::Cute => CUTE_TEMPLATE,
        Style::Funny => FUNNY_TEMPLATE,
        Style::Angry => ANGRY_TEMPLATE,
        Style::Happy => HAPPY_TEMPLATE,
    }
}

/// Assemble the full provider prompt for a style and optional pet type.
///
/// The pet type, when present, prefixes the template so the model knows what
/// animal it is looking at. The fixed additional-requirements block is always
/// appended.
///
/// # Examples
///
/// ```
/// use petmoji_core::{prompt, Style};
///
/// let p = prompt::build_prompt(Style::Happy, Some("corgi"));
/// assert!(p.starts_with("This is a corgi. "));
/// assert!(p.contains("3x3 grid"));
/// ```
pub fn build_prompt(style: Style, pet_type: Option<&str>) -> String {
    let prefix = match pet_type {
        Some(pet) => format!("This is a {}. ", pet),
        None => String::new(),
    };
    format!("{}{}{}", prefix, template(style), ADDITIONAL_REQUIREMENTS)
}
