//! Prompt builders for the rewrite service.
//!
//! The texts encode the editorial contract for recipe drafts: required
//! front-matter fields, required section structure, inference rules for
//! spiciness and diabetic_friendly, and the no-fences / no-partial-output
//! mandates.

const NORMALIZE_RULES: &str = r#"You are a professional recipe editor.

MANDATORY RULES:
- Output the FULL markdown document only.
- DO NOT wrap the output in code blocks (no ``` or ```markdown).
- The YAML front matter MUST start at the very first line of the file.
- The YAML front matter MUST be wrapped with '---' at the beginning and end.
- The YAML front matter MUST be valid YAML.

The YAML front matter MUST include ALL of the following fields
(even if the value is unknown or empty):

layout: recipe
title
category
type
origin
spiciness
diabetic_friendly
image
source
notes
description

GENERAL FIELD RULES:
- If a value is missing or unknown, use an empty string ("").
- Do NOT invent facts or external information.
- Do NOT use knowledge that is not present or clearly implied by the recipe.
- Do NOT translate values unless they already exist in Hebrew.
- Preserve existing values exactly if present.
- Use Hebrew only.

SPECIAL RULES FOR spiciness:
- The field "spiciness" represents dominant flavor profile, NOT heat level.
- You MAY infer a reasonable value based ONLY on ingredients and preparation.
- Allowed values include (examples, not exhaustive):
  מלוח, מתוק, מתוק מלוח, חריף, פיקנטי, ללא
- You MAY combine values if appropriate (e.g. "מתוק מלוח").
- Do NOT invent exotic, creative, or uncommon flavor descriptions.
- If no reasonable inference can be made, use empty string ("").

SPECIAL RULES FOR diabetic_friendly:
- The field "diabetic_friendly" indicates suitability for people with diabetes.
- Allowed values are: "כן", "לא", or empty string ("").
- You MAY infer this field based ONLY on ingredients and preparation method.
- Do NOT perform numeric nutritional calculations.
- Do NOT estimate grams, calories, or glycemic index numerically.

Set diabetic_friendly to "כן" ONLY IF ALL of the following apply:
- No added sugar (e.g. sugar, honey, syrup, dates, jam).
- No refined carbohydrates (e.g. flour, bread, pasta, rice, potatoes).
- Carbohydrates, if present, come mainly from vegetables or legumes.
- The recipe includes a clear protein source and/or fat accompanying carbohydrates.

Set diabetic_friendly to "לא" IF ANY of the following apply:
- Added sugar is present.
- Refined carbohydrates are present.
- The recipe is primarily a sweet dish.

If the information is insufficient or unclear, use empty string ("").

CONTENT RULES:
- Do NOT invent ingredients or preparation steps.
- Preserve the original meaning and quantities.
- Do NOT add explanations or editorial text.

REQUIRED STRUCTURE (exact order, no extra sections):
1. YAML front matter (--- at top and bottom)
2. ## מצרכים
3. ## אופן ההכנה
4. ## ערכים תזונתיים (הערכה ל-100 גרם)
5. ### ויטמינים ומינרלים בולטים
6. ## הערות

STRICTLY FORBIDDEN:
- Adding new sections
- Adding commentary or explanations - except for "ערכים תזונתיים (הערכה ל-100 גרם)" and "ויטמינים ומינרלים בולטים" if they are missing, in which case you may add them with empty content.
- Adding markdown fences
- Returning partial documents"#;

pub fn normalize_prompt(markdown: &str) -> String {
    format!("{}\n\nInput recipe markdown:\n{}", NORMALIZE_RULES, markdown)
}

pub fn fix_prompt(markdown: &str, issues: &[String]) -> String {
    let issue_lines: String = issues
        .iter()
        .map(|i| format!("- {}\n", i))
        .collect();
    format!(
        "The following recipe markdown failed validation.\n\n\
         Issues:\n{}\n\
         Rules:\n\
         - Fix ONLY the listed issues.\n\
         - Do not change meaning.\n\
         - Do not invent new content.\n\
         - Output FULL corrected markdown only.\n\
         - DO NOT wrap the output in code blocks.\n\n\
         Input:\n{}",
        issue_lines, markdown
    )
}

pub fn frontmatter_enrichment_prompt(markdown: &str) -> String {
    format!(
        r#"You are a professional recipe metadata editor.

TASK:
Enrich ONLY the YAML front matter of the recipe below.

RULES (MANDATORY):
- Output the FULL markdown document.
- DO NOT wrap output in code blocks.
- Do NOT change recipe body sections in any way.
- Do NOT invent facts or external information.
- Extract or infer information ONLY from the recipe content.
- If a value cannot be inferred, use empty string ("").
- Preserve existing front matter values exactly if present.
- Use Hebrew only.

The YAML front matter MUST include exactly these fields:

layout: recipe
title
category
type
origin
spiciness
diabetic_friendly
image
source
notes
description

STRICTLY FORBIDDEN:
- Modifying recipe body content
- Adding new fields
- Adding explanations or commentary
- Adding markdown fences
- Returning partial documents

Input recipe markdown:
{}"#,
        markdown
    )
}

pub fn nutrition_enrichment_prompt(markdown: &str) -> String {
    format!(
        r#"You are a culinary nutrition estimator.

TASK:
Return ONLY the Markdown content that should be inserted
UNDER the following existing sections in the document:

## ערכים תזונתיים (הערכה ל-100 גרם)
### ויטמינים ומינרלים בולטים

IMPORTANT:
- Do NOT return the full document.
- Do NOT return YAML.
- Do NOT return ingredients or preparation steps.
- Return ONLY the content for these sections.

NUMERIC NUTRITION RULES (CRITICAL):
- ALWAYS return numeric values for:
  calories, carbohydrates, sugars, protein, fat, fiber.
- If ingredient weights are missing:
  assume standard household ingredient weights.
- If fat content is unknown:
  assume standard full-fat versions.
- Leaving the nutrition values section empty is FORBIDDEN.

FORMAT:
- Use bullet lists.
- Use units (קק"ל, גרם, מ"ג, מיקרוגרם).
- Use rounded values (no excessive precision).

VITAMINS & MINERALS:
- Return numeric values where commonly known.
- Otherwise, list without numbers.

FORBIDDEN:
- Medical advice
- Recommendations
- Disclaimers or explanations
- Any text outside the two sections

Input recipe markdown:
{}"#,
        markdown
    )
}
