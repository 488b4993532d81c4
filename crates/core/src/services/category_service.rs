use crate::models::category::ResolvedCategory;

/// Label used for missing or blank categories.
pub const OTHER_CATEGORY: &str = "Other";

/// Neutral gray used for [`OTHER_CATEGORY`].
pub const NEUTRAL_COLOR: &str = "#9CA3AF";

/// Normalized raw key → (display name, color).
const CATEGORY_TABLE: &[(&str, &str, &str)] = &[
    ("FOOD_AND_DRINK", "Food & Drink", "#FF6B6B"),
    ("GROCERIES", "Groceries", "#4CAF50"),
    ("TRANSPORTATION", "Transportation", "#42A5F5"),
    ("TRAVEL", "Travel", "#26C6DA"),
    ("GENERAL_MERCHANDISE", "Shopping", "#AB47BC"),
    ("SHOPPING", "Shopping", "#AB47BC"),
    ("ENTERTAINMENT", "Entertainment", "#FFA726"),
    ("RENT_AND_UTILITIES", "Bills & Utilities", "#78909C"),
    ("UTILITIES", "Bills & Utilities", "#78909C"),
    ("SUBSCRIPTIONS", "Subscriptions", "#FFCA28"),
    ("MEDICAL", "Healthcare", "#EF5350"),
    ("PERSONAL_CARE", "Personal Care", "#EC407A"),
    ("GENERAL_SERVICES", "Services", "#8D6E63"),
    ("HOME_IMPROVEMENT", "Home", "#8BC34A"),
    ("LOAN_PAYMENTS", "Loan Payments", "#5C6BC0"),
    ("BANK_FEES", "Fees", "#BDBDBD"),
    ("INCOME", "Income", "#66BB6A"),
    ("TRANSFER_IN", "Transfer In", "#29B6F6"),
    ("TRANSFER_OUT", "Transfer Out", "#7E57C2"),
    ("GOVERNMENT_AND_NON_PROFIT", "Government & Nonprofit", "#A1887F"),
    ("OTHER", OTHER_CATEGORY, NEUTRAL_COLOR),
];

/// Colors handed out to categories missing from the table.
const FALLBACK_PALETTE: &[&str] = &[
    "#F87171", "#FB923C", "#FBBF24", "#A3E635", "#34D399", "#22D3EE",
    "#60A5FA", "#818CF8", "#C084FC", "#F472B6", "#2DD4BF", "#FACC15",
];

/// Resolves raw category strings into display names and colors.
///
/// Stateless and deterministic: the same input always resolves to the same
/// name and color, in every session and on every screen.
pub struct CategoryService;

impl CategoryService {
    pub fn new() -> Self {
        Self
    }

    /// Resolve a raw category (`"FOOD_AND_DRINK"`, `"coffee shops"`, ...).
    pub fn resolve(&self, raw_category: Option<&str>) -> ResolvedCategory {
        let words = split_words(raw_category.unwrap_or(""));
        if words.is_empty() {
            return ResolvedCategory::new(OTHER_CATEGORY, NEUTRAL_COLOR);
        }

        let key = normalized_key(&words);

        // Display names resolve like their raw keys ("Food & Drink" == FOOD_AND_DRINK).
        if let Some((_, name, color)) = CATEGORY_TABLE
            .iter()
            .find(|(k, name, _)| *k == key || normalized_key(&split_words(name)) == key)
        {
            return ResolvedCategory::new(*name, *color);
        }

        let display_name = words
            .iter()
            .map(|w| title_case(w))
            .collect::<Vec<_>>()
            .join(" ");
        ResolvedCategory::new(display_name, palette_color(&key))
    }

    /// Display name only.
    pub fn display_name(&self, raw_category: Option<&str>) -> String {
        self.resolve(raw_category).display_name
    }
}

impl Default for CategoryService {
    fn default() -> Self {
        Self::new()
    }
}

fn split_words(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Uppercase words joined by `_`, with `&` read as `AND`.
fn normalized_key(words: &[&str]) -> String {
    words
        .iter()
        .map(|w| if *w == "&" { "AND".to_string() } else { w.to_uppercase() })
        .collect::<Vec<_>>()
        .join("_")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `hash * 31 + byte` over the normalized key, wrapping at 32 bits.
fn palette_color(key: &str) -> &'static str {
    let hash = key
        .bytes()
        .fold(0u32, |h, b| h.wrapping_mul(31).wrapping_add(u32::from(b)));
    FALLBACK_PALETTE[hash as usize % FALLBACK_PALETTE.len()]
}
