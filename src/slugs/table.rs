// SPDX-License-Identifier: PMPL-1.0-or-later

//! Built-in slug table for the directory.
//!
//! Hand-maintained content, embedded as static pairs and indexed once on
//! first use. English slugs are kebab-case; Hebrew slugs join words with
//! hyphens.
//!
//! ## Adding a slug
//!
//! 1. Append the `(english, hebrew)` pair to the matching table below
//! 2. Keep the Hebrew side unique within the table, or reverse lookups for
//!    the later entry will resolve to the earlier English key
//! 3. Run `bilingual-routes check` to confirm the table is still clean

use super::SlugMap;
use crate::types::Partition;
use once_cell::sync::Lazy;

pub(super) static BUILTIN: Lazy<SlugMap> = Lazy::new(|| {
    SlugMap::new()
        .with_partition(Partition::Categories, CATEGORIES.iter().copied())
        .with_partition(Partition::Subcategories, SUBCATEGORIES.iter().copied())
        .with_partition(Partition::Businesses, BUSINESSES.iter().copied())
        .with_partition(Partition::Routes, ROUTES.iter().copied())
});

// ─── Top-level categories ───────────────────────────────────────────

const CATEGORIES: &[(&str, &str)] = &[
    ("food-drink", "אוכל-ושתייה"),
    ("shops-retail", "חנויות-וקמעונאות"),
    ("health-wellness", "בריאות-ורווחה"),
    ("beauty-care", "יופי-וטיפוח"),
    ("home-garden", "בית-וגן"),
    ("professional-services", "שירותים-מקצועיים"),
    ("education-learning", "חינוך-ולמידה"),
    ("arts-entertainment", "אמנות-ובידור"),
    ("sports-fitness", "ספורט-וכושר"),
    ("automotive", "רכב"),
    ("tourism-lodging", "תיירות-ולינה"),
    ("community-organizations", "קהילה-וארגונים"),
    ("technology-electronics", "טכנולוגיה-ואלקטרוניקה"),
    ("kids-family", "ילדים-ומשפחה"),
];

// ─── Subcategories ──────────────────────────────────────────────────

const SUBCATEGORIES: &[(&str, &str)] = &[
    // Food & drink
    ("restaurants", "מסעדות"),
    ("cafes", "בתי-קפה"),
    ("bakeries", "מאפיות"),
    ("bars-pubs", "ברים-ופאבים"),
    ("fast-food", "מזון-מהיר"),
    ("catering", "קייטרינג"),
    // Shops & retail
    ("clothing", "ביגוד"),
    ("supermarkets", "סופרמרקטים"),
    ("gifts", "מתנות"),
    ("bookstores", "חנויות-ספרים"),
    // Health & beauty
    ("pharmacies", "בתי-מרקחת"),
    ("clinics", "מרפאות"),
    ("hair-salons", "מספרות"),
    ("cosmetics", "קוסמטיקה"),
    // Home & services
    ("furniture", "רהיטים"),
    ("plumbers", "אינסטלטורים"),
    ("electricians", "חשמלאים"),
    ("lawyers", "עורכי-דין"),
    ("accountants", "רואי-חשבון"),
    // Leisure
    ("tutoring", "שיעורים-פרטיים"),
    ("gyms", "חדרי-כושר"),
    ("garages", "מוסכים"),
    ("hotels", "מלונות"),
    ("zimmers", "צימרים"),
];

// ─── Featured businesses ────────────────────────────────────────────

const BUSINESSES: &[(&str, &str)] = &[
    ("cafe-hagefen", "קפה-הגפן"),
    ("pizza-napoli", "פיצה-נאפולי"),
    ("shalom-bakery", "מאפיית-שלום"),
    ("green-garden-nursery", "משתלת-הגן-הירוק"),
];

// ─── Named routes ───────────────────────────────────────────────────

const ROUTES: &[(&str, &str)] = &[
    ("explore", "עיון"),
    ("add-business", "הוסף-עסק"),
    ("deals", "מבצעים"),
    ("marketplace", "לוח-מודעות"),
    ("events", "אירועים"),
    ("help", "עזרה"),
    ("about", "אודות"),
    ("contact", "צור-קשר"),
    ("search", "חיפוש"),
    ("favorites", "מועדפים"),
    ("profile", "פרופיל"),
    ("login", "התחברות"),
    ("register", "הרשמה"),
    ("privacy", "פרטיות"),
    ("terms", "תנאי-שימוש"),
];
