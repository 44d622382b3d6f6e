//! Card palette.
//!
//! Gold on ink, matching the exported card document.

// === GOLD (Border, headings, primary actions) ===
pub const GOLD: &str = "#d4af37";
pub const GOLD_LIGHT: &str = "#f1d67a";
pub const GOLD_GLOW: &str = "rgba(212, 175, 55, 0.35)";

// === INK (Backgrounds) ===
pub const INK: &str = "#0d0d0d";
pub const INK_RAISED: &str = "#1a1a1a";
pub const INK_BORDER: &str = "#2a2a2a";

// === TEXT ===
pub const IVORY: &str = "#f5f0e1";
pub const TEXT_MUTED: &str = "rgba(245, 240, 225, 0.6)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#3fa66b";
pub const INFO: &str = "#4a7bd0";
pub const DANGER: &str = "#d64545";
pub const WHATSAPP: &str = "#25d366";

// === QR CODE ===
// Dark on white for reliable scanning; the gold frame is drawn around it.
pub const QR_DARK: &str = "#111111";
pub const QR_LIGHT: &str = "#ffffff";

/// `(css variable name, value)` pairs exposed to the stylesheet.
pub const CSS_VARIABLES: &[(&str, &str)] = &[
    ("--gold", GOLD),
    ("--gold-light", GOLD_LIGHT),
    ("--gold-glow", GOLD_GLOW),
    ("--ink", INK),
    ("--ink-raised", INK_RAISED),
    ("--ink-border", INK_BORDER),
    ("--ivory", IVORY),
    ("--text-muted", TEXT_MUTED),
    ("--success", SUCCESS),
    ("--info", INFO),
    ("--danger", DANGER),
    ("--whatsapp", WHATSAPP),
];
