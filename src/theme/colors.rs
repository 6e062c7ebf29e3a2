//! Color constants for the portfolio palette.
//!
//! Dark slate surfaces with a purple-to-blue accent gradient.

#![allow(dead_code)]

// === SURFACES ===
pub const SLATE_DEEP: &str = "#0f172a";
pub const SLATE_PANEL: &str = "#1e293b";
pub const SLATE_BORDER: &str = "#334155";

// === ACCENT GRADIENT ===
pub const ACCENT_PURPLE: &str = "#a855f7";
pub const ACCENT_BLUE: &str = "#2563eb";
pub const ACCENT_GLOW: &str = "rgba(168, 85, 247, 0.35)";

// === TEXT ===
pub const TEXT_PRIMARY: &str = "#f1f5f9";
pub const TEXT_SECONDARY: &str = "rgba(241, 245, 249, 0.7)";
pub const TEXT_MUTED: &str = "rgba(241, 245, 249, 0.5)";

// === SEMANTIC ===
pub const SUCCESS: &str = "#4ade80";
pub const DANGER: &str = "#ef4444";
pub const INFO: &str = "#60a5fa";
