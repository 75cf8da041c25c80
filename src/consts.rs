//! Shared names and defaults.
//!
//! Class and attribute names form the contract with the storefront stylesheet;
//! changing one here requires the matching CSS change.

// --- Theme ---

/// `localStorage` key holding `"dark"` or `"light"`.
pub const THEME_STORAGE_KEY: &str = "gb_theme";
/// Attribute on `<html>` carrying the active theme name.
pub const THEME_ATTR: &str = "data-theme";
pub const LOGO_DARK_ATTR: &str = "data-logo-dark";
pub const LOGO_LIGHT_ATTR: &str = "data-logo-light";

// --- Layout ---

pub const HEADER_HEIGHT_PROP: &str = "--header-h";
pub const BREADCRUMBS_HEIGHT_PROP: &str = "--breadcrumbs-h";
/// Delay before the first layout sync, long enough for web fonts to settle.
pub const INITIAL_SYNC_DELAY_MS: u32 = 50;

// --- Search overlay ---

pub const OVERLAY_OPEN_CLASS: &str = "is-open";
pub const BODY_LOCK_CLASS: &str = "is-locked";
pub const ESCAPE_KEY: &str = "Escape";

// --- Newsletter ---

pub const FIELD_ERROR_CLASS: &str = "is-error";
pub const FIELD_SUCCESS_CLASS: &str = "is-success";
pub const INVALID_EMAIL_MESSAGE: &str = "Correo inválido. Ejemplo: hola@dominio.com";
pub const SUBSCRIBED_MESSAGE: &str = "¡Gracias! Revisa tu correo para confirmar (si aplica).";

// --- Reveal on scroll ---

pub const REVEALED_CLASS: &str = "is-visible";
/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
/// Shrinks the viewport bottom so elements reveal slightly before the edge.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// --- FAQ ---

pub const FAQ_PANEL_CLASS: &str = "faq__panel";
pub const FAQ_ICON_OPEN: &str = "\u{2212}";
pub const FAQ_ICON_CLOSED: &str = "+";

// --- Cart badge ---

pub const CART_BADGE_SHOW_CLASS: &str = "show";

// --- ARIA ---

pub const ARIA_CHECKED: &str = "aria-checked";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_HIDDEN: &str = "aria-hidden";
pub const ARIA_INVALID: &str = "aria-invalid";

/// Id of the optional `<script type="application/json">` config override.
pub const CONFIG_SCRIPT_ID: &str = "gb-ui-config";
