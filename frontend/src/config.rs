use log::Level;

/// localStorage key holding the JSON array of leads, newest first.
pub const LEADS_STORAGE_KEY: &str = "easydecor_leads";

/// Type tag on the message posted to an embedding parent window.
pub const LEAD_MESSAGE_TYPE: &str = "EASYDECOR_LEAD";

/// Simulated network latency between submit and the thank-you panel.
pub const SUBMIT_DELAY_MS: u32 = 1_000;
pub const SUCCESS_DISPLAY_MS: u32 = 5_000;
pub const PAGE_LOAD_MS: u32 = 4_000;
pub const TESTIMONIAL_ROTATE_MS: u32 = 5_000;

pub const CONTACT_PHONE: &str = "+918777654651";
pub const CONTACT_PHONE_DISPLAY: &str = "+91 8777 654 651";
pub const CONTACT_EMAIL: &str = "hello@easydecorstudio.com";
pub const WEBSITE_URL: &str = "https://easydecorstudio.com";
pub const STUDIO_ADDRESS: &[&str] = &[
    "Unit No - 324, PS Abacus",
    "Diplomatic Enclave, Action Area -IIE",
    "Newtown, Kolkata - 700161",
];

/// Whether the hidden admin surfaces can be opened from the keyboard.
///
/// This is obscurity, not security. There is no credential check: anyone who
/// learns the shortcuts gets full read, delete and export access to every lead
/// stored in this browser. Build with `--no-default-features` to compile the
/// admin surfaces out of the listener entirely.
pub const ADMIN_SHORTCUTS_ENABLED: bool = cfg!(feature = "admin-shortcuts");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
