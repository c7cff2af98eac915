// Format module - Pure formatting helpers shared by the view model
pub mod activity;
pub mod security;

pub use activity::{activation_count, active_variant, score_label, segment_classes};
pub use security::{format_security, meter_offset, security_text, SecurityBadge, SecurityTier};
