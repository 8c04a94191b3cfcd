//! Canonical column names. Every feature of the explorer is a capability
//! keyed on the presence of one or more of these columns; predicates and
//! summaries check the loaded header against these constants instead of
//! scattering string literals.

/// Multi-valued role tags, comma-separated within a cell.
pub const CLEANED_ROLES: &str = "cleaned_roles";
/// Industry label inferred upstream.
pub const GPT_INDUSTRY: &str = "gpt_industry";
/// Canonical location column.
pub const LOCATION_CLEAN: &str = "location_clean";
/// Legacy alias for [`LOCATION_CLEAN`], renamed on load.
pub const AGGREGATED_LOCATION: &str = "Aggregated Location";
pub const STATE: &str = "state";
pub const CITY: &str = "city";
/// Audience size estimate per record.
pub const POOL_SIZE: &str = "pool_size";
/// Raw URL column, replaced by [`PC_LINK`] during projection.
pub const PC_URL: &str = "PC URL";
pub const PC_LINK: &str = "PC Link";
pub const PRIMARY_ROLE: &str = "primary_role";
/// Dropped from the displayed/exported set.
pub const INDUSTRIES_CLEAN: &str = "industries_clean";
