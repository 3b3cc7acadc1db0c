//! Scenario-name normalization helpers.

/// Strip parameterization suffixes from a scenario name.
///
/// Scenarios are matched by name with no arguments, so names produced by
/// parameterized runs are reduced to their base form before lookup: a
/// trailing bracketed index (`lookup_address[0]`) and anything from a `:`
/// separator onward (`lookup_address: with defaults`) are removed.
///
/// # Examples
///
/// ```
/// use chronicle::naming::base_scenario_name;
///
/// assert_eq!(base_scenario_name("should_login"), "should_login");
/// assert_eq!(base_scenario_name("lookup_address[0]"), "lookup_address");
/// assert_eq!(base_scenario_name("lookup_address: with defaults"), "lookup_address");
/// ```
pub fn base_scenario_name(name: &str) -> &str {
    let name = match name.find(':') {
        Some(index) => &name[..index],
        None => name,
    };
    let name = match name.find('[') {
        Some(index) => &name[..index],
        None => name,
    };
    name.trim()
}
