//! Macros for ergonomic configuration literals.

/// Build a [`Configuration`](crate::core::Configuration) from a literal
/// description.
///
/// # Example
///
/// ```
/// use fsm_engine::fsm_config;
///
/// let config = fsm_config! {
///     initial: "idle",
///     "idle" => { "start" => "running" },
///     "running" => { "stop" => "idle", "fail" => "error" },
///     "error" => {},
/// };
///
/// assert_eq!(config.initial(), "idle");
/// assert_eq!(config.states().len(), 3);
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:expr
        $(, $state:expr => { $($event:expr => $target:expr),* $(,)? })*
        $(,)?
    ) => {{
        let config = $crate::core::Configuration::new($initial);
        $(
            let config = config.with_state(
                $state,
                $crate::core::StateDefinition::new()$(.on($event, $target))*,
            );
        )*
        config
    }};
}
