//! Operation metadata and execution traits
//!
//! Every command is a plain struct whose fields are its parameters. It describes
//! itself through [`Operation`] and runs through [`Execute`].

use serde_json::Value;

pub use async_trait::async_trait;

/// Static description of a command
pub trait Operation {
    /// Action word, e.g. "move"
    fn verb(&self) -> &'static str;

    /// Target entity, e.g. "task"
    fn noun(&self) -> &'static str;

    /// One-line help text
    fn description(&self) -> &'static str;

    /// Whether running the command can change persisted state.
    /// Mutating commands are recorded in the activity log.
    fn mutates(&self) -> bool {
        true
    }

    /// Canonical op string (e.g., "add task")
    fn op_string(&self) -> String {
        format!("{} {}", self.verb(), self.noun())
    }
}

/// Run a command against a context
#[async_trait]
pub trait Execute<C: Sync, E>: Operation + Send + Sync {
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}

/// Implement [`Operation`] for a command struct
macro_rules! impl_operation {
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal) => {
        impl_operation!($ty, verb = $verb, noun = $noun, description = $desc, mutates = true);
    };
    ($ty:ty, verb = $verb:literal, noun = $noun:literal, description = $desc:literal, mutates = $mutates:literal) => {
        impl $crate::operation::Operation for $ty {
            fn verb(&self) -> &'static str {
                $verb
            }

            fn noun(&self) -> &'static str {
                $noun
            }

            fn description(&self) -> &'static str {
                $desc
            }

            fn mutates(&self) -> bool {
                $mutates
            }
        }
    };
}

pub(crate) use impl_operation;

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe;
    impl_operation!(Probe, verb = "probe", noun = "thing", description = "Probe a thing", mutates = false);

    struct Poke;
    impl_operation!(Poke, verb = "poke", noun = "thing", description = "Poke a thing");

    #[test]
    fn test_operation_metadata() {
        assert_eq!(Probe.op_string(), "probe thing");
        assert_eq!(Probe.description(), "Probe a thing");
        assert!(!Probe.mutates());
        assert!(Poke.mutates());
    }
}
