use std::fmt;

/// Specific heat ratio `γ`.
pub const GAMMA: Symbol = Symbol::new("gamma");

/// Mach number `M`.
pub const MACH: Symbol = Symbol::new("M");

/// A named symbolic variable.
///
/// Symbols compare by name, so two `Symbol::new("x")` values are the same
/// variable. They are `Copy` and carry no other state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    name: &'static str,
}

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the symbol's name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        self.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Returns the process-wide specific heat ratio symbol.
#[must_use]
pub const fn gamma_symbol() -> Symbol {
    GAMMA
}

/// Returns the process-wide Mach number symbol.
#[must_use]
pub const fn mach_symbol() -> Symbol {
    MACH
}
