// Pattern 2: Bridge
// Splits a type into an abstraction side and an implementation side joined by
// a held reference, so either side can vary on its own.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DemoError;

// ============================================================================
// Implementation side
// ============================================================================

/// Primitive operations each platform provides.
pub trait Implementation {
    fn operation_implementation(&self) -> String;
}

pub struct ConcreteImplementationA;

impl Implementation for ConcreteImplementationA {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationA: Here's the result on the platform A.".to_string()
    }
}

pub struct ConcreteImplementationB;

impl Implementation for ConcreteImplementationB {
    fn operation_implementation(&self) -> String {
        "ConcreteImplementationB: Here's the result on the platform B.".to_string()
    }
}

// ============================================================================
// Abstraction side
// ============================================================================

/// The higher-level operation client code calls.
pub trait Operation {
    fn operation(&self) -> String;
}

/// Owns its implementation for its whole lifetime.
pub struct Abstraction {
    implementation: Box<dyn Implementation>,
}

impl Abstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Operation for Abstraction {
    fn operation(&self) -> String {
        let result = self.implementation.operation_implementation();
        format!("Abstraction: Base operation with:\n{}", result)
    }
}

/// Extends the abstraction without touching any implementation.
pub struct ExtendedAbstraction {
    implementation: Box<dyn Implementation>,
}

impl ExtendedAbstraction {
    pub fn new(implementation: Box<dyn Implementation>) -> Self {
        Self { implementation }
    }
}

impl Operation for ExtendedAbstraction {
    fn operation(&self) -> String {
        let result = self.implementation.operation_implementation();
        format!("ExtendedAbstraction: Extended operation with:\n{}", result)
    }
}

pub fn client_code(abstraction: &dyn Operation) -> String {
    abstraction.operation()
}

// ============================================================================
// Variant selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Platform {
    #[default]
    A,
    B,
}

impl Platform {
    pub fn implementation(self) -> Box<dyn Implementation> {
        match self {
            Platform::A => Box::new(ConcreteImplementationA),
            Platform::B => Box::new(ConcreteImplementationB),
        }
    }
}

impl FromStr for Platform {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Platform::A),
            "b" => Ok(Platform::B),
            _ => Err(DemoError::unknown_variant("platform", s)),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::A => write!(f, "ConcreteImplementationA"),
            Platform::B => write!(f, "ConcreteImplementationB"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum AbstractionKind {
    #[default]
    Base,
    Extended,
}

impl FromStr for AbstractionKind {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "base" => Ok(AbstractionKind::Base),
            "extended" => Ok(AbstractionKind::Extended),
            _ => Err(DemoError::unknown_variant("abstraction", s)),
        }
    }
}

impl TryFrom<String> for AbstractionKind {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for AbstractionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractionKind::Base => write!(f, "Abstraction"),
            AbstractionKind::Extended => write!(f, "ExtendedAbstraction"),
        }
    }
}

pub fn abstraction_for(kind: AbstractionKind, platform: Platform) -> Box<dyn Operation> {
    let implementation = platform.implementation();
    match kind {
        AbstractionKind::Base => Box::new(Abstraction::new(implementation)),
        AbstractionKind::Extended => Box::new(ExtendedAbstraction::new(implementation)),
    }
}

// ============================================================================
// Tests
// ============================================================================
