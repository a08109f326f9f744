// Pattern 1: Abstract Factory
// A factory produces a family of related products without the caller naming
// their concrete types.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::DemoError;

// ============================================================================
// Products
// ============================================================================

/// Every variant of the first product family implements this trait.
pub trait AbstractProductA {
    fn useful_function_a(&self) -> String;
}

pub struct ConcreteProductA1;

impl AbstractProductA for ConcreteProductA1 {
    fn useful_function_a(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

pub struct ConcreteProductA2;

impl AbstractProductA for ConcreteProductA2 {
    fn useful_function_a(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

/// The second product family. A `B` product does its own work and can also
/// collaborate with any `A` product.
pub trait AbstractProductB {
    fn useful_function_b(&self) -> String;

    /// Accepts any `AbstractProductA`. Only products of the same variant are
    /// meant to work together, but nothing checks it.
    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String;
}

pub struct ConcreteProductB1;

impl AbstractProductB for ConcreteProductB1 {
    fn useful_function_b(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B1 collaborating with the ({})", result)
    }
}

pub struct ConcreteProductB2;

impl AbstractProductB for ConcreteProductB2 {
    fn useful_function_b(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn another_useful_function_b(&self, collaborator: &dyn AbstractProductA) -> String {
        let result = collaborator.useful_function_a();
        format!("The result of the B2 collaborating with the ({})", result)
    }
}

// ============================================================================
// Factories
// ============================================================================

/// Signatures return abstract products; each concrete factory decides which
/// concrete product to instantiate.
pub trait AbstractFactory {
    fn create_product_a(&self) -> Box<dyn AbstractProductA>;
    fn create_product_b(&self) -> Box<dyn AbstractProductB>;
}

pub struct ConcreteFactory1;

impl AbstractFactory for ConcreteFactory1 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA1)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB1)
    }
}

pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory2 {
    fn create_product_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ConcreteProductA2)
    }

    fn create_product_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ConcreteProductB2)
    }
}

/// Works with any factory through the abstract interfaces only.
pub fn client_code(factory: &dyn AbstractFactory) -> Vec<String> {
    let product_a = factory.create_product_a();
    let product_b = factory.create_product_b();

    vec![
        product_b.useful_function_b(),
        product_b.another_useful_function_b(&*product_a),
    ]
}

// ============================================================================
// Variant selection
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum FactoryVariant {
    #[default]
    One,
    Two,
}

impl FactoryVariant {
    pub fn factory(self) -> Box<dyn AbstractFactory> {
        match self {
            FactoryVariant::One => Box::new(ConcreteFactory1),
            FactoryVariant::Two => Box::new(ConcreteFactory2),
        }
    }
}

impl FromStr for FactoryVariant {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "one" => Ok(FactoryVariant::One),
            "2" | "two" => Ok(FactoryVariant::Two),
            _ => Err(DemoError::unknown_variant("factory", s)),
        }
    }
}

impl TryFrom<String> for FactoryVariant {
    type Error = DemoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FactoryVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactoryVariant::One => write!(f, "ConcreteFactory1"),
            FactoryVariant::Two => write!(f, "ConcreteFactory2"),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
