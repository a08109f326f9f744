use tracing::{debug, info};

use crate::abstract_factory;
use crate::bridge;
use crate::config::{DemoConfig, DemoKind};
use crate::error::{DemoError, Result};
use crate::singleton::Singleton;

/// Output lines produced by one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoReport {
    pub kind: DemoKind,
    pub lines: Vec<String>,
}

pub fn run_demo(kind: DemoKind, config: &DemoConfig) -> DemoReport {
    info!(demo = %kind, "running demo");

    let lines = match kind {
        DemoKind::AbstractFactory => {
            let factory = config.factory.factory();
            let mut lines = vec![format!("Client: Testing client code with {}", config.factory)];
            lines.extend(abstract_factory::client_code(&*factory));
            lines
        }
        DemoKind::Bridge => {
            let abstraction = bridge::abstraction_for(config.abstraction, config.platform);
            vec![
                format!("Client: {} over {}", config.abstraction, config.platform),
                bridge::client_code(&*abstraction),
            ]
        }
        DemoKind::Singleton => {
            let first = Singleton::instance();
            let second = Singleton::instance();
            if std::ptr::eq(first, second) {
                vec!["Singleton works, both variables contain the same instance.".to_string()]
            } else {
                vec!["Singleton failed, variables contain different instances.".to_string()]
            }
        }
    };

    for line in &lines {
        debug!(demo = %kind, "{}", line);
    }

    DemoReport { kind, lines }
}

/// Runs every demo the config selects, in order.
pub fn run_demos(config: &DemoConfig) -> Result<Vec<DemoReport>> {
    if config.demos.is_empty() {
        return Err(DemoError::NoDemosSelected);
    }

    Ok(config
        .demos
        .iter()
        .map(|&kind| run_demo(kind, config))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_factory::FactoryVariant;
    use crate::bridge::{AbstractionKind, Platform};

    #[test]
    fn test_abstract_factory_report() {
        let config = DemoConfig {
            factory: FactoryVariant::Two,
            ..DemoConfig::default()
        };
        let report = run_demo(DemoKind::AbstractFactory, &config);

        assert_eq!(report.kind, DemoKind::AbstractFactory);
        assert_eq!(report.lines[0], "Client: Testing client code with ConcreteFactory2");
        assert_eq!(report.lines[1], "The result of the product B2.");
    }

    #[test]
    fn test_bridge_report() {
        let config = DemoConfig {
            abstraction: AbstractionKind::Extended,
            platform: Platform::B,
            ..DemoConfig::default()
        };
        let report = run_demo(DemoKind::Bridge, &config);

        assert_eq!(
            report.lines[1],
            "ExtendedAbstraction: Extended operation with:\nConcreteImplementationB: Here's the result on the platform B."
        );
    }

    #[test]
    fn test_singleton_report() {
        let report = run_demo(DemoKind::Singleton, &DemoConfig::default());
        assert!(report.lines[0].starts_with("Singleton works"));
    }

    #[test]
    fn test_run_demos_keeps_order() {
        let config = DemoConfig {
            demos: vec![DemoKind::Singleton, DemoKind::Bridge],
            ..DemoConfig::default()
        };
        let kinds: Vec<DemoKind> = run_demos(&config).unwrap().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![DemoKind::Singleton, DemoKind::Bridge]);
    }

    #[test]
    fn test_no_demos_selected() {
        let config = DemoConfig {
            demos: Vec::new(),
            ..DemoConfig::default()
        };
        assert!(matches!(run_demos(&config), Err(DemoError::NoDemosSelected)));
    }
}
