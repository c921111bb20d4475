pub mod javascript;
pub mod python;
pub mod react;

mod support;

use tutorlint::detector::{DetectorRegistry, ProblemDetector};

/// Returns all built-in detectors
pub fn all_detectors() -> Vec<Box<dyn ProblemDetector>> {
    vec![
        Box::new(python::PythonDetector),
        Box::new(javascript::JavaScriptDetector),
        Box::new(react::ReactDetector),
    ]
}

/// A registry with every built-in detector registered.
pub fn default_registry() -> DetectorRegistry {
    let mut registry = DetectorRegistry::new();
    registry.register_all(all_detectors());
    registry
}
