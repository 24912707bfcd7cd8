//! Directory listing over sparse path hierarchies.

pub mod resolver;

pub use resolver::HierarchyResolver;
