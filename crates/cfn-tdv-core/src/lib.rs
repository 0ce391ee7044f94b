//! cfn-tdv Core Types and Definitions
//!
//! This crate provides the foundational types shared by the cfn-tdv loader,
//! analysis engine and command-line tool. It includes:
//!
//! - **Template**: The parsed document tree ([`template::Node`]) and its
//!   read-only [`template::Visitor`]
//! - **Reference**: Facts extracted from a single template ([`reference`] module)
//! - **Dependency**: Resolved graph edges and warnings ([`dependency`] module)
//! - **Direction**: Flow direction of the rendered diagram ([`direction::Direction`])

pub mod dependency;
pub mod direction;
pub mod reference;
pub mod template;
