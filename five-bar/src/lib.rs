//! Five🍀bar is a kinematics solver for planar five-bar linkages.
//!
//! The mechanism has two fixed ground anchors, two actuated links (`l1`,
//! `l2`) and two passive links (`l3`, `l4`) meeting at the effector point.
//!
//! ```
//! use five_bar::{FiveBar, Orient};
//!
//! let fb = FiveBar::example();
//! let angles = fb.ik([2., 1.5], Orient::InIn).unwrap();
//! let joints = fb.fk(angles).unwrap();
//! assert_eq!(joints.g1, [0., 0.]);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
pub use crate::{error::*, linkage::*, orient::*};

mod error;
mod fk;
pub mod geo;
mod ik;
mod linkage;
mod orient;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
pub mod servo;
